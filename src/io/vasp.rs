use crate::atoms::{Atoms, Lattice};
use crate::io::{self, FileFormat};
use crate::utils;
use anyhow::{bail, Context, Result};
use std::fmt::Write;
use std::str::Lines;

/// The coordinate system.
enum Coord {
    /// Fractional coordinates.
    Fractional,
    /// Cartesian coordinates.
    Cartesian,
}

/// The VASP POSCAR/CONTCAR format.
pub struct Vasp {}

/// Walks the lines of the file keeping count for error messages.
struct Cursor<'a> {
    lines: Lines<'a>,
    number: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self, what: &str) -> Result<&'a str> {
        self.number += 1;
        match self.lines.next() {
            Some(line) => Ok(line),
            None => bail!("Unexpected end of file at line {}, expected {}.",
                          self.number,
                          what),
        }
    }

    /// the first `n` whitespace separated floats of the next line
    fn floats(&mut self, n: usize, what: &str) -> Result<Vec<f64>> {
        let line = self.next(what)?;
        let floats = parse_floats(line).with_context(|| {
                                           format!("Line {}: cannot read {} from \"{}\"",
                                                   self.number,
                                                   what,
                                                   line.trim())
                                       })?;
        if floats.len() < n {
            bail!("Line {}: expected {} values for {} but found {}.",
                  self.number,
                  n,
                  what,
                  floats.len());
        }
        Ok(floats)
    }

    /// the first three columns of the next line, anything after them
    /// (selective dynamics flags, a species label) is ignored
    fn position(&mut self, what: &str) -> Result<[f64; 3]> {
        let line = self.next(what)?;
        let p = line.split_whitespace()
                    .take(3)
                    .map(|s| s.parse::<f64>())
                    .collect::<Result<Vec<f64>, _>>()
                    .with_context(|| {
                        format!("Line {}: cannot read {} from \"{}\"",
                                self.number,
                                what,
                                line.trim())
                    })?;
        match p[..] {
            [x, y, z] => Ok([x, y, z]),
            _ => bail!("Line {}: expected 3 values for {} but found {}.",
                       self.number,
                       what,
                       p.len()),
        }
    }
}

fn parse_floats(line: &str) -> Result<Vec<f64>, std::num::ParseFloatError> {
    line.split_whitespace()
        .take_while(|s| !s.starts_with('#') && !s.starts_with('!'))
        .map(|s| s.parse::<f64>())
        .collect()
}

impl FileFormat for Vasp {
    /// Read a POSCAR.
    fn parse(&self, text: &str) -> Result<Atoms> {
        let mut lines = Cursor { lines: text.lines(),
                                 number: 0 };
        // skip the comment line and then read the lattice information
        let _ = lines.next("a comment line")?;
        let mut scale = lines.floats(1, "the scaling factor")?;
        let mut vectors = [[0f64; 3]; 3];
        for (v, name) in vectors.iter_mut().zip(["a", "b", "c"]) {
            let values = lines.floats(3, &format!("lattice vector {}", name))?;
            v.copy_from_slice(&values[..3]);
        }
        // the scale can be negative and this means that it is the volume of the cell
        // it can also be 3 values which is a multiplier for each cartesian direction
        let scale = match scale.len() {
            1 | 2 => {
                if scale[0] < 0f64 {
                    let volume = utils::determinant(&vectors).abs();
                    if volume == 0. {
                        bail!("Cannot scale a cell of zero volume to a volume of {}.",
                              -scale[0]);
                    }
                    scale[0] = (-scale[0] / volume).cbrt();
                }
                [scale[0]; 3]
            }
            _ => {
                scale.truncate(3);
                [scale[0], scale[1], scale[2]]
            }
        };
        for v in vectors.iter_mut() {
            for i in 0..3 {
                v[i] *= scale[i];
            }
        }
        let lattice = Lattice::new(vectors);
        // the species line is optional, if it is missing this is the counts line
        let dubious = lines.next("the species or atom counts")?;
        let (species, counts_line) =
            if dubious.split_whitespace()
                      .next()
                      .map_or(false, |s| s.parse::<usize>().is_ok())
            {
                (None, dubious)
            } else {
                let species = dubious.split_whitespace()
                                     .map(String::from)
                                     .collect::<Vec<String>>();
                (Some(species), lines.next("the atom counts")?)
            };
        let counts = counts_line.split_whitespace()
                                .map(|s| s.parse::<usize>())
                                .collect::<Result<Vec<usize>, _>>()
                                .with_context(|| {
                                    format!("Line {}: cannot read the atom counts from \"{}\"",
                                            lines.number,
                                            counts_line.trim())
                                })?;
        if let Some(species) = &species {
            if species.len() != counts.len() {
                bail!("Line {}: {} species but {} atom counts.",
                      lines.number,
                      species.len(),
                      counts.len());
            }
        }
        let total_atoms = counts.iter().sum::<usize>();
        let mut dubious = lines.next("the coordinate system")?
                               .trim_start()
                               .to_lowercase();
        if dubious.starts_with('s') {
            dubious = lines.next("the coordinate system")?
                           .trim_start()
                           .to_lowercase();
        }
        let coord = if dubious.starts_with('c') || dubious.starts_with('k') {
            Coord::Cartesian
        } else {
            Coord::Fractional
        };
        let mut positions = Vec::with_capacity(total_atoms);
        for i in 0..total_atoms {
            let p = lines.position(&format!("the position of atom {}", i + 1))?;
            positions.push(match coord {
                               Coord::Fractional => lattice.to_cartesian(p),
                               Coord::Cartesian => {
                                   [p[0] * scale[0], p[1] * scale[1], p[2] * scale[2]]
                               }
                           });
        }
        let labels = match species {
            Some(species) => species.iter()
                                    .zip(&counts)
                                    .flat_map(|(s, n)| {
                                        std::iter::repeat(Some(s.clone())).take(*n)
                                    })
                                    .collect(),
            None => vec![None; total_atoms],
        };
        Ok(Atoms::new(lattice, positions, labels))
    }

    /// Write a POSCAR in cartesian coordinates with a scale of 1.
    fn to_text(&self, atoms: &Atoms) -> String {
        let runs = io::label_runs(atoms);
        let mut text = String::new();
        let comment = io::formula(atoms);
        // write! to a String cannot fail
        let _ = writeln!(text, "{}", if comment.is_empty() { "empty" } else { comment.as_str() });
        let _ = writeln!(text, "{:>19.14}", 1.0);
        for v in atoms.lattice.vectors.iter() {
            let _ = writeln!(text, " {:>21.16} {:>21.16} {:>21.16}", v[0], v[1], v[2]);
        }
        let species = runs.iter().map(|(s, _)| format!("{:>5}", s)).collect::<String>();
        let counts = runs.iter().map(|(_, n)| format!("{:>6}", n)).collect::<String>();
        let _ = writeln!(text, "{}", species);
        let _ = writeln!(text, "{}", counts);
        let _ = writeln!(text, "Cartesian");
        for p in atoms.positions.iter() {
            let _ = writeln!(text, " {:>21.16} {:>21.16} {:>21.16}", p[0], p[1], p[2]);
        }
        text
    }
}
