use crate::atoms::{Atoms, Lattice};
use crate::io::{FileFormat, NO_LABEL};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fmt::Write;

/// The (extended) xyz format.
///
/// The cell is read from a `Lattice="ax ay az bx by bz cx cy cz"` key on the
/// comment line. Without one the lattice is left undefined, which any
/// operation needing fractional coordinates will refuse.
pub struct Xyz {}

impl Xyz {
    fn lattice(comment: &str) -> Result<Lattice> {
        let re = Regex::new(r#"(?i)lattice\s*=\s*"([^"]*)""#).expect("valid regex");
        let values = match re.captures(comment) {
            Some(caps) => caps[1].split_whitespace()
                                 .map(|s| s.parse::<f64>())
                                 .collect::<Result<Vec<f64>, _>>()
                                 .context("Line 2: cannot read the lattice")?,
            None => return Ok(Lattice::undefined()),
        };
        if values.len() != 9 {
            bail!("Line 2: the lattice needs 9 values but has {}.", values.len());
        }
        Ok(Lattice::new([[values[0], values[1], values[2]],
                         [values[3], values[4], values[5]],
                         [values[6], values[7], values[8]]]))
    }
}

impl FileFormat for Xyz {
    /// Reads the first frame of the file.
    fn parse(&self, text: &str) -> Result<Atoms> {
        let mut lines = text.lines();
        let total_atoms = match lines.next() {
            Some(l) => l.trim()
                        .parse::<usize>()
                        .with_context(|| format!("Line 1: \"{}\" is not an atom count", l.trim()))?,
            None => bail!("Empty xyz file."),
        };
        let lattice = Xyz::lattice(lines.next().unwrap_or(""))?;
        let mut positions = Vec::with_capacity(total_atoms);
        let mut labels = Vec::with_capacity(total_atoms);
        for i in 0..total_atoms {
            let number = i + 3;
            let line = match lines.next() {
                Some(l) => l,
                None => bail!("Unexpected end of file at line {}, expected atom {}.",
                              number,
                              i + 1),
            };
            let mut columns = line.split_whitespace();
            let label = match columns.next() {
                Some(l) => l,
                None => bail!("Line {}: missing the atom label.", number),
            };
            let p = columns.take(3)
                           .map(|s| s.parse::<f64>())
                           .collect::<Result<Vec<f64>, _>>()
                           .with_context(|| format!("Line {}: cannot read the position", number))?;
            if p.len() < 3 {
                bail!("Line {}: expected 3 coordinates but found {}.", number, p.len());
            }
            positions.push([p[0], p[1], p[2]]);
            labels.push(Some(String::from(label)));
        }
        if lines.any(|l| !l.trim().is_empty()) {
            log::debug!("Only the first frame of the xyz file was read");
        }
        Ok(Atoms::new(lattice, positions, labels))
    }

    fn to_text(&self, atoms: &Atoms) -> String {
        let mut text = String::new();
        let v = atoms.lattice.vectors;
        // write! to a String cannot fail
        let _ = writeln!(text, "{}", atoms.len());
        let _ = writeln!(text,
                         "Lattice=\"{} {} {} {} {} {} {} {} {}\" Properties=species:S:1:pos:R:3 pbc=\"T T T\"",
                         v[0][0], v[0][1], v[0][2],
                         v[1][0], v[1][1], v[1][2],
                         v[2][0], v[2][1], v[2][2]);
        for (label, p) in atoms.labels.iter().zip(&atoms.positions) {
            let _ = writeln!(text,
                             "{:<4} {:>21.16} {:>21.16} {:>21.16}",
                             label.as_deref().unwrap_or(NO_LABEL),
                             p[0],
                             p[1],
                             p[2]);
        }
        text
    }
}
