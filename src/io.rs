use crate::atoms::Atoms;
use crate::errors::ArgumentError;
use anyhow::{Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::io::Write;

pub mod reader;
pub mod vasp;
pub mod xyz;

/// The structure file formats that can be read and written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Vasp,
    Xyz,
}

impl FileType {
    /// Parses the value of a format flag.
    pub fn from_name(name: &str) -> Result<Self, ArgumentError> {
        match name.to_lowercase().as_str() {
            "vasp" | "poscar" => Ok(Self::Vasp),
            "xyz" | "extxyz" => Ok(Self::Xyz),
            _ => Err(ArgumentError::NotValidValue(String::from("format"),
                                                  String::from(name))),
        }
    }

    /// Guesses the file type from the name of the file.
    pub fn infer(filename: &str) -> Option<Self> {
        let xyz = Regex::new(r"(?i)\.(ext)?xyz$").expect("valid regex");
        let vasp = Regex::new(r"(?i)((^|/)(poscar|contcar)[^/]*|\.vasp)$").expect("valid regex");
        if xyz.is_match(filename) {
            Some(Self::Xyz)
        } else if vasp.is_match(filename) {
            Some(Self::Vasp)
        } else {
            None
        }
    }

    /// The reader/writer for this type.
    pub fn format(&self) -> Box<dyn FileFormat> {
        match self {
            Self::Vasp => Box::new(vasp::Vasp {}),
            Self::Xyz => Box::new(xyz::Xyz {}),
        }
    }
}

/// FileFormat trait. Used for handling the reading and writing of the
/// different structure file formats.
pub trait FileFormat {
    /// Builds the structure from the text of a file.
    fn parse(&self, text: &str) -> Result<Atoms>;

    /// Formats the structure as the text of a file.
    fn to_text(&self, atoms: &Atoms) -> String;

    /// Reads a structure from the file at `path`, or stdin for no path.
    fn read(&self, path: Option<&str>) -> Result<Atoms> {
        let source = path.unwrap_or("stdin");
        let mut reader = reader::BufReader::open(path).with_context(|| {
                                                          format!("Failed to open {}", source)
                                                      })?;
        let text = reader.read_to_end()
                         .with_context(|| format!("Failed to read {}", source))?;
        let atoms = self.parse(&text)
                        .with_context(|| format!("Failed to parse {}", source))?;
        log::debug!("Read {} atoms from {}", atoms.len(), source);
        Ok(atoms)
    }

    /// Writes the structure to `out`.
    fn write(&self, atoms: &Atoms, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.to_text(atoms).as_bytes())
           .context("Failed to write structure")?;
        out.flush().context("Failed to write structure")
    }
}

/// The label written for an atom that has none.
pub const NO_LABEL: &str = "X";

/// Collapses the labels into runs of equal consecutive labels, keeping
/// their order.
pub fn label_runs(atoms: &Atoms) -> Vec<(&str, usize)> {
    let mut runs: Vec<(&str, usize)> = Vec::new();
    for label in atoms.labels.iter() {
        let label = label.as_deref().unwrap_or(NO_LABEL);
        match runs.last_mut() {
            Some((l, count)) if *l == label => *count += 1,
            _ => runs.push((label, 1)),
        }
    }
    runs
}

/// The chemical formula of the structure with the species in order of
/// first appearance, ie. "Ti2O4".
pub fn formula(atoms: &Atoms) -> String {
    let mut index = FxHashMap::<&str, usize>::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for (label, count) in label_runs(atoms) {
        if let Some(i) = index.get(label).copied() {
            counts[i].1 += count;
        } else {
            index.insert(label, counts.len());
            counts.push((label, count));
        }
    }
    counts.iter()
          .map(|(label, count)| format!("{}{}", label, count))
          .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Lattice;

    fn labelled(labels: &[Option<&str>]) -> Atoms {
        Atoms::new(Lattice::orthorhombic(1., 1., 1.),
                   vec![[0.; 3]; labels.len()],
                   labels.iter().map(|l| l.map(String::from)).collect())
    }

    #[test]
    fn file_type_infer() {
        assert_eq!(FileType::infer("POSCAR"), Some(FileType::Vasp));
        assert_eq!(FileType::infer("run/CONTCAR_relaxed"), Some(FileType::Vasp));
        assert_eq!(FileType::infer("slab.vasp"), Some(FileType::Vasp));
        assert_eq!(FileType::infer("water.xyz"), Some(FileType::Xyz));
        assert_eq!(FileType::infer("water.extxyz"), Some(FileType::Xyz));
        assert_eq!(FileType::infer("structure.cif"), None);
    }

    #[test]
    fn file_type_from_name() {
        assert_eq!(FileType::from_name("VASP").unwrap(), FileType::Vasp);
        assert_eq!(FileType::from_name("xyz").unwrap(), FileType::Xyz);
        assert!(FileType::from_name("cube").is_err());
    }

    #[test]
    fn io_label_runs() {
        let atoms = labelled(&[Some("O"), Some("O"), None, Some("H"), Some("O")]);
        assert_eq!(label_runs(&atoms), vec![("O", 2), ("X", 1), ("H", 1), ("O", 1)]);
    }

    #[test]
    fn io_formula() {
        let atoms = labelled(&[Some("Ti"), Some("O"), Some("O"), Some("Ti"), Some("O")]);
        assert_eq!(formula(&atoms), "Ti2O3");
    }
}
