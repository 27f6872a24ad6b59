use crate::errors::GeometryError;
use crate::utils;

/// struct for containing the information about the atoms
///
/// > lattice: Lattice - the lattice of the structure
/// > positions: Vec<[f64; 3]> - the positions of the atoms in cartesian coordinates
/// > labels: Vec<Option<String>> - an optional tag per atom, usually the species
#[derive(Clone, Debug, PartialEq)]
pub struct Atoms {
    pub lattice: Lattice,
    pub positions: Vec<[f64; 3]>,
    pub labels: Vec<Option<String>>,
}

impl Atoms {
    /// initialises the structure
    ///
    /// Panics if there is not exactly one label per position, the file
    /// readers check this before building the structure.
    pub fn new(lattice: Lattice,
               positions: Vec<[f64; 3]>,
               labels: Vec<Option<String>>)
               -> Self {
        assert_eq!(positions.len(),
                   labels.len(),
                   "every position needs a label slot");
        Self { lattice,
               positions,
               labels }
    }

    /// initialises a structure where no atom carries a label
    pub fn unlabelled(lattice: Lattice, positions: Vec<[f64; 3]>) -> Self {
        let labels = vec![None; positions.len()];
        Self { lattice,
               positions,
               labels }
    }

    /// the number of atoms
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// the positions of every atom in fractional coordinates of the lattice
    pub fn fractional_positions(&self) -> Result<Vec<[f64; 3]>, GeometryError> {
        let to_fractional = self.lattice.inverse()?;
        Ok(self.positions
               .iter()
               .map(|p| utils::dot(*p, to_fractional))
               .collect())
    }

    /// copies the atoms at `indices` into a new structure on `lattice`
    pub(crate) fn subset(&self, indices: &[usize], lattice: Lattice) -> Self {
        let positions = indices.iter().map(|i| self.positions[*i]).collect();
        let labels = indices.iter().map(|i| self.labels[*i].clone()).collect();
        Self { lattice,
               positions,
               labels }
    }
}

/// Lattice - structure for containing information on the cell
///
/// > vectors: [[f64; 3]; 3] - the lattice vectors stored as rows in the form:
/// >
/// > [
/// >     [ax, ay, az],
/// >     [bx, by, bz],
/// >     [cx, cy, cz],
/// > ]
///
/// A cartesian position is the sum of the rows weighted by its fractional
/// coordinates. The inverse is not cached, a lattice with zero volume can
/// be held (an xyz file without a cell gives one) but any conversion to
/// fractional coordinates on it fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lattice {
    pub vectors: [[f64; 3]; 3],
}

impl Lattice {
    pub fn new(vectors: [[f64; 3]; 3]) -> Self {
        Self { vectors }
    }

    /// A lattice of all zeros, for structures with no cell.
    pub fn undefined() -> Self {
        Self { vectors: [[0f64; 3]; 3] }
    }

    /// Orthorhombic cell with side lengths a, b and c.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self { vectors: [[a, 0., 0.], [0., b, 0.], [0., 0., c]] }
    }

    /// the volume of the cell
    pub fn volume(&self) -> f64 {
        utils::determinant(&self.vectors).abs()
    }

    /// the matrix that takes a cartesian row vector to fractional coordinates
    pub fn inverse(&self) -> Result<[[f64; 3]; 3], GeometryError> {
        utils::invert_lattice(&self.vectors)
    }

    /// convert a cartesian position to fractional coordinates
    pub fn to_fractional(&self, point: [f64; 3])
                         -> Result<[f64; 3], GeometryError> {
        Ok(utils::dot(point, self.inverse()?))
    }

    /// convert fractional coordinates to a cartesian position
    pub fn to_cartesian(&self, fractional: [f64; 3]) -> [f64; 3] {
        utils::dot(fractional, self.vectors)
    }
}
