use thiserror::Error;

/// Failures of the geometry operations.
///
/// None of these are worth retrying: every operation is deterministic so the
/// same input will fail the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// The lattice vectors do not span 3D space and cannot be inverted.
    #[error("Lattice doesn't span 3D space (zero volume), it cannot be inverted.")]
    SingularLattice,
    /// The last component of the plane normal is zero so the plane cannot
    /// be solved for the last coordinate.
    #[error("The last component of the plane normal is zero, the plane is parallel to the last axis.")]
    DegeneratePlane,
    /// A cut left one side without any atoms.
    #[error("Cutting plane defines an empty object: {above} above, {below} below.")]
    EmptyPartition { above: usize, below: usize },
    /// A directional stretch was asked for along a zero length vector.
    #[error("The stretch direction has zero length.")]
    ZeroDirection,
    /// The cell has no volume so fractional coordinates are undefined.
    #[error("Supercell is not defined, the lattice has zero volume.")]
    UndefinedCell,
    /// Vectors of different lengths were combined.
    #[error("Expected a vector of length {expected} but found length {found}.")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Errors in command-line input that clap cannot catch by itself.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// The value is not valid for the option, ie. filetype.
    /// NotValidValue(flag, value)
    #[error("The value \"{1}\" is not valid input for the option \"{0}\".")]
    NotValidValue(String, String),
    /// A vector option was given with zero length.
    /// ZeroVector(flag)
    #[error("The option \"{0}\" requires a vector with non-zero length.")]
    ZeroVector(String),
    /// An atom index past the end of the structure.
    /// IndexOutOfRange(index, number of atoms)
    #[error("Atom index {0} is out of range for a structure of {1} atoms.")]
    IndexOutOfRange(usize, usize),
}
