//! A small, multi-threaded, periodic geometry binary and library for crystal
//! structures. It handles minimum image displacements, wrapping atoms into
//! their cell, cutting structures along planes and scaling cells.
//!
//! ### Supported Platforms
//! - Linux
//! - Os X
//! - Windows
//!
//! ## Installing the binary
//! ### From Source
//! Run the following, which will create the ./target/release/latcut
//! executable.
//! ```sh
//! $ cargo build --verbose --release
//! ```
//! From here you can either move or link the binary to folder in your path.
//! ```sh
//! $ mv ./target/release/latcut ~/bin
//! ```
//!
//! ## Usage
//! The program reads a structure in [VASP] (POSCAR/CONTCAR) or extended xyz
//! format, from a file or stdin, applies one operation and writes the new
//! structure to stdout. Keeping the atoms below the plane through (0, 0, 5)
//! with normal (0, 0, 1):
//! ```sh
//! $ latcut cut POSCAR -n 0 0 1 -p 0 0 5 > POSCAR_bottom
//! ```
//! Splitting a slab into two cells at a height of 5 along the last axis and
//! keeping the top one:
//! ```sh
//! $ latcut zcut POSCAR -z 5 --top
//! ```
//! Operations can be chained through pipes:
//! ```sh
//! $ latcut expand POSCAR -f 1.02 | latcut translate -d 0 0 1.5 --format xyz
//! ```
//! For a detailed list of usage options run
//! ```sh
//! $ latcut --help
//! ```
//! ## Conventions
//! Lattices are stored row-wise, `[a, b, c]`, and a fractional coordinate `f`
//! maps to the cartesian point `f · [a, b, c]`. Planes are written as the
//! height of the last coordinate over the leading ones.
//!
//! ## License
//! MIT
//!
//! [VASP]: <https://www.vasp.at/>

/// For parsing command-line arguments.
pub mod arguments;
/// Contains [Atoms](atoms::Atoms) for storing the positions and labels of the
/// atoms in a structure. Also contains [Lattice](atoms::Lattice) for
/// converting between cartesian and fractional coordinates.
pub mod atoms;
/// Multi-threaded minimum image distances between every pair of atoms.
pub mod distances;
/// Provides custom errors types.
pub mod errors;
/// Handles the File I/O for structure files.
/// Provides a [FileFormat](io::FileFormat) trait to be implemented by modules designed to
/// cover a specific file format.
pub mod io;
/// Splits structures along a [Plane](plane::Plane) or at a height along the
/// last axis.
pub mod partition;
/// Minimum image displacements and mapping points back into the cell.
pub mod periodic;
/// Planes in height form.
pub mod plane;
/// Provides a thread safe [progress bar](progress::Bar).
pub mod progress;
/// Stretching and expanding points and cells.
pub mod scale;
/// Misc functions mainly for vector and matrix manipulation.
pub mod utils;
