use crate::atoms::{Atoms, Lattice};
use crate::errors::GeometryError;
use crate::utils;

/// Multiplies the vector by `factor` in every direction.
pub fn stretch_isotropic(point: [f64; 3], factor: f64) -> [f64; 3] {
    utils::scale(point, factor)
}

/// Scales only the component of `point` along `direction` by `factor`, the
/// orthogonal part is left alone:
///
/// > v + (factor - 1) * (v . d) * d, with d the normalised direction
pub fn stretch_directional(point: [f64; 3],
                           factor: f64,
                           direction: [f64; 3])
                           -> Result<[f64; 3], GeometryError> {
    let norm = utils::norm(direction);
    if norm == 0. {
        return Err(GeometryError::ZeroDirection);
    }
    let d = utils::scale(direction, norm.recip());
    let along = (factor - 1.) * utils::vdot(point, d);
    Ok(utils::add(point, utils::scale(d, along)))
}

/// Grows the cell by `factor` while every atom keeps its fractional
/// coordinates.
pub fn expand_structure(atoms: &Atoms,
                        factor: f64)
                        -> Result<Atoms, GeometryError> {
    let fractional = match atoms.fractional_positions() {
        Ok(f) => f,
        Err(GeometryError::SingularLattice) => {
            return Err(GeometryError::UndefinedCell)
        }
        Err(e) => return Err(e),
    };
    let [a, b, c] = atoms.lattice.vectors;
    let lattice = Lattice::new([stretch_isotropic(a, factor),
                                stretch_isotropic(b, factor),
                                stretch_isotropic(c, factor)]);
    let positions = fractional.into_iter()
                              .map(|f| lattice.to_cartesian(f))
                              .collect();
    Ok(Atoms::new(lattice, positions, atoms.labels.clone()))
}

/// Applies the same stretch to the lattice vectors and to the positions.
///
/// With no direction the stretch is isotropic. The stretch is linear so the
/// fractional coordinates of the atoms do not change.
pub fn strain_structure(atoms: &Atoms,
                        factor: f64,
                        direction: Option<[f64; 3]>)
                        -> Result<Atoms, GeometryError> {
    let stretch = |v: [f64; 3]| match direction {
        Some(d) => stretch_directional(v, factor, d),
        None => Ok(stretch_isotropic(v, factor)),
    };
    let [a, b, c] = atoms.lattice.vectors;
    let lattice = Lattice::new([stretch(a)?, stretch(b)?, stretch(c)?]);
    let positions = atoms.positions
                         .iter()
                         .map(|p| stretch(*p))
                         .collect::<Result<Vec<_>, _>>()?;
    Ok(Atoms::new(lattice, positions, atoms.labels.clone()))
}
