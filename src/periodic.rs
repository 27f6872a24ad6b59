use crate::atoms::{Atoms, Lattice};
use crate::errors::GeometryError;
use crate::utils;

/// Maps a fractional coordinate onto [-0.5, 0.5).
///
/// 0.5 goes to -0.5 as the floor is taken of x + 0.5.
pub fn wrapped_fraction(x: f64) -> f64 {
    x - (x + 0.5).floor()
}

/// The shortest periodic image of v1 - v2.
///
/// Only the nearest shell of images is considered: the fractional
/// difference is wrapped onto [-0.5, 0.5) in each direction. This is exact
/// for orthogonal cells but can miss a shorter image in a strongly skewed
/// cell.
pub fn displacement(v1: [f64; 3],
                    v2: [f64; 3],
                    lattice: &Lattice)
                    -> Result<[f64; 3], GeometryError> {
    let to_fractional = lattice.inverse()?;
    Ok(displacement_with(v1, v2, lattice, to_fractional))
}

/// displacement with an already inverted lattice
pub(crate) fn displacement_with(v1: [f64; 3],
                                v2: [f64; 3],
                                lattice: &Lattice,
                                to_fractional: [[f64; 3]; 3])
                                -> [f64; 3] {
    let mut frac = utils::dot(utils::sub(v1, v2), to_fractional);
    for f in &mut frac {
        *f = wrapped_fraction(*f);
    }
    lattice.to_cartesian(frac)
}

/// The minimum image distance between v1 and v2.
pub fn distance(v1: [f64; 3],
                v2: [f64; 3],
                lattice: &Lattice)
                -> Result<f64, GeometryError> {
    Ok(utils::norm(displacement(v1, v2, lattice)?))
}

/// Maps a position back inside the cell, the fractional coordinates of the
/// result lie in [0, 1).
pub fn map_into_cell(point: [f64; 3],
                     lattice: &Lattice)
                     -> Result<[f64; 3], GeometryError> {
    let to_fractional = lattice.inverse()?;
    Ok(map_into_cell_with(point, lattice, to_fractional))
}

fn map_into_cell_with(point: [f64; 3],
                      lattice: &Lattice,
                      to_fractional: [[f64; 3]; 3])
                      -> [f64; 3] {
    let mut frac = utils::dot(point, to_fractional);
    for f in &mut frac {
        *f -= f.floor();
        // tiny negative fractions round up to exactly 1
        if *f >= 1. {
            *f = 0.;
        }
    }
    lattice.to_cartesian(frac)
}

/// Is the point inside the cell, boundaries included.
pub fn is_inside_cell(point: [f64; 3],
                      lattice: &Lattice)
                      -> Result<bool, GeometryError> {
    let frac = lattice.to_fractional(point)?;
    Ok(frac.iter().all(|f| (0. ..=1.).contains(f)))
}

/// Moves every atom by `shift` and maps it back into the cell.
pub fn translate(atoms: &Atoms,
                 shift: [f64; 3])
                 -> Result<Atoms, GeometryError> {
    let to_fractional = atoms.lattice.inverse()?;
    let positions = atoms.positions
                         .iter()
                         .map(|p| {
                             map_into_cell_with(utils::add(*p, shift),
                                                &atoms.lattice,
                                                to_fractional)
                         })
                         .collect();
    Ok(Atoms::new(atoms.lattice, positions, atoms.labels.clone()))
}

/// Maps every atom back into the cell.
pub fn wrap(atoms: &Atoms) -> Result<Atoms, GeometryError> {
    translate(atoms, [0f64; 3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cubic(a: f64) -> Lattice {
        Lattice::orthorhombic(a, a, a)
    }

    #[test]
    fn wrapped_fraction_range() {
        assert_eq!(wrapped_fraction(0.2), 0.2);
        assert_eq!(wrapped_fraction(0.75), -0.25);
        assert_eq!(wrapped_fraction(-0.75), 0.25);
        assert_eq!(wrapped_fraction(3.25), 0.25);
    }

    #[test]
    fn wrapped_fraction_half() {
        assert_eq!(wrapped_fraction(0.5), -0.5);
        assert_eq!(wrapped_fraction(-0.5), -0.5);
    }

    #[test]
    fn displacement_across_boundary() {
        let d = displacement([1., 1., 1.], [9., 1., 1.], &cubic(10.)).unwrap();
        assert_abs_diff_eq!(d[0], 2., epsilon = 1e-12);
        assert_abs_diff_eq!(d[1], 0., epsilon = 1e-12);
        assert_abs_diff_eq!(d[2], 0., epsilon = 1e-12);
    }

    #[test]
    fn displacement_reversed() {
        let d = displacement([9., 1., 1.], [1., 1., 1.], &cubic(10.)).unwrap();
        assert_abs_diff_eq!(d[0], -2., epsilon = 1e-12);
    }

    #[test]
    fn distance_across_boundary() {
        let d = distance([1., 1., 1.], [9., 1., 1.], &cubic(10.)).unwrap();
        assert_abs_diff_eq!(d, 2., epsilon = 1e-12);
    }

    #[test]
    fn distance_symmetric() {
        let lattice = Lattice::new([[5., 0., 0.], [1., 4., 0.], [0., 0.5, 6.]]);
        let (v1, v2) = ([0.3, 3.9, 5.2], [4.4, 0.1, 0.7]);
        assert_abs_diff_eq!(distance(v1, v2, &lattice).unwrap(),
                            distance(v2, v1, &lattice).unwrap(),
                            epsilon = 1e-12);
    }

    #[test]
    fn distance_periodic() {
        let lattice = Lattice::new([[5., 0., 0.], [1., 4., 0.], [0., 0.5, 6.]]);
        let (v1, v2) = ([0.3, 1.9, 2.2], [1.4, 0.1, 0.7]);
        let base = distance(v1, v2, &lattice).unwrap();
        for k in [[1., 0., 0.], [0., -2., 1.], [3., 1., -1.]] {
            let shifted = utils::add(v2, lattice.to_cartesian(k));
            assert_abs_diff_eq!(distance(v1, shifted, &lattice).unwrap(),
                                base,
                                epsilon = 1e-10);
        }
    }

    #[test]
    fn distance_singular() {
        let lattice = Lattice::new([[1., 0., 0.], [2., 0., 0.], [0., 0., 1.]]);
        assert_eq!(distance([0.; 3], [1.; 3], &lattice),
                   Err(GeometryError::SingularLattice));
    }

    #[test]
    fn map_into_cell_negative() {
        let p = map_into_cell([-1., 12., 3.], &cubic(10.)).unwrap();
        assert_abs_diff_eq!(p[0], 9., epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 2., epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 3., epsilon = 1e-12);
    }

    #[test]
    fn map_into_cell_idempotent() {
        let lattice = Lattice::new([[3., 0., 0.], [1.5, 2.6, 0.], [0., 0., 7.]]);
        let once = map_into_cell([-4.1, 9.3, 15.2], &lattice).unwrap();
        let twice = map_into_cell(once, &lattice).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(once[i], twice[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn map_into_cell_tiny_negative() {
        let lattice = cubic(10.);
        let once = map_into_cell([-1e-20, 1., 1.], &lattice).unwrap();
        assert_eq!(once[0], 0.);
        let frac = lattice.to_fractional(once).unwrap();
        assert!(frac.iter().all(|f| (0. ..1.).contains(f)));
        let twice = map_into_cell(once, &lattice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn inside_cell_bounds() {
        let lattice = cubic(10.);
        assert!(is_inside_cell([0., 0., 0.], &lattice).unwrap());
        assert!(is_inside_cell([10., 10., 10.], &lattice).unwrap());
        assert!(is_inside_cell([5., 2., 7.], &lattice).unwrap());
        assert!(!is_inside_cell([5., -0.1, 7.], &lattice).unwrap());
        assert!(!is_inside_cell([10.1, 2., 7.], &lattice).unwrap());
    }

    #[test]
    fn translate_wraps() {
        let atoms = Atoms::new(cubic(10.),
                               vec![[1., 1., 1.], [8., 5., 9.]],
                               vec![Some("O".into()), Some("H".into())]);
        let moved = translate(&atoms, [3., 0., 2.]).unwrap();
        assert_eq!(moved.labels, atoms.labels);
        assert_abs_diff_eq!(moved.positions[0][0], 4., epsilon = 1e-12);
        assert_abs_diff_eq!(moved.positions[0][2], 3., epsilon = 1e-12);
        assert_abs_diff_eq!(moved.positions[1][0], 1., epsilon = 1e-12);
        assert_abs_diff_eq!(moved.positions[1][2], 1., epsilon = 1e-12);
        for p in &moved.positions {
            assert!(is_inside_cell(*p, &moved.lattice).unwrap());
        }
    }

    #[test]
    fn wrap_undefined_cell() {
        let atoms = Atoms::unlabelled(Lattice::undefined(), vec![[1.; 3]]);
        assert_eq!(wrap(&atoms), Err(GeometryError::SingularLattice));
    }
}
