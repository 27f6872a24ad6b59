use crate::atoms::{Atoms, Lattice};
use crate::errors::GeometryError;
use crate::plane::Plane;

/// Splits the atoms into those above the plane and those on or below it.
///
/// An atom is above when its last coordinate is strictly greater than the
/// value of the plane at its leading coordinates. Both groups keep the
/// lattice of the input and the relative order of their atoms.
pub fn partition(atoms: &Atoms,
                 plane: &Plane)
                 -> Result<(Atoms, Atoms), GeometryError> {
    let mut above = Vec::with_capacity(atoms.len());
    let mut below = Vec::with_capacity(atoms.len());
    for (i, p) in atoms.positions.iter().enumerate() {
        if p[2] > plane.value_at(*p)? {
            above.push(i);
        } else {
            below.push(i);
        }
    }
    // an empty structure never reaches the plane so check it here
    if atoms.is_empty() {
        plane.value_at(plane.anchor)?;
    }
    check_sides(above.len(), below.len())?;
    log::debug!("Plane cut: {} above, {} below", above.len(), below.len());
    Ok((atoms.subset(&above, atoms.lattice), atoms.subset(&below, atoms.lattice)))
}

/// Cuts the structure at height `z_cut` along the last axis into two
/// independent cells, returned as (top, bottom).
///
/// The bottom cell keeps the in-plane lattice vectors and its last vector
/// is truncated to reach `z_cut`. The top cell keeps the in-plane vectors,
/// its last vector spans from `z_cut` to the top of the original cell and
/// its atoms are shifted by -(c_x, c_y, z_cut) so the cell starts at the
/// origin. Atoms at exactly `z_cut` go to the bottom.
pub fn axis_cut(atoms: &Atoms,
                z_cut: f64)
                -> Result<(Atoms, Atoms), GeometryError> {
    let mut top = Vec::with_capacity(atoms.len());
    let mut bottom = Vec::with_capacity(atoms.len());
    for (i, p) in atoms.positions.iter().enumerate() {
        if p[2] > z_cut {
            top.push(i);
        } else {
            bottom.push(i);
        }
    }
    check_sides(top.len(), bottom.len())?;
    let [a, b, c] = atoms.lattice.vectors;
    let bottom_lattice = Lattice::new([a, b, [c[0], c[1], z_cut]]);
    let top_lattice = Lattice::new([a, b, [c[0], c[1], c[2] - z_cut]]);
    let mut top = atoms.subset(&top, top_lattice);
    for p in top.positions.iter_mut() {
        p[0] -= c[0];
        p[1] -= c[1];
        p[2] -= z_cut;
    }
    log::debug!("Axis cut at {}: {} top, {} bottom",
                z_cut,
                top.len(),
                bottom.len());
    Ok((top, atoms.subset(&bottom, bottom_lattice)))
}

fn check_sides(above: usize, below: usize) -> Result<(), GeometryError> {
    if above == 0 || below == 0 {
        Err(GeometryError::EmptyPartition { above, below })
    } else {
        Ok(())
    }
}
