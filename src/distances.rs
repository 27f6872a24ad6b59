use crate::atoms::Atoms;
use crate::errors::GeometryError;
use crate::periodic;
use crate::progress::Bar;
use crate::utils;
use crossbeam_utils::thread;

/// Computes the rows `start..start + len` of the distance matrix.
fn distance_rows(start: usize,
                 len: usize,
                 atoms: &Atoms,
                 to_fractional: [[f64; 3]; 3],
                 progress_bar: &Bar)
                 -> Vec<Vec<f64>> {
    let mut rows = Vec::with_capacity(len);
    for i in start..(start + len) {
        let row = atoms.positions
                       .iter()
                       .enumerate()
                       .map(|(j, p)| {
                           if i == j {
                               0.
                           } else {
                               utils::norm(periodic::displacement_with(atoms.positions[i],
                                                                       *p,
                                                                       &atoms.lattice,
                                                                       to_fractional))
                           }
                       })
                       .collect::<Vec<f64>>();
        rows.push(row);
        progress_bar.tick()
    }
    rows
}

/// The minimum image distance between every pair of atoms.
///
/// Threading splits the rows into one chunk per thread, a thread count of
/// zero uses every logical cpu.
pub fn distance_matrix(atoms: &Atoms,
                       threads: usize,
                       progress_bar: Bar)
                       -> Result<Vec<Vec<f64>>, GeometryError> {
    let to_fractional = atoms.lattice.inverse()?;
    let n = atoms.len();
    let threads = match threads {
        0 => num_cpus::get(),
        t => t,
    };
    let pbar = &progress_bar;
    if threads <= 1 || n <= 1 {
        return Ok(distance_rows(0, n, atoms, to_fractional, pbar));
    }
    let chunk_size = (n / threads) + (n % threads).min(1);
    let mut matrix = Vec::with_capacity(n);
    thread::scope(|s| {
        let spawned_threads =
            (0..n).step_by(chunk_size)
                  .map(|start| {
                      let len = chunk_size.min(n - start);
                      s.spawn(move |_| {
                          distance_rows(start, len, atoms, to_fractional, pbar)
                      })
                  })
                  .collect::<Vec<_>>();
        // handles are joined in the order they were spawned so the rows
        // land in order
        for thread in spawned_threads {
            match thread.join() {
                Ok(rows) => matrix.extend(rows),
                Err(_) => panic!("Failed to join thread in distance matrix."),
            }
        }
    }).expect("Failed to scope threads in distance matrix.");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Lattice;
    use approx::assert_abs_diff_eq;

    fn structure() -> Atoms {
        let lattice = Lattice::new([[6., 0., 0.], [1., 5., 0.], [0., 0.5, 7.]]);
        let positions = (0..9).map(|i| {
                                  let x = i as f64;
                                  [(0.73 * x) % 6., (1.37 * x) % 5., (2.11 * x) % 7.]
                              })
                              .collect();
        Atoms::unlabelled(lattice, positions)
    }

    #[test]
    fn distance_matrix_symmetric() {
        let atoms = structure();
        let matrix = distance_matrix(&atoms, 1, Bar::hidden(9)).unwrap();
        assert_eq!(matrix.len(), 9);
        for i in 0..9 {
            assert_eq!(matrix[i][i], 0.);
            for j in 0..9 {
                assert_abs_diff_eq!(matrix[i][j], matrix[j][i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn distance_matrix_matches_distance() {
        let atoms = structure();
        let matrix = distance_matrix(&atoms, 1, Bar::hidden(9)).unwrap();
        let d = periodic::distance(atoms.positions[2],
                                   atoms.positions[7],
                                   &atoms.lattice).unwrap();
        assert_abs_diff_eq!(matrix[2][7], d, epsilon = 1e-12);
    }

    #[test]
    fn distance_matrix_threads_agree() {
        let atoms = structure();
        let serial = distance_matrix(&atoms, 1, Bar::hidden(9)).unwrap();
        for threads in [0, 2, 4, 16] {
            let bar = Bar::hidden(9);
            let threaded = distance_matrix(&atoms, threads, bar).unwrap();
            assert_eq!(serial, threaded);
        }
    }

    #[test]
    fn distance_matrix_singular() {
        let atoms = Atoms::unlabelled(Lattice::undefined(), vec![[0.; 3], [1.; 3]]);
        assert_eq!(distance_matrix(&atoms, 2, Bar::hidden(2)),
                   Err(GeometryError::SingularLattice));
    }
}
