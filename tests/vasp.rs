#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use latcut::atoms::Lattice;
    use latcut::io::vasp::Vasp;
    use latcut::io::xyz::Xyz;
    use latcut::io::{FileFormat, FileType};

    #[test]
    fn vasp_read_slab() {
        let vasp = Vasp {};
        let atoms = match vasp.read(Some("tests/vasp/POSCAR_slab")) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(atoms.lattice, Lattice::orthorhombic(10., 10., 10.));
        assert_eq!(atoms.len(), 4);
        assert_eq!(atoms.labels[1].as_deref(), Some("Cu"));
        assert_eq!(atoms.labels[2].as_deref(), Some("O"));
        let heights = atoms.positions.iter().map(|p| p[2]).collect::<Vec<f64>>();
        for (z, expected) in heights.iter().zip([1., 2., 8., 9.]) {
            assert_abs_diff_eq!(*z, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn vasp_read_hexagonal_volume() {
        let vasp = Vasp {};
        let atoms = match vasp.read(Some("tests/vasp/POSCAR_hexagonal")) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        let scale = (70f64 / 35.16603192806621).cbrt();
        assert_abs_diff_eq!(atoms.lattice.volume(), 70., epsilon = 1e-8);
        assert_eq!(atoms.labels, vec![None; 4]);
        assert_abs_diff_eq!(atoms.positions[0][2], 1.6775 * scale, epsilon = 1e-10);
        assert_abs_diff_eq!(atoms.positions[3][0], 1.23 * scale, epsilon = 1e-10);
    }

    #[test]
    fn vasp_read_missing() {
        let vasp = Vasp {};
        let e = vasp.read(Some("tests/vasp/POSCAR_missing")).unwrap_err();
        assert!(e.to_string().contains("tests/vasp/POSCAR_missing"));
    }

    #[test]
    fn vasp_infer_fixture() {
        assert_eq!(FileType::infer("tests/vasp/POSCAR_slab"),
                   Some(FileType::Vasp));
    }

    #[test]
    fn vasp_write_as_xyz() {
        let vasp = Vasp {};
        let atoms = match vasp.read(Some("tests/vasp/POSCAR_slab")) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        let mut out = Vec::<u8>::new();
        Xyz {}.write(&atoms, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let again = Xyz {}.parse(&text).unwrap();
        assert_eq!(again.lattice, atoms.lattice);
        assert_eq!(again.labels, atoms.labels);
        for (a, b) in again.positions.iter().zip(&atoms.positions) {
            for i in 0..3 {
                assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-10);
            }
        }
    }
}
