#[cfg(test)]
mod tests {
    use latcut::atoms::Lattice;
    use latcut::errors::GeometryError;
    use latcut::io::xyz::Xyz;
    use latcut::io::{FileFormat, FileType};
    use latcut::periodic;

    #[test]
    fn xyz_read_first_frame() {
        let xyz = Xyz {};
        let atoms = match xyz.read(Some("tests/xyz/slab.xyz")) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(atoms.lattice, Lattice::orthorhombic(10., 10., 10.));
        assert_eq!(atoms.positions,
                   vec![[1., 1., 1.], [3., 2., 2.], [6., 4., 8.], [8., 7., 9.]]);
        assert_eq!(atoms.labels[3].as_deref(), Some("O"));
    }

    #[test]
    fn xyz_read_no_cell() {
        let xyz = Xyz {};
        let atoms = match xyz.read(Some("tests/xyz/molecule.xyz")) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms.lattice, Lattice::undefined());
        assert_eq!(periodic::wrap(&atoms).unwrap_err(),
                   GeometryError::SingularLattice);
    }

    #[test]
    fn xyz_infer_fixture() {
        assert_eq!(FileType::infer("tests/xyz/slab.xyz"), Some(FileType::Xyz));
    }
}
