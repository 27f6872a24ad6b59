use crate::errors::GeometryError;

/// a × b
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[1] * b[2] - a[2] * b[1],
     a[2] * b[0] - a[0] * b[2],
     a[0] * b[1] - a[1] * b[0]]
}

/// the row vector `v` times the matrix `m`, ie. the rows of `m` weighted by
/// the components of `v`
pub fn dot(v: [f64; 3], m: [[f64; 3]; 3]) -> [f64; 3] {
    add(add(scale(m[0], v[0]), scale(m[1], v[1])), scale(m[2], v[2]))
}

pub fn vdot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter().zip(&b).map(|(x, y)| x * y).sum()
}

/// euclidean length
pub fn norm(a: [f64; 3]) -> f64 {
    vdot(a, a).sqrt()
}

/// a + b
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// a - b
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// multiply every component of a vector by a scalar
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// signed determinant of a 3x3 matrix
pub fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    vdot(m[0], cross(m[1], m[2]))
}

/// Inverts a lattice stored as rows [a, b, c].
///
/// The columns of the inverse are b×c, c×a and a×b over the determinant, so
/// `dot(point, inverse)` gives fractional coordinates. Fails for |det|
/// below 1e-16.
pub fn invert_lattice(lattice: &[[f64; 3]; 3])
                      -> Result<[[f64; 3]; 3], GeometryError> {
    let [a, b, c] = *lattice;
    let columns = [cross(b, c), cross(c, a), cross(a, b)];
    let det = vdot(a, columns[0]);
    if det.abs() < 1e-16 {
        return Err(GeometryError::SingularLattice);
    }
    let mut inverse = [[0f64; 3]; 3];
    for (j, column) in columns.iter().enumerate() {
        for (row, x) in inverse.iter_mut().zip(column) {
            row[j] = x / det;
        }
    }
    Ok(inverse)
}
