use crate::errors::GeometryError;

/// A plane through `anchor` with normal `normal`.
///
/// The normal does not need to be normalised, scaling it does not move the
/// plane. It does need a non-zero last component to be evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: [f64; 3],
    pub anchor: [f64; 3],
}

impl Plane {
    pub fn new(normal: [f64; 3], anchor: [f64; 3]) -> Self {
        Self { normal, anchor }
    }

    /// The plane perpendicular to the last axis at height `z`.
    pub fn horizontal(z: f64) -> Self {
        Self { normal: [0., 0., 1.],
               anchor: [0., 0., z] }
    }

    /// The last coordinate the plane takes at the leading coordinates of
    /// `point`. The last coordinate of `point` is ignored.
    pub fn value_at(&self, point: [f64; 3]) -> Result<f64, GeometryError> {
        plane_value_at(&self.normal, &self.anchor, &point)
    }
}

/// Evaluates an (n-1)-dimensional plane, defined by its normal and a point
/// it passes through, at the first n-1 coordinates of `r`:
///
/// > p[n-1] - sum_{i < n-1} normal[i] * (r[i] - p[i]) / normal[n-1]
pub fn plane_value_at(normal: &[f64],
                      anchor: &[f64],
                      r: &[f64])
                      -> Result<f64, GeometryError> {
    let n = normal.len();
    for v in [anchor, r] {
        if v.len() != n {
            return Err(GeometryError::DimensionMismatch { expected: n,
                                                          found: v.len() });
        }
    }
    let last = match normal.last() {
        Some(x) if *x != 0. => *x,
        _ => return Err(GeometryError::DegeneratePlane),
    };
    let rise = normal[..n - 1].iter()
                              .zip(&r[..n - 1])
                              .zip(&anchor[..n - 1])
                              .map(|((ni, ri), pi)| ni * (ri - pi))
                              .sum::<f64>();
    Ok(anchor[n - 1] - rise / last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn plane_horizontal() {
        let plane = Plane::horizontal(5.);
        assert_eq!(plane.value_at([3., -2., 100.]), Ok(5.));
    }

    #[test]
    fn plane_tilted() {
        // z = x through the origin
        let plane = Plane::new([-1., 0., 1.], [0., 0., 0.]);
        assert_abs_diff_eq!(plane.value_at([2., 7., 0.]).unwrap(), 2.);
        assert_abs_diff_eq!(plane.value_at([-3., 0., 9.]).unwrap(), -3.);
    }

    #[test]
    fn plane_scale_invariant() {
        let point = [1.2, -0.4, 3.3];
        let a = Plane::new([0.3, -0.2, 0.9], [1., 2., 3.]);
        let b = Plane::new([3., -2., 9.], [1., 2., 3.]);
        assert_abs_diff_eq!(a.value_at(point).unwrap(),
                            b.value_at(point).unwrap(),
                            epsilon = 1e-12);
    }

    #[test]
    fn plane_degenerate() {
        let plane = Plane::new([1., 1., 0.], [0., 0., 0.]);
        assert_eq!(plane.value_at([1., 1., 1.]),
                   Err(GeometryError::DegeneratePlane));
    }

    #[test]
    fn plane_value_at_2d() {
        // the line y = 2x + 1
        let v = plane_value_at(&[-2., 1.], &[0., 1.], &[3., 0.]).unwrap();
        assert_abs_diff_eq!(v, 7.);
    }

    #[test]
    fn plane_value_at_4d() {
        let v = plane_value_at(&[1., 1., 1., 2.],
                               &[0., 0., 0., 1.],
                               &[1., 2., 3., 0.]).unwrap();
        assert_abs_diff_eq!(v, -2.);
    }

    #[test]
    fn plane_value_at_mismatch() {
        assert_eq!(plane_value_at(&[0., 0., 1.], &[0., 0.], &[0., 0., 0.]),
                   Err(GeometryError::DimensionMismatch { expected: 3,
                                                          found: 2 }));
    }

    #[test]
    fn plane_value_at_empty() {
        assert_eq!(plane_value_at(&[], &[], &[]),
                   Err(GeometryError::DegeneratePlane));
    }
}
