use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Result<Self, Error> {
        Ok(Self {
            x: finite(x)?,
            y: finite(y)?,
        })
    }

    /// Euclidean distance from the origin, without intermediate overflow.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Cosine of the angle between two vectors, `None` when either has zero length.
    pub fn cosine(self, other: Self) -> Option<f64> {
        let (a, b) = (self.norm(), other.norm());
        if a > 0.0 && b > 0.0 {
            Some((self.x / a) * (other.x / b) + (self.y / a) * (other.y / b))
        } else {
            None
        }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }
}

fn finite(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteCoordinate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use crate::error::Error;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn norm_of_three_four() {
        let p = Point::new(3.0, 4.0).unwrap();
        assert_approx_eq!(p.norm(), 5.0);
    }

    #[test]
    fn cosine_of_orthogonal_vectors() {
        let a = Point::new(2.0, 0.0).unwrap();
        let b = Point::new(0.0, 7.0).unwrap();
        assert_approx_eq!(a.cosine(b).unwrap(), 0.0);
    }

    #[test]
    fn cosine_with_zero_vector() {
        let a = Point::new(2.0, 1.0).unwrap();
        assert!(a.cosine(Point::default()).is_none());
    }

    #[test]
    fn cosine_of_huge_vectors() {
        let a = Point::new(1e200, 1e200).unwrap();
        assert_approx_eq!(a.norm(), 1e200 * std::f64::consts::SQRT_2, 1e186);
        assert_approx_eq!(a.cosine(a).unwrap(), 1.0);
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(
            Point::new(f64::NAN, 1.0),
            Err(Error::NonFiniteCoordinate(_))
        ));
    }

    #[test]
    fn infinity_is_rejected() {
        assert!(matches!(
            Point::new(1.0, f64::INFINITY),
            Err(Error::NonFiniteCoordinate(_))
        ));
    }
}
