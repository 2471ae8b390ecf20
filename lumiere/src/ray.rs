use nalgebra::{RealField, Unit};

use crate::{vector, Hit, Point, Vector};

/// A ray of light, travelling from `pos` along `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<S: RealField + Copy> {
    /// Where the ray currently is
    pub pos: Point<S>,
    /// Where the ray is currently going
    pub dir: Unit<Vector<S>>,
    /// The index of the segment the ray last bounced off, if any.
    ///
    /// That segment is ignored by the next intersection search, since the ray
    /// is sitting right on it.
    pub last: Option<usize>,
}

impl<S: RealField + Copy> Ray<S> {
    /// A ray starting at `origin`, heading right (along `(1, 0)`).
    #[inline]
    #[must_use]
    pub fn new(origin: impl Into<Point<S>>) -> Self {
        Self::new_unit_dir(origin, Vector::x_axis())
    }

    #[inline]
    #[must_use]
    pub fn new_unit_dir(origin: impl Into<Point<S>>, dir: Unit<Vector<S>>) -> Self {
        Self {
            pos: origin.into(),
            dir,
            last: None,
        }
    }

    /// Returns `None` if `dir` is zero.
    #[inline]
    #[must_use]
    pub fn try_new_normalize(
        origin: impl Into<Point<S>>,
        dir: impl Into<Vector<S>>,
    ) -> Option<Self> {
        Unit::try_new(dir.into(), S::zero()).map(|dir| Self::new_unit_dir(origin, dir))
    }

    /// # Panics
    ///
    /// if `dir` is zero
    #[inline]
    #[must_use]
    pub fn new_normalize(origin: impl Into<Point<S>>, dir: impl Into<Vector<S>>) -> Self {
        Self::try_new_normalize(origin, dir).expect("direction must not be zero")
    }

    /// Returns [`self.pos`](Self::pos), translated by [`self.dir`](Self::dir)` * t`.
    #[inline]
    #[must_use]
    pub fn at(&self, t: S) -> Point<S> {
        vector::add(&self.pos, &vector::scale(t, &self.dir))
    }

    /// Reflects [`self.dir`](Self::dir) w.r.t. the line directed by `line`.
    ///
    /// Orthogonal reflection preserves norms, but the result is renormalized
    /// anyway, so roundoff errors don't pile up over many reflections.
    #[inline]
    pub fn reflect_dir(&mut self, line: &Unit<Vector<S>>) {
        self.dir = Unit::new_normalize(vector::reflect(&self.dir, line));
    }

    /// Moves the ray onto `hit`, and makes it bounce off the segment there.
    #[inline]
    pub fn bounce(&mut self, hit: &Hit<S>) {
        self.last = Some(hit.index);
        self.pos = hit.point;
        self.reflect_dir(&hit.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let ray = Ray::<f64>::new([40.0, 15.0]);

        assert_eq!(ray.pos, Point::new(40.0, 15.0));
        assert_eq!(ray.dir.into_inner(), Vector::new(1.0, 0.0));
        assert_eq!(ray.last, None);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::<f64>::new_normalize([1.0, 1.0], [0.0, 2.0]);

        assert_eq!(ray.at(0.0), Point::new(1.0, 1.0));
        assert_eq!(ray.at(3.0), Point::new(1.0, 4.0));
        assert_eq!(ray.at(-1.0), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_zero_direction() {
        assert!(Ray::<f32>::try_new_normalize([0.0, 0.0], [0.0, 0.0]).is_none());
    }

    #[test]
    fn test_bounce() {
        let mut ray = Ray::<f64>::new([40.0, 15.0]);
        let hit = Hit {
            point: Point::new(800.0, 15.0),
            dist: 760.0,
            index: 3,
            line: Vector::y_axis(),
        };

        ray.bounce(&hit);

        assert_eq!(ray.pos, Point::new(800.0, 15.0));
        assert_eq!(ray.dir.into_inner(), Vector::new(-1.0, 0.0));
        assert_eq!(ray.last, Some(3));
    }
}
