use nalgebra::{RealField, Unit};

use crate::{vector, DegenerateSegment, Point, Vector};

/// A directed line segment, from `start` to `end`.
///
/// Its direction and length are computed once, at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<S: RealField + Copy> {
    start: Point<S>,
    end: Point<S>,
    /// Unit vector pointing from `start` to `end`
    dir: Unit<Vector<S>>,
    length: S,
}

impl<S: RealField + Copy> Segment<S> {
    /// Creates the segment from `start` to `end`.
    ///
    /// Returns [`DegenerateSegment`] if both points are the same.
    #[inline]
    pub fn try_new(
        start: impl Into<Point<S>>,
        end: impl Into<Point<S>>,
    ) -> Result<Self, DegenerateSegment> {
        let (start, end) = (start.into(), end.into());
        let dir = vector::unit(&start, &end)?;

        Ok(Self {
            start,
            end,
            dir,
            length: vector::distance(&start, &end),
        })
    }

    /// A panicking version of [`Self::try_new`]
    ///
    /// # Panics
    ///
    /// if `start == end`
    #[inline]
    #[must_use]
    pub fn new(start: impl Into<Point<S>>, end: impl Into<Point<S>>) -> Self {
        Self::try_new(start, end).expect("segment endpoints must be distinct")
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> &Point<S> {
        &self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> &Point<S> {
        &self.end
    }

    #[inline]
    #[must_use]
    pub const fn dir(&self) -> &Unit<Vector<S>> {
        &self.dir
    }

    /// Always strictly positive.
    #[inline]
    #[must_use]
    pub fn length(&self) -> S {
        self.length
    }

    /// The point at distance `mu` from `start`, along this segment's line.
    #[inline]
    #[must_use]
    pub fn point_at(&self, mu: S) -> Point<S> {
        vector::add(&self.start, &vector::scale(mu, &self.dir))
    }
}

impl<S: RealField + Copy, P: Into<Point<S>>> TryFrom<[P; 2]> for Segment<S> {
    type Error = DegenerateSegment;

    #[inline]
    fn try_from([start, end]: [P; 2]) -> Result<Self, Self::Error> {
        Self::try_new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_creation() {
        let s = Segment::<f64>::new([1.0, 1.0], [4.0, 5.0]);

        assert_eq!(*s.start(), Point::new(1.0, 1.0));
        assert_eq!(*s.end(), Point::new(4.0, 5.0));
        assert_relative_eq!(s.length(), 5.0);
        assert_relative_eq!(s.dir().into_inner(), Vector::new(0.6, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn test_segment_point_at() {
        let s = Segment::<f64>::new([0.0, 300.0], [800.0, 300.0]);

        assert_eq!(s.point_at(0.0), *s.start());
        assert_eq!(s.point_at(250.0), Point::new(250.0, 300.0));
        assert_eq!(s.point_at(s.length()), *s.end());
    }

    #[test]
    fn test_zero_length_segment_is_rejected() {
        assert_eq!(
            Segment::<f64>::try_new([12.0, 7.0], [12.0, 7.0]),
            Err(DegenerateSegment)
        );
        assert!(Segment::<f32>::try_from([[0.0, 0.0], [0.0, 0.0]]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_zero_length() {
        let _ = Segment::<f64>::new([1.0, 2.0], [1.0, 2.0]);
    }
}
