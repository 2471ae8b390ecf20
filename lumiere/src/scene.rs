use log::debug;
use nalgebra::RealField;

use crate::{DegenerateSegment, Mirror, Point, Segment};

/// The four walls of a `width` by `height` canvas, whose top left corner is the origin.
///
/// In order: top, left, bottom, right.
///
/// Fails unless both dimensions are strictly positive.
pub fn boundary<S: RealField + Copy>(
    width: S,
    height: S,
) -> Result<[Segment<S>; 4], DegenerateSegment> {
    let zero = S::zero();

    if !(width > zero && height > zero) {
        return Err(DegenerateSegment);
    }

    let top_left = Point::new(zero, zero);
    let top_right = Point::new(width, zero);
    let bottom_left = Point::new(zero, height);
    let bottom_right = Point::new(width, height);

    Ok([
        Segment::try_new(top_left, top_right)?,
        Segment::try_new(top_left, bottom_left)?,
        Segment::try_new(bottom_left, bottom_right)?,
        Segment::try_new(top_right, bottom_right)?,
    ])
}

/// Every segment on the canvas: its walls, then those added by the user.
///
/// Segments can only be added, so their indices never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<S: RealField + Copy> {
    segments: Vec<Segment<S>>,
}

impl<S: RealField + Copy> Scene<S> {
    /// The number of walls at the start of every scene.
    pub const NUM_WALLS: usize = 4;

    /// A scene containing only the walls of a `width` by `height` canvas.
    ///
    /// See [`boundary`].
    pub fn new(width: S, height: S) -> Result<Self, DegenerateSegment> {
        Ok(Self {
            segments: boundary(width, height)?.to_vec(),
        })
    }

    /// Adds the segment from `start` to `end`, and returns its index.
    pub fn add_segment(
        &mut self,
        start: impl Into<Point<S>>,
        end: impl Into<Point<S>>,
    ) -> Result<usize, DegenerateSegment> {
        self.push(Segment::try_new(start, end)?);
        Ok(self.segments.len() - 1)
    }

    /// Adds an already built segment, and returns its index.
    pub fn push(&mut self, segment: Segment<S>) -> usize {
        debug!(
            "adding segment ({}, {}) -> ({}, {})",
            segment.start().x,
            segment.start().y,
            segment.end().x,
            segment.end().y,
        );
        self.segments.push(segment);
        self.segments.len() - 1
    }

    #[inline]
    #[must_use]
    pub fn walls(&self) -> &[Segment<S>] {
        &self.segments[..Self::NUM_WALLS]
    }

    /// The segments that aren't walls.
    #[inline]
    #[must_use]
    pub fn interior(&self) -> &[Segment<S>] {
        &self.segments[Self::NUM_WALLS..]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`, walls included.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<S: RealField + Copy> Mirror<S> for Scene<S> {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        &self.segments
    }
}
