use nalgebra::{convert, RealField};

use crate::{vector, Mirror, Point, Ray, RayPath, Trace, Vector};

/// A laser pointer: a colored, axis-aligned box, firing a ray to the right.
#[derive(Clone, Debug, PartialEq)]
pub struct Emitter<S: RealField + Copy, C> {
    pub color: C,
    /// The top left corner of the emitter's body
    pub corner: Point<S>,
    /// Width and height of the emitter's body
    pub size: Vector<S>,
    /// The emitted ray, starts at the middle of the body's right side
    pub ray: Ray<S>,
    /// How many times `ray` has been reflected so far
    pub reflections: usize,
}

impl<S: RealField + Copy, C> Emitter<S, C> {
    #[must_use]
    pub fn new(color: C, corner: impl Into<Point<S>>, size: impl Into<Vector<S>>) -> Self {
        let corner = corner.into();
        let size = size.into();

        Self {
            color,
            corner,
            size,
            ray: Ray::new(front_center(&corner, &size)),
            reflections: 0,
        }
    }

    /// Where the ray was emitted from.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point<S> {
        front_center(&self.corner, &self.size)
    }

    /// The path of this emitter's ray, from its current position
    /// until [`trace_ray`](crate::trace_ray) would stop it.
    ///
    /// The ray and reflection count are updated, so calling this again
    /// carries on from where the ray was left, with the same cap.
    pub fn trace(
        &mut self,
        mirror: &(impl Mirror<S> + ?Sized),
        max_reflections: usize,
    ) -> Trace<S> {
        let trace = RayPath::resume(self.ray, mirror, self.reflections, max_reflections).finish();
        self.ray = trace.ray;
        self.reflections = trace.reflections;
        trace
    }
}

fn front_center<S: RealField + Copy>(corner: &Point<S>, size: &Vector<S>) -> Point<S> {
    let half: S = convert(0.5);
    vector::add(corner, &Vector::new(size.x, size.y * half))
}
