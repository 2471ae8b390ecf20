use std::{rc::Rc, sync::Arc};

use nalgebra::{RealField, Unit};

use crate::{vector, Point, Ray, Segment, Vector};

/// Where, and on what, a ray lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<S: RealField + Copy> {
    /// The point of intersection
    pub point: Point<S>,
    /// The distance between the ray's position and `point`
    pub dist: S,
    /// The index of the segment that was hit, in the slice that was searched
    pub index: usize,
    /// The direction of the segment that was hit
    pub line: Unit<Vector<S>>,
}

/// Returns the point where `ray` lands on `segment`, if any.
///
/// `index` is the position of `segment` in the collection the ray is traced
/// against. If it is [`ray.last`](Ray::last), the ray is sitting on that
/// segment and `None` is returned.
///
/// Intersections exactly at one of the segment's endpoints are not counted.
/// Neither are intersections that are behind the ray.
#[must_use]
pub fn intersection<S: RealField + Copy>(
    ray: &Ray<S>,
    segment: &Segment<S>,
    index: usize,
) -> Option<Point<S>> {
    if ray.last == Some(index) {
        return None;
    }

    let d = &ray.dir;
    let r = segment.dir();
    let p = &ray.pos;
    let a = segment.start();

    let denom = d.x * r.y - d.y * r.x;

    // parallel
    if denom == S::zero() {
        return None;
    }

    // distance along the segment, from its start
    let mu = (d.y * a.x - d.x * a.y + d.x * p.y - d.y * p.x) / denom;

    if !(S::zero() < mu && mu < segment.length()) {
        return None;
    }

    let point = segment.point_at(mu);

    let t = vector::subtract(&point, p);
    (t.x * d.x >= S::zero() && t.y * d.y >= S::zero()).then_some(point)
}

/// A collection of segments that rays can bounce off.
///
/// Segments are identified by their index in [`Self::segments`],
/// which must not change while a ray is traced against `self`.
pub trait Mirror<S: RealField + Copy> {
    fn segments(&self) -> &[Segment<S>];

    /// Returns the closest point where `ray` lands on one of the segments,
    /// or `None` if it doesn't land on any of them.
    ///
    /// When several hits are exactly as close, the one with the
    /// smallest index is returned.
    #[inline]
    #[must_use]
    fn closest_intersection(&self, ray: &Ray<S>) -> Option<Hit<S>> {
        self.segments()
            .iter()
            .enumerate()
            .filter_map(|(index, segment)| {
                intersection(ray, segment, index).map(|point| Hit {
                    point,
                    dist: vector::distance(&ray.pos, &point),
                    index,
                    line: *segment.dir(),
                })
            })
            .fold(None, |closest: Option<Hit<S>>, hit| match closest {
                Some(c) if c.dist <= hit.dist => Some(c),
                _ => Some(hit),
            })
    }
}

impl<S: RealField + Copy> Mirror<S> for [Segment<S>] {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        self
    }
}

impl<S: RealField + Copy, const N: usize> Mirror<S> for [Segment<S>; N] {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        self.as_slice()
    }
}

impl<S: RealField + Copy> Mirror<S> for Vec<Segment<S>> {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        self.as_slice()
    }
}

// It's clear that all these impls use the `Deref` trait, but writing a blanket impl over all types
// implementing `Deref` makes it impossible to implement it for new types downstream.
impl<S: RealField + Copy, T: Mirror<S> + ?Sized> Mirror<S> for Box<T> {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        self.as_ref().segments()
    }
}

impl<S: RealField + Copy, T: Mirror<S> + ?Sized> Mirror<S> for Rc<T> {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        self.as_ref().segments()
    }
}

impl<S: RealField + Copy, T: Mirror<S> + ?Sized> Mirror<S> for Arc<T> {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        self.as_ref().segments()
    }
}

impl<S: RealField + Copy, T: Mirror<S> + ?Sized> Mirror<S> for &T {
    #[inline]
    fn segments(&self) -> &[Segment<S>] {
        (**self).segments()
    }
}
