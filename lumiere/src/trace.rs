use log::{debug, trace};
use nalgebra::RealField;

use crate::{Mirror, Point, Ray};

/// Where a [`RayPath`] is at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraceState {
    /// The ray may still bounce
    #[default]
    Advancing,
    /// The ray didn't land on any segment. Final.
    Terminated,
    /// The ray bounced more than the allowed number of times. Final.
    Bounded,
}

impl TraceState {
    #[inline]
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Advancing)
    }
}

/// Iterator over the points where a ray bounces off a mirror.
///
/// The ray keeps bouncing while its reflection count is at most
/// `max_reflections`, so up to `max_reflections + 1` points are yielded.
/// Once the iterator returns `None`, [`Self::state`] tells why.
#[derive(Clone, Debug)]
pub struct RayPath<'a, S: RealField + Copy, M: Mirror<S> + ?Sized> {
    ray: Ray<S>,
    mirror: &'a M,
    reflections: usize,
    max_reflections: usize,
    state: TraceState,
}

impl<'a, S: RealField + Copy, M: Mirror<S> + ?Sized> RayPath<'a, S, M> {
    #[inline]
    #[must_use]
    pub fn new(ray: Ray<S>, mirror: &'a M, max_reflections: usize) -> Self {
        Self::resume(ray, mirror, 0, max_reflections)
    }

    /// Like [`Self::new`], for a ray that has already bounced `reflections` times.
    #[inline]
    #[must_use]
    pub fn resume(
        ray: Ray<S>,
        mirror: &'a M,
        reflections: usize,
        max_reflections: usize,
    ) -> Self {
        Self {
            ray,
            mirror,
            reflections,
            max_reflections,
            state: TraceState::Advancing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn ray(&self) -> &Ray<S> {
        &self.ray
    }

    #[inline]
    #[must_use]
    pub const fn reflections(&self) -> usize {
        self.reflections
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TraceState {
        self.state
    }

    /// Runs the path to completion, and returns everything it went through.
    #[must_use]
    pub fn finish(mut self) -> Trace<S> {
        let mut points = vec![self.ray.pos];
        points.extend(self.by_ref());

        let Self {
            ray,
            reflections,
            state,
            ..
        } = self;

        debug!("trace ended after {reflections} reflection(s): {state:?}");

        Trace {
            points,
            end: state,
            ray,
            reflections,
        }
    }
}

impl<S: RealField + Copy, M: Mirror<S> + ?Sized> Iterator for RayPath<'_, S, M> {
    type Item = Point<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_final() {
            return None;
        }

        if self.reflections > self.max_reflections {
            self.state = TraceState::Bounded;
            return None;
        }

        let Some(hit) = self.mirror.closest_intersection(&self.ray) else {
            self.state = TraceState::Terminated;
            return None;
        };

        self.reflections += 1;
        self.ray.bounce(&hit);

        trace!(
            "bounce #{} off segment {} at ({}, {})",
            self.reflections,
            hit.index,
            hit.point.x,
            hit.point.y,
        );

        Some(hit.point)
    }
}

/// The outcome of tracing a ray.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace<S: RealField + Copy> {
    /// The path of the ray, starting with where it was before being traced,
    /// then every point it bounced on, in order.
    pub points: Vec<Point<S>>,
    /// Why tracing stopped. Never [`TraceState::Advancing`].
    pub end: TraceState,
    /// The ray, as it was left after its last bounce.
    pub ray: Ray<S>,
    /// How many times the ray has bounced, in total.
    pub reflections: usize,
}

/// Traces `ray` through its reflections on `mirror`.
///
/// With a cap of `max_reflections`, the returned path has
/// at most `max_reflections + 2` points.
#[inline]
#[must_use]
pub fn trace_ray<S: RealField + Copy>(
    ray: Ray<S>,
    mirror: &(impl Mirror<S> + ?Sized),
    max_reflections: usize,
) -> Trace<S> {
    RayPath::new(ray, mirror, max_reflections).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boundary, Segment, Vector};

    fn walls() -> [Segment<f64>; 4] {
        boundary(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_right_wall_then_back() {
        let trace = trace_ray(Ray::<f64>::new([40.0, 15.0]), &walls(), 0);

        assert_eq!(trace.points, [Point::new(40.0, 15.0), Point::new(800.0, 15.0)]);
        assert_eq!(trace.end, TraceState::Bounded);
        assert_eq!(trace.reflections, 1);
        assert_eq!(trace.ray.dir.into_inner(), Vector::new(-1.0, 0.0));
        // right wall
        assert_eq!(trace.ray.last, Some(3));
    }

    #[test]
    fn test_inclusive_bound() {
        let trace = trace_ray(Ray::<f64>::new([40.0, 15.0]), &walls(), 1);

        assert_eq!(
            trace.points,
            [
                Point::new(40.0, 15.0),
                Point::new(800.0, 15.0),
                Point::new(0.0, 15.0),
            ]
        );
        assert_eq!(trace.end, TraceState::Bounded);
        assert_eq!(trace.reflections, 2);
    }

    #[test]
    fn test_parallel_interior_segment_is_skipped() {
        let mut mirror = walls().to_vec();
        mirror.push(Segment::new([0.0, 300.0], [800.0, 300.0]));

        let trace = trace_ray(Ray::<f64>::new([40.0, 15.0]), &mirror, 0);

        assert_eq!(trace.points[1], Point::new(800.0, 15.0));
    }

    #[test]
    fn test_termination_without_hit() {
        let mirror = [Segment::<f64>::new([100.0, 0.0], [100.0, 50.0])];

        let trace = trace_ray(Ray::<f64>::new([40.0, 15.0]), &mirror, 10);

        assert_eq!(trace.points, [Point::new(40.0, 15.0), Point::new(100.0, 15.0)]);
        assert_eq!(trace.end, TraceState::Terminated);
        assert_eq!(trace.reflections, 1);
    }

    #[test]
    fn test_empty_mirror() {
        let trace = trace_ray(Ray::<f64>::new([40.0, 15.0]), &[] as &[Segment<f64>], 10);

        assert_eq!(trace.points, [Point::new(40.0, 15.0)]);
        assert_eq!(trace.end, TraceState::Terminated);
    }

    #[test]
    fn test_bound_on_path_length() {
        let ray = Ray::<f64>::new_normalize([123.0, 456.0], [0.83, -0.31]);

        for max in 0..20 {
            let trace = trace_ray(ray, &walls(), max);
            assert_eq!(trace.end, TraceState::Bounded);
            assert_eq!(trace.points.len(), max + 2);
        }
    }

    #[test]
    fn test_path_iterator_stops_for_good() {
        let walls = walls();
        let mut path = RayPath::new(Ray::<f64>::new([40.0, 15.0]), &walls, 2);

        assert_eq!(path.state(), TraceState::Advancing);
        assert_eq!(path.by_ref().count(), 3);
        assert_eq!(path.state(), TraceState::Bounded);
        assert_eq!(path.next(), None);
        assert_eq!(path.reflections(), 3);
    }

    #[test]
    fn test_resume_counts_previous_reflections() {
        let walls = walls();
        let path = RayPath::resume(Ray::<f64>::new([40.0, 15.0]), &walls, 5, 5);

        assert_eq!(path.finish().points.len(), 2);
    }
}
