use thiserror::Error;

/// Returned when asking for the unit vector between two identical points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("cannot compute a direction between two identical points")]
pub struct DegenerateVector;

/// Returned when asking for a segment whose endpoints are identical.
///
/// This is expected to happen on user input (a click without a drag),
/// callers usually just drop the segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("a segment's endpoints must be distinct")]
pub struct DegenerateSegment;

impl From<DegenerateVector> for DegenerateSegment {
    #[inline]
    fn from(_: DegenerateVector) -> Self {
        Self
    }
}
