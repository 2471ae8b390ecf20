//! Plain 2D vector helpers, on top of [`nalgebra`]'s fixed size vectors.

use nalgebra::{RealField, SVector, Unit};

use crate::DegenerateVector;

/// A vector of the plane.
pub type Vector<S> = SVector<S, 2>;

/// A position in the plane. Same representation as [`Vector`].
pub type Point<S> = Vector<S>;

#[inline]
#[must_use]
pub fn add<S: RealField + Copy>(a: &Vector<S>, b: &Vector<S>) -> Vector<S> {
    a + b
}

#[inline]
#[must_use]
pub fn subtract<S: RealField + Copy>(a: &Vector<S>, b: &Vector<S>) -> Vector<S> {
    a - b
}

#[inline]
#[must_use]
pub fn scale<S: RealField + Copy>(k: S, v: &Vector<S>) -> Vector<S> {
    v * k
}

#[inline]
#[must_use]
pub fn dot<S: RealField + Copy>(a: &Vector<S>, b: &Vector<S>) -> S {
    a.dot(b)
}

/// Euclidean distance between `a` and `b`.
#[inline]
#[must_use]
pub fn distance<S: RealField + Copy>(a: &Point<S>, b: &Point<S>) -> S {
    (b - a).norm()
}

/// The unit vector pointing from `a` toward `b`.
///
/// Fails if `a == b`, since there is no such direction.
#[inline]
pub fn unit<S: RealField + Copy>(
    a: &Point<S>,
    b: &Point<S>,
) -> Result<Unit<Vector<S>>, DegenerateVector> {
    Unit::try_new(b - a, S::zero()).ok_or(DegenerateVector)
}

/// Reflects `dir` w.r.t. the line directed by `line`.
///
/// The component of `dir` along `line` is kept and the orthogonal one is
/// flipped, so `|dir|` is preserved.
#[inline]
#[must_use]
pub fn reflect<S: RealField + Copy>(dir: &Vector<S>, line: &Unit<Vector<S>>) -> Vector<S> {
    let r = dot(dir, line);
    scale(r + r, line) - dir
}
