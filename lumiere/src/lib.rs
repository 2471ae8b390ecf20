//! Reflection of light rays off line segments, in the plane.
//!
//! A [`Scene`] holds the segments a ray can bounce off (always starting with
//! the four walls of the canvas). An [`Emitter`] owns a [`Ray`] which is
//! traced through successive specular reflections, using [`trace_ray`] or
//! the lower level [`RayPath`] iterator, until it either escapes every
//! segment or reaches a reflection cap.

mod emitter;
mod error;
mod mirror;
mod ray;
mod scene;
mod segment;
mod trace;
pub mod vector;

pub use emitter::*;
pub use error::*;
pub use mirror::*;
pub use ray::*;
pub use scene::*;
pub use segment::*;
pub use trace::*;
pub use vector::{Point, Vector};

pub use nalgebra;
