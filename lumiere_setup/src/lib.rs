//! The interactive part of a session, minus the window: where emitters go,
//! which segments get drawn, and when rays are traced.
//!
//! A front end turns its own events into [`Input`]s, feeds them to an
//! [`Editor`], and draws whatever the returned [`Response`] describes.

mod config;
mod editor;

pub use config::*;
pub use editor::*;
