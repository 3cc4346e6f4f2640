//! Portfolio carousel that keeps media playback in step with the visible slide.
//!
//! The carousel reports slide geometry, [`visibility`] picks the one fully
//! visible slide, [`selection`] records it, and [`sync`] plays that slide's
//! media while pausing every other handle in the [`media`] registry.
//! [`showcase::Showcase`] owns all of that state; [`reactor::Reactor`] routes
//! events to it and hosts the eframe view.

pub mod autoplay;
pub mod catalog;
pub mod error;
pub mod media;
pub mod reactor;
pub mod selection;
pub mod settings;
pub mod showcase;
pub mod sync;
pub mod types;
pub mod view;
pub mod visibility;

pub use error::{Error, Result};
