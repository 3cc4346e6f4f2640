//! Picks the single slide the carousel is showing from its reported geometry.
//!
//! Bounding boxes reported mid-animation can show several slides as mostly
//! visible. Only full containment counts, and candidates equal to the current
//! or the previous selection are ignored.

use crate::catalog::Catalog;
use crate::selection::SelectionState;

/// Horizontal position of one rendered slide, relative to the viewport's left edge
#[derive(Debug, Clone, PartialEq)]
pub struct SlideGeometry {
	pub slide_id: String,
	pub left_edge: f32,
	pub right_edge: f32,
}

impl SlideGeometry {
	pub fn new(slide_id: impl Into<String>, left_edge: f32, right_edge: f32) -> Self {
		Self {
			slide_id: slide_id.into(),
			left_edge,
			right_edge,
		}
	}

	pub fn is_fully_visible(&self, viewport_width: f32) -> bool {
		self.left_edge >= 0.0 && self.right_edge <= viewport_width
	}
}

/// Outcome of one visibility event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Nothing was fully inside the viewport
	NoFullyVisibleSlide,
	/// The fully visible slide is the current or the previous selection
	Suppressed(usize),
	/// A genuinely new slide should become the selection
	Select(usize),
}

/// First fully visible slide, in carousel order, that belongs to the catalog
pub fn first_fully_visible(
	catalog: &Catalog,
	slides: &[SlideGeometry],
	viewport_width: f32,
) -> Option<usize> {
	slides
		.iter()
		.filter(|slide| slide.is_fully_visible(viewport_width))
		.find_map(|slide| {
			let index = catalog.index_of(&slide.slide_id);
			if index.is_none() {
				log::debug!("[Visibility] Ignoring unknown slide '{}'", slide.slide_id);
			}
			index
		})
}

pub fn resolve(
	catalog: &Catalog,
	selection: &SelectionState,
	slides: &[SlideGeometry],
	viewport_width: f32,
) -> Resolution {
	let Some(index) = first_fully_visible(catalog, slides, viewport_width) else {
		return Resolution::NoFullyVisibleSlide;
	};

	if selection.is_suppressed(index) {
		log::trace!(
			"[Visibility] Suppressed slide {} (current={:?}, previous={:?})",
			index,
			selection.current(),
			selection.previous()
		);
		Resolution::Suppressed(index)
	} else {
		Resolution::Select(index)
	}
}
