//! Top-level owner of catalog, selection and media registry.
//!
//! Every carousel `select` notification runs resolve, transition and
//! synchronize back to back inside one `handle` call, so no other event can
//! observe a half-applied selection.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::media::{MediaHandle, MediaRegistry};
use crate::reactor::{CarouselEvent, ComponentResponse, Event, ViewEvent};
use crate::selection::{SelectionState, Transition};
use crate::sync::{self, SyncReport};
use crate::types::PlaybackState;
use crate::visibility::{self, Resolution, SlideGeometry};

pub struct Showcase {
	catalog: Catalog,
	selection: SelectionState,
	registry: MediaRegistry,
}

impl Showcase {
	pub fn new(catalog: Catalog) -> Self {
		let selection = SelectionState::initial(&catalog);
		log::info!(
			"[Showcase] {} projects, initial selection {:?}",
			catalog.len(),
			selection.current()
		);
		Self {
			catalog,
			selection,
			registry: MediaRegistry::new(),
		}
	}

	pub fn handle(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::Carousel(CarouselEvent::Select {
				slides,
				viewport_width,
			}) => match self.on_select(slides, *viewport_width) {
				Some(transition) => ComponentResponse::emit(Event::View(
					ViewEvent::SelectionChanged {
						index: transition.to,
					},
				)),
				None => ComponentResponse::none(),
			},
			_ => ComponentResponse::none(),
		}
	}

	/// Resolve one visibility event and, on a new selection, resync playback
	pub fn on_select(
		&mut self,
		slides: &[SlideGeometry],
		viewport_width: f32,
	) -> Option<Transition> {
		let index = match visibility::resolve(
			&self.catalog,
			&self.selection,
			slides,
			viewport_width,
		) {
			Resolution::Select(index) => index,
			Resolution::NoFullyVisibleSlide => {
				log::info!("[Showcase] {}", Error::NoFullyVisibleSlide { viewport_width });
				return None;
			}
			Resolution::Suppressed(_) => return None,
		};

		let transition = self.selection.transition(index, &self.catalog)?;
		log::info!(
			"[Showcase] Selected {:?} -> {} ({})",
			transition.from,
			transition.to,
			self.catalog
				.get(transition.to)
				.map(|p| p.id.as_str())
				.unwrap_or("?")
		);
		self.synchronize();
		Some(transition)
	}

	/// Register media for a slide and align it with the current selection
	pub fn mount_media(&mut self, index: usize, handle: Box<dyn MediaHandle>) -> SyncReport {
		if index >= self.catalog.len() {
			log::warn!("[Showcase] Ignoring media for unknown slide {}", index);
			return SyncReport::default();
		}
		self.registry.register(index, handle);
		sync::align(&mut self.registry, index, self.selection.current())
	}

	pub fn unmount_media(&mut self, index: usize) -> Option<Box<dyn MediaHandle>> {
		self.registry.unregister(index)
	}

	/// Full pass over every registered handle
	pub fn synchronize(&mut self) -> SyncReport {
		sync::synchronize(&mut self.registry, self.selection.current())
	}

	/// Pause and release every handle
	pub fn teardown(&mut self) {
		let handles = self.registry.clear();
		log::info!("[Showcase] Releasing {} media handles", handles.len());
		for (index, mut handle) in handles {
			if let Err(e) = handle.pause() {
				log::warn!("[Showcase] Pause on teardown failed for slide {}: {:#}", index, e);
			}
		}
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn description(&self) -> &str {
		self.selection.description(&self.catalog)
	}

	pub fn is_selected(&self, index: usize) -> bool {
		self.selection.is_selected(index)
	}

	pub fn playback_state(&self, index: usize) -> Option<PlaybackState> {
		self.registry.state(index)
	}

	pub fn registry(&self) -> &MediaRegistry {
		&self.registry
	}
}
