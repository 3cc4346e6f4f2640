use super::MediaHandle;
use crate::types::PlaybackState;
use std::collections::BTreeMap;

/// Slide index -> media handle. Holds no playback state of its own.
#[derive(Default)]
pub struct MediaRegistry {
	handles: BTreeMap<usize, Box<dyn MediaHandle>>,
}

impl MediaRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a handle; a second registration for the same slide replaces the first
	pub fn register(&mut self, index: usize, handle: Box<dyn MediaHandle>) {
		if self.handles.insert(index, handle).is_some() {
			log::debug!("[Media] Replaced handle for slide {}", index);
		} else {
			log::debug!("[Media] Registered handle for slide {}", index);
		}
	}

	pub fn unregister(&mut self, index: usize) -> Option<Box<dyn MediaHandle>> {
		let removed = self.handles.remove(&index);
		if removed.is_some() {
			log::debug!("[Media] Unregistered handle for slide {}", index);
		}
		removed
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn MediaHandle + 'static)> {
		self.handles.get_mut(&index).map(|handle| &mut **handle)
	}

	pub fn contains(&self, index: usize) -> bool {
		self.handles.contains_key(&index)
	}

	pub fn state(&self, index: usize) -> Option<PlaybackState> {
		self.handles.get(&index).map(|handle| handle.state())
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Box<dyn MediaHandle>)> {
		self.handles.iter_mut().map(|(index, handle)| (*index, handle))
	}

	pub fn len(&self) -> usize {
		self.handles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handles.is_empty()
	}

	/// Remove every handle, e.g. when the carousel unmounts
	pub fn clear(&mut self) -> Vec<(usize, Box<dyn MediaHandle>)> {
		std::mem::take(&mut self.handles).into_iter().collect()
	}
}
