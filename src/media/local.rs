use super::PlayableElement;
use crate::types::PlaybackState;

/// In-process video element: looping, muted and autoplaying on mount
pub struct LocalVideo {
	source: String,
	playing: bool,
}

impl LocalVideo {
	pub fn new(source: impl Into<String>) -> Self {
		let source = source.into();
		log::debug!("[Media] Mounted video element: {}", source);
		Self {
			source,
			playing: true,
		}
	}

	pub fn source(&self) -> &str {
		&self.source
	}
}

impl PlayableElement for LocalVideo {
	fn play(&mut self) -> anyhow::Result<()> {
		if !self.playing {
			log::trace!("[Media] play {}", self.source);
			self.playing = true;
		}
		Ok(())
	}

	fn pause(&mut self) -> anyhow::Result<()> {
		if self.playing {
			log::trace!("[Media] pause {}", self.source);
			self.playing = false;
		}
		Ok(())
	}

	fn state(&self) -> PlaybackState {
		if self.playing {
			PlaybackState::Playing
		} else {
			PlaybackState::Paused
		}
	}
}
