//! Error type shared by the showreel components.
//!
//! The playback kinds ([`Error::NoFullyVisibleSlide`],
//! [`Error::StalePlaybackTarget`], [`Error::HandleOperationFailure`]) are
//! always contained by the component that produced them: they get logged and
//! reported, never propagated to rendering. The remaining kinds come from
//! loading the catalog and settings at startup.

use crate::types::PlaybackCommand;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A visibility scan found no slide fully inside the viewport.
	#[error("no fully visible slide in viewport of width {viewport_width}")]
	NoFullyVisibleSlide { viewport_width: f32 },

	/// A command targeted an index with no registered handle.
	#[error("no media handle registered for slide {index}")]
	StalePlaybackTarget { index: usize },

	/// A handle's `play`/`pause` failed.
	#[error("{command} failed for slide {index}: {reason}")]
	HandleOperationFailure {
		index: usize,
		command: PlaybackCommand,
		reason: String,
	},

	#[error("Catalog error: {0}")]
	Catalog(String),

	#[error("Settings error: {0}")]
	Settings(String),

	#[error("IO error: {source}")]
	Io {
		#[from]
		source: std::io::Error,
	},
}

impl Error {
	/// Whether this error is a playback diagnostic rather than a load failure
	pub fn is_playback(&self) -> bool {
		matches!(
			self,
			Error::NoFullyVisibleSlide { .. }
				| Error::StalePlaybackTarget { .. }
				| Error::HandleOperationFailure { .. }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn handle_failure_message_names_command_and_slide() {
		let err = Error::HandleOperationFailure {
			index: 2,
			command: PlaybackCommand::Play,
			reason: "autoplay blocked".to_string(),
		};
		assert_eq!(err.to_string(), "play failed for slide 2: autoplay blocked");
		assert!(err.is_playback());
	}

	#[test]
	fn load_errors_are_not_playback() {
		assert!(!Error::Catalog("duplicate id".into()).is_playback());
		let io: Error = std::io::Error::other("disk gone").into();
		assert!(!io.is_playback());
	}
}
