use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media attached to a project slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
	/// Still image only, never registers a handle
	#[default]
	None,
	/// Media element exposing `play`/`pause`
	NativeVideo,
	/// Third-party player exposing `play_video`/`pause_video`
	EmbeddedPlayer,
}

/// Last known playback state of a media handle, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
	#[default]
	Unknown,
	Playing,
	Paused,
}

/// Playback command issued by the synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
	Play,
	Pause,
}

impl fmt::Display for PlaybackCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PlaybackCommand::Play => f.write_str("play"),
			PlaybackCommand::Pause => f.write_str("pause"),
		}
	}
}

/// Carousel scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
	Next,
	Prev,
}
