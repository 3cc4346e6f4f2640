//! Uniform play/pause contract over heterogeneous media backends.
//!
//! Native elements speak `play`/`pause`, embedded players speak
//! `play_video`/`pause_video`. Both are wrapped into a [`MediaHandle`] once,
//! when they are registered, so nothing downstream branches on
//! [`MediaKind`](crate::types::MediaKind).

pub mod local;
pub mod registry;
pub mod remote;

pub use local::LocalVideo;
pub use registry::MediaRegistry;
pub use remote::{PlayerCommand, PlayerHost, RemotePlayer};

use crate::types::{PlaybackCommand, PlaybackState};

pub trait MediaHandle {
	fn play(&mut self) -> anyhow::Result<()>;

	fn pause(&mut self) -> anyhow::Result<()>;

	/// Last known state, for display. Never used to decide commands.
	fn state(&self) -> PlaybackState {
		PlaybackState::Unknown
	}

	fn apply(&mut self, command: PlaybackCommand) -> anyhow::Result<()> {
		match command {
			PlaybackCommand::Play => self.play(),
			PlaybackCommand::Pause => self.pause(),
		}
	}
}

/// A media element with native `play`/`pause`
pub trait PlayableElement {
	fn play(&mut self) -> anyhow::Result<()>;
	fn pause(&mut self) -> anyhow::Result<()>;
	fn state(&self) -> PlaybackState;
}

/// A third-party player with `play_video`/`pause_video`
pub trait EmbeddedPlayer {
	fn play_video(&mut self) -> anyhow::Result<()>;
	fn pause_video(&mut self) -> anyhow::Result<()>;
	fn state(&self) -> PlaybackState;
}

pub struct ElementHandle<E: PlayableElement>(pub E);

impl<E: PlayableElement> MediaHandle for ElementHandle<E> {
	fn play(&mut self) -> anyhow::Result<()> {
		self.0.play()
	}

	fn pause(&mut self) -> anyhow::Result<()> {
		self.0.pause()
	}

	fn state(&self) -> PlaybackState {
		self.0.state()
	}
}

pub struct EmbeddedHandle<P: EmbeddedPlayer>(pub P);

impl<P: EmbeddedPlayer> MediaHandle for EmbeddedHandle<P> {
	fn play(&mut self) -> anyhow::Result<()> {
		self.0.play_video()
	}

	fn pause(&mut self) -> anyhow::Result<()> {
		self.0.pause_video()
	}

	fn state(&self) -> PlaybackState {
		self.0.state()
	}
}

/// Adapt a native element at registration time
pub fn from_element<E: PlayableElement + 'static>(element: E) -> Box<dyn MediaHandle> {
	Box::new(ElementHandle(element))
}

/// Adapt an embedded player at registration time
pub fn from_player<P: EmbeddedPlayer + 'static>(player: P) -> Box<dyn MediaHandle> {
	Box::new(EmbeddedHandle(player))
}
