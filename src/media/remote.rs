use super::EmbeddedPlayer;
use crate::reactor::{ComponentResponse, Event, MediaEvent};
use crate::types::PlaybackState;
use anyhow::anyhow;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};

/// Commands understood by an embedded player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
	PlayVideo,
	PauseVideo,
}

const COMMAND_BUFFER: usize = 8;

/// Player side of an embedded video.
///
/// Commands arrive over a channel and are applied on `poll`; the resulting
/// state is published back through a watch channel. Senders never wait for
/// that acknowledgment.
pub struct PlayerHost {
	index: usize,
	video_id: String,
	mounted_at: Instant,
	ready_after: Duration,
	ready: bool,
	sender: mpsc::Sender<PlayerCommand>,
	receiver: mpsc::Receiver<PlayerCommand>,
	state: watch::Sender<PlaybackState>,
}

impl PlayerHost {
	pub fn new(index: usize, video_id: impl Into<String>, ready_after: Duration) -> Self {
		let video_id = video_id.into();
		log::info!("[Media] Embedding player for slide {}: {}", index, video_id);
		let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
		let (state, _) = watch::channel(PlaybackState::Paused);
		Self {
			index,
			video_id,
			mounted_at: Instant::now(),
			ready_after,
			ready: false,
			sender,
			receiver,
			state,
		}
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn video_id(&self) -> &str {
		&self.video_id
	}

	pub fn is_ready(&self) -> bool {
		self.ready
	}

	pub fn state(&self) -> PlaybackState {
		*self.state.borrow()
	}

	/// When `poll` next has work to do: the ready signal, or commands
	/// waiting to be applied. `None` while the player is idle.
	pub fn next_poll_in(&self) -> Option<Duration> {
		if !self.ready {
			return Some(self.ready_after.saturating_sub(self.mounted_at.elapsed()));
		}
		(!self.receiver.is_empty()).then_some(Duration::ZERO)
	}

	/// Client end handed out once the player reports ready
	pub fn connect(&self) -> RemotePlayer {
		RemotePlayer {
			video_id: self.video_id.clone(),
			commands: self.sender.clone(),
			state: self.state.subscribe(),
		}
	}

	/// Announce readiness once and apply queued commands
	pub fn poll(&mut self) -> ComponentResponse {
		if !self.ready {
			if self.mounted_at.elapsed() < self.ready_after {
				return ComponentResponse::none();
			}
			self.ready = true;
			log::info!("[Media] Player ready: {}", self.video_id);
			return ComponentResponse::emit(Event::Media(MediaEvent::PlayerReady {
				index: self.index,
			}));
		}

		while let Ok(command) = self.receiver.try_recv() {
			let next = match command {
				PlayerCommand::PlayVideo => PlaybackState::Playing,
				PlayerCommand::PauseVideo => PlaybackState::Paused,
			};
			log::trace!("[Media] {} <- {:?}", self.video_id, command);
			self.state.send_replace(next);
		}
		ComponentResponse::none()
	}
}

/// Caller side of an embedded player
pub struct RemotePlayer {
	video_id: String,
	commands: mpsc::Sender<PlayerCommand>,
	state: watch::Receiver<PlaybackState>,
}

impl RemotePlayer {
	fn send(&self, command: PlayerCommand) -> anyhow::Result<()> {
		self.commands
			.try_send(command)
			.map_err(|e| anyhow!("player {} did not accept {:?}: {}", self.video_id, command, e))
	}
}

impl EmbeddedPlayer for RemotePlayer {
	fn play_video(&mut self) -> anyhow::Result<()> {
		self.send(PlayerCommand::PlayVideo)
	}

	fn pause_video(&mut self) -> anyhow::Result<()> {
		self.send(PlayerCommand::PauseVideo)
	}

	fn state(&self) -> PlaybackState {
		*self.state.borrow()
	}
}
