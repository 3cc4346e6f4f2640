//! Drives every registered media handle from the current selection.
//!
//! Each command is isolated: one handle failing never keeps the others from
//! receiving theirs. Failures are logged and reported, never returned.

use crate::error::Error;
use crate::media::MediaRegistry;
use crate::types::PlaybackCommand;

/// What one synchronization pass did
#[derive(Debug, Default)]
pub struct SyncReport {
	pub played: Vec<usize>,
	pub paused: Vec<usize>,
	pub failures: Vec<Error>,
}

impl SyncReport {
	pub fn is_clean(&self) -> bool {
		self.failures.is_empty()
	}

	fn record(&mut self, index: usize, command: PlaybackCommand, result: anyhow::Result<()>) {
		match result {
			Ok(()) => match command {
				PlaybackCommand::Play => self.played.push(index),
				PlaybackCommand::Pause => self.paused.push(index),
			},
			Err(e) => {
				let failure = Error::HandleOperationFailure {
					index,
					command,
					reason: format!("{e:#}"),
				};
				log::warn!("[Sync] {}", failure);
				self.failures.push(failure);
			}
		}
	}
}

fn command_for(index: usize, current: Option<usize>) -> PlaybackCommand {
	if current == Some(index) {
		PlaybackCommand::Play
	} else {
		PlaybackCommand::Pause
	}
}

/// Play the handle at `current`, pause all others
pub fn synchronize(registry: &mut MediaRegistry, current: Option<usize>) -> SyncReport {
	let mut report = SyncReport::default();

	if let Some(index) = current {
		if !registry.contains(index) {
			log::debug!("[Sync] {}", Error::StalePlaybackTarget { index });
		}
	}

	for (index, handle) in registry.iter_mut() {
		let command = command_for(index, current);
		let result = handle.apply(command);
		report.record(index, command, result);
	}

	log::debug!(
		"[Sync] current={:?} played={:?} paused={} failures={}",
		current,
		report.played,
		report.paused.len(),
		report.failures.len()
	);
	report
}

/// Bring a single handle in line with the selection, e.g. right after it mounts
pub fn align(registry: &mut MediaRegistry, index: usize, current: Option<usize>) -> SyncReport {
	let mut report = SyncReport::default();
	match registry.get_mut(index) {
		Some(handle) => {
			let command = command_for(index, current);
			let result = handle.apply(command);
			report.record(index, command, result);
		}
		None => log::debug!("[Sync] {}", Error::StalePlaybackTarget { index }),
	}
	report
}
