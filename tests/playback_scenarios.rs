use showreel::catalog::{Catalog, ProjectRecord};
use showreel::media::MediaHandle;
use showreel::selection::SelectionState;
use showreel::showcase::Showcase;
use showreel::types::{MediaKind, PlaybackCommand};
use showreel::visibility::SlideGeometry;
use std::cell::RefCell;
use std::rc::Rc;

const VIEWPORT: f32 = 1200.0;

type CommandLog = Rc<RefCell<Vec<(usize, PlaybackCommand)>>>;

struct RecordingHandle {
	index: usize,
	log: CommandLog,
	fail: bool,
}

impl MediaHandle for RecordingHandle {
	fn play(&mut self) -> anyhow::Result<()> {
		self.log.borrow_mut().push((self.index, PlaybackCommand::Play));
		if self.fail {
			anyhow::bail!("player not initialized");
		}
		Ok(())
	}

	fn pause(&mut self) -> anyhow::Result<()> {
		self.log.borrow_mut().push((self.index, PlaybackCommand::Pause));
		if self.fail {
			anyhow::bail!("player not initialized");
		}
		Ok(())
	}
}

fn project(id: &str, media_kind: MediaKind) -> ProjectRecord {
	ProjectRecord {
		id: id.to_string(),
		description: format!("{id} description"),
		media_kind,
		media_source: match media_kind {
			MediaKind::None => None,
			_ => Some(format!("{id}-source")),
		},
		image: None,
		alt: None,
		tags: Vec::new(),
		push_tag: None,
		link: None,
	}
}

/// Four projects; slide 3 has no media
fn catalog() -> Catalog {
	Catalog::new(vec![
		project("P0", MediaKind::NativeVideo),
		project("P1", MediaKind::NativeVideo),
		project("P2", MediaKind::EmbeddedPlayer),
		project("P3", MediaKind::None),
	])
	.unwrap()
}

/// Showcase with recording handles on every slide that has media
fn mounted() -> (Showcase, CommandLog) {
	mounted_with_failing(None)
}

fn mounted_with_failing(failing: Option<usize>) -> (Showcase, CommandLog) {
	let log = CommandLog::default();
	let mut showcase = Showcase::new(catalog());
	for index in 0..3 {
		showcase.mount_media(
			index,
			Box::new(RecordingHandle {
				index,
				log: log.clone(),
				fail: failing == Some(index),
			}),
		);
	}
	showcase.synchronize();
	log.borrow_mut().clear();
	(showcase, log)
}

fn fully_visible(id: &str) -> Vec<SlideGeometry> {
	vec![
		SlideGeometry::new("P0", -900.0, -100.0),
		SlideGeometry::new(id, 0.0, VIEWPORT),
		SlideGeometry::new("P1", VIEWPORT + 10.0, VIEWPORT + 900.0),
	]
}

/// Latest command each slide received, in index order
fn latest_commands(log: &CommandLog) -> Vec<(usize, PlaybackCommand)> {
	let mut latest = std::collections::BTreeMap::new();
	for (index, command) in log.borrow().iter() {
		latest.insert(*index, *command);
	}
	latest.into_iter().collect()
}

#[test]
fn scenario_a_initial_mount_plays_first_slide_only() {
	let log = CommandLog::default();
	let mut showcase = Showcase::new(catalog());
	for index in 0..3 {
		showcase.mount_media(
			index,
			Box::new(RecordingHandle {
				index,
				log: log.clone(),
				fail: false,
			}),
		);
	}
	log.borrow_mut().clear();

	let report = showcase.synchronize();

	assert_eq!(showcase.selection().current(), Some(0));
	assert_eq!(report.played, vec![0]);
	let plays: Vec<usize> = log
		.borrow()
		.iter()
		.filter(|(_, command)| *command == PlaybackCommand::Play)
		.map(|(index, _)| *index)
		.collect();
	assert_eq!(plays, vec![0]);
}

#[test]
fn scenario_b_new_fully_visible_slide_takes_over_playback() {
	let (mut showcase, log) = mounted();

	let transition = showcase.on_select(&fully_visible("P2"), VIEWPORT).unwrap();

	assert_eq!(transition.from, Some(0));
	assert_eq!(transition.to, 2);
	assert_eq!(showcase.selection().current(), Some(2));
	assert_eq!(showcase.selection().previous(), Some(0));
	assert_eq!(
		latest_commands(&log),
		vec![
			(0, PlaybackCommand::Pause),
			(1, PlaybackCommand::Pause),
			(2, PlaybackCommand::Play),
		]
	);
}

#[test]
fn scenario_c_repeated_report_is_suppressed() {
	let (mut showcase, log) = mounted();
	showcase.on_select(&fully_visible("P2"), VIEWPORT).unwrap();
	let before = *showcase.selection();
	log.borrow_mut().clear();

	assert!(showcase.on_select(&fully_visible("P2"), VIEWPORT).is_none());
	assert!(showcase.on_select(&fully_visible("P0"), VIEWPORT).is_none());

	assert_eq!(*showcase.selection(), before);
	assert!(log.borrow().is_empty());
}

#[test]
fn scenario_d_no_fully_visible_slide_changes_nothing() {
	let (mut showcase, log) = mounted();
	let before = *showcase.selection();
	let straddling = vec![
		SlideGeometry::new("P1", -200.0, 600.0),
		SlideGeometry::new("P2", 620.0, 1420.0),
	];

	assert!(showcase.on_select(&straddling, VIEWPORT).is_none());
	assert!(showcase.on_select(&[], VIEWPORT).is_none());

	assert_eq!(*showcase.selection(), before);
	assert!(log.borrow().is_empty());
}

#[test]
fn scenario_e_slide_without_media_pauses_everything_else() {
	let (mut showcase, log) = mounted();

	assert!(showcase.on_select(&fully_visible("P3"), VIEWPORT).is_some());

	assert_eq!(showcase.selection().current(), Some(3));
	assert!(log.borrow().iter().all(|(index, _)| *index != 3));
	assert_eq!(
		latest_commands(&log),
		vec![
			(0, PlaybackCommand::Pause),
			(1, PlaybackCommand::Pause),
			(2, PlaybackCommand::Pause),
		]
	);
}

#[test]
fn failing_handle_does_not_stop_the_pass() {
	let (mut showcase, log) = mounted_with_failing(Some(1));
	showcase.on_select(&fully_visible("P2"), VIEWPORT).unwrap();

	let report = showcase.synchronize();
	assert_eq!(report.failures.len(), 1);
	assert_eq!(report.played, vec![2]);
	assert_eq!(report.paused, vec![0]);
	assert!(log.borrow().contains(&(2, PlaybackCommand::Play)));
}

#[test]
fn unregistered_current_slide_is_a_noop() {
	let (mut showcase, log) = mounted();
	showcase.on_select(&fully_visible("P2"), VIEWPORT).unwrap();

	assert!(showcase.unmount_media(2).is_some());
	assert!(showcase.unmount_media(2).is_none());
	log.borrow_mut().clear();

	let report = showcase.synchronize();
	assert!(report.is_clean());
	assert!(report.played.is_empty());
	assert!(log.borrow().iter().all(|(index, _)| *index != 2));
}

#[test]
fn remount_replaces_handle_and_aligns_it() {
	let (mut showcase, log) = mounted();
	let replacement = CommandLog::default();
	showcase.mount_media(
		0,
		Box::new(RecordingHandle {
			index: 0,
			log: replacement.clone(),
			fail: false,
		}),
	);
	assert_eq!(*replacement.borrow(), vec![(0, PlaybackCommand::Play)]);

	showcase.on_select(&fully_visible("P1"), VIEWPORT).unwrap();
	assert_eq!(
		replacement.borrow().last(),
		Some(&(0, PlaybackCommand::Pause))
	);
	assert!(log.borrow().iter().all(|(index, _)| *index != 0));
}

#[test]
fn selection_stays_within_catalog_for_any_event_sequence() {
	let (mut showcase, log) = mounted();
	let ids = ["P0", "P1", "P2", "P3", "UNKNOWN"];
	let len = showcase.catalog().len();

	// Deterministic pseudo-random walk over ids and edge offsets
	let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
	for _ in 0..500 {
		seed ^= seed << 13;
		seed ^= seed >> 7;
		seed ^= seed << 17;
		let id = ids[(seed % ids.len() as u64) as usize];
		let left = ((seed >> 8) % 300) as f32 - 150.0;
		let slides = vec![SlideGeometry::new(id, left, left + VIEWPORT * 0.8)];

		let before: SelectionState = *showcase.selection();
		let transition = showcase.on_select(&slides, VIEWPORT);
		let after = *showcase.selection();

		assert!(after.current().is_some_and(|index| index < len));
		match transition {
			Some(t) => {
				assert_eq!(after.previous(), before.current());
				assert!(!before.is_suppressed(t.to));
			}
			None => assert_eq!(after, before),
		}

		// Only the current slide's latest command is play
		let current = after.current();
		for (index, command) in latest_commands(&log) {
			let expected = if Some(index) == current {
				PlaybackCommand::Play
			} else {
				PlaybackCommand::Pause
			};
			if showcase.registry().contains(index) && transition.is_some() {
				assert_eq!(command, expected, "slide {index}");
			}
		}
	}
}
