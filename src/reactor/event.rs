use crate::types::NavDirection;
use crate::visibility::SlideGeometry;
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum Event {
	Carousel(CarouselEvent),
	Media(MediaEvent),
	Autoplay(AutoplayEvent),
	View(ViewEvent),
}

impl Event {
	pub fn priority(&self) -> Priority {
		match self {
			Event::Carousel(CarouselEvent::Select { .. }) => Priority::High,
			Event::Carousel(_) => Priority::Normal,
			Event::Media(_) => Priority::Normal,
			Event::Autoplay(AutoplayEvent::Tick { .. }) => Priority::Low,
			Event::Autoplay(_) => Priority::Normal,
			Event::View(_) => Priority::Normal,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
	Critical = 0,
	High = 1,
	Normal = 2,
	Low = 3,
}

impl Priority {
	pub fn as_index(&self) -> usize {
		*self as usize
	}
}

/// Notifications from the carousel
#[derive(Clone, Debug)]
pub enum CarouselEvent {
	/// Carousel selected a snap; slides are in carousel order
	Select {
		slides: Vec<SlideGeometry>,
		viewport_width: f32,
	},
	PointerEnter,
	PointerLeave,
	/// User dragged or otherwise moved the carousel by hand
	Interaction,
}

#[derive(Clone, Debug)]
pub enum MediaEvent {
	/// An embedded player finished loading and can take commands
	PlayerReady { index: usize },
}

#[derive(Clone, Debug)]
pub enum AutoplayEvent {
	/// Timer fired; ignored unless `generation` is still current
	Tick { generation: u64 },
	Stop,
	Reset,
	Toggle,
	SetDelay { duration: Duration },
}

#[derive(Clone, Debug)]
pub enum ViewEvent {
	/// Ask the carousel to move one slide
	Scroll(NavDirection),
	SelectionChanged { index: usize },
}

/// Response from component.handle()
#[derive(Default, Debug)]
pub struct ComponentResponse {
	/// Events to dispatch immediately
	pub events: Vec<Event>,
	/// Events to schedule (event, delay)
	pub scheduled: Vec<(Event, Duration)>,
}

impl ComponentResponse {
	pub fn none() -> Self {
		Self::default()
	}

	pub fn emit(event: Event) -> Self {
		Self {
			events: vec![event],
			scheduled: vec![],
		}
	}

	pub fn schedule(event: Event, delay: Duration) -> Self {
		Self {
			events: vec![],
			scheduled: vec![(event, delay)],
		}
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty() && self.scheduled.is_empty()
	}
}
