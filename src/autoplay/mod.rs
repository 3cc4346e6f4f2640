use crate::reactor::{AutoplayEvent, CarouselEvent, ComponentResponse, Event, ViewEvent};
use crate::settings::AutoplaySettings;
use crate::types::NavDirection;
use std::time::Duration;

const MIN_DELAY: Duration = Duration::from_secs(1);
const MAX_DELAY: Duration = Duration::from_secs(60);

/// Timer that advances the carousel by one slide every `delay`.
///
/// Scheduled ticks carry the generation they were scheduled under; any
/// stop/reset bumps the generation so ticks already in flight are dropped.
pub struct Autoplay {
	enabled: bool,
	delay: Duration,
	stop_on_interaction: bool,
	stopped: bool,
	generation: u64,
}

impl Autoplay {
	pub fn new(settings: &AutoplaySettings) -> Self {
		Self {
			enabled: settings.enabled,
			delay: settings.delay().clamp(MIN_DELAY, MAX_DELAY),
			stop_on_interaction: settings.stop_on_interaction,
			stopped: false,
			generation: 0,
		}
	}

	pub fn init(&self) -> ComponentResponse {
		log::info!(
			"[Autoplay] enabled={}, delay={:?}, stop_on_interaction={}",
			self.enabled,
			self.delay,
			self.stop_on_interaction
		);
		self.schedule_tick()
	}

	pub fn handle(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::Autoplay(AutoplayEvent::Tick { generation }) => {
				if *generation != self.generation || !self.is_running() {
					log::trace!("[Autoplay] Dropping stale tick {}", generation);
					return ComponentResponse::none();
				}
				let mut response =
					ComponentResponse::emit(Event::View(ViewEvent::Scroll(NavDirection::Next)));
				response.scheduled.extend(self.schedule_tick().scheduled);
				response
			}
			Event::Autoplay(AutoplayEvent::Stop) | Event::Carousel(CarouselEvent::PointerEnter) => {
				self.stop()
			}
			Event::Autoplay(AutoplayEvent::Reset) | Event::Carousel(CarouselEvent::PointerLeave) => {
				self.reset()
			}
			Event::Carousel(CarouselEvent::Interaction) => {
				if self.stop_on_interaction {
					self.stop()
				} else {
					self.reset()
				}
			}
			Event::Autoplay(AutoplayEvent::Toggle) => {
				self.enabled = !self.enabled;
				log::info!("[Autoplay] enabled={}", self.enabled);
				self.restart()
			}
			Event::Autoplay(AutoplayEvent::SetDelay { duration }) => {
				self.delay = (*duration).clamp(MIN_DELAY, MAX_DELAY);
				log::debug!("[Autoplay] delay={:?}", self.delay);
				self.restart()
			}
			_ => ComponentResponse::none(),
		}
	}

	fn stop(&mut self) -> ComponentResponse {
		if !self.stopped {
			log::debug!("[Autoplay] Stopped");
		}
		self.stopped = true;
		self.generation += 1;
		ComponentResponse::none()
	}

	fn reset(&mut self) -> ComponentResponse {
		self.stopped = false;
		self.restart()
	}

	fn restart(&mut self) -> ComponentResponse {
		self.generation += 1;
		self.schedule_tick()
	}

	fn schedule_tick(&self) -> ComponentResponse {
		if !self.is_running() {
			return ComponentResponse::none();
		}
		ComponentResponse::schedule(
			Event::Autoplay(AutoplayEvent::Tick {
				generation: self.generation,
			}),
			self.delay,
		)
	}

	pub fn is_running(&self) -> bool {
		self.enabled && !self.stopped
	}

	pub fn enabled(&self) -> bool {
		self.enabled
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}
