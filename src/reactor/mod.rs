pub mod event;
pub mod queue;
pub mod scheduler;

pub use event::{
	AutoplayEvent, CarouselEvent, ComponentResponse, Event, MediaEvent, Priority, ViewEvent,
};
pub use queue::EventQueue;
pub use scheduler::Scheduler;

use crate::autoplay::Autoplay;
use crate::catalog::Catalog;
use crate::media::{self, LocalVideo, PlayerHost};
use crate::settings::Settings;
use crate::showcase::Showcase;
use crate::types::MediaKind;
use crate::view::ViewManager;
use eframe::egui;

const MAX_EVENTS_PER_TICK: usize = 1000;

pub struct Reactor {
	queue: EventQueue,
	scheduler: Scheduler,

	pub showcase: Showcase,
	pub autoplay: Autoplay,
	pub view: ViewManager,
	pub players: Vec<PlayerHost>,
}

impl Reactor {
	pub fn new(settings: &Settings, catalog: Catalog) -> Self {
		log::info!("Initializing all components");
		let slide_count = catalog.len();
		let mut reactor = Self {
			queue: EventQueue::new(),
			scheduler: Scheduler::new(),
			showcase: Showcase::new(catalog),
			autoplay: Autoplay::new(&settings.autoplay),
			view: ViewManager::new(settings, slide_count),
			players: Vec::new(),
		};

		reactor.mount_media(settings);
		reactor.showcase.synchronize();
		reactor.process_response(reactor.autoplay.init());
		log::info!("Initialization complete");

		reactor
	}

	/// Mount every slide's media; embedded players register later, once ready
	fn mount_media(&mut self, settings: &Settings) {
		let mut natives = Vec::new();
		for (index, project) in self.showcase.catalog().iter() {
			match project.media_kind {
				MediaKind::NativeVideo => {
					if let Some(source) = &project.media_source {
						natives.push((index, LocalVideo::new(source.as_str())));
					}
				}
				MediaKind::EmbeddedPlayer => {
					if let Some(video_id) = project.embed_video_id() {
						self.players.push(PlayerHost::new(
							index,
							video_id,
							settings.carousel.player_ready(),
						));
					}
				}
				MediaKind::None => {}
			}
		}
		for (index, video) in natives {
			self.showcase.mount_media(index, media::from_element(video));
		}
	}

	fn process_response(&mut self, response: ComponentResponse) {
		for e in response.events {
			self.queue.push(e);
		}
		for (e, d) in response.scheduled {
			self.scheduler.schedule(e, d);
		}
	}

	pub fn dispatch(&mut self, event: Event) {
		self.queue.push(event);
	}

	/// Everything in a frame except rendering
	pub fn pump(&mut self) {
		// Drain scheduled events
		self.scheduler.tick(&mut self.queue);

		// Poll embedded players
		let responses: Vec<ComponentResponse> =
			self.players.iter_mut().map(|player| player.poll()).collect();
		for response in responses {
			self.process_response(response);
		}

		// Process event queue until empty
		let mut iterations = 0;
		while let Some(event) = self.queue.pop() {
			log::trace!("Processing event: {:?}", event);
			let response = self.route(&event);
			self.process_response(response);

			iterations += 1;
			if iterations >= MAX_EVENTS_PER_TICK {
				log::warn!(
					"Event loop exceeded {} iterations, breaking",
					MAX_EVENTS_PER_TICK
				);
				break;
			}
		}
	}

	pub fn tick(&mut self, ctx: &egui::Context) {
		self.pump();

		// Render
		let events = self
			.view
			.render(ctx, &self.showcase, &self.autoplay, &self.players);

		// Process any events from rendering immediately
		let rendered_stale = !events.is_empty();
		for event in events {
			log::trace!("Processing render event: {:?}", event);
			let response = self.route(&event);
			self.process_response(response);
		}

		// The frame on screen predates whatever the render events changed
		if rendered_stale || !self.queue.is_empty() {
			ctx.request_repaint();
		}

		let wake_up = self
			.players
			.iter()
			.filter_map(PlayerHost::next_poll_in)
			.chain(self.scheduler.next_deadline())
			.min();
		if let Some(delay) = wake_up {
			ctx.request_repaint_after(delay);
		}
	}

	fn route(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::Carousel(CarouselEvent::Select { .. }) => self.showcase.handle(event),
			Event::Carousel(_) => self.autoplay.handle(event),
			Event::Media(MediaEvent::PlayerReady { index }) => self.handle_player_ready(*index),
			Event::Autoplay(_) => self.autoplay.handle(event),
			Event::View(_) => self.view.handle(event),
		}
	}

	fn handle_player_ready(&mut self, index: usize) -> ComponentResponse {
		match self.players.iter().find(|player| player.index() == index) {
			Some(player) => {
				let handle = media::from_player(player.connect());
				self.showcase.mount_media(index, handle);
			}
			None => log::warn!("Ready signal from unknown player for slide {}", index),
		}
		ComponentResponse::none()
	}

	/// Release media before the window goes away
	pub fn shutdown(&mut self) {
		self.showcase.teardown();
		self.players.clear();
	}

	pub fn pending_events(&self) -> usize {
		self.queue.len()
	}

	pub fn scheduled_events(&self) -> usize {
		self.scheduler.len()
	}
}

impl eframe::App for Reactor {
	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		self.tick(ctx);
	}

	fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
		self.shutdown();
	}
}
