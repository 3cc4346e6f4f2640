use crate::autoplay::Autoplay;
use crate::catalog::ProjectRecord;
use crate::media::PlayerHost;
use crate::reactor::{AutoplayEvent, CarouselEvent, ComponentResponse, Event, ViewEvent};
use crate::settings::Settings;
use crate::showcase::Showcase;
use crate::types::{MediaKind, NavDirection, PlaybackState};
use eframe::egui;
use std::time::{Duration, Instant};

pub mod carousel;
pub mod text_utils;

use carousel::Carousel;

/// Horizontal drag distance that counts as a swipe
const SWIPE_THRESHOLD: f32 = 60.0;

const DESCRIPTION_FADE: Duration = Duration::from_millis(300);

const SLIDE_ROUNDING: f32 = 12.0;

const PUSH_TAG_COLOR: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);

pub struct ViewManager {
	carousel: Carousel,
	drag: f32,
	pointer_inside: bool,
	selection_changed_at: Instant,
}

impl ViewManager {
	pub fn new(settings: &Settings, slide_count: usize) -> Self {
		Self {
			carousel: Carousel::new(&settings.carousel, slide_count),
			drag: 0.0,
			pointer_inside: false,
			selection_changed_at: Instant::now(),
		}
	}

	pub fn handle(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::View(ViewEvent::Scroll(direction)) => {
				self.carousel.scroll(*direction);
				ComponentResponse::none()
			}
			Event::View(ViewEvent::SelectionChanged { .. }) => {
				self.selection_changed_at = Instant::now();
				ComponentResponse::none()
			}
			_ => ComponentResponse::none(),
		}
	}

	pub fn carousel(&self) -> &Carousel {
		&self.carousel
	}

	/// Main render function of the whole thing
	pub fn render(
		&mut self,
		ctx: &egui::Context,
		showcase: &Showcase,
		autoplay: &Autoplay,
		players: &[PlayerHost],
	) -> Vec<Event> {
		let mut events = Vec::new();

		self.render_work_panel(ctx, showcase, autoplay, &mut events);
		self.render_carousel_panel(ctx, showcase, players, &mut events);

		if self.carousel.is_animating() {
			ctx.request_repaint();
		}

		events
	}

	fn render_work_panel(
		&mut self,
		ctx: &egui::Context,
		showcase: &Showcase,
		autoplay: &Autoplay,
		events: &mut Vec<Event>,
	) {
		let width = (ctx.screen_rect().width() * 0.3).max(260.0);
		egui::SidePanel::left("work_panel")
			.resizable(false)
			.exact_width(width)
			.show(ctx, |ui| {
				ui.add_space(ui.available_height() * 0.2);
				ui.horizontal(|ui| {
					ui.label(egui::RichText::new("Work").size(48.0).strong());
					ui.add_space(12.0);
					let (rect, _) =
						ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
					let painter = ui.painter();
					painter.circle_stroke(
						rect.center(),
						19.0,
						egui::Stroke::new(1.0, egui::Color32::GRAY),
					);
					painter.text(
						rect.center(),
						egui::Align2::CENTER_CENTER,
						showcase.catalog().len().to_string(),
						egui::FontId::proportional(18.0),
						ui.visuals().text_color(),
					);
				});

				ui.add_space(16.0);
				let opacity = (self.selection_changed_at.elapsed().as_secs_f32()
					/ DESCRIPTION_FADE.as_secs_f32())
				.min(1.0);
				if opacity < 1.0 {
					ctx.request_repaint();
				}
				ui.set_max_width(320.0);
				text_utils::render_description(ui, showcase.description(), 17.0, opacity);

				ui.add_space(32.0);
				if ui.button("See All Work").clicked() {
					log::info!("See All Work requested");
				}

				ui.add_space(32.0);
				ui.separator();
				ui.horizontal(|ui| {
					let mut enabled = autoplay.enabled();
					if ui.checkbox(&mut enabled, "Auto-play").changed() {
						events.push(Event::Autoplay(AutoplayEvent::Toggle));
					}

					if autoplay.enabled() {
						let mut seconds = autoplay.delay().as_secs_f32();
						if ui
							.add(egui::Slider::new(&mut seconds, 1.0..=60.0).text("Interval (s)"))
							.changed()
						{
							events.push(Event::Autoplay(AutoplayEvent::SetDelay {
								duration: Duration::from_secs_f32(seconds),
							}));
						}
					}
				});
			});
	}

	fn render_carousel_panel(
		&mut self,
		ctx: &egui::Context,
		showcase: &Showcase,
		players: &[PlayerHost],
		events: &mut Vec<Event>,
	) {
		egui::CentralPanel::default().show(ctx, |ui| {
			let area = ui.max_rect();
			let viewport_width = area.width();
			let response = ui.interact(
				area,
				egui::Id::new("carousel"),
				egui::Sense::click_and_drag(),
			);

			// Autoplay plugin is paused while the pointer rests on the carousel
			let pointer_inside = ui.rect_contains_pointer(area);
			if pointer_inside != self.pointer_inside {
				self.pointer_inside = pointer_inside;
				events.push(Event::Carousel(if pointer_inside {
					CarouselEvent::PointerEnter
				} else {
					CarouselEvent::PointerLeave
				}));
			}

			if response.drag_started() {
				events.push(Event::Carousel(CarouselEvent::Interaction));
			}
			if response.dragged() {
				self.drag += response.drag_delta().x;
			}
			if response.drag_stopped() {
				if self.drag <= -SWIPE_THRESHOLD {
					self.carousel.scroll(NavDirection::Next);
				} else if self.drag >= SWIPE_THRESHOLD {
					self.carousel.scroll(NavDirection::Prev);
				}
				self.drag = 0.0;
			}

			if self.carousel.update() {
				events.push(Event::Carousel(CarouselEvent::Select {
					slides: self.carousel.geometry(showcase.catalog(), viewport_width, 0.0),
					viewport_width,
				}));
			}

			let slide_width = self.carousel.slide_width(viewport_width);
			let slide_height = (area.height() * 0.85).min(slide_width * 0.9);
			let top = area.center().y - slide_height * 0.5;
			let geometry = self
				.carousel
				.geometry(showcase.catalog(), viewport_width, self.drag);

			for (slide, (index, project)) in geometry.iter().zip(showcase.catalog().iter()) {
				let rect = egui::Rect::from_min_size(
					egui::pos2(area.left() + slide.left_edge, top),
					egui::vec2(slide_width, slide_height),
				);
				if !rect.intersects(area) {
					continue;
				}
				let badge = Self::playback_badge(showcase, players, index, project);
				Self::render_slide(ui, rect, project, showcase.is_selected(index), badge);
			}
		});
	}

	fn playback_badge(
		showcase: &Showcase,
		players: &[PlayerHost],
		index: usize,
		project: &ProjectRecord,
	) -> Option<String> {
		let state = match project.media_kind {
			MediaKind::None => return None,
			MediaKind::NativeVideo => showcase.playback_state(index),
			MediaKind::EmbeddedPlayer => {
				let ready = players
					.iter()
					.any(|player| player.index() == index && player.is_ready());
				if !ready {
					return Some("Loading player…".to_string());
				}
				showcase.playback_state(index)
			}
		};
		let label = match state {
			Some(PlaybackState::Playing) => "▶ Playing",
			Some(PlaybackState::Paused) => "❚❚ Paused",
			Some(PlaybackState::Unknown) | None => "…",
		};
		Some(label.to_string())
	}

	fn render_slide(
		ui: &egui::Ui,
		rect: egui::Rect,
		project: &ProjectRecord,
		selected: bool,
		badge: Option<String>,
	) {
		let painter = ui.painter_at(ui.max_rect());
		painter.rect_filled(rect, SLIDE_ROUNDING, egui::Color32::from_gray(70));

		match (&project.image, project.media_kind) {
			(Some(url), MediaKind::None) => {
				egui::Image::from_uri(url.as_str())
					.rounding(SLIDE_ROUNDING)
					.paint_at(ui, rect);
				if let Some(alt) = &project.alt {
					ui.interact(rect, egui::Id::new(("slide_alt", &project.id)), egui::Sense::hover())
						.on_hover_text(alt.as_str());
				}
			}
			(_, MediaKind::EmbeddedPlayer) => {
				painter.rect_filled(rect, SLIDE_ROUNDING, egui::Color32::from_gray(20));
				painter.text(
					rect.center(),
					egui::Align2::CENTER_CENTER,
					format!("YouTube · {}", project.embed_video_id().unwrap_or("?")),
					egui::FontId::monospace(16.0),
					egui::Color32::LIGHT_GRAY,
				);
			}
			(_, MediaKind::NativeVideo) => {
				painter.rect_filled(rect, SLIDE_ROUNDING, egui::Color32::from_gray(30));
				if let Some(source) = &project.media_source {
					let name = source.rsplit('/').next().unwrap_or(source);
					let name = name.split('?').next().unwrap_or(name);
					painter.text(
						rect.center(),
						egui::Align2::CENTER_CENTER,
						name,
						egui::FontId::monospace(16.0),
						egui::Color32::LIGHT_GRAY,
					);
				}
			}
			(None, MediaKind::None) => {}
		}

		let stroke = if selected {
			egui::Stroke::new(3.0, egui::Color32::WHITE)
		} else {
			egui::Stroke::new(1.0, egui::Color32::from_gray(90))
		};
		painter.rect_stroke(rect, SLIDE_ROUNDING, stroke);

		let inner = rect.shrink(28.0);

		if let Some(tag) = &project.push_tag {
			let galley = painter.layout_no_wrap(
				tag.clone(),
				egui::FontId::proportional(14.0),
				egui::Color32::WHITE,
			);
			let pill = egui::Rect::from_min_size(
				egui::pos2(inner.right() - galley.size().x - 24.0, inner.top()),
				galley.size() + egui::vec2(24.0, 8.0),
			);
			painter.rect_filled(pill, SLIDE_ROUNDING, PUSH_TAG_COLOR);
			painter.galley(pill.min + egui::vec2(12.0, 4.0), galley, egui::Color32::WHITE);
		}

		if let Some(badge) = badge {
			painter.text(
				inner.left_top(),
				egui::Align2::LEFT_TOP,
				badge,
				egui::FontId::proportional(14.0),
				egui::Color32::WHITE,
			);
		}

		let tags_rect = painter.text(
			inner.left_bottom(),
			egui::Align2::LEFT_BOTTOM,
			project.tags.join("  ·  "),
			egui::FontId::proportional(14.0),
			egui::Color32::from_gray(220),
		);
		painter.text(
			tags_rect.left_top() - egui::vec2(0.0, 12.0),
			egui::Align2::LEFT_BOTTOM,
			&project.id,
			egui::FontId::proportional(30.0),
			egui::Color32::WHITE,
		);
	}
}
