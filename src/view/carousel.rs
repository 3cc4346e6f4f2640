use crate::catalog::Catalog;
use crate::settings::CarouselSettings;
use crate::types::NavDirection;
use crate::visibility::SlideGeometry;
use std::time::{Duration, Instant};

/// Horizontal, start-aligned, optionally looping slide strip.
///
/// Positions are measured in slides: `position == 2.0` means slide 2 sits
/// flush with the viewport's left edge.
pub struct Carousel {
	slide_count: usize,
	slide_width: f32,
	gap: f32,
	loop_slides: bool,
	duration: Duration,
	position: f32,
	from: f32,
	target: f32,
	started: Instant,
	animating: bool,
}

impl Carousel {
	pub fn new(settings: &CarouselSettings, slide_count: usize) -> Self {
		Self {
			slide_count,
			slide_width: settings.slide_width,
			gap: settings.slide_gap,
			loop_slides: settings.loop_slides,
			duration: settings.scroll_duration(),
			position: 0.0,
			from: 0.0,
			target: 0.0,
			started: Instant::now(),
			animating: false,
		}
	}

	/// Slide width for a viewport; wide enough that at most one slide fits fully
	pub fn slide_width(&self, viewport_width: f32) -> f32 {
		let min = (viewport_width - self.gap) * 0.5 + 1.0;
		self.slide_width.max(min).min(viewport_width.max(1.0))
	}

	fn stride(&self, viewport_width: f32) -> f32 {
		self.slide_width(viewport_width) + self.gap
	}

	pub fn scroll(&mut self, direction: NavDirection) {
		if self.slide_count == 0 {
			return;
		}
		let step = match direction {
			NavDirection::Next => 1.0,
			NavDirection::Prev => -1.0,
		};
		let mut next = self.target + step;
		if !self.loop_slides {
			next = next.clamp(0.0, (self.slide_count - 1) as f32);
		}
		if next == self.target {
			return;
		}
		self.from = self.position;
		self.target = next;
		self.started = Instant::now();
		self.animating = true;
	}

	/// Advance the animation; true on the frame the carousel settles
	pub fn update(&mut self) -> bool {
		if !self.animating {
			return false;
		}
		let t = if self.duration.is_zero() {
			1.0
		} else {
			(self.started.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
		};
		let eased = 1.0 - (1.0 - t).powi(3);
		self.position = self.from + (self.target - self.from) * eased;

		if t >= 1.0 {
			self.animating = false;
			if self.loop_slides {
				self.target = self.target.rem_euclid(self.slide_count as f32);
			}
			self.position = self.target;
			return true;
		}
		false
	}

	pub fn is_animating(&self) -> bool {
		self.animating
	}

	/// Snap the carousel is heading to
	pub fn target_snap(&self) -> usize {
		if self.slide_count == 0 {
			return 0;
		}
		self.target.rem_euclid(self.slide_count as f32).round() as usize % self.slide_count
	}

	/// Offset of a slide from the viewport's left edge, in slides
	fn slide_offset(&self, index: usize, drag_slides: f32) -> f32 {
		let count = self.slide_count as f32;
		let mut offset = index as f32 - (self.position - drag_slides);
		if self.loop_slides && self.slide_count > 1 {
			offset = offset.rem_euclid(count);
			if offset >= count - 1.0 {
				offset -= count;
			}
		}
		offset
	}

	/// Left and right edge of every slide, in carousel order
	pub fn geometry(&self, catalog: &Catalog, viewport_width: f32, drag: f32) -> Vec<SlideGeometry> {
		let stride = self.stride(viewport_width);
		let width = self.slide_width(viewport_width);
		let drag_slides = drag / stride;
		catalog
			.iter()
			.map(|(index, project)| {
				let left = self.slide_offset(index, drag_slides) * stride;
				SlideGeometry::new(project.id.as_str(), left, left + width)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEWPORT: f32 = 900.0;

	fn carousel(loop_slides: bool) -> Carousel {
		let settings = CarouselSettings {
			scroll_duration_ms: 0,
			loop_slides,
			..CarouselSettings::default()
		};
		Carousel::new(&settings, 4)
	}

	fn fully_visible(carousel: &Carousel) -> Vec<String> {
		carousel
			.geometry(&Catalog::builtin(), VIEWPORT, 0.0)
			.into_iter()
			.filter(|slide| slide.is_fully_visible(VIEWPORT))
			.map(|slide| slide.slide_id)
			.collect()
	}

	#[test]
	fn settled_snap_is_the_only_fully_visible_slide() {
		let mut carousel = carousel(true);
		assert_eq!(fully_visible(&carousel), vec!["UNFAMILIAR"]);

		carousel.scroll(NavDirection::Next);
		carousel.scroll(NavDirection::Next);
		assert!(carousel.update());
		assert_eq!(carousel.target_snap(), 2);
		assert_eq!(fully_visible(&carousel), vec!["DIVIDE"]);
	}

	#[test]
	fn loops_backwards_from_first_slide() {
		let mut carousel = carousel(true);
		carousel.scroll(NavDirection::Prev);
		assert!(carousel.update());
		assert_eq!(carousel.target_snap(), 3);
		assert_eq!(fully_visible(&carousel), vec!["OPENGL ENGINE"]);
	}

	#[test]
	fn clamps_without_loop() {
		let mut carousel = carousel(false);
		carousel.scroll(NavDirection::Prev);
		assert!(!carousel.is_animating());
		assert!(!carousel.update());
		assert_eq!(carousel.target_snap(), 0);
	}

	#[test]
	fn mid_drag_has_no_fully_visible_slide() {
		let carousel = carousel(true);
		let geometry = carousel.geometry(&Catalog::builtin(), VIEWPORT, -120.0);
		assert!(geometry.iter().all(|slide| !slide.is_fully_visible(VIEWPORT)));
	}
}
