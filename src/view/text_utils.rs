use eframe::egui;

/// Split text on `*` markers into (segment, emphasized) runs
pub fn emphasis_runs(text: &str) -> Vec<(String, bool)> {
	let mut runs = Vec::new();
	let mut in_bold = false;
	let mut current_text = String::new();

	for ch in text.chars() {
		if ch == '*' {
			if !current_text.is_empty() {
				runs.push((std::mem::take(&mut current_text), in_bold));
			}
			in_bold = !in_bold;
		} else {
			current_text.push(ch);
		}
	}
	if !current_text.is_empty() {
		runs.push((current_text, in_bold));
	}
	runs
}

/// Renders a project description, wrapped to the available width.
///
/// `*text*` is drawn in full white, everything else in light gray faded by
/// `opacity`.
pub fn render_description(ui: &mut egui::Ui, text: &str, font_size: f32, opacity: f32) {
	let mut job = egui::text::LayoutJob::default();
	job.wrap = egui::text::TextWrapping {
		max_width: ui.available_width(),
		..Default::default()
	};
	job.halign = egui::Align::LEFT;

	for (segment, emphasized) in emphasis_runs(text) {
		let color = if emphasized {
			egui::Color32::WHITE
		} else {
			egui::Color32::LIGHT_GRAY
		};
		let format = egui::TextFormat {
			font_id: egui::FontId::proportional(font_size),
			color: color.gamma_multiply(opacity),
			..Default::default()
		};
		job.append(&segment, 0.0, format);
	}

	ui.label(job);
}
