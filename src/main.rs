#![windows_subsystem = "windows"]

use anyhow::Context;
use showreel::reactor::Reactor;
use showreel::settings::Settings;

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let settings_path = Settings::default_path();
	let settings = Settings::load_or_default(settings_path.as_deref());
	let catalog = settings.catalog().context("Failed to load project catalog")?;
	log::info!("Loaded {} projects", catalog.len());

	let native_options = eframe::NativeOptions {
		viewport: eframe::egui::ViewportBuilder::default()
			.with_inner_size([settings.window.width, settings.window.height])
			.with_title("Work"),
		..Default::default()
	};

	eframe::run_native(
		"Showreel",
		native_options,
		Box::new(move |cc| {
			egui_extras::install_image_loaders(&cc.egui_ctx);
			Ok(Box::new(Reactor::new(&settings, catalog)))
		}),
	)
	.map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
