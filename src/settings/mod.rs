//! User configuration, read from `settings.toml` in the platform config dir.
//!
//! Every section has defaults, so a missing or partial file is fine. A file
//! that fails to parse is logged and replaced by defaults.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub autoplay: AutoplaySettings,
	pub carousel: CarouselSettings,
	pub window: WindowSettings,
	/// Catalog file (`.toml` or `.json`); the built-in catalog when unset
	pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplaySettings {
	pub enabled: bool,
	pub delay_ms: u64,
	pub stop_on_interaction: bool,
}

impl AutoplaySettings {
	pub fn delay(&self) -> Duration {
		Duration::from_millis(self.delay_ms)
	}
}

impl Default for AutoplaySettings {
	fn default() -> Self {
		Self {
			enabled: true,
			delay_ms: 5000,
			stop_on_interaction: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
	pub slide_width: f32,
	pub slide_gap: f32,
	pub loop_slides: bool,
	pub scroll_duration_ms: u64,
	/// Time an embedded player takes to report ready
	pub player_ready_ms: u64,
}

impl CarouselSettings {
	pub fn scroll_duration(&self) -> Duration {
		Duration::from_millis(self.scroll_duration_ms)
	}

	pub fn player_ready(&self) -> Duration {
		Duration::from_millis(self.player_ready_ms)
	}
}

impl Default for CarouselSettings {
	fn default() -> Self {
		Self {
			slide_width: 560.0,
			slide_gap: 24.0,
			loop_slides: true,
			scroll_duration_ms: 450,
			player_ready_ms: 1500,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
	pub width: f32,
	pub height: f32,
}

impl Default for WindowSettings {
	fn default() -> Self {
		Self {
			width: 1280.0,
			height: 720.0,
		}
	}
}

impl Settings {
	pub fn default_path() -> Option<PathBuf> {
		ProjectDirs::from("", "", "showreel").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
	}

	pub fn from_toml(content: &str) -> Result<Self> {
		toml::from_str(content).map_err(|e| Error::Settings(format!("settings parse error: {e}")))
	}

	/// Load from `path`, falling back to defaults when absent or unreadable
	pub fn load_or_default(path: Option<&Path>) -> Self {
		let Some(path) = path else {
			return Self::default();
		};

		match std::fs::read_to_string(path) {
			Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
				log::warn!("[Settings] {}: {}; using defaults", path.display(), e);
				Self::default()
			}),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				log::info!("[Settings] No settings at {}; using defaults", path.display());
				Self::default()
			}
			Err(e) => {
				log::warn!("[Settings] Failed to read {}: {}", path.display(), e);
				Self::default()
			}
		}
	}

	pub fn catalog(&self) -> Result<Catalog> {
		match &self.catalog_path {
			Some(path) => Catalog::load(path),
			None => Ok(Catalog::builtin()),
		}
	}
}
