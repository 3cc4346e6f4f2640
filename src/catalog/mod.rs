//! Project catalog: the ordered, read-only list of slides.
//!
//! Records are keyed by their id (the project name) in an [`IndexMap`], so
//! the carousel order and the id lookup done by the visibility resolver
//! share one structure.

use crate::error::{Error, Result};
use crate::types::MediaKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

const EMBED_SHARE_PREFIX: &str = "https://youtu.be/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
	#[serde(alias = "name")]
	pub id: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub media_kind: MediaKind,
	#[serde(default)]
	pub media_source: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub alt: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub push_tag: Option<String>,
	#[serde(default)]
	pub link: Option<String>,
}

impl ProjectRecord {
	/// Video id for an embedded player, from either a share URL or a bare id
	pub fn embed_video_id(&self) -> Option<&str> {
		if self.media_kind != MediaKind::EmbeddedPlayer {
			return None;
		}
		let source = self.media_source.as_deref()?;
		let id = source.strip_prefix(EMBED_SHARE_PREFIX).unwrap_or(source);
		let id = id.split(['?', '&']).next().unwrap_or(id);
		(!id.is_empty()).then_some(id)
	}
}

#[derive(Deserialize)]
struct CatalogFile {
	#[serde(default, alias = "project")]
	projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
	projects: IndexMap<String, ProjectRecord>,
}

impl Catalog {
	pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
		let mut projects = IndexMap::with_capacity(records.len());
		for record in records {
			Self::validate(&record)?;
			if projects.contains_key(&record.id) {
				return Err(Error::Catalog(format!("duplicate project id '{}'", record.id)));
			}
			projects.insert(record.id.clone(), record);
		}
		log::debug!("[Catalog] {} projects", projects.len());
		Ok(Self { projects })
	}

	fn validate(record: &ProjectRecord) -> Result<()> {
		if record.id.trim().is_empty() {
			return Err(Error::Catalog("project id must not be empty".into()));
		}
		match record.media_kind {
			MediaKind::None => Ok(()),
			MediaKind::NativeVideo if record.media_source.is_none() => Err(Error::Catalog(
				format!("project '{}' is a video without a media source", record.id),
			)),
			MediaKind::EmbeddedPlayer if record.embed_video_id().is_none() => Err(Error::Catalog(
				format!("project '{}' has no embeddable video id", record.id),
			)),
			_ => Ok(()),
		}
	}

	/// Parse a catalog from a TOML document with `[[projects]]` tables
	pub fn from_toml(content: &str) -> Result<Self> {
		let file: CatalogFile = toml::from_str(content)
			.map_err(|e| Error::Catalog(format!("catalog parse error: {e}")))?;
		Self::new(file.projects)
	}

	/// Parse a catalog from JSON: either `{"projects": [...]}` or a bare array
	pub fn from_json(content: &str) -> Result<Self> {
		let records = match serde_json::from_str::<CatalogFile>(content) {
			Ok(file) => file.projects,
			Err(_) => serde_json::from_str::<Vec<ProjectRecord>>(content)
				.map_err(|e| Error::Catalog(format!("catalog parse error: {e}")))?,
		};
		Self::new(records)
	}

	/// Load a catalog file, picking the format from its extension
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)?;
		let catalog = match path.extension().and_then(|ext| ext.to_str()) {
			Some("json") => Self::from_json(&content)?,
			_ => Self::from_toml(&content)?,
		};
		log::info!(
			"[Catalog] Loaded {} projects from {}",
			catalog.len(),
			path.display()
		);
		Ok(catalog)
	}

	/// Catalog compiled into the binary
	pub fn builtin() -> Self {
		let records = vec![
			ProjectRecord {
				id: "UNFAMILIAR".into(),
				description: "Unfamiliar is a relaxing fantasy adventure game where you take the form of a cat-witch who sets out to acquire magic ingredients from storybook worlds to craft items and create enchanting costumes.".into(),
				media_kind: MediaKind::NativeVideo,
				media_source: Some("https://steamcdn-a.akamaihd.net/steam/apps/256763113/movie480.webm?t=1569734943".into()),
				image: None,
				alt: None,
				tags: vec!["Game".into(), "Unity3D".into(), "Steam".into()],
				push_tag: Some("Latest".into()),
				link: None,
			},
			ProjectRecord {
				id: "GOOGLESHEETS UNITY INTERGRATION".into(),
				description: "GoogleSheets Unity Intergration is a tool I created during my time at ManaTea. The tool creates instances of objects from rows in a google sheet and pouplates the values of those objects with from colunms in the spreadsheet".into(),
				media_kind: MediaKind::None,
				media_source: None,
				image: Some("https://jezzalittle.github.io/img/GoogleSheets/GoogleSheets.gif".into()),
				alt: None,
				tags: vec!["Google Sheets".into(), "Unity3D".into()],
				push_tag: None,
				link: None,
			},
			ProjectRecord {
				id: "DIVIDE".into(),
				description: "Divide is a turn-based strategy game set in a cyberpunk dystopia whilst moving along a hex grid.".into(),
				media_kind: MediaKind::EmbeddedPlayer,
				media_source: Some("https://youtu.be/nPl6idlNnsc".into()),
				image: None,
				alt: None,
				tags: vec!["Game".into(), "Unity3D".into(), "Steam".into()],
				push_tag: Some("Latest".into()),
				link: None,
			},
			ProjectRecord {
				id: "OPENGL ENGINE".into(),
				description: "OpenGL Engine is the last C++ project made at AIE, it uses OpenGL to draw OBJ to the Screen.".into(),
				media_kind: MediaKind::None,
				media_source: None,
				image: Some("https://jezzalittle.github.io/img/OpenGL/OpenGL.gif".into()),
				alt: None,
				tags: vec!["C++".into(), "GLSL".into()],
				push_tag: None,
				link: None,
			},
		];
		let projects = records.into_iter().map(|r| (r.id.clone(), r)).collect();
		Self { projects }
	}

	pub fn len(&self) -> usize {
		self.projects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.projects.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
		self.projects.get_index(index).map(|(_, record)| record)
	}

	/// Position of the project with `id` in carousel order
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.projects.get_index_of(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (usize, &ProjectRecord)> {
		self.projects.values().enumerate()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(id: &str) -> ProjectRecord {
		ProjectRecord {
			id: id.into(),
			description: String::new(),
			media_kind: MediaKind::None,
			media_source: None,
			image: None,
			alt: None,
			tags: Vec::new(),
			push_tag: None,
			link: None,
		}
	}

	#[test]
	fn builtin_catalog_keeps_order_and_media_kinds() {
		let catalog = Catalog::builtin();
		assert_eq!(catalog.len(), 4);
		assert_eq!(catalog.index_of("DIVIDE"), Some(2));
		let kinds: Vec<MediaKind> = catalog.iter().map(|(_, p)| p.media_kind).collect();
		assert_eq!(
			kinds,
			vec![
				MediaKind::NativeVideo,
				MediaKind::None,
				MediaKind::EmbeddedPlayer,
				MediaKind::None
			]
		);
		assert_eq!(catalog.get(2).and_then(|p| p.embed_video_id()), Some("nPl6idlNnsc"));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = Catalog::new(vec![record("A"), record("A")]).unwrap_err();
		assert!(err.to_string().contains("duplicate project id 'A'"));
	}

	#[test]
	fn video_without_source_is_rejected() {
		let mut video = record("A");
		video.media_kind = MediaKind::NativeVideo;
		assert!(Catalog::new(vec![video]).is_err());
	}

	#[test]
	fn embed_id_accepts_bare_ids_and_strips_query() {
		let mut player = record("A");
		player.media_kind = MediaKind::EmbeddedPlayer;
		player.media_source = Some("abc123".into());
		assert_eq!(player.embed_video_id(), Some("abc123"));
		player.media_source = Some("https://youtu.be/xyz?t=10".into());
		assert_eq!(player.embed_video_id(), Some("xyz"));
	}

	#[test]
	fn parses_toml_with_name_alias() {
		let catalog = Catalog::from_toml(
			r#"
			[[projects]]
			name = "FIRST"
			description = "one"
			media_kind = "native_video"
			media_source = "first.webm"
			tags = ["Game"]

			[[projects]]
			id = "SECOND"
			image = "second.gif"
			alt = "Spinning teapot"
			"#,
		)
		.unwrap();
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.get(0).map(|p| p.id.as_str()), Some("FIRST"));
		assert_eq!(catalog.get(1).map(|p| p.media_kind), Some(MediaKind::None));
		assert_eq!(
			catalog.get(1).and_then(|p| p.alt.as_deref()),
			Some("Spinning teapot")
		);
	}

	#[test]
	fn parses_json_array() {
		let catalog =
			Catalog::from_json(r#"[{"name": "A"}, {"name": "B", "push_tag": "Latest"}]"#).unwrap();
		assert_eq!(catalog.index_of("B"), Some(1));
		assert_eq!(catalog.get(1).and_then(|p| p.push_tag.as_deref()), Some("Latest"));
	}

	#[test]
	fn load_picks_format_from_extension() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("catalog.json");
		std::fs::write(&path, r#"{"projects": [{"id": "ONLY"}]}"#).unwrap();
		let catalog = Catalog::load(&path).unwrap();
		assert_eq!(catalog.len(), 1);

		let missing = Catalog::load(&dir.path().join("missing.toml"));
		assert!(matches!(missing, Err(Error::Io { .. })));
	}
}
