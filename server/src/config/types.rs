//! Configuration schema types.
//!
//! Wire field names are PascalCase to match the Medley HTTP API.

use serde::{Deserialize, Serialize};

// ApplicationConfiguration //
//**************************//

/// Global server settings. One instance per process, replaced as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplicationConfiguration {
	pub server_name: Box<str>,
	pub cache_path: Option<Box<str>>,
	pub metadata_path: Option<Box<str>>,
	pub preferred_metadata_language: Box<str>,
	pub metadata_country_code: Box<str>,
	pub enable_debug_level_logging: bool,
	pub library_monitor_delay_seconds: u32,
	pub save_local_meta: bool,
}

impl Default for ApplicationConfiguration {
	fn default() -> Self {
		Self {
			server_name: "Medley Server".into(),
			cache_path: None,
			metadata_path: None,
			preferred_metadata_language: "en".into(),
			metadata_country_code: "US".into(),
			enable_debug_level_logging: false,
			library_monitor_delay_seconds: 60,
			save_local_meta: false,
		}
	}
}

// Named configuration schemas //
//*****************************//

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct MetadataConfiguration {
	pub use_file_creation_time_for_date_added: bool,
	pub enable_tmdb_updates: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct ChapterOptions {
	pub enable_movie_chapter_image_extraction: bool,
	pub extract_during_library_scan: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct ChannelOptions {
	pub preferred_streaming_width: Option<u32>,
	pub max_download_age: Option<u32>,
	pub download_path: Option<Box<str>>,
}

/// A named-configuration payload, tagged with its registered schema.
///
/// Serializes untagged: responses carry the plain configuration object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NamedConfig {
	Metadata(MetadataConfiguration),
	Chapters(ChapterOptions),
	Channels(ChannelOptions),
}

// Derived read-only queries //
//***************************//

/// Default metadata options, served by the facade's derived-data query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetadataOptions {
	/// 0 means unlimited
	pub item_limit: u32,
	pub min_backdrop_width: u32,
	pub disabled_metadata_fetchers: Vec<Box<str>>,
	pub disabled_image_fetchers: Vec<Box<str>>,
}

impl Default for MetadataOptions {
	fn default() -> Self {
		Self {
			item_limit: 0,
			min_backdrop_width: 1280,
			disabled_metadata_fetchers: Vec::new(),
			disabled_image_fetchers: Vec::new(),
		}
	}
}

/// A metadata-provider descriptor registered with the server.
#[derive(Clone, Debug)]
pub struct MetadataProvider {
	pub name: Box<str>,
	pub item_type: Box<str>,
	pub plugin_type: Box<str>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataPlugin {
	pub name: Box<str>,
	#[serde(rename = "Type")]
	pub typ: Box<str>,
}

/// Plugins available for one item type; recomputed per query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataPluginSummary {
	pub item_type: Box<str>,
	pub plugins: Vec<MetadataPlugin>,
}

/// Provider descriptors shipped with the server build.
pub fn default_providers() -> Box<[MetadataProvider]> {
	fn provider(name: &str, item_type: &str, plugin_type: &str) -> MetadataProvider {
		MetadataProvider { name: name.into(), item_type: item_type.into(), plugin_type: plugin_type.into() }
	}

	Box::new([
		provider("TheMovieDb", "Movie", "MetadataFetcher"),
		provider("TheMovieDb", "Movie", "ImageFetcher"),
		provider("Screen Grabber", "Movie", "ImageFetcher"),
		provider("TheTVDB", "Series", "MetadataFetcher"),
		provider("TheTVDB", "Series", "ImageFetcher"),
		provider("MusicBrainz", "MusicAlbum", "MetadataFetcher"),
		provider("Local Images", "MusicAlbum", "ImageFetcher"),
	])
}

/// Groups provider descriptors into per-item-type summaries.
pub fn plugin_summaries(providers: &[MetadataProvider]) -> Vec<MetadataPluginSummary> {
	let mut summaries: Vec<MetadataPluginSummary> = Vec::new();

	for provider in providers {
		let plugin = MetadataPlugin { name: provider.name.clone(), typ: provider.plugin_type.clone() };
		match summaries.iter_mut().find(|s| s.item_type == provider.item_type) {
			Some(summary) => summary.plugins.push(plugin),
			None => summaries.push(MetadataPluginSummary {
				item_type: provider.item_type.clone(),
				plugins: vec![plugin],
			}),
		}
	}

	summaries
}

// vim: ts=4
