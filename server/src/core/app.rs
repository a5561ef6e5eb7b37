//! App state type

use std::{path::Path, sync::Arc};

use crate::config::registry::FrozenConfigRegistry;
use crate::config::store::ConfigStore;
use crate::config::types::MetadataProvider;
use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub config_registry: Arc<FrozenConfigRegistry>,
	pub config_store: ConfigStore,
	/// Registered metadata-provider descriptors, fixed at startup
	pub metadata_providers: Box<[MetadataProvider]>,
	/// Synthetic freshness stamp for derived queries with no backing file
	pub started_at: Timestamp,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub data_dir: Box<Path>,
	/// HS256 secret for API access tokens
	pub api_secret: Box<str>,
}

// vim: ts=4
