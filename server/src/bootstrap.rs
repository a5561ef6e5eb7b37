//! Bootstrap module: configuration-registry setup and app-state assembly

use std::sync::Arc;

use medley_types::config_adapter::ConfigAdapter;

use crate::config::registry::{ConfigKind, ConfigRegistry};
use crate::config::store::ConfigStore;
use crate::config::types::default_providers;
use crate::core::app::{AppBuilderOpts, AppState};
use crate::prelude::*;

/// Register all named-configuration keys
///
/// The key → schema mapping is fixed here; there is no runtime registration.
pub fn register_configs(registry: &mut ConfigRegistry) -> MdResult<()> {
	registry.register("metadata", ConfigKind::Metadata)?;
	registry.register("chapters", ConfigKind::Chapters)?;
	registry.register("channels", ConfigKind::Channels)?;

	Ok(())
}

/// Build the app state: freeze the registry, load (or initialize) the
/// persisted application configuration.
pub async fn build_state(
	opts: AppBuilderOpts,
	adapter: Arc<dyn ConfigAdapter>,
) -> MdResult<App> {
	let mut registry = ConfigRegistry::new();
	register_configs(&mut registry)?;
	let registry = Arc::new(registry.freeze());

	let store = ConfigStore::load(registry.clone(), adapter).await?;

	Ok(Arc::new(AppState {
		opts,
		config_registry: registry,
		config_store: store,
		metadata_providers: default_providers(),
		started_at: Timestamp::now(),
	}))
}

// vim: ts=4
