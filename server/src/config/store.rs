//! Configuration store: the application-configuration singleton and the
//! named configurations resolved through the key registry.

use parking_lot::RwLock;
use std::sync::Arc;

use medley_types::config_adapter::ConfigAdapter;

use crate::config::cache::ResourceStamp;
use crate::config::registry::FrozenConfigRegistry;
use crate::config::types::{ApplicationConfiguration, NamedConfig};
use crate::prelude::*;

/// Resource name of the application-configuration singleton
pub const SYSTEM_CONFIG: &str = "system";

pub struct ConfigStore {
	registry: Arc<FrozenConfigRegistry>,
	adapter: Arc<dyn ConfigAdapter>,
	current: RwLock<Arc<ApplicationConfiguration>>,
	/// Serializes persist operations within this process; concurrent
	/// writers across processes remain last-write-wins.
	write_lock: tokio::sync::Mutex<()>,
}

impl ConfigStore {
	/// Loads the persisted application configuration, persisting the
	/// default if the resource has never been written.
	pub async fn load(
		registry: Arc<FrozenConfigRegistry>,
		adapter: Arc<dyn ConfigAdapter>,
	) -> MdResult<Self> {
		let current = match adapter.read_config(SYSTEM_CONFIG).await? {
			Some(raw) => serde_json::from_slice::<ApplicationConfiguration>(&raw)
				.map_err(|e| Error::ConfigLoad(format!("persisted application configuration: {}", e)))?,
			None => {
				info!("No persisted application configuration, writing defaults");
				let config = ApplicationConfiguration::default();
				let data = serde_json::to_vec_pretty(&config)
					.map_err(|e| Error::Internal(format!("Failed to serialize configuration: {}", e)))?;
				adapter.write_config(SYSTEM_CONFIG, &data).await?;
				config
			}
		};

		Ok(Self {
			registry,
			adapter,
			current: RwLock::new(Arc::new(current)),
			write_lock: tokio::sync::Mutex::new(()),
		})
	}

	/// Current application configuration; no side effects.
	pub fn configuration(&self) -> Arc<ApplicationConfiguration> {
		self.current.read().clone()
	}

	/// Atomically replaces the application configuration.
	///
	/// The candidate arrives as a generic JSON envelope; coercing it into
	/// the canonical schema drops any auxiliary envelope fields before
	/// anything is persisted.
	pub async fn replace_configuration(&self, candidate: serde_json::Value) -> MdResult<()> {
		let config = serde_json::from_value::<ApplicationConfiguration>(candidate)
			.map_err(|e| Error::SchemaMismatch(format!("application configuration: {}", e)))?;
		let data = serde_json::to_vec_pretty(&config)
			.map_err(|e| Error::Internal(format!("Failed to serialize configuration: {}", e)))?;

		let _guard = self.write_lock.lock().await;
		self.adapter.write_config(SYSTEM_CONFIG, &data).await?;
		*self.current.write() = Arc::new(config);

		info!("Application configuration replaced");
		Ok(())
	}

	/// Loads a named configuration, deserialized into its registered schema.
	pub async fn named_configuration(&self, key: &str) -> MdResult<NamedConfig> {
		let kind = self.registry.resolve(key)?;

		let raw = self
			.adapter
			.read_config(key)
			.await?
			.ok_or_else(|| Error::ConfigLoad(format!("no persisted configuration for '{}'", key)))?;

		kind.decode(&raw).map_err(|e| Error::ConfigLoad(format!("configuration '{}': {}", key, e)))
	}

	/// Deserializes `raw` against the schema registered for `key` and
	/// persists the canonical typed result. No partial persist: a payload
	/// that cannot be coerced leaves the prior value untouched.
	pub async fn save_named_configuration(&self, key: &str, raw: &[u8]) -> MdResult<NamedConfig> {
		let kind = self.registry.resolve(key)?;

		let config = kind
			.decode(raw)
			.map_err(|e| Error::SchemaMismatch(format!("configuration '{}': {}", key, e)))?;
		let data = serde_json::to_vec_pretty(&config)
			.map_err(|e| Error::Internal(format!("Failed to serialize configuration: {}", e)))?;

		let _guard = self.write_lock.lock().await;
		self.adapter.write_config(key, &data).await?;

		info!("Named configuration '{}' saved", key);
		Ok(config)
	}

	/// Freshness stamp of a persisted configuration resource.
	pub async fn resource_stamp(&self, name: &str) -> MdResult<ResourceStamp> {
		Ok(ResourceStamp {
			path: self.adapter.config_path(name),
			modified_at: self.adapter.modified_at(name).await?,
		})
	}
}

impl std::fmt::Debug for ConfigStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConfigStore").field("registry_len", &self.registry.len()).finish()
	}
}

// vim: ts=4
