//! Key → schema registry for named configurations.
//!
//! The mapping is populated once at startup and frozen before the server
//! starts serving; lookups fail closed on unknown keys.

use std::collections::HashMap;

use crate::config::types::{ChannelOptions, ChapterOptions, MetadataConfiguration, NamedConfig};
use crate::prelude::*;

/// Schema tag for a registered configuration key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKind {
	Metadata,
	Chapters,
	Channels,
}

impl ConfigKind {
	/// Deserializes a raw payload into the schema this tag names.
	pub fn decode(self, raw: &[u8]) -> Result<NamedConfig, serde_json::Error> {
		Ok(match self {
			ConfigKind::Metadata => NamedConfig::Metadata(serde_json::from_slice::<MetadataConfiguration>(raw)?),
			ConfigKind::Chapters => NamedConfig::Chapters(serde_json::from_slice::<ChapterOptions>(raw)?),
			ConfigKind::Channels => NamedConfig::Channels(serde_json::from_slice::<ChannelOptions>(raw)?),
		})
	}
}

/// Mutable registry used during app initialization
pub struct ConfigRegistry {
	kinds: HashMap<Box<str>, ConfigKind>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self { kinds: HashMap::new() }
	}

	/// Register a configuration key with its schema kind
	pub fn register(&mut self, key: &str, kind: ConfigKind) -> MdResult<()> {
		if self.kinds.contains_key(key) {
			return Err(Error::Internal(format!("Configuration key '{}' is already registered", key)));
		}

		debug!("Registering configuration key: {}", key);
		self.kinds.insert(key.into(), kind);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenConfigRegistry {
		info!("Freezing configuration registry with {} keys", self.kinds.len());
		FrozenConfigRegistry { kinds: self.kinds }
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry stored in AppState
pub struct FrozenConfigRegistry {
	kinds: HashMap<Box<str>, ConfigKind>,
}

impl FrozenConfigRegistry {
	/// Resolve a key to its registered schema kind; fails closed.
	pub fn resolve(&self, key: &str) -> MdResult<ConfigKind> {
		self.kinds.get(key).copied().ok_or_else(|| Error::UnknownConfigKey(key.into()))
	}

	/// List all registered keys
	pub fn list(&self) -> impl Iterator<Item = (&str, ConfigKind)> {
		self.kinds.iter().map(|(key, kind)| (key.as_ref(), *kind))
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

// vim: ts=4
