//! Persistence seam for configuration resources.
//!
//! The store never touches files or databases directly; it reads and writes
//! opaque byte payloads through this adapter and consults the resource's
//! modification stamp for freshness fingerprinting.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// Reads the persisted payload of a configuration resource.
	/// Returns `Ok(None)` if the resource has never been written.
	async fn read_config(&self, name: &str) -> MdResult<Option<Box<[u8]>>>;

	/// Persists a configuration resource atomically.
	///
	/// A successful write must advance the resource's modification stamp:
	/// a `modified_at` call after the write must observe a stamp greater
	/// than any stamp observed before it.
	async fn write_config(&self, name: &str, data: &[u8]) -> MdResult<()>;

	/// Modification stamp of a persisted resource, in ticks.
	/// Fails with `Error::NotFound` if the resource does not exist.
	async fn modified_at(&self, name: &str) -> MdResult<Timestamp>;

	/// Stable identity string of the resource (used in cache fingerprints).
	fn config_path(&self, name: &str) -> Box<str>;
}

// vim: ts=4
