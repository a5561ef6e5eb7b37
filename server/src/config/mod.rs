//! Configuration subsystem: typed named-configuration store, fingerprint
//! cache gate, and the `/System/Configuration` service facade.

pub mod cache;
pub mod handler;
pub mod registry;
pub mod store;
pub mod types;

pub use registry::{ConfigKind, ConfigRegistry, FrozenConfigRegistry};
pub use store::{ConfigStore, SYSTEM_CONFIG};

// vim: ts=4
