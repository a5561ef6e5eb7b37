//! Medley is an open-source, self-hosted media server.
//!
//! This crate contains the server side of the configuration-management
//! subsystem:
//!
//! - a typed named-configuration store (string key resolved to a schema
//!   registered at startup)
//! - freshness-fingerprint caching for the configuration endpoints
//! - the `/System/Configuration` service facade

#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod prelude;
pub mod routes;

pub use crate::core::app::{App, AppBuilderOpts, AppState};

// vim: ts=4
