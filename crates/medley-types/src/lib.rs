//! Shared types, adapter traits, and error types for the Medley media server.
//!
//! This crate contains the foundational types shared between the server
//! crate, the client-side feature crates, and the adapter implementations.
//! Keeping them in a separate crate lets adapters compile in parallel with
//! the server's feature modules.

pub mod config_adapter;
pub mod error;
pub mod prelude;
pub mod types;
pub mod user;

// vim: ts=4
