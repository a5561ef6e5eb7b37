//! Home-screen settings component for Medley clients.
//!
//! Maintains the three editable pieces of a user's home-screen setup:
//!
//! - the order of library views (single-step moves only)
//! - which folders feed the "latest items" row
//! - the seven assignable home-section slots
//!
//! and submits the merged result back as one user-configuration update
//! through the [`pipeline::HomeScreenSettings`] save pipeline.

pub mod api_client;
pub mod latest_items;
pub mod pipeline;
pub mod refresh;
pub mod sections;
pub mod view_order;

pub use api_client::ApiClient;
pub use pipeline::{HomeScreenForm, HomeScreenSettings, PipelineState};
pub use refresh::{SettingsBus, SettingsEvent};

// vim: ts=4
