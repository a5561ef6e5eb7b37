//! Configuration service handlers

use axum::{
	Json,
	body::Bytes,
	extract::{Path, State},
	http::{HeaderMap, StatusCode, header},
	response::Response,
};

use crate::config::cache::{self, ResourceStamp};
use crate::config::store::SYSTEM_CONFIG;
use crate::config::types::{self, MetadataOptions, NamedConfig};
use crate::core::extract::Auth;
use crate::prelude::*;

fn if_none_match(headers: &HeaderMap) -> Option<&str> {
	headers.get(header::IF_NONE_MATCH).and_then(|h| h.to_str().ok())
}

/// GET /System/Configuration - Get the application configuration
///
/// Cache-validated by the fingerprint of the configuration resource.
pub async fn get_configuration(
	State(app): State<App>,
	headers: HeaderMap,
) -> MdResult<Response> {
	let stamp = app.config_store.resource_stamp(SYSTEM_CONFIG).await?;

	cache::respond_cached(&stamp, if_none_match(&headers), || {
		Ok(app.config_store.configuration().as_ref().clone())
	})
}

/// POST /System/Configuration - Replace the application configuration
pub async fn post_configuration(
	State(app): State<App>,
	_auth: Auth,
	Json(candidate): Json<serde_json::Value>,
) -> MdResult<StatusCode> {
	app.config_store.replace_configuration(candidate).await?;
	Ok(StatusCode::NO_CONTENT)
}

/// GET /System/Configuration/:key - Get a named configuration
pub async fn get_named_configuration(
	State(app): State<App>,
	Path(key): Path<String>,
) -> MdResult<Json<NamedConfig>> {
	Ok(Json(app.config_store.named_configuration(&key).await?))
}

/// POST /System/Configuration/:key - Save a named configuration
///
/// The raw body is deserialized against the schema registered for `key`.
pub async fn post_named_configuration(
	State(app): State<App>,
	Path(key): Path<String>,
	body: Bytes,
) -> MdResult<StatusCode> {
	app.config_store.save_named_configuration(&key, &body).await?;
	Ok(StatusCode::NO_CONTENT)
}

/// GET /System/Configuration/MetadataOptions/Default
///
/// Derived query with no backing file: cached against a synthetic stamp
/// valid for the process lifetime.
pub async fn get_default_metadata_options(
	State(app): State<App>,
	headers: HeaderMap,
) -> MdResult<Response> {
	let stamp = ResourceStamp::synthetic("derived/metadata-options-default", app.started_at);

	cache::respond_cached(&stamp, if_none_match(&headers), || Ok(MetadataOptions::default()))
}

/// GET /System/Configuration/MetadataPlugins - Enumerate metadata plugins
pub async fn get_metadata_plugins(
	State(app): State<App>,
	headers: HeaderMap,
) -> MdResult<Response> {
	let stamp = ResourceStamp::synthetic("derived/metadata-plugins", app.started_at);

	cache::respond_cached(&stamp, if_none_match(&headers), || {
		Ok(types::plugin_summaries(&app.metadata_providers))
	})
}

// vim: ts=4
