use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::config;
use crate::core::route_auth::{optional_auth, require_auth};
use crate::prelude::*;

pub fn init(state: App) -> Router {
	let protected_router = Router::new()
		.route(
			"/System/Configuration/MetadataOptions/Default",
			get(config::handler::get_default_metadata_options),
		)
		.route("/System/Configuration/MetadataPlugins", get(config::handler::get_metadata_plugins))
		.route(
			"/System/Configuration/{key}",
			get(config::handler::get_named_configuration)
				.post(config::handler::post_named_configuration),
		)
		.layer(middleware::from_fn_with_state(state.clone(), require_auth));

	// GET is public; POST enforces auth through the Auth extractor
	let public_router = Router::new()
		.route(
			"/System/Configuration",
			get(config::handler::get_configuration).post(config::handler::post_configuration),
		)
		.route_layer(middleware::from_fn_with_state(state.clone(), optional_auth));

	Router::new()
		.merge(public_router)
		.merge(protected_router)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

// vim: ts=4
