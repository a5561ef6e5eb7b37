use std::{env, path::PathBuf, sync::Arc};

use tracing_subscriber::EnvFilter;

use medley::core::app::AppBuilderOpts;
use medley_config_adapter_fs::ConfigAdapterFs;
use medley_types::prelude::*;

#[tokio::main]
async fn main() -> MdResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
		.init();

	let listen = env::var("MEDLEY_LISTEN").unwrap_or_else(|_| "0.0.0.0:8096".to_string());
	let data_dir = PathBuf::from(env::var("MEDLEY_DATA_DIR").unwrap_or_else(|_| "./data".to_string()));
	let api_secret = env::var("MEDLEY_API_SECRET")
		.map_err(|_| Error::Internal("MEDLEY_API_SECRET must be set".to_string()))?;

	let opts = AppBuilderOpts {
		listen: listen.into(),
		data_dir: data_dir.into(),
		api_secret: api_secret.into(),
	};

	let adapter = Arc::new(ConfigAdapterFs::new(opts.data_dir.join("config").into()).await?);
	let app = medley::bootstrap::build_state(opts, adapter).await?;

	let router = medley::routes::init(app.clone());

	info!("Listening on {}", app.opts.listen);
	let listener = tokio::net::TcpListener::bind(&*app.opts.listen).await?;
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
