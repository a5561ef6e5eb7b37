//! Configuration store tests
//!
//! Exercise the store against the filesystem adapter with temporary
//! storage isolation.

use std::sync::Arc;

use tempfile::TempDir;

use medley::bootstrap::register_configs;
use medley::config::cache::fingerprint;
use medley::config::registry::ConfigRegistry;
use medley::config::store::{ConfigStore, SYSTEM_CONFIG};
use medley::config::types::{ApplicationConfiguration, NamedConfig};
use medley_config_adapter_fs::ConfigAdapterFs;
use medley_types::error::Error;

async fn create_test_store() -> (ConfigStore, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = Arc::new(
		ConfigAdapterFs::new(temp_dir.path().into()).await.expect("Failed to create adapter"),
	);

	let mut registry = ConfigRegistry::new();
	register_configs(&mut registry).expect("Failed to register configs");

	let store = ConfigStore::load(Arc::new(registry.freeze()), adapter)
		.await
		.expect("Failed to load store");
	(store, temp_dir)
}

#[tokio::test]
async fn test_replace_and_get_round_trip() {
	let (store, _temp) = create_test_store().await;

	let mut config = ApplicationConfiguration::default();
	config.server_name = "Living Room".into();
	config.preferred_metadata_language = "de".into();

	let candidate = serde_json::to_value(&config).expect("Failed to serialize");
	store.replace_configuration(candidate).await.expect("Failed to replace");

	assert_eq!(*store.configuration(), config);
}

#[tokio::test]
async fn test_replace_canonicalizes_envelope_fields() {
	let (store, _temp) = create_test_store().await;

	// A structurally-compatible envelope with auxiliary fields
	let candidate = serde_json::json!({
		"ServerName": "Den",
		"RequestId": "abc-123",
		"EnvelopeVersion": 2,
	});
	store.replace_configuration(candidate).await.expect("Failed to replace");

	let stored = serde_json::to_value(&*store.configuration()).expect("Failed to serialize");
	assert_eq!(stored["ServerName"], "Den");
	assert!(stored.get("RequestId").is_none());
	assert!(stored.get("EnvelopeVersion").is_none());
}

#[tokio::test]
async fn test_replace_survives_reload() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = Arc::new(
		ConfigAdapterFs::new(temp_dir.path().into()).await.expect("Failed to create adapter"),
	);

	let registry = {
		let mut registry = ConfigRegistry::new();
		register_configs(&mut registry).expect("Failed to register configs");
		Arc::new(registry.freeze())
	};

	{
		let store = ConfigStore::load(registry.clone(), adapter.clone())
			.await
			.expect("Failed to load store");
		let candidate = serde_json::json!({ "ServerName": "Attic" });
		store.replace_configuration(candidate).await.expect("Failed to replace");
	}

	let store = ConfigStore::load(registry, adapter).await.expect("Failed to reload store");
	assert_eq!(&*store.configuration().server_name, "Attic");
}

#[tokio::test]
async fn test_unknown_key_fails_closed() {
	let (store, _temp) = create_test_store().await;

	let err = store.named_configuration("bogus").await.unwrap_err();
	assert!(matches!(err, Error::UnknownConfigKey(_)));

	let err = store.save_named_configuration("bogus", b"{}").await.unwrap_err();
	assert!(matches!(err, Error::UnknownConfigKey(_)));
}

#[tokio::test]
async fn test_named_configuration_absent_is_load_error() {
	let (store, _temp) = create_test_store().await;

	let err = store.named_configuration("chapters").await.unwrap_err();
	assert!(matches!(err, Error::ConfigLoad(_)));
}

#[tokio::test]
async fn test_named_save_and_get_round_trip() {
	let (store, _temp) = create_test_store().await;

	let raw = br#"{"EnableMovieChapterImageExtraction": true}"#;
	store.save_named_configuration("chapters", raw).await.expect("Failed to save");

	match store.named_configuration("chapters").await.expect("Failed to get") {
		NamedConfig::Chapters(options) => {
			assert!(options.enable_movie_chapter_image_extraction);
			assert!(!options.extract_during_library_scan);
		}
		other => panic!("wrong schema returned: {:?}", other),
	}
}

#[tokio::test]
async fn test_schema_mismatch_leaves_prior_value() {
	let (store, _temp) = create_test_store().await;

	let raw = br#"{"EnableMovieChapterImageExtraction": true}"#;
	store.save_named_configuration("chapters", raw).await.expect("Failed to save");

	// Wrong shape for the registered schema
	let err = store
		.save_named_configuration("chapters", br#"{"PreferredStreamingWidth": 1920}"#)
		.await
		.unwrap_err();
	assert!(matches!(err, Error::SchemaMismatch(_)));

	match store.named_configuration("chapters").await.expect("Failed to get") {
		NamedConfig::Chapters(options) => assert!(options.enable_movie_chapter_image_extraction),
		other => panic!("wrong schema returned: {:?}", other),
	}
}

#[tokio::test]
async fn test_fingerprint_stable_until_write() {
	let (store, _temp) = create_test_store().await;

	let first = fingerprint(&store.resource_stamp(SYSTEM_CONFIG).await.expect("no stamp"));
	let second = fingerprint(&store.resource_stamp(SYSTEM_CONFIG).await.expect("no stamp"));
	assert_eq!(first, second);

	// Let the filesystem clock advance past its mtime resolution
	tokio::time::sleep(std::time::Duration::from_millis(20)).await;

	let candidate = serde_json::json!({ "ServerName": "Changed" });
	store.replace_configuration(candidate).await.expect("Failed to replace");

	let third = fingerprint(&store.resource_stamp(SYSTEM_CONFIG).await.expect("no stamp"));
	assert_ne!(first, third);
}

// vim: ts=4
