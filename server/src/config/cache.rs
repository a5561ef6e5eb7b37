//! Freshness-fingerprint cache gate.
//!
//! A fingerprint is a SHA-256 over a resource's identity path concatenated
//! with its modification ticks, surfaced as an HTTP `ETag`. When the
//! requester already holds the current fingerprint (`If-None-Match`), the
//! response body is never produced: serialization cost is only paid once
//! freshness is confirmed stale.

use axum::{
	Json,
	http::{StatusCode, header},
	response::{IntoResponse, Response},
};
use base64::Engine;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::prelude::*;

/// Identity of a persisted (or synthetic) resource for fingerprinting.
#[derive(Clone, Debug)]
pub struct ResourceStamp {
	pub path: Box<str>,
	pub modified_at: Timestamp,
}

impl ResourceStamp {
	/// Stamp for a derived query with no backing file. Ticks are the
	/// process start time, so validity is bounded by process lifetime.
	pub fn synthetic(path: &str, started_at: Timestamp) -> Self {
		Self { path: path.into(), modified_at: started_at }
	}
}

/// Content fingerprint of a resource: hash(path + modification ticks).
pub fn fingerprint(stamp: &ResourceStamp) -> Box<str> {
	let mut hasher = Sha256::new();
	hasher.update(stamp.path.as_bytes());
	hasher.update(stamp.modified_at.to_string().as_bytes());

	base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hasher.finalize()).into()
}

/// Serves `producer`'s output under fingerprint validation.
///
/// The producer runs only when the requester's validator does not match
/// the current fingerprint.
pub fn respond_cached<T, F>(
	stamp: &ResourceStamp,
	if_none_match: Option<&str>,
	producer: F,
) -> MdResult<Response>
where
	T: Serialize,
	F: FnOnce() -> MdResult<T>,
{
	let etag = format!("\"{}\"", fingerprint(stamp));

	if let Some(validator) = if_none_match {
		if validator.trim() == etag {
			debug!("Fingerprint match for {}, skipping response generation", stamp.path);
			return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
		}
	}

	let body = producer()?;
	Ok(([(header::ETAG, etag)], Json(body)).into_response())
}

// vim: ts=4
