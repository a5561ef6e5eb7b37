const TOKEN_EXPIRE: u64 = 8; /* hours */

use axum::{
	body::Body,
	extract::State,
	http::{Request, response::Response},
	middleware::Next,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::time;

use crate::core::extract::Auth;
use crate::prelude::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthToken<S> {
	pub sub: S,
	pub exp: u64,
}

pub fn generate_access_token(secret: &str, user_id: &str) -> MdResult<Box<str>> {
	let expire = time::SystemTime::now()
		.duration_since(time::UNIX_EPOCH)
		.map_err(|_| Error::PermissionDenied)?
		.as_secs() + 3600 * TOKEN_EXPIRE;

	let token = jsonwebtoken::encode(
		&jsonwebtoken::Header::new(Algorithm::HS256),
		&AuthToken::<&str> { sub: user_id, exp: expire },
		&jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
	)
	.map_err(|_| Error::PermissionDenied)?
	.into();

	Ok(token)
}

fn validate_token(secret: &str, token: &str) -> MdResult<Auth> {
	let decoding_key = DecodingKey::from_secret(secret.as_bytes());

	let token_data = decode::<AuthToken<Box<str>>>(
		token,
		&decoding_key,
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|_| Error::PermissionDenied)?;

	Ok(Auth { user_id: token_data.claims.sub })
}

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> MdResult<Response<Body>> {
	let auth_header = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::PermissionDenied)?;

	if !auth_header.starts_with("Bearer ") {
		return Err(Error::PermissionDenied);
	}

	let token = &auth_header[7..];
	let claims = validate_token(&app.opts.api_secret, token)?;

	req.extensions_mut().insert(claims);

	Ok(next.run(req).await)
}

pub async fn optional_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> MdResult<Response<Body>> {
	if let Some(auth_header) = req.headers().get("Authorization").and_then(|h| h.to_str().ok()) {
		if auth_header.starts_with("Bearer ") {
			let token = &auth_header[7..];
			if let Ok(claims) = validate_token(&app.opts.api_secret, token) {
				req.extensions_mut().insert(claims);
			}
		}
	}

	Ok(next.run(req).await)
}

// vim: ts=4
