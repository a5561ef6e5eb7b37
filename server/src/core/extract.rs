use axum::{extract::FromRequestParts, http::request::Parts};

use crate::prelude::*;

// Extractors //
//************//

// Auth //
//******//
#[derive(Clone, Debug)]
pub struct Auth {
	pub user_id: Box<str>,
}

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::PermissionDenied)
		}
	}
}

// vim: ts=4
