use axum::{Json, http::StatusCode, response::IntoResponse};

pub type MdResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The configuration key has no registered schema
	UnknownConfigKey(Box<str>),
	/// Persisted configuration data is absent or corrupt
	ConfigLoad(String),
	/// A submitted payload cannot be coerced into the registered schema
	SchemaMismatch(String),
	/// A client-side submit failed in flight
	Submit(String),

	NotFound,
	PermissionDenied,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::UnknownConfigKey(key) => write!(f, "unknown configuration key: {}", key),
			Error::ConfigLoad(msg) => write!(f, "configuration load failed: {}", msg),
			Error::SchemaMismatch(msg) => write!(f, "schema mismatch: {}", msg),
			Error::Submit(msg) => write!(f, "submit failed: {}", msg),
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

#[derive(serde::Serialize)]
struct ErrorBody {
	error: String,
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match &self {
			Error::UnknownConfigKey(_) | Error::SchemaMismatch(_) => StatusCode::BAD_REQUEST,
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::UNAUTHORIZED,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};

		if status.is_server_error() {
			tracing::error!("request failed: {}", &self);
		}

		(status, Json(ErrorBody { error: self.to_string() })).into_response()
	}
}

// vim: ts=4
