//! Client-level error types shared across authentication, configuration, and Drive calls.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Upstream answered with a body that could not be decoded.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS, timeout, non-2xx status).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Requested token lifetime is outside 1..=60 minutes.
	#[error("{message} (call: `{call}`)")]
	InvalidTimeToLive {
		/// Call that received the invalid lifetime.
		call: String,
		/// Corrective hint for the caller.
		message: String,
	},
	/// No access token was supplied or previously acquired.
	#[error("{message} (call: `{call}`)")]
	TokenRequired {
		/// Call that needed a token.
		call: String,
		/// Corrective hint for the caller.
		message: String,
	},
	/// Permission role input did not match a known role.
	#[error("{message} (call: `{call}`)")]
	InvalidRole {
		/// Call that received the unknown role.
		call: String,
		/// Lists the accepted inputs.
		message: String,
	},
	/// A credential environment variable is missing or empty.
	#[error("Environment variable `{name}` is not set.")]
	EnvironmentVariableNotSet {
		/// Variable name.
		name: &'static str,
	},
	/// Token endpoint answered without an `access_token`.
	#[error("Token endpoint response did not contain an access_token: {body}.")]
	AuthenticationFailed {
		/// Raw response body as returned by the token endpoint.
		body: String,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Client configuration failed validation.
	#[error(transparent)]
	InvalidConfig(#[from] crate::config::DriveConfigError),
	/// A service-account identity field was empty.
	#[error("Service account {field} must not be empty.")]
	MissingIdentityField {
		/// Name of the empty field.
		field: &'static str,
	},
	/// Private key is not a PEM-encoded RSA key.
	#[error("Service account private key is not a valid RSA PEM key.")]
	InvalidPrivateKey {
		/// Underlying key parsing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// JWT assertion could not be signed.
	#[error("Unable to sign the JWT assertion.")]
	AssertionSigning {
		/// Underlying signing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Response bodies that could not be decoded.
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// Token endpoint responded with malformed JSON.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code.
		status: u16,
	},
	/// Drive endpoint responded with malformed JSON.
	#[error("Drive endpoint returned malformed JSON.")]
	ResponseParse {
		/// Parsing failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code.
		status: u16,
	},
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Endpoint label (`token endpoint` or `Drive API`).
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request exceeded the configured timeout.
	#[error("Request to {endpoint} timed out.")]
	Timeout {
		/// Endpoint label.
		endpoint: &'static str,
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Upstream answered with a non-success HTTP status.
	#[error("{endpoint} returned HTTP {status}: {body}.")]
	Status {
		/// Endpoint label.
		endpoint: &'static str,
		/// HTTP status code.
		status: u16,
		/// Response body text.
		body: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(
		endpoint: &'static str,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}

	/// Returns the HTTP status code, when the failure carried one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn validation_errors_name_the_call() {
		let err = Error::TokenRequired {
			call: "build_url(path=files/)".into(),
			message: "No access token.".into(),
		};

		assert_eq!(err.to_string(), "No access token. (call: `build_url(path=files/)`)");
	}

	#[test]
	fn status_helper_only_reports_http_failures() {
		let status = TransportError::Status { endpoint: "Drive API", status: 401, body: "{}".into() };
		let io = std::io::Error::other("reset");

		assert_eq!(status.status(), Some(401));
		assert_eq!(TransportError::network("Drive API", io).status(), None);
	}
}
