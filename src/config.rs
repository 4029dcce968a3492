//! Client configuration: Drive base URL, token endpoint, OAuth scope, and request timeout.
//!
//! [`DriveConfig`] replaces the per-version client classes with a single validated value. Pick a
//! published API version through [`ApiVersion`] or point the client at any base URL (a proxy or
//! a mock server) with [`DriveConfigBuilder::base_url`].
//!
//! Configuration files deserialize into [`DriveConfigBuilder`] and then pass through
//! [`DriveConfigBuilder::build`], so a loaded [`DriveConfig`] is always validated. The timeout is
//! given in whole seconds under `timeout_secs`.

// std
use std::net::IpAddr;
// crates.io
use url::Host;
// self
use crate::_prelude::*;

/// Drive v3 REST base URL.
pub const DRIVE_V3_BASE_URL: &str = "https://www.googleapis.com/drive/v3/";
/// Drive v2 REST base URL.
pub const DRIVE_V2_BASE_URL: &str = "https://www.googleapis.com/drive/v2/";
/// Google OAuth 2.0 token endpoint, also used as the JWT audience.
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v4/token";
/// Full Drive access scope requested by service-account assertions.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::seconds(30);

/// Published Drive REST API versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
	/// Legacy v2 surface.
	V2,
	#[default]
	/// Current v3 surface.
	V3,
}
impl ApiVersion {
	/// Returns the REST base URL for this version.
	pub const fn base_url(self) -> &'static str {
		match self {
			ApiVersion::V2 => DRIVE_V2_BASE_URL,
			ApiVersion::V3 => DRIVE_V3_BASE_URL,
		}
	}
}

/// Errors raised while constructing or validating a [`DriveConfig`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DriveConfigError {
	/// A configured URL could not be parsed.
	#[error("The {endpoint} URL is invalid.")]
	InvalidUrl {
		/// Which URL failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Resource paths are appended verbatim, so the base must end with `/`.
	#[error("The base URL must end with `/`: {url}.")]
	MissingTrailingSlash {
		/// Base URL that failed validation.
		url: String,
	},
	/// Scope string is blank.
	#[error("OAuth scope must not be empty.")]
	EmptyScope,
	/// Timeout is zero or negative.
	#[error("Request timeout must be positive.")]
	NonPositiveTimeout,
}

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DriveConfigBuilder")]
pub struct DriveConfig {
	/// Drive REST base URL; resource paths are appended to it verbatim.
	pub base_url: Url,
	/// OAuth 2.0 token endpoint and JWT audience.
	pub token_endpoint: Url,
	/// Scope claim placed in every assertion.
	pub scope: String,
	/// Per-request timeout applied to the token exchange and every Drive call.
	pub timeout: Duration,
}
impl DriveConfig {
	/// Creates a new builder seeded with Google's public endpoints.
	pub fn builder() -> DriveConfigBuilder {
		DriveConfigBuilder::default()
	}

	/// Default configuration for the given API version.
	pub fn for_version(version: ApiVersion) -> Result<Self, DriveConfigError> {
		Self::builder().api_version(version).build()
	}

	/// Timeout converted for the HTTP client.
	pub fn request_timeout(&self) -> std::time::Duration {
		self.timeout.unsigned_abs()
	}

	fn validate(&self) -> Result<(), DriveConfigError> {
		validate_endpoint("base", &self.base_url)?;
		validate_endpoint("token", &self.token_endpoint)?;

		if !self.base_url.as_str().ends_with('/') {
			return Err(DriveConfigError::MissingTrailingSlash {
				url: self.base_url.to_string(),
			});
		}
		if self.scope.trim().is_empty() {
			return Err(DriveConfigError::EmptyScope);
		}
		if !self.timeout.is_positive() {
			return Err(DriveConfigError::NonPositiveTimeout);
		}

		Ok(())
	}
}

/// Builder for [`DriveConfig`] values.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriveConfigBuilder {
	/// Explicit base URL; takes precedence over [`DriveConfigBuilder::api_version`].
	pub base_url: Option<Url>,
	/// API version used when no explicit base URL is set.
	pub api_version: ApiVersion,
	/// Token endpoint override.
	pub token_endpoint: Option<Url>,
	/// Scope override.
	pub scope: Option<String>,
	/// Timeout override.
	#[serde(rename = "timeout_secs", deserialize_with = "deserialize_timeout_secs")]
	pub timeout: Option<Duration>,
}
impl DriveConfigBuilder {
	/// Sets an explicit base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Selects a published API version.
	pub fn api_version(mut self, version: ApiVersion) -> Self {
		self.api_version = version;

		self
	}

	/// Sets the token endpoint (and therefore the assertion audience).
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Overrides the OAuth scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Overrides the per-request timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<DriveConfig, DriveConfigError> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => parse_url("base", self.api_version.base_url())?,
		};
		let token_endpoint = match self.token_endpoint {
			Some(url) => url,
			None => parse_url("token", GOOGLE_TOKEN_ENDPOINT)?,
		};
		let config = DriveConfig {
			base_url,
			token_endpoint,
			scope: self.scope.unwrap_or_else(|| DRIVE_SCOPE.into()),
			timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
		};

		config.validate()?;

		Ok(config)
	}
}

impl TryFrom<DriveConfigBuilder> for DriveConfig {
	type Error = DriveConfigError;

	fn try_from(builder: DriveConfigBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<i64>::deserialize(deserializer)?.map(Duration::seconds))
}

fn parse_url(endpoint: &'static str, raw: &str) -> Result<Url, DriveConfigError> {
	Url::parse(raw).map_err(|source| DriveConfigError::InvalidUrl { endpoint, source })
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), DriveConfigError> {
	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(url) => Ok(()),
		_ => Err(DriveConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() }),
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
