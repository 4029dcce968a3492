//! Drive REST client: URL construction and resource calls.
//!
//! [`DriveClient`] owns a [`TokenManager`] and composes every request URL as
//! `<base><path>?access_token=<token>[&key=value...]`. Each resource call issues exactly one HTTP
//! request and hands the decoded JSON body back unmodified; there is no pagination follow-through
//! and no retry.

pub mod id;
pub mod query;

mod files;
mod permissions;

pub use id::*;
pub use query::*;

// self
use crate::{
	_prelude::*,
	auth::{BearerToken, ServiceAccountIdentity, TokenManager},
	config::DriveConfig,
	error::{ConfigError, TransientError},
	http::{DRIVE_API, RawResponse, ReqwestHttpClient},
};

/// Google Drive client bound to one service-account identity.
///
/// The configuration is fixed at construction; the token manager holds its own copy of the token
/// endpoint, scope, and timeout.
pub struct DriveClient {
	http_client: ReqwestHttpClient,
	config: DriveConfig,
	tokens: TokenManager,
}
impl DriveClient {
	/// Creates a client for Google's public Drive v3 endpoints.
	pub fn new(identity: ServiceAccountIdentity) -> Result<Self> {
		let config = DriveConfig::builder().build().map_err(ConfigError::from)?;

		Self::with_config(identity, config)
	}

	/// Creates a client for Google's public Drive v3 endpoints with credentials from `ISS`/`KEY`.
	pub fn from_env() -> Result<Self> {
		Self::new(ServiceAccountIdentity::from_env()?)
	}

	/// Creates a client with a custom configuration and the default HTTP client.
	pub fn with_config(identity: ServiceAccountIdentity, config: DriveConfig) -> Result<Self> {
		Ok(Self::with_http_client(identity, config, ReqwestHttpClient::new()?))
	}

	/// Creates a client that reuses the caller-provided HTTP client.
	pub fn with_http_client(
		identity: ServiceAccountIdentity,
		config: DriveConfig,
		http_client: ReqwestHttpClient,
	) -> Self {
		let tokens = TokenManager::new(identity, &config, http_client.clone());

		Self { http_client, config, tokens }
	}

	/// Endpoints, scope, and timeout this client was built with.
	pub fn config(&self) -> &DriveConfig {
		&self.config
	}

	/// HTTP client wrapper used for every outbound request.
	pub fn http_client(&self) -> &ReqwestHttpClient {
		&self.http_client
	}

	/// Token manager backing this client.
	pub fn tokens(&self) -> &TokenManager {
		&self.tokens
	}

	/// Acquires a one-hour token and makes it the current token.
	pub async fn acquire_token(&self) -> Result<BearerToken> {
		self.tokens.acquire_token().await
	}

	/// Acquires a token valid for `ttl_minutes` (1..=60) and makes it the current token.
	pub async fn acquire_token_with_ttl(&self, ttl_minutes: i64) -> Result<BearerToken> {
		self.tokens.acquire_token_with_ttl(ttl_minutes).await
	}

	/// Builds the full request URL for `path`.
	///
	/// The token is the per-call override from `params` when present and non-empty, otherwise the
	/// current token. Without either the call fails with [`Error::TokenRequired`].
	pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<String> {
		let token = match params.access_token().filter(|token| !token.is_empty()) {
			Some(token) => token.to_owned(),
			None => self
				.tokens
				.current_token()
				.filter(|token| !token.is_empty())
				.map(|token| token.expose().to_owned())
				.ok_or_else(|| Error::TokenRequired {
					call: format!("build_url(path={path}, access_token=None)"),
					message: "No access token. Acquire one with `acquire_token` or supply one \
					          with `QueryParams::with_access_token`."
						.into(),
				})?,
		};

		Ok(format!("{}{path}?{}", self.config.base_url, params.render(&token)))
	}

	async fn dispatch(
		&self,
		method: Method,
		path: &str,
		params: &QueryParams,
		body: Option<&JsonValue>,
	) -> Result<JsonValue> {
		let url = self.build_url(path, params)?;
		let mut request =
			self.http_client.request(method, url).timeout(self.config.request_timeout());

		if let Some(body) = body {
			request = request.json(body);
		}

		let response = self.http_client.send(DRIVE_API, request).await?;

		decode_json(response)
	}
}
impl Debug for DriveClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DriveClient")
			.field("config", &self.config)
			.field("tokens", &self.tokens)
			.finish()
	}
}

/// Decodes a Drive response body; an empty body (e.g. `204 No Content`) becomes `null`.
fn decode_json(response: RawResponse) -> Result<JsonValue> {
	if response.body.trim().is_empty() {
		return Ok(JsonValue::Null);
	}

	serde_json::from_str(&response.body)
		.map_err(|source| TransientError::ResponseParse { source, status: response.status }.into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	const BASE: &str = "https://www.googleapis.com/drive/v3/";

	fn client() -> DriveClient {
		build_test_drive_client(BASE, "https://www.googleapis.com/oauth2/v4/token")
	}

	#[test]
	fn token_manager_shares_client_config() {
		let client = build_test_drive_client(
			"https://proxy.example.com/drive/v2/",
			"https://oauth.example.com/token",
		);

		assert_eq!(client.config().base_url.as_str(), "https://proxy.example.com/drive/v2/");
		assert_eq!(client.tokens().token_endpoint(), &client.config().token_endpoint);
		assert_eq!(client.tokens().scope(), client.config().scope);
	}

	#[test]
	fn build_url_appends_current_token() {
		let client = client();

		client.tokens().set_token(BearerToken::new("T"));

		assert_eq!(
			client.build_url("files/", &QueryParams::new()).expect("Token is set."),
			"https://www.googleapis.com/drive/v3/files/?access_token=T"
		);
	}

	#[test]
	fn build_url_keeps_extra_params_after_token() {
		let client = client();

		client.tokens().set_token(BearerToken::new("T"));

		let params = QueryParams::new().with("driveId", "D").with("corpora", "drive");
		let url = client.build_url("files/", &params).expect("Token is set.");

		assert!(url.ends_with("files/?access_token=T&driveId=D&corpora=drive"), "{url}");
	}

	#[test]
	fn build_url_prefers_per_call_override() {
		let client = client();

		client.tokens().set_token(BearerToken::new("stored"));

		let url = client
			.build_url("drives/", &QueryParams::new().with_access_token("override"))
			.expect("Override is set.");

		assert_eq!(url, format!("{BASE}drives/?access_token=override"));

		let url = client
			.build_url("drives/", &QueryParams::new().with_access_token(""))
			.expect("Empty override falls back to the stored token.");

		assert_eq!(url, format!("{BASE}drives/?access_token=stored"));
	}

	#[test]
	fn build_url_requires_a_token() {
		let client = client();

		for params in [QueryParams::new(), QueryParams::new().with_access_token("")] {
			let err = client.build_url("files/", &params).expect_err("No token is available.");

			match err {
				Error::TokenRequired { call, message } => {
					assert_eq!(call, "build_url(path=files/, access_token=None)");
					assert!(message.contains("acquire_token"));
				},
				other => panic!("Unexpected error variant: {other:?}."),
			}
		}

		client.tokens().set_token(BearerToken::new(""));

		assert!(matches!(
			client.build_url("files/", &QueryParams::new()),
			Err(Error::TokenRequired { .. })
		));
	}

	#[test]
	fn cleared_token_requires_reacquisition() {
		let client = client();

		client.tokens().set_token(BearerToken::new("T"));
		client.tokens().clear_token();

		assert!(client.tokens().current_token().is_none());
		assert!(client.build_url("files/", &QueryParams::new()).is_err());
	}

	#[test]
	fn decode_json_passes_bodies_through() {
		let value = decode_json(RawResponse { status: 200, body: "{\"files\":[]}".into() })
			.expect("Valid JSON should decode.");

		assert_eq!(value, serde_json::json!({ "files": [] }));
		assert_eq!(
			decode_json(RawResponse { status: 204, body: String::new() })
				.expect("Empty bodies should decode."),
			JsonValue::Null
		);
		assert!(matches!(
			decode_json(RawResponse { status: 200, body: "<html>".into() }),
			Err(Error::Transient(TransientError::ResponseParse { status: 200, .. }))
		));
	}
}
