//! Service-account token acquisition.
//!
//! [`TokenManager::acquire_token`] signs an RS256 assertion for the configured identity, trades
//! it at the token endpoint with the JWT-bearer grant, and stores the returned access token. The
//! stored token is replaced as one value under a write lock, so concurrent readers see either the
//! previous token or the new one. Expiry is not tracked: callers that receive an authorization
//! failure acquire a fresh token.

// self
use crate::{
	_prelude::*,
	auth::{AssertionClaims, BearerToken, JWT_BEARER_GRANT_TYPE, ServiceAccountIdentity, TokenTtl},
	config::DriveConfig,
	error::TransientError,
	http::{RawResponse, ReqwestHttpClient, TOKEN_ENDPOINT},
	obs::{self, Operation},
};

#[derive(Deserialize)]
struct TokenEndpointResponse {
	#[serde(default)]
	access_token: Option<String>,
}

/// Holds the identity and the current access token.
pub struct TokenManager {
	identity: ServiceAccountIdentity,
	token_endpoint: Url,
	scope: String,
	timeout: std::time::Duration,
	http_client: ReqwestHttpClient,
	current: RwLock<Option<BearerToken>>,
}
impl TokenManager {
	/// Creates an unauthenticated manager for `identity`.
	pub fn new(
		identity: ServiceAccountIdentity,
		config: &DriveConfig,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self {
			identity,
			token_endpoint: config.token_endpoint.clone(),
			scope: config.scope.clone(),
			timeout: config.request_timeout(),
			http_client,
			current: RwLock::new(None),
		}
	}

	/// Identity used to sign assertions.
	pub fn identity(&self) -> &ServiceAccountIdentity {
		&self.identity
	}

	/// Token endpoint the assertion is posted to; also the assertion audience.
	pub fn token_endpoint(&self) -> &Url {
		&self.token_endpoint
	}

	/// Scope claim placed in every assertion.
	pub fn scope(&self) -> &str {
		&self.scope
	}

	/// Acquires a token valid for one hour.
	pub async fn acquire_token(&self) -> Result<BearerToken> {
		self.acquire_token_with_ttl(i64::from(TokenTtl::DEFAULT.as_minutes())).await
	}

	/// Acquires a token valid for `ttl_minutes` (1..=60) and stores it as the current token.
	///
	/// An out-of-range lifetime fails with [`Error::InvalidTimeToLive`] before any request is
	/// made. A response without `access_token` fails with [`Error::AuthenticationFailed`] and
	/// leaves the current token untouched.
	pub async fn acquire_token_with_ttl(&self, ttl_minutes: i64) -> Result<BearerToken> {
		obs::observe(Operation::AcquireToken, "acquire_token", async move {
			let ttl = TokenTtl::minutes(ttl_minutes).ok_or_else(|| Error::InvalidTimeToLive {
				call: format!("acquire_token({}, ttl={ttl_minutes})", self.identity.issuer()),
				message: format!(
					"Please enter a valid ttl between {} and {} minutes.",
					TokenTtl::MIN_MINUTES,
					TokenTtl::MAX_MINUTES
				),
			})?;
			let claims = AssertionClaims::new(
				self.identity.issuer(),
				&self.scope,
				&self.token_endpoint,
				OffsetDateTime::now_utc(),
				ttl,
			);
			let assertion = claims.sign(self.identity.private_key())?;
			let request = self
				.http_client
				.post(self.token_endpoint.clone())
				.timeout(self.timeout)
				.form(&[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion.as_str())]);
			let response = self.http_client.send(TOKEN_ENDPOINT, request).await?;
			let token = parse_token_response(response)?;

			self.set_token(token.clone());

			Ok(token)
		})
		.await
	}

	/// Returns the current token, if one has been acquired or set.
	pub fn current_token(&self) -> Option<BearerToken> {
		self.current.read().clone()
	}

	/// Replaces the current token with one obtained elsewhere.
	pub fn set_token(&self, token: BearerToken) {
		*self.current.write() = Some(token);
	}

	/// Drops the current token, returning the manager to the unauthenticated state.
	pub fn clear_token(&self) {
		*self.current.write() = None;
	}
}
impl Debug for TokenManager {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenManager")
			.field("issuer", &self.identity.issuer())
			.field("token_endpoint", &self.token_endpoint.as_str())
			.field("token_set", &self.current.read().is_some())
			.finish()
	}
}

fn parse_token_response(response: RawResponse) -> Result<BearerToken> {
	let de = &mut serde_json::Deserializer::from_str(&response.body);
	let parsed: TokenEndpointResponse = serde_path_to_error::deserialize(de)
		.map_err(|source| TransientError::TokenResponseParse { source, status: response.status })?;

	match parsed.access_token {
		Some(token) if !token.is_empty() => Ok(BearerToken::new(token)),
		_ => {
			#[cfg(feature = "tracing")]
			tracing::warn!(status = response.status, "token endpoint returned no access_token");

			Err(Error::AuthenticationFailed { body: response.body })
		},
	}
}
