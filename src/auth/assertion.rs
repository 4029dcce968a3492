//! JWT-bearer assertion claims and RS256 signing.

// crates.io
use jsonwebtoken::{Algorithm, EncodingKey, Header};
// self
use crate::{
	_prelude::*,
	auth::{PrivateKeyPem, TokenTtl},
	error::ConfigError,
};

/// Grant type sent alongside the signed assertion.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Claim set exchanged for an access token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
	/// Service-account email.
	pub iss: String,
	/// Space-delimited OAuth scopes.
	pub scope: String,
	/// Token endpoint URL.
	pub aud: String,
	/// Issued-at, seconds since the Unix epoch.
	pub iat: i64,
	/// Expiry, `iat` plus the requested lifetime.
	pub exp: i64,
}
impl AssertionClaims {
	/// Builds claims issued at `issued_at` and valid for `ttl`.
	pub fn new(
		issuer: &str,
		scope: &str,
		audience: &Url,
		issued_at: OffsetDateTime,
		ttl: TokenTtl,
	) -> Self {
		let iat = issued_at.unix_timestamp();

		Self {
			iss: issuer.to_owned(),
			scope: scope.to_owned(),
			aud: audience.to_string(),
			iat,
			exp: iat + ttl.as_duration().whole_seconds(),
		}
	}

	/// Signs the claims with RS256.
	pub fn sign(&self, key: &PrivateKeyPem) -> Result<String> {
		let key = EncodingKey::from_rsa_pem(key.expose().as_bytes())
			.map_err(|source| ConfigError::InvalidPrivateKey { source })?;

		jsonwebtoken::encode(&Header::new(Algorithm::RS256), self, &key)
			.map_err(|source| ConfigError::AssertionSigning { source }.into())
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use jsonwebtoken::{DecodingKey, Validation};
	use time::macros::datetime;
	// self
	use super::*;
	use crate::_preludet::*;

	fn audience() -> Url {
		Url::parse("https://www.googleapis.com/oauth2/v4/token")
			.expect("Failed to parse audience URL.")
	}

	#[test]
	fn claims_span_the_requested_lifetime() {
		let ttl = TokenTtl::minutes(15).expect("15 minutes is a valid lifetime.");
		let claims = AssertionClaims::new(
			TEST_ISSUER,
			"https://www.googleapis.com/auth/drive",
			&audience(),
			datetime!(2024-01-01 00:00 UTC),
			ttl,
		);

		assert_eq!(claims.iss, TEST_ISSUER);
		assert_eq!(claims.aud, "https://www.googleapis.com/oauth2/v4/token");
		assert_eq!(claims.iat, 1_704_067_200);
		assert_eq!(claims.exp - claims.iat, 15 * 60);
	}

	#[test]
	fn signed_assertion_verifies_with_public_key() {
		let claims = AssertionClaims::new(
			TEST_ISSUER,
			"https://www.googleapis.com/auth/drive",
			&audience(),
			OffsetDateTime::now_utc(),
			TokenTtl::DEFAULT,
		);
		let assertion =
			claims.sign(&PrivateKeyPem::new(TEST_PRIVATE_KEY_PEM)).expect("Signing should succeed.");
		let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY_PEM.as_bytes())
			.expect("Fixture public key should parse.");
		let mut validation = Validation::new(Algorithm::RS256);

		validation.set_audience(&["https://www.googleapis.com/oauth2/v4/token"]);
		validation.set_issuer(&[TEST_ISSUER]);

		let decoded = jsonwebtoken::decode::<AssertionClaims>(&assertion, &key, &validation)
			.expect("Assertion should verify against the fixture public key.");

		assert_eq!(decoded.claims, claims);
		assert_eq!(decoded.header.alg, Algorithm::RS256);
	}

	#[test]
	fn escaped_key_still_signs() {
		let escaped = TEST_PRIVATE_KEY_PEM.replace('\n', "\\n");
		let claims = AssertionClaims::new(
			TEST_ISSUER,
			"scope",
			&audience(),
			OffsetDateTime::now_utc(),
			TokenTtl::DEFAULT,
		);

		claims.sign(&PrivateKeyPem::new(escaped)).expect("Escaped newlines should be normalized.");
	}

	#[test]
	fn invalid_key_is_a_config_error() {
		let claims = AssertionClaims::new(
			TEST_ISSUER,
			"scope",
			&audience(),
			OffsetDateTime::now_utc(),
			TokenTtl::DEFAULT,
		);
		let err = claims
			.sign(&PrivateKeyPem::new("not a key"))
			.expect_err("Garbage keys should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidPrivateKey { .. })));
	}
}
