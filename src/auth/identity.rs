//! Service-account identity: issuer email plus PEM signing key.

// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable holding the service-account email.
pub const ISSUER_ENV: &str = "ISS";
/// Environment variable holding the PEM private key (escaped `\n` accepted).
pub const PRIVATE_KEY_ENV: &str = "KEY";

/// Converts literal two-character `\n` sequences into real newlines.
///
/// Keys copied out of a service-account JSON file into an environment variable usually keep the
/// JSON escapes, which PEM parsers reject.
pub fn normalize_private_key(raw: &str) -> String {
	raw.replace("\\n", "\n")
}

/// Normalized PEM private key; redacted in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeyPem(String);
impl PrivateKeyPem {
	/// Normalizes escaped newlines and wraps the key.
	pub fn new(raw: impl AsRef<str>) -> Self {
		Self(normalize_private_key(raw.as_ref()))
	}

	/// Returns the PEM text. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for PrivateKeyPem {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("PrivateKeyPem").field(&"<redacted>").finish()
	}
}

/// Immutable service-account identity used to sign token assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceAccountIdentity {
	issuer: String,
	private_key: PrivateKeyPem,
}
impl ServiceAccountIdentity {
	/// Builds an identity from explicit values; both must be non-blank.
	pub fn new(issuer: impl Into<String>, private_key: impl AsRef<str>) -> Result<Self> {
		let issuer = issuer.into();

		if issuer.trim().is_empty() {
			return Err(ConfigError::MissingIdentityField { field: "issuer" }.into());
		}
		if private_key.as_ref().trim().is_empty() {
			return Err(ConfigError::MissingIdentityField { field: "private key" }.into());
		}

		Ok(Self { issuer, private_key: PrivateKeyPem::new(private_key) })
	}

	/// Reads the identity from `ISS` and `KEY`.
	pub fn from_env() -> Result<Self> {
		Self::from_env_vars(ISSUER_ENV, PRIVATE_KEY_ENV)
	}

	/// Reads the identity from the named environment variables.
	///
	/// Unset and blank variables both fail with [`Error::EnvironmentVariableNotSet`].
	pub fn from_env_vars(issuer_var: &'static str, private_key_var: &'static str) -> Result<Self> {
		let issuer = read_env(issuer_var)?;
		let private_key = read_env(private_key_var)?;

		Self::new(issuer, private_key)
	}

	/// Service-account email used as the `iss` claim.
	pub fn issuer(&self) -> &str {
		&self.issuer
	}

	/// Normalized signing key.
	pub fn private_key(&self) -> &PrivateKeyPem {
		&self.private_key
	}
}

fn read_env(name: &'static str) -> Result<String> {
	match std::env::var(name) {
		Ok(value) if !value.trim().is_empty() => Ok(value),
		_ => Err(Error::EnvironmentVariableNotSet { name }),
	}
}
