//! Transport primitives shared by the token exchange and the Drive calls.
//!
//! [`ReqwestHttpClient`] is the client's only dependency on an HTTP stack. Every request goes
//! through [`ReqwestHttpClient::send`], which buffers the body, records the status in a
//! [`RawResponse`], and turns non-2xx answers and transport failures into [`Error`] values.

// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Endpoint label used in transport errors for token exchanges.
pub const TOKEN_ENDPOINT: &str = "token endpoint";
/// Endpoint label used in transport errors for Drive REST calls.
pub const DRIVE_API: &str = "Drive API";

/// Buffered HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Neither the token endpoint nor the Drive API is expected to redirect, so the client built by
/// [`ReqwestHttpClient::new`] never follows redirects. Configure any custom [`ReqwestClient`]
/// passed to [`ReqwestHttpClient::with_client`] the same way.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds the default client: rustls, no redirects.
	pub fn new() -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Dispatches `request` and buffers the answer.
	///
	/// `endpoint` only labels errors. Non-2xx statuses fail with [`TransportError::Status`]
	/// carrying the response body.
	pub async fn send(
		&self,
		endpoint: &'static str,
		request: reqwest::RequestBuilder,
	) -> Result<RawResponse> {
		let response =
			request.send().await.map_err(|err| map_reqwest_error(endpoint, err))?;
		let status = response.status();
		let body = response.text().await.map_err(|err| map_reqwest_error(endpoint, err))?;

		#[cfg(feature = "tracing")]
		tracing::debug!(endpoint, status = status.as_u16(), "received response");

		if !status.is_success() {
			return Err(TransportError::Status { endpoint, status: status.as_u16(), body }.into());
		}

		Ok(RawResponse { status: status.as_u16(), body })
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Classifies a reqwest failure: builder errors are configuration problems, everything else is a
/// transport failure.
pub fn map_reqwest_error(endpoint: &'static str, err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TransportError::Timeout { endpoint, source: Box::new(err) }.into();
	}

	TransportError::network(endpoint, err).into()
}
