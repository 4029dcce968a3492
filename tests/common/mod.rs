//! Shared helpers for integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::prelude::*;
// self
use drivecandy::{
	auth::{BearerToken, ServiceAccountIdentity},
	config::DriveConfig,
	drive::DriveClient,
	http::ReqwestHttpClient,
	reqwest::Client,
	url::Url,
};

pub const TEST_ISSUER: &str = "svc@example.iam.gserviceaccount.com";
pub const TEST_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/service_account_key.pem");
pub const TEST_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/service_account_key.pub.pem");
pub const BASE_PATH: &str = "/drive/v3/";
pub const TOKEN_PATH: &str = "/token";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by `httpmock`.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Identity backed by the checked-in test key.
pub fn test_identity() -> ServiceAccountIdentity {
	ServiceAccountIdentity::new(TEST_ISSUER, TEST_PRIVATE_KEY_PEM)
		.expect("Test identity should build from the fixture key.")
}

/// Client whose Drive base and token endpoint both point at `server`.
pub fn build_mock_drive_client(server: &MockServer) -> DriveClient {
	let config = DriveConfig::builder()
		.base_url(Url::parse(&server.url(BASE_PATH)).expect("Mock base URL should parse."))
		.token_endpoint(
			Url::parse(&server.url(TOKEN_PATH)).expect("Mock token endpoint should parse."),
		)
		.build()
		.expect("Mock configuration should validate.");

	DriveClient::with_http_client(test_identity(), config, test_reqwest_http_client())
}

/// Mock client that already holds `token`.
pub fn build_authenticated_client(server: &MockServer, token: &str) -> DriveClient {
	let client = build_mock_drive_client(server);

	client.tokens().set_token(BearerToken::new(token));

	client
}

/// Absolute mock path for a Drive resource.
pub fn drive_path(resource: &str) -> String {
	format!("{BASE_PATH}{resource}")
}
