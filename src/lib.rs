//! A small Google Drive REST client: sign a service-account JWT, trade it for an OAuth 2.0 access
//! token, then list files, shared drives, and permissions over plain HTTP.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod drive;
pub mod error;
pub mod http;
pub mod obs;

mod _prelude {
	pub use std::{
		borrow::Borrow,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		ops::Deref,
	};

	pub use parking_lot::RwLock;
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, Method};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
