//! Ordered query parameters appended after the access token.

// self
use crate::_prelude::*;

/// Ordered `key=value` pairs plus an optional per-call access token.
///
/// Pairs are emitted in insertion order and are not percent-encoded; callers pre-encode values
/// that contain reserved characters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	access_token: Option<String>,
	pairs: Vec<(String, String)>,
}
impl QueryParams {
	/// Empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a pair.
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.push(key, value);

		self
	}

	/// Appends a pair in place.
	pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
		self.pairs.push((key.into(), value.to_string()));
	}

	/// Uses `token` for this call instead of the client's current token.
	pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(token.into());

		self
	}

	/// Per-call token override, if any.
	pub fn access_token(&self) -> Option<&str> {
		self.access_token.as_deref()
	}

	/// Iterates the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Number of pairs, excluding the access token.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns `true` when no pairs were added.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Writes `access_token=<token>` followed by each pair, `&`-joined.
	pub(crate) fn render(&self, token: &str) -> String {
		let mut query = format!("access_token={token}");

		for (key, value) in self.iter() {
			query.push('&');
			query.push_str(key);
			query.push('=');
			query.push_str(value);
		}

		query
	}
}
impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Display,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut params = Self::new();

		for (key, value) in iter {
			params.push(key, value);
		}

		params
	}
}
impl Debug for QueryParams {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("QueryParams")
			.field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
			.field("pairs", &self.pairs)
			.finish()
	}
}
