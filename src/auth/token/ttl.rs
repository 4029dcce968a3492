//! Requested access-token lifetime.

// self
use crate::_prelude::*;

/// Access-token lifetime in whole minutes, bounded to `1..=60` (Google's maximum).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TokenTtl(u8);
impl TokenTtl {
	/// Shortest accepted lifetime.
	pub const MIN_MINUTES: i64 = 1;
	/// Longest accepted lifetime.
	pub const MAX_MINUTES: i64 = 60;
	/// Lifetime used when callers do not pick one.
	pub const DEFAULT: Self = Self(60);

	/// Validates a lifetime in minutes.
	pub fn minutes(value: i64) -> Option<Self> {
		if (Self::MIN_MINUTES..=Self::MAX_MINUTES).contains(&value) {
			u8::try_from(value).ok().map(Self)
		} else {
			None
		}
	}

	/// Lifetime in minutes.
	pub const fn as_minutes(self) -> u8 {
		self.0
	}

	/// Lifetime as a duration.
	pub fn as_duration(self) -> Duration {
		Duration::minutes(i64::from(self.0))
	}
}
impl Default for TokenTtl {
	fn default() -> Self {
		Self::DEFAULT
	}
}
impl TryFrom<i64> for TokenTtl {
	type Error = String;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		Self::minutes(value).ok_or_else(|| {
			format!(
				"token ttl must be between {} and {} minutes, got {value}",
				Self::MIN_MINUTES,
				Self::MAX_MINUTES
			)
		})
	}
}
impl From<TokenTtl> for i64 {
	fn from(value: TokenTtl) -> Self {
		i64::from(value.0)
	}
}
