//! Opaque Drive resource identifiers.
//!
//! Identifiers come from earlier listing calls and are forwarded to the API untouched; the
//! newtypes only keep file, drive, and permission ids from being swapped at call sites.

// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);
		impl $name {
			/// Wraps an identifier exactly as supplied.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			/// Returns the identifier as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self::new(value)
			}
		}
		impl From<String> for $name {
			fn from(value: String) -> Self {
				Self(value)
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

def_id! { FileId, "Identifier of a Drive file or folder.", "File" }
def_id! { DriveId, "Identifier of a shared drive.", "Drive" }
def_id! { PermissionId, "Identifier of a file or shared drive permission.", "Permission" }

impl From<DriveId> for FileId {
	fn from(value: DriveId) -> Self {
		Self(value.0)
	}
}
