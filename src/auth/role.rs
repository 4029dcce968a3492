//! Drive permission roles and the inputs accepted when changing them.

// self
use crate::_prelude::*;

/// Permission roles ordered from least to most privileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
	/// Can view.
	Reader,
	/// Can view and comment.
	Commenter,
	/// Can edit.
	Writer,
	/// Can organize files inside a shared drive.
	FileOrganizer,
	/// Can manage members of a shared drive.
	Organizer,
	/// Full ownership.
	Owner,
}
impl Role {
	/// Every role, lowest privilege first.
	pub const ALL: [Role; 6] = [
		Role::Reader,
		Role::Commenter,
		Role::Writer,
		Role::FileOrganizer,
		Role::Organizer,
		Role::Owner,
	];
	/// Smallest accepted ordinal.
	pub const MIN_ORDINAL: i64 = 1;
	/// Largest accepted ordinal.
	pub const MAX_ORDINAL: i64 = 5;

	/// Returns the name used by the Drive API.
	pub const fn as_str(self) -> &'static str {
		match self {
			Role::Reader => "reader",
			Role::Commenter => "commenter",
			Role::Writer => "writer",
			Role::FileOrganizer => "fileOrganizer",
			Role::Organizer => "organizer",
			Role::Owner => "owner",
		}
	}

	/// Looks a role up by its exact API name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|role| role.as_str() == name)
	}

	/// Looks a role up by ordinal.
	///
	/// Ordinals run from 1 to 5 and select `ALL[ordinal]`, so `3` is
	/// [`Role::FileOrganizer`] and `5` is [`Role::Owner`].
	pub fn from_ordinal(ordinal: i64) -> Option<Self> {
		if !(Self::MIN_ORDINAL..=Self::MAX_ORDINAL).contains(&ordinal) {
			return None;
		}

		usize::try_from(ordinal).ok().and_then(|index| Self::ALL.get(index).copied())
	}
}
impl Display for Role {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Role as supplied by a caller of `update_permission`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleInput {
	/// Already-typed role.
	Role(Role),
	/// Role name, resolved with [`Role::from_name`].
	Name(String),
	/// Ordinal, resolved with [`Role::from_ordinal`].
	Ordinal(i64),
}
impl RoleInput {
	/// Resolves the input, naming `call` in the error when it matches no role.
	pub fn resolve(&self, call: impl Into<String>) -> Result<Role> {
		let resolved = match self {
			RoleInput::Role(role) => Some(*role),
			RoleInput::Name(name) => Role::from_name(name),
			RoleInput::Ordinal(ordinal) => Role::from_ordinal(*ordinal),
		};

		resolved.ok_or_else(|| Error::InvalidRole { call: call.into(), message: valid_inputs() })
	}
}
impl Display for RoleInput {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			RoleInput::Role(role) => Display::fmt(role, f),
			RoleInput::Name(name) => write!(f, "{name:?}"),
			RoleInput::Ordinal(ordinal) => write!(f, "{ordinal}"),
		}
	}
}
impl From<Role> for RoleInput {
	fn from(value: Role) -> Self {
		Self::Role(value)
	}
}
impl From<&str> for RoleInput {
	fn from(value: &str) -> Self {
		Self::Name(value.to_owned())
	}
}
impl From<String> for RoleInput {
	fn from(value: String) -> Self {
		Self::Name(value)
	}
}
impl From<i64> for RoleInput {
	fn from(value: i64) -> Self {
		Self::Ordinal(value)
	}
}

fn valid_inputs() -> String {
	let names = Role::ALL.iter().map(|role| role.as_str()).collect::<Vec<_>>().join(", ");

	format!(
		"Please enter a valid role ({names}) or an ordinal between {} and {}.",
		Role::MIN_ORDINAL,
		Role::MAX_ORDINAL
	)
}
