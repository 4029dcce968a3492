//! Optional observability helpers for client operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `drivecandy.operation` carrying the
//!   `operation`, `http.method`, `resource` (path template), and `stage` (call site) fields.
//! - Enable `metrics` to increment the `drivecandy_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`, and to record the
//!   `drivecandy_operation_duration_seconds` histogram labeled by `operation` + `http.method`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// std
use std::time::Instant;
// self
use crate::_prelude::*;

/// Operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// JWT-bearer token exchange.
	AcquireToken,
	/// `GET files/`.
	ListFiles,
	/// `GET drives/`.
	ListDrives,
	/// `GET files/` scoped to one shared drive.
	ListDriveContents,
	/// `GET files/{id}/permissions`.
	ListPermissions,
	/// `GET files/{id}/permissions/{permissionId}`.
	GetPermission,
	/// `PATCH files/{id}/permissions/{permissionId}`.
	UpdatePermission,
	/// `DELETE files/{id}/permissions/{permissionId}`.
	RemovePermission,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::AcquireToken => "acquire_token",
			Operation::ListFiles => "list_files",
			Operation::ListDrives => "list_drives",
			Operation::ListDriveContents => "list_drive_contents",
			Operation::ListPermissions => "list_permissions",
			Operation::GetPermission => "get_permission",
			Operation::UpdatePermission => "update_permission",
			Operation::RemovePermission => "remove_permission",
		}
	}
}
impl Operation {
	/// HTTP method the operation is sent with.
	pub const fn method(self) -> &'static str {
		match self {
			Operation::AcquireToken => "POST",
			Operation::ListFiles
			| Operation::ListDrives
			| Operation::ListDriveContents
			| Operation::ListPermissions
			| Operation::GetPermission => "GET",
			Operation::UpdatePermission => "PATCH",
			Operation::RemovePermission => "DELETE",
		}
	}

	/// Path template of the addressed resource, without identifiers.
	pub const fn resource(self) -> &'static str {
		match self {
			Operation::AcquireToken => "token",
			Operation::ListFiles | Operation::ListDriveContents => "files/",
			Operation::ListDrives => "drives/",
			Operation::ListPermissions => "files/{fileId}/permissions",
			Operation::GetPermission | Operation::UpdatePermission | Operation::RemovePermission =>
				"files/{fileId}/permissions/{permissionId}",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside an [`OperationSpan`] and records attempt plus success/failure outcomes.
pub async fn observe<T, Fut>(operation: Operation, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = OperationSpan::new(operation, stage);
	let started = Instant::now();

	record_operation_outcome(operation, OperationOutcome::Attempt);

	let result = span.instrument(fut).await;

	record_operation_duration(operation, started.elapsed());

	let outcome =
		if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure };

	span.record_outcome(outcome);
	record_operation_outcome(operation, outcome);

	result
}
