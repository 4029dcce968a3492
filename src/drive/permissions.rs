//! Permission reads and changes on files and shared drives.

// self
use crate::{
	_prelude::*,
	auth::RoleInput,
	drive::{DriveClient, DriveId, FileId, PermissionId, QueryParams},
	obs::{self, Operation},
};

impl DriveClient {
	/// Lists the permissions of a file (`GET files/{id}/permissions`).
	pub async fn list_permissions(&self, file_id: &FileId) -> Result<JsonValue> {
		obs::observe(Operation::ListPermissions, "list_permissions", async move {
			let path = format!("files/{file_id}/permissions");

			self.dispatch(Method::GET, &path, &QueryParams::new(), None).await
		})
		.await
	}

	/// Lists the member permissions of a shared drive.
	///
	/// A shared drive's root is addressed as a file, so this is
	/// `GET files/{driveId}/permissions` with `supportsAllDrives=true`.
	pub async fn list_drive_permissions(&self, drive_id: &DriveId) -> Result<JsonValue> {
		obs::observe(Operation::ListPermissions, "list_drive_permissions", async move {
			let path = format!("files/{drive_id}/permissions");
			let params = QueryParams::new().with("supportsAllDrives", true);

			self.dispatch(Method::GET, &path, &params, None).await
		})
		.await
	}

	/// Fetches one permission (`GET files/{id}/permissions/{permissionId}`).
	pub async fn get_permission(
		&self,
		file_id: &FileId,
		permission_id: &PermissionId,
	) -> Result<JsonValue> {
		obs::observe(Operation::GetPermission, "get_permission", async move {
			let path = format!("files/{file_id}/permissions/{permission_id}");

			self.dispatch(Method::GET, &path, &QueryParams::new(), None).await
		})
		.await
	}

	/// Changes a permission's role (`PATCH files/{id}/permissions/{permissionId}`).
	///
	/// `role` is a [`Role`](crate::auth::Role), a role name, or an ordinal (see
	/// [`Role::from_ordinal`](crate::auth::Role::from_ordinal)). Unknown inputs fail with
	/// [`Error::InvalidRole`] before any request is made.
	pub async fn update_permission(
		&self,
		file_id: &FileId,
		permission_id: &PermissionId,
		role: impl Into<RoleInput>,
	) -> Result<JsonValue> {
		let role = role.into();

		obs::observe(Operation::UpdatePermission, "update_permission", async move {
			let resolved = role.resolve(format!(
				"update_permission(file_id={file_id}, permission_id={permission_id}, role={role})"
			))?;
			let path = format!("files/{file_id}/permissions/{permission_id}");
			let body = serde_json::json!({ "role": resolved.as_str() });

			self.dispatch(Method::PATCH, &path, &QueryParams::new(), Some(&body)).await
		})
		.await
	}

	/// Deletes a permission (`DELETE files/{id}/permissions/{permissionId}`).
	///
	/// Drive answers `204 No Content`, which decodes to [`JsonValue::Null`].
	pub async fn remove_permission(
		&self,
		file_id: &FileId,
		permission_id: &PermissionId,
	) -> Result<JsonValue> {
		obs::observe(Operation::RemovePermission, "remove_permission", async move {
			let path = format!("files/{file_id}/permissions/{permission_id}");

			self.dispatch(Method::DELETE, &path, &QueryParams::new(), None).await
		})
		.await
	}
}
