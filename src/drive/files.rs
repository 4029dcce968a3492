//! File and shared drive listings.

// self
use crate::{
	_prelude::*,
	drive::{DriveClient, DriveId, QueryParams},
	obs::{self, Operation},
};

impl DriveClient {
	/// Lists files visible to the service account (`GET files/`).
	///
	/// `fields` is forwarded as the `fields` projection when given. Only the first page is
	/// returned; `nextPageToken` is left in the body for the caller.
	pub async fn list_files(&self, fields: Option<&str>) -> Result<JsonValue> {
		obs::observe(Operation::ListFiles, "list_files", async move {
			let mut params = QueryParams::new();

			if let Some(fields) = fields {
				params.push("fields", fields);
			}

			self.dispatch(Method::GET, "files/", &params, None).await
		})
		.await
	}

	/// Lists shared drives the service account belongs to (`GET drives/`).
	pub async fn list_drives(&self) -> Result<JsonValue> {
		obs::observe(Operation::ListDrives, "list_drives", async move {
			self.dispatch(Method::GET, "drives/", &QueryParams::new(), None).await
		})
		.await
	}

	/// Lists the items stored in one shared drive.
	pub async fn list_drive_contents(&self, drive_id: &DriveId) -> Result<JsonValue> {
		obs::observe(Operation::ListDriveContents, "list_drive_contents", async move {
			let params = QueryParams::new()
				.with("driveId", drive_id)
				.with("includeItemsFromAllDrives", true)
				.with("corpora", "drive")
				.with("supportsAllDrives", true);

			self.dispatch(Method::GET, "files/", &params, None).await
		})
		.await
	}
}
