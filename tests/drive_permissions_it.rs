mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use common::*;
use drivecandy::{
	auth::Role,
	drive::{DriveId, FileId, PermissionId},
	error::Error,
};

fn ids() -> (FileId, PermissionId) {
	(FileId::new("file-1"), PermissionId::new("perm-1"))
}

#[tokio::test]
async fn list_permissions_for_file() {
	let server = MockServer::start_async().await;
	let client = build_authenticated_client(&server, "T");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(drive_path("files/file-1/permissions"))
				.query_param("access_token", "T");
			then.status(200).json_body(json!({ "permissions": [{ "id": "perm-1" }] }));
		})
		.await;
	let permissions =
		client.list_permissions(&FileId::new("file-1")).await.expect("Listing should succeed.");

	assert_eq!(permissions["permissions"][0]["id"], "perm-1");

	mock.assert_async().await;
}

#[tokio::test]
async fn list_drive_permissions_supports_all_drives() {
	let server = MockServer::start_async().await;
	let client = build_authenticated_client(&server, "T");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(drive_path("files/drive-1/permissions"))
				.query_param("supportsAllDrives", "true");
			then.status(200).json_body(json!({ "permissions": [] }));
		})
		.await;

	client
		.list_drive_permissions(&DriveId::new("drive-1"))
		.await
		.expect("Drive permissions should be listed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn get_permission_by_id() {
	let server = MockServer::start_async().await;
	let client = build_authenticated_client(&server, "T");
	let (file_id, permission_id) = ids();
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(drive_path("files/file-1/permissions/perm-1"));
			then.status(200).json_body(json!({ "id": "perm-1", "role": "writer" }));
		})
		.await;
	let permission =
		client.get_permission(&file_id, &permission_id).await.expect("Permission should load.");

	assert_eq!(permission["role"], "writer");

	mock.assert_async().await;
}

#[tokio::test]
async fn update_permission_sends_resolved_role() {
	let server = MockServer::start_async().await;
	let client = build_authenticated_client(&server, "T");
	let (file_id, permission_id) = ids();
	let by_ordinal = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path(drive_path("files/file-1/permissions/perm-1"))
				.query_param("access_token", "T")
				.json_body(json!({ "role": "fileOrganizer" }));
			then.status(200).json_body(json!({ "id": "perm-1", "role": "fileOrganizer" }));
		})
		.await;
	let updated = client
		.update_permission(&file_id, &permission_id, 3_i64)
		.await
		.expect("Ordinal role should resolve.");

	assert_eq!(updated["role"], "fileOrganizer");

	by_ordinal.assert_async().await;

	let by_name = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path(drive_path("files/file-1/permissions/perm-1"))
				.json_body(json!({ "role": "owner" }));
			then.status(200).json_body(json!({ "id": "perm-1", "role": "owner" }));
		})
		.await;

	client
		.update_permission(&file_id, &permission_id, "owner")
		.await
		.expect("Named role should resolve.");
	client
		.update_permission(&file_id, &permission_id, Role::Owner)
		.await
		.expect("Typed role should resolve.");

	by_name.assert_calls_async(2).await;
}

#[tokio::test]
async fn update_permission_rejects_unknown_roles_without_dispatch() {
	let server = MockServer::start_async().await;
	let client = build_authenticated_client(&server, "T");
	let (file_id, permission_id) = ids();
	let mock = server
		.mock_async(|when, then| {
			when.method(PATCH);
			then.status(200).json_body(json!({}));
		})
		.await;

	for result in [
		client.update_permission(&file_id, &permission_id, 0_i64).await,
		client.update_permission(&file_id, &permission_id, 7_i64).await,
		client.update_permission(&file_id, &permission_id, "admin").await,
	] {
		match result {
			Err(Error::InvalidRole { call, message }) => {
				assert!(call.starts_with("update_permission(file_id=file-1, permission_id=perm-1"));
				assert!(message.contains("fileOrganizer"));
			},
			other => panic!("Unexpected result: {other:?}."),
		}
	}

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn remove_permission_decodes_empty_body_as_null() {
	let server = MockServer::start_async().await;
	let client = build_authenticated_client(&server, "T");
	let (file_id, permission_id) = ids();
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path(drive_path("files/file-1/permissions/perm-1"))
				.query_param("access_token", "T");
			then.status(204);
		})
		.await;
	let removed =
		client.remove_permission(&file_id, &permission_id).await.expect("Removal should succeed.");

	assert_eq!(removed, Value::Null);

	mock.assert_async().await;
}
