//! Walks a service account's Drive: owned files, shared drives, the first drive's contents, and
//! the permissions on the first file and on the drive itself, then re-acquires a token.
//!
//! Set `ISS` to the service-account email and `KEY` to its PEM private key (escaped `\n` is fine)
//! before running `cargo run --example list_shared_drive`.

// crates.io
use color_eyre::{Result, eyre::eyre};
use serde_json::Value;
// self
use drivecandy::drive::{DriveClient, DriveId, FileId};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = DriveClient::from_env()?;

	client.acquire_token().await?;

	show("Files owned by the service account", &client.list_files(None).await?);

	let drives = client.list_drives().await?;

	show("Shared drives", &drives);

	let drive_id = drives["drives"][0]["id"]
		.as_str()
		.map(DriveId::new)
		.ok_or_else(|| eyre!("The service account is not a member of any shared drive."))?;
	let contents = client.list_drive_contents(&drive_id).await?;

	show("Shared drive contents", &contents);
	show("Shared drive permissions", &client.list_drive_permissions(&drive_id).await?);

	if let Some(file_id) = contents["files"][0]["id"].as_str().map(FileId::new) {
		show("First file permissions", &client.list_permissions(&file_id).await?);
	}

	client.acquire_token_with_ttl(5).await?;

	show("Files after re-acquiring a token", &client.list_files(Some("files(id,name)")).await?);

	Ok(())
}

fn show(title: &str, value: &Value) {
	println!("{title}:\n{value:#}\n{}\n", "-".repeat(100));
}
