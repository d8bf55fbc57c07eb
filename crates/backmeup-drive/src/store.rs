//! DriveStore - IRemoteStore implementation for the Google Drive API
//!
//! Wraps the [`DriveClient`] and maps its wire-level [`DriveFile`]
//! resources onto the domain's [`RemoteItem`] DTO.
//!
//! ## Design Notes
//!
//! - The Drive listing is taken as-is and trashed items are filtered
//!   client-side, so the non-deleted view is decided in exactly one place
//!   regardless of what query predicates the API call used.
//! - Missing optional wire fields map to empty defaults; a file without a
//!   `trashed` flag is treated as live.

use std::path::Path;

use anyhow::Result;

use backmeup_core::domain::RemoteItem;
use backmeup_core::ports::IRemoteStore;

use crate::client::{DriveClient, DriveFile};

/// Converts a wire-level [`DriveFile`] into a domain [`RemoteItem`]
fn to_remote_item(file: DriveFile) -> RemoteItem {
    RemoteItem {
        id: file.id,
        name: file.name,
        mime_type: file.mime_type.unwrap_or_default(),
        parents: file.parents.unwrap_or_default(),
        trashed: file.trashed.unwrap_or(false),
    }
}

/// Remote store implementation that delegates to the Google Drive API
pub struct DriveStore {
    client: DriveClient,
}

impl DriveStore {
    /// Creates a new `DriveStore` wrapping the given [`DriveClient`]
    pub fn new(client: DriveClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl IRemoteStore for DriveStore {
    async fn list_non_deleted(&self) -> Result<Vec<RemoteItem>> {
        let files = self.client.list_files().await?;
        Ok(files
            .into_iter()
            .map(to_remote_item)
            .filter(|item| !item.trashed)
            .collect())
    }

    async fn create_folder(&self, name: &str) -> Result<RemoteItem> {
        Ok(to_remote_item(self.client.create_folder(name).await?))
    }

    async fn create_file(&self, name: &str, parent_id: &str, content: &Path) -> Result<RemoteItem> {
        Ok(to_remote_item(
            self.client.create_file(name, parent_id, content).await?,
        ))
    }

    async fn update_file(&self, id: &str, content: &Path) -> Result<RemoteItem> {
        Ok(to_remote_item(self.client.update_file(id, content).await?))
    }

    async fn download(&self, id: &str, dest: &Path) -> Result<()> {
        self.client.download(id, dest).await
    }
}
