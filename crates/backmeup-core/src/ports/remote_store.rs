//! Remote store port (driven/secondary port)
//!
//! This module defines the thin call surface over the remote object-storage
//! API. The primary implementation targets Google Drive v3, but the trait is
//! kept provider-agnostic: the core only needs a flat listing plus create,
//! update, and download operations.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification.
//! - `update_file` overwrites content in place; the remote store records the
//!   previous content as a revision of the same object. The core never
//!   enumerates or prunes those revisions.
//! - Content travels by path, not by value: artifacts can be large, and
//!   implementations decide how to stream them.

use std::path::Path;

use crate::domain::RemoteItem;

/// Port trait for remote object-storage operations
#[async_trait::async_trait]
pub trait IRemoteStore: Send + Sync {
    /// Lists all non-deleted items the account can see, folders included
    ///
    /// The listing is flat: parent relationships are carried by each item's
    /// `parents` field, not by nesting.
    async fn list_non_deleted(&self) -> anyhow::Result<Vec<RemoteItem>>;

    /// Creates a folder with the given name at the account root
    async fn create_folder(&self, name: &str) -> anyhow::Result<RemoteItem>;

    /// Creates a file named `name` under `parent_id` with the content read from `content`
    async fn create_file(
        &self,
        name: &str,
        parent_id: &str,
        content: &Path,
    ) -> anyhow::Result<RemoteItem>;

    /// Replaces the content of the file `id`, recording a new revision
    async fn update_file(&self, id: &str, content: &Path) -> anyhow::Result<RemoteItem>;

    /// Downloads the latest revision of the file `id` to `dest`
    async fn download(&self, id: &str, dest: &Path) -> anyhow::Result<()>;
}
