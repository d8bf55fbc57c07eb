//! Backup use case: the upload half of the synchronization engine
//!
//! Enumerates the backup items under a root path and drives each one
//! through the archive → encrypt → publish pipeline, strictly one item
//! at a time. Publishing is create-or-update: a remote file that already
//! carries the item's name gets a new revision instead of a sibling.
//!
//! ## Failure posture
//!
//! The run is fail-fast: the first failing stage aborts the whole run
//! with the matching [`BackupError`]. Items published before the failure
//! stay published; the failing item's temp artifacts are removed before
//! the error propagates, so no archive or plaintext-derived file ever
//! outlives its item's pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{naming, BackupError};
use crate::ports::{IArchiver, ICipher, IRemoteStore};
use crate::resolver::NamespaceResolver;
use crate::workspace::Workspace;

/// Use case for backing up a file or directory into the remote store
pub struct BackupUseCase {
    store: Arc<dyn IRemoteStore>,
    archiver: Arc<dyn IArchiver>,
    cipher: Arc<dyn ICipher>,
    resolver: NamespaceResolver,
    workspace: Workspace,
    recipient_key_id: String,
}

impl BackupUseCase {
    /// Creates a new BackupUseCase with the required dependencies
    ///
    /// # Arguments
    ///
    /// * `store` - Remote object storage the encrypted archives are published to
    /// * `archiver` - External compression tool adapter
    /// * `cipher` - External public-key encryption tool adapter
    /// * `workspace` - Scratch directory for intermediate artifacts
    /// * `recipient_key_id` - Key the encryption stage addresses
    pub fn new(
        store: Arc<dyn IRemoteStore>,
        archiver: Arc<dyn IArchiver>,
        cipher: Arc<dyn ICipher>,
        workspace: Workspace,
        recipient_key_id: impl Into<String>,
    ) -> Self {
        Self {
            resolver: NamespaceResolver::new(store.clone()),
            store,
            archiver,
            cipher,
            workspace,
            recipient_key_id: recipient_key_id.into(),
        }
    }

    /// Backs up everything under `root`
    ///
    /// A directory root is backed up entry by entry; a file root is a
    /// single item. An absent root or an empty directory is rejected with
    /// [`BackupError::EmptySource`] before any archive, encrypt, or
    /// network work happens.
    pub async fn run(&self, root: &Path) -> Result<(), BackupError> {
        let (base, names) = enumerate_items(root).await?;
        self.workspace.ensure().await.map_err(|err| {
            BackupError::Configuration(format!(
                "cannot create workspace '{}': {err}",
                self.workspace.root().display()
            ))
        })?;

        let total = names.len();
        info!("found {total} directories/files to back up");

        for (index, logical_name) in names.iter().enumerate() {
            let source = item_source_path(&base, logical_name);
            let archive = self.workspace.archive_path(logical_name);
            let encrypted = self.workspace.cipher_path(logical_name);

            let outcome = self
                .publish_item(&source, logical_name, &archive, &encrypted)
                .await;

            // Cleanup runs on the success and the abort path alike
            self.workspace.remove_quietly(&archive).await;
            self.workspace.remove_quietly(&encrypted).await;
            outcome?;

            info!("{}/{} items published", index + 1, total);
        }

        info!("backup finished");
        Ok(())
    }

    /// Runs one item through archive → encrypt → publish
    async fn publish_item(
        &self,
        source: &Path,
        logical_name: &str,
        archive: &Path,
        encrypted: &Path,
    ) -> Result<(), BackupError> {
        debug!(source = %source.display(), archive = %archive.display(), "packing");
        self.archiver
            .pack(source, archive)
            .await
            .map_err(|err| BackupError::ArchiveFailed {
                path: source.to_path_buf(),
                source: err,
            })?;

        debug!(archive = %archive.display(), "encrypting");
        self.cipher
            .encrypt(archive, encrypted, &self.recipient_key_id)
            .await
            .map_err(|err| BackupError::EncryptFailed {
                path: archive.to_path_buf(),
                source: err,
            })?;

        let remote_name = naming::remote_name(logical_name);
        let folder = self.resolver.resolve_folder().await?;
        match self.resolver.resolve_file(&folder.id, &remote_name).await? {
            Some(existing) => {
                info!("uploading a new revision of '{remote_name}'");
                self.store.update_file(&existing.id, encrypted).await?;
            }
            None => {
                info!("uploading '{remote_name}'");
                self.store
                    .create_file(&remote_name, &folder.id, encrypted)
                    .await?;
            }
        }
        Ok(())
    }
}

/// Enumerates the backup items for `root`
///
/// Returns the base directory the items live in and their names in sorted
/// order. Rejects an absent root, an unreadable root, and an empty
/// directory.
async fn enumerate_items(root: &Path) -> Result<(PathBuf, Vec<String>), BackupError> {
    let empty = || BackupError::EmptySource {
        path: root.to_path_buf(),
    };

    let metadata = tokio::fs::metadata(root).await.map_err(|_| empty())?;
    if metadata.is_dir() {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(root).await.map_err(|_| empty())?;
        while let Some(entry) = entries.next_entry().await.map_err(|_| empty())? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        if names.is_empty() {
            return Err(empty());
        }
        names.sort();
        Ok((root.to_path_buf(), names))
    } else {
        let name = root
            .file_name()
            .ok_or_else(empty)?
            .to_string_lossy()
            .into_owned();
        let base = root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok((base, vec![name]))
    }
}

/// Joins an item name onto its base directory
///
/// Concatenates naively with a single separator, then collapses the
/// doubled leading separator a root base of `/` produces.
fn item_source_path(base: &Path, name: &str) -> PathBuf {
    let joined = format!("{}/{}", base.display(), name);
    match joined.strip_prefix("//") {
        Some(rest) => {
            debug!("collapsing doubled leading separator in '{joined}'");
            PathBuf::from(format!("/{rest}"))
        }
        None => PathBuf::from(joined),
    }
}
