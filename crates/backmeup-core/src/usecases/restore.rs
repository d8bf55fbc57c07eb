//! Restore use case: the download half of the synchronization engine
//!
//! Runs the inverse pipeline for a single backup object: download the
//! latest revision → decrypt → unpack into a destination directory. The
//! object name is validated before anything touches the network, and the
//! two temp files are removed whether the pipeline succeeds or aborts.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{naming, BackupError};
use crate::ports::{IArchiver, ICipher, IRemoteStore};
use crate::resolver::NamespaceResolver;
use crate::workspace::Workspace;

/// Use case for restoring one backup object from the remote store
pub struct RestoreUseCase {
    store: Arc<dyn IRemoteStore>,
    archiver: Arc<dyn IArchiver>,
    cipher: Arc<dyn ICipher>,
    resolver: NamespaceResolver,
    workspace: Workspace,
    recipient_key_id: String,
}

impl RestoreUseCase {
    /// Creates a new RestoreUseCase with the required dependencies
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

    /// Restores the remote object `remote_name` into `destination`
    ///
    /// `remote_name` must carry the encrypted-backup suffix; anything else
    /// is rejected with [`BackupError::InvalidFileName`] before any
    /// network call. The downloaded content is always the object's latest
    /// revision.
    pub async fn run(&self, remote_name: &str, destination: &Path) -> Result<(), BackupError> {
        let archive_name = naming::strip_cipher_suffix(remote_name)
            .ok_or_else(|| BackupError::InvalidFileName(remote_name.to_string()))?;

        self.workspace.ensure().await.map_err(|err| {
            BackupError::Configuration(format!(
                "cannot create workspace '{}': {err}",
                self.workspace.root().display()
            ))
        })?;

        let encrypted = self.workspace.download_path(remote_name);
        let archive = self.workspace.download_path(archive_name);

        let outcome = self
            .fetch_item(remote_name, &encrypted, &archive, destination)
            .await;

        // Cleanup runs on the success and the abort path alike
        self.workspace.remove_quietly(&encrypted).await;
        self.workspace.remove_quietly(&archive).await;
        outcome
    }

    /// Runs one object through download → decrypt → unpack
    async fn fetch_item(
        &self,
        remote_name: &str,
        encrypted: &Path,
        archive: &Path,
        destination: &Path,
    ) -> Result<(), BackupError> {
        let folder = self.resolver.resolve_folder().await?;
        let file = self
            .resolver
            .resolve_file(&folder.id, remote_name)
            .await?
            .ok_or_else(|| BackupError::NotFound(remote_name.to_string()))?;

        info!(
            "downloading '{remote_name}' to '{}'",
            destination.display()
        );
        self.store.download(&file.id, encrypted).await?;

        debug!(encrypted = %encrypted.display(), "decrypting");
        self.cipher
            .decrypt(encrypted, archive, &self.recipient_key_id)
            .await
            .map_err(|err| BackupError::DecryptFailed {
                path: encrypted.to_path_buf(),
                source: err,
            })?;

        debug!(archive = %archive.display(), "unpacking");
        self.archiver
            .unpack(archive, destination)
            .await
            .map_err(|err| BackupError::UnarchiveFailed {
                path: archive.to_path_buf(),
                source: err,
            })?;

        Ok(())
    }
}
