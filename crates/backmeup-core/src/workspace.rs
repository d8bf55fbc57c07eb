//! Scratch workspace for transient pipeline artifacts
//!
//! Every pipeline stage writes its intermediate file into one scratch
//! directory, under a name derived from the backup naming convention.
//! The workspace hands out those deterministic paths and performs the
//! best-effort deletes the cleanup steps rely on.
//!
//! The workspace is never purged across runs: files left behind by a
//! crashed process stay where they are so they can be inspected.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::naming;

/// Owner of the scratch directory for intermediate backup artifacts
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Creates a workspace rooted at `root`; nothing touches the disk yet
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The scratch directory root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the scratch directory if it does not exist yet
    ///
    /// Idempotent: a pre-existing directory is not an error.
    pub async fn ensure(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        debug!(root = %self.root.display(), "workspace ready");
        Ok(())
    }

    /// Archive path for a logical item name: `<root>/<name>.zip`
    pub fn archive_path(&self, logical_name: &str) -> PathBuf {
        self.root
            .join(format!("{logical_name}{}", naming::ARCHIVE_SUFFIX))
    }

    /// Encrypted-archive path for a logical item name: `<root>/<name>.zip.gpg`
    pub fn cipher_path(&self, logical_name: &str) -> PathBuf {
        self.root.join(naming::remote_name(logical_name))
    }

    /// Download path for a remote object name: `<root>/<remote_name>`
    pub fn download_path(&self, remote_name: &str) -> PathBuf {
        self.root.join(remote_name)
    }

    /// Deletes a file, tolerating its absence
    ///
    /// Cleanup must run on both the success and the failure path of a
    /// pipeline, where some intermediates may never have been created;
    /// a missing file is therefore not an error. Any other failure is
    /// logged and otherwise ignored.
    pub async fn remove_quietly(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!(path = %path.display(), "removed temp artifact"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => warn!(path = %path.display(), %err, "could not remove temp artifact"),
        }
    }
}
