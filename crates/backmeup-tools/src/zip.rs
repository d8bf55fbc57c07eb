//! Zip archiver adapter
//!
//! Wraps the `zip` and `unzip` binaries behind the
//! [`IArchiver`](backmeup_core::ports::IArchiver) port. Packing recurses
//! into directories (`-r`) and stays quiet (`-q`); unpacking overwrites
//! existing files (`-o`) so repeated restores into the same destination
//! behave predictably.

use std::path::Path;

use anyhow::Result;
use tokio::process::Command;
use tracing::debug;

use backmeup_core::ports::IArchiver;

use crate::process::run_tool;

/// Archiver backed by the system `zip`/`unzip` binaries
#[derive(Debug, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl IArchiver for ZipArchiver {
    async fn pack(&self, source: &Path, archive: &Path) -> Result<()> {
        debug!(source = %source.display(), archive = %archive.display(), "zipping");
        let mut command = Command::new("zip");
        command.arg("-q").arg("-r").arg(archive).arg(source);
        run_tool(&mut command, "zip").await
    }

    async fn unpack(&self, archive: &Path, dest: &Path) -> Result<()> {
        debug!(archive = %archive.display(), dest = %dest.display(), "unzipping");
        let mut command = Command::new("unzip");
        command.arg("-o").arg(archive).arg("-d").arg(dest);
        run_tool(&mut command, "unzip").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pack_of_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let archiver = ZipArchiver::new();

        // Fails whether or not `zip` is installed: either the spawn fails
        // or the tool exits non-zero for a source that does not exist.
        let result = archiver
            .pack(
                &dir.path().join("no-such-source"),
                &dir.path().join("out.zip"),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unpack_of_missing_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let archiver = ZipArchiver::new();

        let result = archiver
            .unpack(&dir.path().join("no-such-archive.zip"), dir.path())
            .await;
        assert!(result.is_err());
    }
}
