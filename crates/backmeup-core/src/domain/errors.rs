//! Backup error taxonomy
//!
//! Every variant here is fatal: it is reported once with enough context to
//! diagnose (operation, path or name involved) and the process terminates
//! with a non-zero status. Nothing is locally recovered or retried.
//!
//! ## Design Notes
//!
//! - Pipeline-stage failures (`ArchiveFailed`, `EncryptFailed`, ...) wrap the
//!   adapter error as `#[source]` so the top-level diagnostic carries the
//!   tool's own message without the core depending on any tool specifics.
//! - `Remote` wraps transport failures from the remote store port; those are
//!   adapter-specific and carry no further domain classification.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while backing up or restoring
#[derive(Debug, Error)]
pub enum BackupError {
    /// Invalid or incomplete runtime configuration (missing volume, key id, workspace)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// More than one non-deleted backup folder exists in the remote store
    #[error("found {count} non-deleted folders named '{name}' in the remote store, make sure it is unique")]
    DuplicateFolder {
        /// The well-known backup folder name
        name: String,
        /// How many matching folders the listing contained
        count: usize,
    },

    /// More than one non-deleted file with the same name exists under the backup folder
    #[error("found {count} non-deleted files named '{name}' in the backup folder, make sure it is unique")]
    DuplicateFile {
        /// The remote file name
        name: String,
        /// How many matching files the listing contained
        count: usize,
    },

    /// The backup source is missing, unreadable, or an empty directory
    #[error("backup source '{}' is missing, unreadable, or an empty directory", path.display())]
    EmptySource {
        /// The offending source path
        path: PathBuf,
    },

    /// The archive tool failed to pack a source path
    #[error("failed to archive '{}'", path.display())]
    ArchiveFailed {
        /// The source path being packed
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The encryption tool failed to encrypt an archive
    #[error("failed to encrypt '{}'", path.display())]
    EncryptFailed {
        /// The archive being encrypted
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The encryption tool failed to decrypt a downloaded file
    #[error("failed to decrypt '{}'", path.display())]
    DecryptFailed {
        /// The encrypted file being decrypted
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The archive tool failed to unpack a decrypted archive
    #[error("failed to unpack '{}'", path.display())]
    UnarchiveFailed {
        /// The archive being unpacked
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// No non-deleted remote file with the requested name exists
    #[error("remote file '{0}' does not exist")]
    NotFound(String),

    /// A download was requested for a name without the encrypted-backup suffix
    #[error("'{0}' is not an encrypted backup name (expected a '.gpg' suffix)")]
    InvalidFileName(String),

    /// The remote store failed at the transport level
    #[error("remote store operation failed")]
    Remote(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_folder_display() {
        let err = BackupError::DuplicateFolder {
            name: "backMeUp".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "found 2 non-deleted folders named 'backMeUp' in the remote store, make sure it is unique"
        );
    }

    #[test]
    fn test_empty_source_display() {
        let err = BackupError::EmptySource {
            path: PathBuf::from("/data/backups"),
        };
        assert!(err.to_string().contains("/data/backups"));
    }

    #[test]
    fn test_stage_failure_carries_source() {
        let err = BackupError::EncryptFailed {
            path: PathBuf::from("/tmp/backups/a.zip"),
            source: anyhow::anyhow!("gpg exited with 2"),
        };
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "gpg exited with 2");
    }

    #[test]
    fn test_remote_from_anyhow() {
        let err: BackupError = anyhow::anyhow!("connection refused").into();
        assert!(matches!(err, BackupError::Remote(_)));
    }
}
