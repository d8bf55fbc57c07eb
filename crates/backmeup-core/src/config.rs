//! Configuration for backMeUp
//!
//! The configuration is built exactly once at process start and passed by
//! reference into the use cases and adapters; pipeline logic never reads
//! the environment on its own.
//!
//! All secrets live on a mandatory volume mounted into the container:
//! the GPG key pair (`key.pub.asc`, `key.sec.asc`) and the stored OAuth
//! token (`token.json`). The recipient key id comes from the `GPG_KEY_ID`
//! environment variable.

use std::path::{Path, PathBuf};

use crate::domain::BackupError;

/// Default mount point of the mandatory secrets volume
pub const DEFAULT_VOLUME_PATH: &str = "/mandatoryVolume";

/// Default scratch directory for transient pipeline artifacts
pub const DEFAULT_WORKSPACE_DIR: &str = "/tmp/backups";

/// Environment variable overriding the mandatory volume mount point
const VOLUME_ENV: &str = "BACKMEUP_VOLUME";

/// Environment variable overriding the scratch directory
const WORKSPACE_ENV: &str = "BACKMEUP_WORKSPACE";

/// Environment variable naming the GPG recipient key
const KEY_ID_ENV: &str = "GPG_KEY_ID";

/// Runtime configuration, validated at construction
#[derive(Debug, Clone)]
pub struct Config {
    /// Mount point of the mandatory secrets volume
    pub mandatory_volume: PathBuf,
    /// GPG key id backups are encrypted to / decrypted with
    pub recipient_key_id: String,
    /// Scratch directory for transient pipeline artifacts
    pub workspace_dir: PathBuf,
}

impl Config {
    /// Builds and validates a configuration from explicit parts
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Configuration`] when the mandatory volume is
    /// missing or not a directory, or when the recipient key id is empty.
    pub fn new(
        mandatory_volume: impl Into<PathBuf>,
        recipient_key_id: impl Into<String>,
        workspace_dir: impl Into<PathBuf>,
    ) -> Result<Self, BackupError> {
        let mandatory_volume = mandatory_volume.into();
        let recipient_key_id = recipient_key_id.into();

        if !mandatory_volume.exists() {
            return Err(BackupError::Configuration(format!(
                "mandatory volume was not passed, '{}' missing",
                mandatory_volume.display()
            )));
        }
        if !mandatory_volume.is_dir() {
            return Err(BackupError::Configuration(format!(
                "mandatory volume '{}' should be a directory, not a file",
                mandatory_volume.display()
            )));
        }
        if recipient_key_id.is_empty() {
            return Err(BackupError::Configuration(format!(
                "{KEY_ID_ENV} is not set"
            )));
        }

        Ok(Self {
            mandatory_volume,
            recipient_key_id,
            workspace_dir: workspace_dir.into(),
        })
    }

    /// Builds the configuration from the process environment
    ///
    /// Reads `GPG_KEY_ID` (mandatory) plus the optional `BACKMEUP_VOLUME`
    /// and `BACKMEUP_WORKSPACE` overrides, then validates via [`Config::new`].
    pub fn from_env() -> Result<Self, BackupError> {
        let volume = std::env::var(VOLUME_ENV).unwrap_or_else(|_| DEFAULT_VOLUME_PATH.to_string());
        let workspace =
            std::env::var(WORKSPACE_ENV).unwrap_or_else(|_| DEFAULT_WORKSPACE_DIR.to_string());
        let key_id = std::env::var(KEY_ID_ENV).unwrap_or_default();
        Self::new(volume, key_id, workspace)
    }

    /// Path of the public key used before uploads
    pub fn public_key_path(&self) -> PathBuf {
        self.mandatory_volume.join("key.pub.asc")
    }

    /// Path of the private key used before downloads
    pub fn private_key_path(&self) -> PathBuf {
        self.mandatory_volume.join("key.sec.asc")
    }

    /// Path of the stored OAuth token
    pub fn token_path(&self) -> PathBuf {
        self.mandatory_volume.join("token.json")
    }

    /// Mount point of the mandatory secrets volume
    pub fn volume(&self) -> &Path {
        &self.mandatory_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let volume = tempfile::tempdir().unwrap();
        let config = Config::new(volume.path(), "ABCDEF01", "/tmp/backups").unwrap();
        assert_eq!(config.recipient_key_id, "ABCDEF01");
        assert_eq!(config.public_key_path(), volume.path().join("key.pub.asc"));
        assert_eq!(config.private_key_path(), volume.path().join("key.sec.asc"));
        assert_eq!(config.token_path(), volume.path().join("token.json"));
    }

    #[test]
    fn test_missing_volume_rejected() {
        let err = Config::new("/definitely/not/mounted", "ABCDEF01", "/tmp/backups").unwrap_err();
        assert!(matches!(err, BackupError::Configuration(_)));
        assert!(err.to_string().contains("/definitely/not/mounted"));
    }

    #[test]
    fn test_volume_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("volume");
        std::fs::write(&file, b"not a directory").unwrap();

        let err = Config::new(&file, "ABCDEF01", "/tmp/backups").unwrap_err();
        assert!(err.to_string().contains("should be a directory"));
    }

    #[test]
    fn test_empty_key_id_rejected() {
        let volume = tempfile::tempdir().unwrap();
        let err = Config::new(volume.path(), "", "/tmp/backups").unwrap_err();
        assert!(err.to_string().contains("GPG_KEY_ID"));
    }
}
