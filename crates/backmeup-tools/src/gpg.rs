//! GPG cipher adapter
//!
//! Wraps the `gpg` binary behind the
//! [`ICipher`](backmeup_core::ports::ICipher) port. All invocations run
//! with `--batch` so a headless run never blocks on a prompt, and
//! encryption uses `--always-trust` because the recipient key is imported
//! from the operator's own volume rather than a web of trust.

use std::path::Path;

use anyhow::Result;
use tokio::process::Command;
use tracing::debug;

use backmeup_core::ports::ICipher;

use crate::process::run_tool;

/// Cipher backed by the system `gpg` binary
#[derive(Debug, Default)]
pub struct GpgCipher;

impl GpgCipher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ICipher for GpgCipher {
    async fn encrypt(&self, plain: &Path, cipher: &Path, recipient: &str) -> Result<()> {
        debug!(plain = %plain.display(), cipher = %cipher.display(), "encrypting");
        let mut command = Command::new("gpg");
        command
            .arg("--batch")
            .arg("--yes")
            .arg("--output")
            .arg(cipher)
            .arg("--encrypt")
            .arg("--always-trust")
            .arg("--recipient")
            .arg(recipient)
            .arg(plain);
        run_tool(&mut command, "gpg --encrypt").await
    }

    async fn decrypt(&self, cipher: &Path, plain: &Path, recipient: &str) -> Result<()> {
        debug!(cipher = %cipher.display(), plain = %plain.display(), "decrypting");
        let mut command = Command::new("gpg");
        command
            .arg("--batch")
            .arg("--yes")
            .arg("--output")
            .arg(plain)
            .arg("--decrypt")
            .arg("--always-trust")
            .arg("--recipient")
            .arg(recipient)
            .arg(cipher);
        run_tool(&mut command, "gpg --decrypt").await
    }

    async fn import_key(&self, key_file: &Path) -> Result<()> {
        debug!(key_file = %key_file.display(), "importing key");
        let mut command = Command::new("gpg");
        command.arg("--batch").arg("--import").arg(key_file);
        run_tool(&mut command, "gpg --import").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decrypt_of_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cipher = GpgCipher::new();

        let result = cipher
            .decrypt(
                &dir.path().join("no-such-file.gpg"),
                &dir.path().join("out.zip"),
                "TESTKEY",
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_import_of_missing_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cipher = GpgCipher::new();

        let result = cipher.import_key(&dir.path().join("no-such-key.asc")).await;
        assert!(result.is_err());
    }
}
