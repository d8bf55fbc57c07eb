//! Encryption adapter port (driven/secondary port)
//!
//! Wraps an external public-key encryption tool. Recipient addressing uses
//! an opaque key identifier; key material itself never passes through the
//! core. `import_key` loads one half of the key pair into the tool's
//! keyring before a pipeline runs (public key for backups, private key for
//! restores).

use std::path::Path;

/// Port trait for the external public-key encryption tool
#[async_trait::async_trait]
pub trait ICipher: Send + Sync {
    /// Encrypts `plain` to `cipher`, addressed to `recipient`
    async fn encrypt(&self, plain: &Path, cipher: &Path, recipient: &str) -> anyhow::Result<()>;

    /// Decrypts `cipher` to `plain` for `recipient`
    async fn decrypt(&self, cipher: &Path, plain: &Path, recipient: &str) -> anyhow::Result<()>;

    /// Imports a key file into the tool's keyring
    async fn import_key(&self, key_file: &Path) -> anyhow::Result<()>;
}
