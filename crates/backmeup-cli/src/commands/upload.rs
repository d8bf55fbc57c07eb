//! Upload command - Archive, encrypt and upload backups
//!
//! Provides the `backmeup upload` CLI command which:
//! 1. Builds the validated configuration from the environment
//! 2. Reads the stored access token and imports the public GPG key
//! 3. Wires the Drive store and the tool adapters into the backup use case
//! 4. Runs the upload pipeline for the given source path

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use backmeup_core::config::Config;
use backmeup_core::ports::ICipher;
use backmeup_core::usecases::BackupUseCase;
use backmeup_core::workspace::Workspace;
use backmeup_drive::auth::access_token_from_file;
use backmeup_drive::client::DriveClient;
use backmeup_drive::store::DriveStore;
use backmeup_tools::gpg::GpgCipher;
use backmeup_tools::zip::ZipArchiver;

#[derive(Debug, Args)]
pub struct UploadCommand {
    /// File or directory to back up
    pub source_path: PathBuf,
}

impl UploadCommand {
    /// Execute the upload command
    pub async fn execute(&self) -> Result<()> {
        let config = Config::from_env()?;
        info!(volume = %config.volume().display(), "configuration loaded");

        let token = access_token_from_file(&config.token_path()).await?;

        let cipher = Arc::new(GpgCipher::new());
        cipher
            .import_key(&config.public_key_path())
            .await
            .context("failed to import the public GPG key")?;

        let usecase = BackupUseCase::new(
            Arc::new(DriveStore::new(DriveClient::new(token))),
            Arc::new(ZipArchiver::new()),
            cipher,
            Workspace::new(&config.workspace_dir),
            &config.recipient_key_id,
        );

        usecase.run(&self.source_path).await?;
        Ok(())
    }
}
