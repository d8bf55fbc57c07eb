//! Remote namespace resolver
//!
//! The remote store offers no transactional guarantees and no uniqueness
//! constraints, so backMeUp maintains an implicit invariant on top of it:
//! at most one non-deleted folder named [`BACKUP_FOLDER_NAME`] may exist,
//! and within it at most one non-deleted file per name. The resolver is
//! the single place where that invariant is checked; a violation means an
//! operator has to intervene, so it is always fatal and never repaired
//! automatically.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{BackupError, RemoteItem, BACKUP_FOLDER_NAME};
use crate::ports::IRemoteStore;

/// Finds or creates the backup folder and looks up files inside it
pub struct NamespaceResolver {
    store: Arc<dyn IRemoteStore>,
}

impl NamespaceResolver {
    /// Creates a resolver over the given remote store
    pub fn new(store: Arc<dyn IRemoteStore>) -> Self {
        Self { store }
    }

    /// Resolves the single remote backup folder
    ///
    /// Lists all non-deleted items and filters to folders named
    /// [`BACKUP_FOLDER_NAME`]:
    /// - exactly one match is reused,
    /// - zero matches triggers a lazy create (not transactionally safe
    ///   against a concurrent creator),
    /// - more than one match fails with [`BackupError::DuplicateFolder`]
    ///   without issuing a create call.
    pub async fn resolve_folder(&self) -> Result<RemoteItem, BackupError> {
        let items = self.store.list_non_deleted().await?;
        let mut matches: Vec<RemoteItem> = items
            .into_iter()
            .filter(|item| item.is_folder() && item.name == BACKUP_FOLDER_NAME)
            .collect();

        match matches.len() {
            1 => {
                debug!("folder '{BACKUP_FOLDER_NAME}' already exists, reusing it");
                Ok(matches.remove(0))
            }
            0 => {
                info!("creating remote folder '{BACKUP_FOLDER_NAME}'");
                Ok(self.store.create_folder(BACKUP_FOLDER_NAME).await?)
            }
            count => Err(BackupError::DuplicateFolder {
                name: BACKUP_FOLDER_NAME.to_string(),
                count,
            }),
        }
    }

    /// Resolves the at-most-one non-deleted file named `name` under `parent_id`
    ///
    /// A match must be a non-folder item whose parent set is exactly
    /// `[parent_id]`. More than one match fails with
    /// [`BackupError::DuplicateFile`].
    pub async fn resolve_file(
        &self,
        parent_id: &str,
        name: &str,
    ) -> Result<Option<RemoteItem>, BackupError> {
        let items = self.store.list_non_deleted().await?;
        let mut matches: Vec<RemoteItem> = items
            .into_iter()
            .filter(|item| !item.is_folder() && item.name == name && item.parents == [parent_id])
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            count => Err(BackupError::DuplicateFile {
                name: name.to_string(),
                count,
            }),
        }
    }
}
