//! Remote item DTO and well-known remote constants
//!
//! [`RemoteItem`] is a port-level DTO: it mirrors what the remote store's
//! listing surface reports about a file or folder, and is owned by the
//! remote store, not by this system. The core only observes and mutates
//! remote items through the [`IRemoteStore`](crate::ports::IRemoteStore)
//! port.

use serde::{Deserialize, Serialize};

/// Name of the single well-known remote folder holding all backup objects
pub const BACKUP_FOLDER_NAME: &str = "backMeUp";

/// Mime-type sentinel the remote store uses to mark folders
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// One file or folder as reported by the remote store's listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    /// Store-assigned item identifier
    pub id: String,
    /// Item name (unique among non-deleted siblings by convention, not enforced remotely)
    pub name: String,
    /// Mime type; folders carry the reserved sentinel value
    pub mime_type: String,
    /// Identifiers of the item's parent folders
    pub parents: Vec<String>,
    /// Whether the item has been moved to the store's trash
    pub trashed: bool,
}

impl RemoteItem {
    /// Returns true if the item is a folder
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(mime_type: &str) -> RemoteItem {
        RemoteItem {
            id: "item-1".to_string(),
            name: "documents".to_string(),
            mime_type: mime_type.to_string(),
            parents: vec![],
            trashed: false,
        }
    }

    #[test]
    fn test_folder_detection() {
        assert!(item(FOLDER_MIME_TYPE).is_folder());
        assert!(!item("application/octet-stream").is_folder());
        assert!(!item("").is_folder());
    }
}
