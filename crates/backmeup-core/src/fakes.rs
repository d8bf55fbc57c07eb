//! Fake port implementations shared by the core unit tests
//!
//! `FakeStore` keeps remote items and their content in memory and counts
//! calls per operation, so tests can assert not just outcomes but which
//! store operations a pipeline issued. `FakeArchiver` and `FakeCipher`
//! apply real (if simplistic) reversible transformations, which lets the
//! round-trip tests verify losslessness end to end without external tools.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Context};

use crate::domain::{RemoteItem, FOLDER_MIME_TYPE};
use crate::ports::{IArchiver, ICipher, IRemoteStore};

// ============================================================================
// FakeStore
// ============================================================================

/// In-memory remote store with per-operation call counters
#[derive(Default)]
pub(crate) struct FakeStore {
    items: Mutex<Vec<RemoteItem>>,
    contents: Mutex<HashMap<String, Vec<u8>>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    create_folder_calls: AtomicUsize,
    create_file_calls: AtomicUsize,
    update_file_calls: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}-{n}")
    }

    /// Adds a non-deleted folder and returns its id
    pub fn seed_folder(&self, name: &str) -> String {
        let id = self.fresh_id("folder");
        self.items.lock().unwrap().push(RemoteItem {
            id: id.clone(),
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: vec![],
            trashed: false,
        });
        id
    }

    /// Adds a trashed folder, which listings must not report
    pub fn seed_trashed_folder(&self, name: &str) {
        let id = self.fresh_id("folder");
        self.items.lock().unwrap().push(RemoteItem {
            id,
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: vec![],
            trashed: true,
        });
    }

    /// Adds a non-deleted file with content and returns its id
    pub fn seed_file(&self, name: &str, parent_id: &str, content: &[u8]) -> String {
        let id = self.fresh_id("file");
        self.items.lock().unwrap().push(RemoteItem {
            id: id.clone(),
            name: name.to_string(),
            mime_type: "application/octet-stream".to_string(),
            parents: vec![parent_id.to_string()],
            trashed: false,
        });
        self.contents
            .lock()
            .unwrap()
            .insert(id.clone(), content.to_vec());
        id
    }

    /// Content currently stored for the file `id`
    pub fn content(&self, id: &str) -> Option<Vec<u8>> {
        self.contents.lock().unwrap().get(id).cloned()
    }

    /// All non-deleted files named `name`
    pub fn files_named(&self, name: &str) -> Vec<RemoteItem> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| !i.is_folder() && !i.trashed && i.name == name)
            .cloned()
            .collect()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_folder_calls(&self) -> usize {
        self.create_folder_calls.load(Ordering::SeqCst)
    }

    pub fn create_file_calls(&self) -> usize {
        self.create_file_calls.load(Ordering::SeqCst)
    }

    pub fn update_file_calls(&self) -> usize {
        self.update_file_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IRemoteStore for FakeStore {
    async fn list_non_deleted(&self) -> anyhow::Result<Vec<RemoteItem>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| !i.trashed)
            .cloned()
            .collect())
    }

    async fn create_folder(&self, name: &str) -> anyhow::Result<RemoteItem> {
        self.create_folder_calls.fetch_add(1, Ordering::SeqCst);
        let item = RemoteItem {
            id: self.fresh_id("folder"),
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: vec![],
            trashed: false,
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn create_file(
        &self,
        name: &str,
        parent_id: &str,
        content: &Path,
    ) -> anyhow::Result<RemoteItem> {
        self.create_file_calls.fetch_add(1, Ordering::SeqCst);
        let bytes = std::fs::read(content)
            .with_context(|| format!("fake store cannot read '{}'", content.display()))?;
        let item = RemoteItem {
            id: self.fresh_id("file"),
            name: name.to_string(),
            mime_type: "application/octet-stream".to_string(),
            parents: vec![parent_id.to_string()],
            trashed: false,
        };
        self.items.lock().unwrap().push(item.clone());
        self.contents.lock().unwrap().insert(item.id.clone(), bytes);
        Ok(item)
    }

    async fn update_file(&self, id: &str, content: &Path) -> anyhow::Result<RemoteItem> {
        self.update_file_calls.fetch_add(1, Ordering::SeqCst);
        let bytes = std::fs::read(content)
            .with_context(|| format!("fake store cannot read '{}'", content.display()))?;
        let item = self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned();
        match item {
            Some(item) => {
                self.contents.lock().unwrap().insert(id.to_string(), bytes);
                Ok(item)
            }
            None => bail!("no remote file with id '{id}'"),
        }
    }

    async fn download(&self, id: &str, dest: &Path) -> anyhow::Result<()> {
        let bytes = self
            .contents
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .with_context(|| format!("no content stored for id '{id}'"))?;
        std::fs::write(dest, bytes)
            .with_context(|| format!("fake store cannot write '{}'", dest.display()))?;
        Ok(())
    }
}

// ============================================================================
// FakeArchiver
// ============================================================================

/// Archiver that packs files into a JSON map of name to bytes
///
/// Handles a single file or one directory level, which is all the
/// pipelines ever feed it.
#[derive(Default)]
pub(crate) struct FakeArchiver {
    pack_calls: AtomicUsize,
}

impl FakeArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pack_calls(&self) -> usize {
        self.pack_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IArchiver for FakeArchiver {
    async fn pack(&self, source: &Path, archive: &Path) -> anyhow::Result<()> {
        self.pack_calls.fetch_add(1, Ordering::SeqCst);
        let mut entries: HashMap<String, Vec<u8>> = HashMap::new();
        if source.is_dir() {
            for entry in std::fs::read_dir(source)? {
                let entry = entry?;
                if entry.path().is_file() {
                    entries.insert(
                        entry.file_name().to_string_lossy().into_owned(),
                        std::fs::read(entry.path())?,
                    );
                }
            }
        } else {
            let name = source
                .file_name()
                .context("source has no file name")?
                .to_string_lossy()
                .into_owned();
            entries.insert(name, std::fs::read(source)?);
        }
        std::fs::write(archive, serde_json::to_vec(&entries)?)?;
        Ok(())
    }

    async fn unpack(&self, archive: &Path, dest: &Path) -> anyhow::Result<()> {
        let entries: HashMap<String, Vec<u8>> =
            serde_json::from_slice(&std::fs::read(archive)?)?;
        std::fs::create_dir_all(dest)?;
        for (name, bytes) in entries {
            std::fs::write(dest.join(name), bytes)?;
        }
        Ok(())
    }
}

// ============================================================================
// FakeCipher
// ============================================================================

const FAKE_CIPHER_MAGIC: &[u8] = b"FAKEGPG:";

/// Cipher that prefixes content with a recipient header
///
/// Decryption fails when the recipient does not match the one used for
/// encryption, so tests also cover recipient propagation.
#[derive(Default)]
pub(crate) struct FakeCipher;

impl FakeCipher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ICipher for FakeCipher {
    async fn encrypt(&self, plain: &Path, cipher: &Path, recipient: &str) -> anyhow::Result<()> {
        let mut out = Vec::from(FAKE_CIPHER_MAGIC);
        out.extend_from_slice(recipient.as_bytes());
        out.push(b'\n');
        out.extend_from_slice(&std::fs::read(plain)?);
        std::fs::write(cipher, out)?;
        Ok(())
    }

    async fn decrypt(&self, cipher: &Path, plain: &Path, recipient: &str) -> anyhow::Result<()> {
        let bytes = std::fs::read(cipher)?;
        let mut expected = Vec::from(FAKE_CIPHER_MAGIC);
        expected.extend_from_slice(recipient.as_bytes());
        expected.push(b'\n');
        match bytes.strip_prefix(expected.as_slice()) {
            Some(rest) => {
                std::fs::write(plain, rest)?;
                Ok(())
            }
            None => bail!("content is not addressed to '{recipient}'"),
        }
    }

    async fn import_key(&self, _key_file: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Failing adapters
// ============================================================================

/// Archiver whose pack always fails, for abort-path tests
pub(crate) struct FailingArchiver;

#[async_trait::async_trait]
impl IArchiver for FailingArchiver {
    async fn pack(&self, _source: &Path, _archive: &Path) -> anyhow::Result<()> {
        bail!("archive tool exited with 12")
    }

    async fn unpack(&self, _archive: &Path, _dest: &Path) -> anyhow::Result<()> {
        bail!("archive tool exited with 12")
    }
}

/// Cipher whose encrypt/decrypt always fail, for abort-path tests
pub(crate) struct FailingCipher;

#[async_trait::async_trait]
impl ICipher for FailingCipher {
    async fn encrypt(&self, _plain: &Path, _cipher: &Path, _recipient: &str) -> anyhow::Result<()> {
        bail!("encryption tool exited with 2")
    }

    async fn decrypt(&self, _cipher: &Path, _plain: &Path, _recipient: &str) -> anyhow::Result<()> {
        bail!("encryption tool exited with 2")
    }

    async fn import_key(&self, _key_file: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}
