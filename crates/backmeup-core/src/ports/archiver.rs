//! Archive adapter port (driven/secondary port)
//!
//! Wraps an external compression tool as an injected capability so the
//! pipelines are testable without invoking real binaries. The tool is a
//! black box: the core only relies on `unpack(pack(x))` restoring `x`.

use std::path::Path;

/// Port trait for the external compression tool
#[async_trait::async_trait]
pub trait IArchiver: Send + Sync {
    /// Packs the file or directory at `source` into a single archive at `archive`
    async fn pack(&self, source: &Path, archive: &Path) -> anyhow::Result<()>;

    /// Unpacks the archive at `archive` into the directory `dest`
    async fn unpack(&self, archive: &Path, dest: &Path) -> anyhow::Result<()>;
}
