//! Use cases (interactors) for backMeUp
//!
//! This module contains the application use cases that orchestrate
//! the backup pipelines through port interfaces. Use cases are thin
//! coordinators: stage work goes to the adapters, namespace decisions
//! to the resolver, and temp-file bookkeeping to the workspace.
//!
//! ## Use Cases
//!
//! - [`BackupUseCase`] - Archive, encrypt and upload a file or directory
//! - [`RestoreUseCase`] - Download, decrypt and unpack one backup object

pub mod backup;
pub mod restore;

pub use backup::BackupUseCase;
pub use restore::RestoreUseCase;
