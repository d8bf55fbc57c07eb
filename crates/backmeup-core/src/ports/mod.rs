//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IRemoteStore`] - Remote object storage (Google Drive, future providers)
//! - [`IArchiver`] - External compression tool (zip)
//! - [`ICipher`] - External public-key encryption tool (gpg)

pub mod archiver;
pub mod cipher;
pub mod remote_store;

pub use archiver::IArchiver;
pub use cipher::ICipher;
pub use remote_store::IRemoteStore;
