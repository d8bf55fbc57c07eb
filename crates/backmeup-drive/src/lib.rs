//! backMeUp Drive - Google Drive API client
//!
//! Provides the async adapter for the remote half of the backup pipeline:
//! - Loading the stored OAuth access token
//! - Listing, creating, updating and downloading Drive files
//! - The [`IRemoteStore`](backmeup_core::ports::IRemoteStore) port implementation
//!
//! ## Modules
//!
//! - [`auth`] - Stored-token loading (the consent flow itself lives outside this system)
//! - [`client`] - Typed HTTP client for the Drive v3 API
//! - [`store`] - Port implementation mapping Drive resources to domain items

pub mod auth;
pub mod client;
pub mod store;
