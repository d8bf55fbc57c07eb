//! Integration tests for backmeup-drive
//!
//! Uses wiremock to simulate the Google Drive v3 API and verifies
//! end-to-end behavior of the DriveClient and the DriveStore port
//! implementation: listing, folder/file creation, content updates,
//! and downloads.

mod common;

mod test_download;
mod test_listing;
mod test_mutations;
