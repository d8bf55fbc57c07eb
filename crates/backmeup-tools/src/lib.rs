//! backMeUp Tools - External tool adapters
//!
//! Implements the core's archiver and cipher ports by shelling out to the
//! external binaries the backup format is built on:
//! - [`zip`] - `zip`/`unzip` for packing and unpacking
//! - [`gpg`] - `gpg` for public-key encryption, decryption, and key import
//!
//! Both adapters treat the tools as black boxes: a non-zero exit status is
//! a failure, and the tool's stderr travels up inside the error.

pub mod gpg;
pub mod zip;

mod process;
