//! Card access layer for the DNIe
//!
//! This crate provides the minimal card-side surface that the CWA-14890
//! credential provider needs: absolute file paths, a transport trait for
//! selecting and reading card files, and a bounded single-shot file read.
//!
//! ## Overview
//!
//! The DNIe stores its component certificates in elementary files below the
//! master file. Establishing a secure channel only ever requires selecting
//! one of those files and reading its declared length, so the transport
//! trait here is deliberately narrow:
//!
//! - [`FilePath`] — an absolute path made of 2-byte file identifiers
//! - [`CardTransport`] — select/read/serial access to one physical card
//! - [`read_file`] — select a file and read its declared size in one pass
//!
//! APDU formatting, retries and timeouts all belong to the implementation
//! of [`CardTransport`], not to this crate.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::Bytes;

mod file;
mod path;
mod reader;
pub mod transport;

pub use file::{FileInfo, FileKind};
pub use path::{FilePath, PathError};
pub use reader::{ReadError, read_file};
pub use transport::{CardTransport, TransportError};

#[cfg(any(test, feature = "mock"))]
pub use transport::mock::MockCard;

/// Personalisation state of a DNIe card.
///
/// Cards leave the factory blank, pass through an administrative phase and
/// are then personalised for the citizen. Only a [`CardType::User`] card
/// carries the credential material the secure channel relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    /// Factory-fresh card without personalisation
    Blank,
    /// Card in the administrative personalisation phase
    Admin,
    /// Personalised citizen card
    User,
    /// Card that has been irreversibly terminated
    Terminated,
}
