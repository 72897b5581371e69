//! Transport trait for card file access
//!
//! This module abstracts the card-side operations the credential provider
//! needs. Implementations sit on top of whatever APDU plumbing the host
//! application uses; this trait has no knowledge of command encoding.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::fmt;

use bytes::Bytes;
pub use error::TransportError;
use tracing::{debug, trace};

use crate::{CardType, FileInfo, FilePath};

/// Trait for file-level access to one physical card.
///
/// All operations are blocking and may perform card I/O. Implementations
/// must not retry internally; retry policy belongs to the caller driving
/// the secure-channel handshake.
pub trait CardTransport: Send + fmt::Debug {
    /// Select the file at `path` and return its metadata.
    ///
    /// Selecting a dedicated file is not an error; the returned metadata
    /// marks it as a directory node.
    fn select_file(&mut self, path: &FilePath) -> Result<FileInfo, TransportError> {
        trace!(path = %path, "selecting file");
        let result = self.do_select_file(path);
        match &result {
            Ok(info) => trace!(kind = ?info.kind, size = info.size, "file selected"),
            Err(e) => debug!(path = %path, error = ?e, "select failed"),
        }
        result
    }

    /// Internal implementation of `select_file`.
    /// This is the method that concrete implementations should override.
    fn do_select_file(&mut self, path: &FilePath) -> Result<FileInfo, TransportError>;

    /// Read at most `max_len` bytes of the currently selected file,
    /// starting at `offset`.
    ///
    /// Returning fewer bytes than requested is legitimate; the caller must
    /// use the returned length.
    fn read_binary(&mut self, offset: usize, max_len: usize) -> Result<Bytes, TransportError> {
        trace!(offset, max_len, "reading binary");
        let result = self.do_read_binary(offset, max_len);
        match &result {
            Ok(data) => trace!(len = data.len(), "read complete"),
            Err(e) => debug!(error = ?e, "read failed"),
        }
        result
    }

    /// Internal implementation of `read_binary`.
    /// This is the method that concrete implementations should override.
    fn do_read_binary(&mut self, offset: usize, max_len: usize) -> Result<Bytes, TransportError>;

    /// The card's own serial number (SN.ICC), 7 bytes on the DNIe.
    ///
    /// Implementations are expected to cache the value after the first
    /// card query, the way the underlying driver stack does.
    fn serial_number(&mut self) -> Result<Bytes, TransportError>;

    /// Personalisation state of the connected card
    fn card_type(&self) -> CardType;
}
