//! Bounded single-shot file reads

use bytes::Bytes;
use tracing::debug;

use crate::{FileInfo, FilePath, transport::CardTransport, transport::TransportError};

/// Error raised by [`read_file`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The underlying transport failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The file exists but declares a zero length, so there is nothing
    /// sensible to read
    #[error("file {path} declares a zero length")]
    ZeroLength {
        /// Path of the offending file
        path: FilePath,
    },
}

/// Select the file at `path` and read its declared size in one bounded read.
///
/// Selecting a dedicated file returns success with an empty payload and no
/// binary read is attempted. A read returning fewer bytes than declared is
/// accepted; the payload length is whatever the transport delivered.
pub fn read_file<T>(card: &mut T, path: &FilePath) -> Result<(FileInfo, Bytes), ReadError>
where
    T: CardTransport + ?Sized,
{
    let info = card.select_file(path)?;

    if info.kind.is_directory() {
        debug!(path = %path, "selected a DF, no binary read needed");
        return Ok((info, Bytes::new()));
    }

    if info.size == 0 {
        return Err(ReadError::ZeroLength { path: path.clone() });
    }

    let data = card.read_binary(0, info.size)?;
    debug!(path = %path, declared = info.size, read = data.len(), "file read");
    Ok((info, data))
}
