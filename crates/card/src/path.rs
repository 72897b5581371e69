//! Absolute card file paths

use std::fmt;

/// Error raised when constructing a [`FilePath`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The path contained no bytes
    #[error("path is empty")]
    Empty,

    /// File identifiers are 2 bytes each, so a path must have even length
    #[error("path length {0} is not a multiple of 2")]
    OddLength(usize),

    /// Paths are limited to 8 file identifiers
    #[error("path length {0} exceeds 16 bytes")]
    TooLong(usize),

    /// The hex string could not be decoded
    #[error("invalid hex in path: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Absolute path to a file on the card.
///
/// A path is a sequence of 2-byte file identifiers starting at the master
/// file, e.g. `3F00 6020` for the intermediate CA certificate file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(Vec<u8>);

impl FilePath {
    /// Maximum path length in bytes (8 file identifiers)
    pub const MAX_LEN: usize = 16;

    /// Create a path from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, PathError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(PathError::Empty);
        }
        if bytes.len() % 2 != 0 {
            return Err(PathError::OddLength(bytes.len()));
        }
        if bytes.len() > Self::MAX_LEN {
            return Err(PathError::TooLong(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// Parse a path from its hex notation, e.g. `"3F006020"`
    pub fn from_hex(s: &str) -> Result<Self, PathError> {
        Self::new(hex::decode(s)?)
    }

    /// Raw path bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of file identifiers in the path
    pub fn depth(&self) -> usize {
        self.0.len() / 2
    }

    /// Iterate over the 2-byte file identifiers
    pub fn file_ids(&self) -> impl Iterator<Item = [u8; 2]> + '_ {
        self.0.chunks_exact(2).map(|c| [c[0], c[1]])
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

impl TryFrom<&str> for FilePath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_hex(s)
    }
}
