//! File metadata returned by a SELECT

use crate::FilePath;

/// Kind of a card file, as reported by the FCI returned on SELECT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Dedicated file (a directory node, holds no readable body)
    Dedicated,
    /// Working elementary file (transparent data readable via READ BINARY)
    Working,
    /// Internal elementary file (card-managed data, e.g. key files)
    Internal,
}

impl FileKind {
    /// Whether the file is a directory node
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Dedicated)
    }
}

/// Metadata of a selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Absolute path the file was selected by
    pub path: FilePath,
    /// File kind from the FCI
    pub kind: FileKind,
    /// Declared file size in bytes (0 for dedicated files)
    pub size: usize,
}
