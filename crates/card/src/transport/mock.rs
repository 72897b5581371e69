//! Scripted in-memory card for tests.
//!
//! The mock keeps a flat file table plus counters for every transport
//! operation, so tests can assert not only results but also the exact
//! amount of card I/O an operation performed.

use bytes::Bytes;

use crate::{CardType, FileInfo, FileKind, FilePath};

use super::{CardTransport, TransportError};

#[derive(Debug, Clone)]
struct MockFile {
    kind: FileKind,
    /// Size as declared in the FCI; may exceed the actual contents to
    /// exercise short reads.
    declared_size: usize,
    contents: Bytes,
}

/// In-memory card with a scripted file table
#[derive(Debug, Clone)]
pub struct MockCard {
    files: Vec<(FilePath, MockFile)>,
    card_type: CardType,
    serial: Bytes,
    selected: Option<usize>,
    /// Number of SELECTs issued
    pub select_count: usize,
    /// Number of READ BINARYs issued
    pub read_count: usize,
    /// Number of serial number queries issued
    pub serial_count: usize,
}

impl MockCard {
    /// Create a mock card with the given type and serial number
    pub fn new(card_type: CardType, serial: &[u8]) -> Self {
        Self {
            files: Vec::new(),
            card_type,
            serial: Bytes::copy_from_slice(serial),
            selected: None,
            select_count: 0,
            read_count: 0,
            serial_count: 0,
        }
    }

    /// Create a personalised user card with a fixed 7-byte serial
    pub fn user() -> Self {
        Self::new(CardType::User, &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07])
    }

    /// Add a transparent working file whose declared size matches its contents
    pub fn add_file(&mut self, path: FilePath, contents: impl Into<Bytes>) -> &mut Self {
        let contents = contents.into();
        let declared_size = contents.len();
        self.add_raw(path, FileKind::Working, declared_size, contents)
    }

    /// Add a transparent working file with an explicit declared size
    pub fn add_file_with_declared_size(
        &mut self,
        path: FilePath,
        contents: impl Into<Bytes>,
        declared_size: usize,
    ) -> &mut Self {
        self.add_raw(path, FileKind::Working, declared_size, contents.into())
    }

    /// Add a directory node
    pub fn add_directory(&mut self, path: FilePath) -> &mut Self {
        self.add_raw(path, FileKind::Dedicated, 0, Bytes::new())
    }

    fn add_raw(
        &mut self,
        path: FilePath,
        kind: FileKind,
        declared_size: usize,
        contents: Bytes,
    ) -> &mut Self {
        self.files.push((
            path,
            MockFile {
                kind,
                declared_size,
                contents,
            },
        ));
        self
    }
}

impl CardTransport for MockCard {
    fn do_select_file(&mut self, path: &FilePath) -> Result<FileInfo, TransportError> {
        self.select_count += 1;
        let idx = self
            .files
            .iter()
            .position(|(p, _)| p == path)
            .ok_or(TransportError::FileNotFound)?;
        self.selected = Some(idx);
        let file = &self.files[idx].1;
        Ok(FileInfo {
            path: path.clone(),
            kind: file.kind,
            size: file.declared_size,
        })
    }

    fn do_read_binary(&mut self, offset: usize, max_len: usize) -> Result<Bytes, TransportError> {
        self.read_count += 1;
        let file = match self.selected {
            Some(idx) => &self.files[idx].1,
            None => return Err(TransportError::NoFileSelected),
        };
        if file.kind.is_directory() {
            // Command not allowed on a DF
            return Err(TransportError::status_word(0x6986));
        }
        if offset >= file.contents.len() {
            // Wrong P1/P2: offset outside the file
            return Err(TransportError::status_word(0x6B00));
        }
        let end = usize::min(offset + max_len, file.contents.len());
        Ok(file.contents.slice(offset..end))
    }

    fn serial_number(&mut self) -> Result<Bytes, TransportError> {
        self.serial_count += 1;
        Ok(self.serial.clone())
    }

    fn card_type(&self) -> CardType {
        self.card_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_read() {
        let mut card = MockCard::user();
        let path = FilePath::from_hex("3F006020").unwrap();
        card.add_file(path.clone(), &b"hello"[..]);

        let info = card.select_file(&path).unwrap();
        assert_eq!(info.kind, FileKind::Working);
        assert_eq!(info.size, 5);

        let data = card.read_binary(0, info.size).unwrap();
        assert_eq!(data.as_ref(), b"hello");
        assert_eq!(card.select_count, 1);
        assert_eq!(card.read_count, 1);
    }

    #[test]
    fn read_without_select_fails() {
        let mut card = MockCard::user();
        assert_eq!(
            card.read_binary(0, 16),
            Err(TransportError::NoFileSelected)
        );
    }

    #[test]
    fn unknown_path_is_not_found() {
        let mut card = MockCard::user();
        let path = FilePath::from_hex("3F00AAAA").unwrap();
        assert_eq!(card.select_file(&path), Err(TransportError::FileNotFound));
    }
}
