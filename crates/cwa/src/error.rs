use dnie_card::{CardType, FilePath, ReadError, TransportError};

/// Result type for credential provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for credential provider operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller handed in malformed input
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Card selection or read failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A credential file on the card declares a zero length
    #[error("file {path} declares a zero length")]
    ZeroLengthFile {
        /// Path of the offending file
        path: FilePath,
    },

    /// Data read from the card could not be decoded as a certificate
    #[error("read data is not a certificate")]
    NotACertificate(#[source] der::Error),

    /// Other malformed credential data
    #[error("{0}")]
    Format(&'static str),

    /// The crypto backend rejected well-formed RSA key components.
    /// This indicates a defect, not a transient condition.
    #[error("cannot compose RSA key from stored components")]
    KeyComposition(#[source] rsa::Error),

    /// An operation was invoked in a state it cannot be answered from
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// The connected card is not a personalised user card
    #[error("operation requires a user card, found {0:?}")]
    InvalidCard(CardType),
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Transport(e) => Self::Transport(e),
            ReadError::ZeroLength { path } => Self::ZeroLengthFile { path },
        }
    }
}
