//! Error types specific to card transport

use thiserror::Error;

/// Transport error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Failed to connect to the card or reader
    #[error("failed to connect to card")]
    Connection,

    /// Failed to transmit data
    #[error("failed to transmit data")]
    Transmission,

    /// The selected path does not exist on the card
    #[error("file not found")]
    FileNotFound,

    /// READ BINARY issued without a selected elementary file
    #[error("no elementary file selected")]
    NoFileSelected,

    /// The card answered with an error status word
    #[error("status word error: {0:#06X}")]
    StatusWord(u16),

    /// Reader or driver level failure
    #[error("device error")]
    Device,

    /// Operation timed out
    #[error("operation timed out")]
    Timeout,
}

impl TransportError {
    /// Create a new status word error
    pub const fn status_word(sw: u16) -> Self {
        Self::StatusWord(sw)
    }

    /// Create a new status word error from individual bytes
    pub const fn status_word_bytes(sw1: u8, sw2: u8) -> Self {
        Self::StatusWord(((sw1 as u16) << 8) | (sw2 as u16))
    }

    /// Get the status word if this is a status word error
    pub const fn get_status_word(&self) -> Option<u16> {
        match self {
            Self::StatusWord(sw) => Some(*sw),
            _ => None,
        }
    }
}
