//! CWA-14890 credential provider for the DNIe secure channel.
//!
//! The DNIe opens a mutually authenticated channel between terminal and
//! card. This crate supplies the terminal side of that handshake with
//! everything it needs: compiled-in RSA key material and CV certificates,
//! certificates read from the card, and the terminal and card serial
//! numbers, all keyed by the card's credential generation.
//!
//! The entry point is [`CwaProvider`], built over any
//! [`CardTransport`](dnie_card::CardTransport):
//!
//! ```no_run
//! # fn demo<T: dnie_card::CardTransport>(card: T) -> dnie_cwa::Result<()> {
//! let mut provider = dnie_cwa::CwaProvider::new(card);
//! provider.pre_session()?;
//! let root_key = provider.root_ca_public_key()?;
//! let ifd_key = provider.ifd_private_key()?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

mod certs;
pub mod constants;
mod error;
mod keys;
mod provider;
mod session;
mod store;

pub use certs::read_certificate;
pub use error::{Error, Result};
pub use keys::{build_key_pair, build_public_key};
pub use provider::CwaProvider;
pub use session::Profile;
pub use store::{GenerationRecord, KeyPairComponents, PublicKeyComponents};

/// Credential generation of a card.
///
/// Two generations of DNIe cards are in circulation, carrying different
/// root and terminal key material. The generation is resolved once per
/// session from the issuer of the on-card intermediate CA certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// Cards issued before serial `BMP100001`
    Legacy,
    /// Cards issued from serial `BMP100001` on
    Current,
}

impl Generation {
    /// Index of this generation in the credential store
    pub const fn index(self) -> usize {
        match self {
            Self::Legacy => 0,
            Self::Current => 1,
        }
    }

    /// The compiled-in credential record for this generation
    pub fn record(self) -> &'static GenerationRecord {
        &store::CHANNEL_DATA[self.index()]
    }
}
