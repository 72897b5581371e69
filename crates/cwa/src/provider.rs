//! Credential provider facade.
//!
//! [`CwaProvider`] wraps a card transport and answers every credential the
//! secure-channel handshake needs: static key material and CV certificates
//! from the compiled-in store, certificates read from the card, and the two
//! serial numbers. The card generation is resolved lazily from the issuer
//! of the on-card intermediate CA certificate and latches for the session.

use dnie_card::{CardTransport, CardType, FilePath};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use x509_cert::Certificate;

use crate::certs::{issuer_oneline, read_certificate};
use crate::constants::{
    CURRENT_GENERATION_ISSUER_OU, ICC_CERT_PATH, ICC_SERIAL_LEN, INTERMEDIATE_CA_CERT_PATH,
    SERIAL_PADDED_LEN,
};
use crate::error::{Error, Result};
use crate::keys::{build_key_pair, build_public_key};
use crate::session::{Profile, SessionState};
use crate::store::GenerationRecord;
use crate::Generation;

/// Credential provider for one card session
#[derive(Debug)]
pub struct CwaProvider<T: CardTransport> {
    card: T,
    session: SessionState,
}

impl<T: CardTransport> CwaProvider<T> {
    /// Wrap a transport in a fresh provider with no latched generation
    pub fn new(card: T) -> Self {
        Self {
            card,
            session: SessionState::default(),
        }
    }

    /// Borrow the underlying transport
    pub fn card(&self) -> &T {
        &self.card
    }

    /// Mutably borrow the underlying transport
    pub fn card_mut(&mut self) -> &mut T {
        &mut self.card
    }

    /// Consume the provider and return the transport
    pub fn into_card(self) -> T {
        self.card
    }

    /// The latched generation, if one has been resolved yet
    pub fn generation(&self) -> Option<Generation> {
        self.session.generation
    }

    /// The profile currently answered by the credential accessors
    pub fn active_profile(&self) -> Profile {
        self.session.profile
    }

    /// Verify the card is usable and cache its serial number.
    ///
    /// Only a personalised user card can open a secure channel; blank,
    /// admin and terminated cards are rejected here before any channel
    /// work starts.
    pub fn pre_session(&mut self) -> Result<()> {
        let card_type = self.card.card_type();
        if card_type != CardType::User {
            return Err(Error::InvalidCard(card_type));
        }

        let raw = self.card.serial_number()?;
        self.session.icc_serial = Some(pad_serial(&raw)?);
        Ok(())
    }

    /// Answer subsequent credential requests from the default profile
    pub fn use_default_profile(&mut self) {
        debug!("switching to the default credential profile");
        self.session.profile = Profile::Default;
    }

    /// Answer subsequent credential requests from the PIN profile
    pub fn use_pin_profile(&mut self) {
        debug!("switching to the PIN credential profile");
        self.session.profile = Profile::Pin;
    }

    /// Intermediate CA certificate read from the card.
    ///
    /// Reading this certificate is what resolves the generation, so the
    /// file is fetched at most once per session.
    pub fn intermediate_ca_cert(&mut self) -> Result<&Certificate> {
        self.resolve_generation()?;
        // resolve_generation always leaves the certificate cached
        self.session
            .intermediate_ca_cert
            .as_ref()
            .ok_or(Error::InvalidState("generation latched without certificate"))
    }

    /// Component certificate (C-ICC) read from the card
    pub fn icc_cert(&mut self) -> Result<Certificate> {
        read_certificate(&mut self.card, &cert_path(ICC_CERT_PATH)?)
    }

    /// Root CA public key (pk-RCAicc) for the latched generation
    pub fn root_ca_public_key(&mut self) -> Result<RsaPublicKey> {
        let components = &self.channel_data()?.icc_root_ca;
        build_public_key(components.modulus, components.exponent)
    }

    /// Terminal key pair (sk-IFD-AUT) for the latched generation and
    /// active profile
    pub fn ifd_private_key(&mut self) -> Result<RsaPrivateKey> {
        let record = self.channel_data()?;
        let components = match self.session.profile {
            Profile::Default => &record.ifd,
            Profile::Pin => &record.ifd_pin,
        };
        build_key_pair(
            components.modulus,
            components.public_exponent,
            components.private_exponent,
        )
    }

    /// Intermediate CA certificate in CV format (C-CV-CA-CS-AUT)
    pub fn cv_ca_cert(&mut self) -> Result<&'static [u8]> {
        Ok(self.channel_data()?.cv_ca_cert)
    }

    /// Terminal certificate in CV format for the active profile
    pub fn cv_ifd_cert(&mut self) -> Result<&'static [u8]> {
        let record = self.channel_data()?;
        Ok(match self.session.profile {
            Profile::Default => record.cv_ifd_cert,
            Profile::Pin => record.cv_ifd_pin_cert,
        })
    }

    /// Card-side reference of the root CA public key
    pub fn root_ca_key_ref(&mut self) -> Result<&'static [u8]> {
        Ok(self.channel_data()?.root_ca_key_ref)
    }

    /// Card-side reference of the intermediate CA key
    pub fn intermediate_ca_key_ref(&mut self) -> Result<&'static [u8]> {
        Ok(self.channel_data()?.intermediate_ca_key_ref)
    }

    /// Reference selecting the terminal key for the active profile
    pub fn ifd_key_ref(&mut self) -> Result<&'static [u8]> {
        let record = self.channel_data()?;
        Ok(match self.session.profile {
            Profile::Default => record.ifd_key_ref,
            Profile::Pin => record.ifd_pin_key_ref,
        })
    }

    /// Card-side reference of the card's private authentication key
    pub fn icc_priv_key_ref(&mut self) -> Result<&'static [u8]> {
        Ok(self.channel_data()?.icc_priv_key_ref)
    }

    /// Terminal serial number (SN.IFD) for the active profile
    pub fn ifd_serial(&mut self) -> Result<&'static [u8]> {
        let record = self.channel_data()?;
        Ok(match self.session.profile {
            Profile::Default => record.ifd_serial,
            Profile::Pin => record.ifd_pin_serial,
        })
    }

    /// Card serial number (SN.ICC), left-padded to 8 bytes.
    ///
    /// Served from the session cache when [`pre_session`] already ran,
    /// fetched from the card otherwise.
    ///
    /// [`pre_session`]: CwaProvider::pre_session
    pub fn icc_serial(&mut self) -> Result<[u8; 8]> {
        if let Some(serial) = self.session.icc_serial {
            return Ok(serial);
        }

        let raw = self.card.serial_number()?;
        let serial = pad_serial(&raw)?;
        self.session.icc_serial = Some(serial);
        Ok(serial)
    }

    /// The credential record for the latched generation, resolving it on
    /// first use
    fn channel_data(&mut self) -> Result<&'static GenerationRecord> {
        Ok(self.resolve_generation()?.record())
    }

    fn resolve_generation(&mut self) -> Result<Generation> {
        if let Some(generation) = self.session.generation {
            return Ok(generation);
        }

        let cert = read_certificate(&mut self.card, &cert_path(INTERMEDIATE_CA_CERT_PATH)?)?;
        let issuer = issuer_oneline(&cert);
        let generation = generation_for_issuer(&issuer);
        debug!(%issuer, ?generation, "card generation resolved");

        self.session.intermediate_ca_cert = Some(cert);
        self.session.generation = Some(generation);
        Ok(generation)
    }
}

fn cert_path(hex: &str) -> Result<FilePath> {
    FilePath::from_hex(hex).map_err(|_| Error::Format("malformed certificate file path"))
}

/// The second-generation root signs component CA certificates under a
/// distinct OU; the card itself exposes no version field at this stage.
fn generation_for_issuer(issuer: &str) -> Generation {
    if issuer.contains(CURRENT_GENERATION_ISSUER_OU) {
        Generation::Current
    } else {
        Generation::Legacy
    }
}

fn pad_serial(raw: &[u8]) -> Result<[u8; 8]> {
    let mut serial = [0u8; SERIAL_PADDED_LEN];
    match raw.len() {
        ICC_SERIAL_LEN => serial[SERIAL_PADDED_LEN - ICC_SERIAL_LEN..].copy_from_slice(raw),
        SERIAL_PADDED_LEN => serial.copy_from_slice(raw),
        _ => return Err(Error::Format("unexpected card serial number length")),
    }
    Ok(serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_marker_selects_the_current_generation() {
        let current = "CN=AC DNIE 004,OU=AC RAIZ COMPONENTES 2,O=DIRECCION GENERAL DE LA POLICIA,C=ES";
        let legacy = "CN=AC DNIE 001,OU=AC RAIZ COMPONENTES,O=DIRECCION GENERAL DE LA POLICIA,C=ES";
        assert_eq!(generation_for_issuer(current), Generation::Current);
        assert_eq!(generation_for_issuer(legacy), Generation::Legacy);
        assert_eq!(generation_for_issuer(""), Generation::Legacy);
    }

    #[test]
    fn short_serials_are_left_padded() {
        let serial = pad_serial(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(serial, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn full_width_serials_pass_through() {
        let serial = pad_serial(&[9, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(serial, [9, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn other_serial_lengths_are_rejected() {
        assert!(matches!(pad_serial(&[1, 2, 3]), Err(Error::Format(_))));
        assert!(matches!(pad_serial(&[0; 9]), Err(Error::Format(_))));
    }
}
