//! Certificate files on the card

use der::Decode;
use dnie_card::{CardTransport, FilePath, read_file};
use tracing::debug;
use x509_cert::Certificate;

use crate::error::{Error, Result};

/// Read the file at `path` and decode it as a DER X.509 certificate.
///
/// The card stores certificates zlib-free as plain DER, so the file
/// content is handed to the decoder as-is. Trailing garbage after the
/// certificate is rejected by the decoder.
pub fn read_certificate<T>(card: &mut T, path: &FilePath) -> Result<Certificate>
where
    T: CardTransport + ?Sized,
{
    let (info, data) = read_file(card, path)?;

    if info.kind.is_directory() {
        return Err(Error::Format("certificate path names a directory"));
    }

    let cert = Certificate::from_der(&data).map_err(Error::NotACertificate)?;
    debug!(path = %path, issuer = %cert.tbs_certificate.issuer, "certificate loaded");
    Ok(cert)
}

/// Render a certificate issuer as its RFC 4514 string form
pub(crate) fn issuer_oneline(cert: &Certificate) -> String {
    cert.tbs_certificate.issuer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnie_card::MockCard;

    fn path(s: &str) -> FilePath {
        FilePath::from_hex(s).unwrap()
    }

    #[test]
    fn garbage_is_not_a_certificate() {
        let mut card = MockCard::user();
        card.add_file(path("3F006020"), &[0xDE, 0xAD, 0xBE, 0xEF][..]);

        let err = read_certificate(&mut card, &path("3F006020")).unwrap_err();
        assert!(matches!(err, Error::NotACertificate(_)));
    }

    #[test]
    fn directory_path_is_a_format_error() {
        let mut card = MockCard::user();
        card.add_directory(path("3F00"));

        let err = read_certificate(&mut card, &path("3F00")).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn missing_file_maps_to_transport() {
        let mut card = MockCard::user();
        let err = read_certificate(&mut card, &path("3F006020")).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
