//! Well-known card locations and selection constants

/// Path of the ICC intermediate CA certificate file (hex notation)
pub const INTERMEDIATE_CA_CERT_PATH: &str = "3F006020";

/// Path of the ICC component certificate file (hex notation)
pub const ICC_CERT_PATH: &str = "3F00601F";

/// Issuer OU fragment that marks the second credential generation.
///
/// Cards from serial `BMP100001` on carry certificates issued under
/// `AC RAIZ COMPONENTES 2`; the card exposes no version field at this
/// stage, so this fragment is the sole discriminant.
pub(crate) const CURRENT_GENERATION_ISSUER_OU: &str = "OU=AC RAIZ COMPONENTES 2";

/// Length of the serial number reported by the card
pub(crate) const ICC_SERIAL_LEN: usize = 7;

/// Serial numbers are exchanged left-padded to 8 bytes
pub(crate) const SERIAL_PADDED_LEN: usize = 8;
