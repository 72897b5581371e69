//! Reconstruction of RSA key objects from stored byte components.
//!
//! The credential store keeps keys as raw big-endian component strings;
//! this module turns them into usable [`rsa`] key objects on demand.
//! Reconstructed keys are owned by the caller and are never cached: the
//! backend's in-memory representation is not part of any contract here.

use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::error::{Error, Result};

/// Build a public-only RSA key from big-endian component strings.
pub fn build_public_key(modulus: &[u8], exponent: &[u8]) -> Result<RsaPublicKey> {
    if modulus.is_empty() || exponent.is_empty() {
        return Err(Error::InvalidArgument("empty RSA public key component"));
    }

    let n = BigUint::from_bytes_be(modulus);
    let e = BigUint::from_bytes_be(exponent);
    RsaPublicKey::new(n, e).map_err(Error::KeyComposition)
}

/// Build a full RSA key pair from big-endian component strings.
///
/// The prime factors are not stored; the backend recovers them from
/// `(n, e, d)`. Either every component composes into a valid key pair or
/// an error is returned and nothing survives the call.
pub fn build_key_pair(
    modulus: &[u8],
    public_exponent: &[u8],
    private_exponent: &[u8],
) -> Result<RsaPrivateKey> {
    if modulus.is_empty() || public_exponent.is_empty() || private_exponent.is_empty() {
        return Err(Error::InvalidArgument("empty RSA key pair component"));
    }

    let n = BigUint::from_bytes_be(modulus);
    let e = BigUint::from_bytes_be(public_exponent);
    let d = BigUint::from_bytes_be(private_exponent);
    RsaPrivateKey::from_components(n, e, d, Vec::new()).map_err(Error::KeyComposition)
}
