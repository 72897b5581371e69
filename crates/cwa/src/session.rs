//! Per-session mutable provider state

use x509_cert::Certificate;

use crate::Generation;

/// Credential profile answered by the provider.
///
/// The PIN channel shares everything with the default channel except the
/// terminal key pair, its CV certificate, the key reference selecting it
/// and the terminal serial number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    /// Component authentication channel
    #[default]
    Default,
    /// PIN channel
    Pin,
}

/// Mutable state accumulated over one card session.
///
/// The generation latches on first resolution and never changes for the
/// lifetime of the session; everything else is a cache.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) generation: Option<Generation>,
    pub(crate) profile: Profile,
    pub(crate) icc_serial: Option<[u8; 8]>,
    pub(crate) intermediate_ca_cert: Option<Certificate>,
}
