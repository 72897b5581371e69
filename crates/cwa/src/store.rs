//! Compiled-in credential store.
//!
//! Two static credential sets, one per card generation, holding the key
//! material and references published for the DNIe secure channel. The
//! records are immutable and shared by every session; a future generation
//! is supported by appending a record and a selection rule, never by
//! reshaping the existing ones.

/// RSA public key components, big-endian unsigned byte strings
#[derive(Debug)]
pub struct PublicKeyComponents {
    /// Key modulus
    pub modulus: &'static [u8],
    /// Public exponent
    pub exponent: &'static [u8],
}

/// RSA key pair components, big-endian unsigned byte strings
#[derive(Debug)]
pub struct KeyPairComponents {
    /// Key modulus
    pub modulus: &'static [u8],
    /// Public exponent
    pub public_exponent: &'static [u8],
    /// Private exponent
    pub private_exponent: &'static [u8],
}

/// Static credential set for one card generation
#[derive(Debug)]
pub struct GenerationRecord {
    /// Root CA public key (pk-RCAicc)
    pub icc_root_ca: PublicKeyComponents,
    /// Terminal key for the default channel (sk-IFD-AUT)
    pub ifd: KeyPairComponents,
    /// Terminal key for the PIN channel
    pub ifd_pin: KeyPairComponents,
    /// Intermediate CA certificate in CV format (C-CV-CA-CS-AUT)
    pub cv_ca_cert: &'static [u8],
    /// Terminal certificate for the default channel in CV format (C-CV-IFD-AUT)
    pub cv_ifd_cert: &'static [u8],
    /// Terminal certificate for the PIN channel in CV format
    pub cv_ifd_pin_cert: &'static [u8],
    /// Root CA key reference on the card (pk-RCA-AUT-keyRef)
    pub root_ca_key_ref: &'static [u8],
    /// Card private key reference (sk-ICC-AUT-keyRef)
    pub icc_priv_key_ref: &'static [u8],
    /// Intermediate CA key reference
    pub intermediate_ca_key_ref: &'static [u8],
    /// In-memory key reference selecting the terminal certificate, default channel
    pub ifd_key_ref: &'static [u8],
    /// In-memory key reference selecting the terminal certificate, PIN channel
    pub ifd_pin_key_ref: &'static [u8],
    /// Terminal serial number (SN.IFD), default channel
    pub ifd_serial: &'static [u8],
    /// Terminal serial number (SN.IFD), PIN channel
    pub ifd_pin_serial: &'static [u8],
}

const ICC_ROOT_CA_MODULUS_0: &[u8] = &[
    0xea, 0xde, 0xda, 0x45, 0x53, 0x32, 0x94, 0x50, 0x39, 0xda, 0xa4, 0x04,
    0xc8, 0xeb, 0xc4, 0xd3, 0xb7, 0xf5, 0xdc, 0x86, 0x92, 0x83, 0xcd, 0xea,
    0x2f, 0x10, 0x1e, 0x2a, 0xb5, 0x4f, 0xb0, 0xd0, 0xb0, 0x3d, 0x8f, 0x03,
    0x0d, 0xaf, 0x24, 0x58, 0x02, 0x82, 0x88, 0xf5, 0x4c, 0xe5, 0x52, 0xf8,
    0xfa, 0x57, 0xab, 0x2f, 0xb1, 0x03, 0xb1, 0x12, 0x42, 0x7e, 0x11, 0x13,
    0x1d, 0x1d, 0x27, 0xe1, 0x0a, 0x5b, 0x50, 0x0e, 0xaa, 0xe5, 0xd9, 0x40,
    0x30, 0x1e, 0x30, 0xeb, 0x26, 0xc3, 0xe9, 0x06, 0x6b, 0x25, 0x71, 0x56,
    0xed, 0x63, 0x9d, 0x70, 0xcc, 0xc0, 0x90, 0xb8, 0x63, 0xaf, 0xbb, 0x3b,
    0xfe, 0xd8, 0xc1, 0x7b, 0xe7, 0x67, 0x30, 0x34, 0xb9, 0x82, 0x3e, 0x97,
    0x7e, 0xd6, 0x57, 0x25, 0x29, 0x27, 0xf9, 0x57, 0x5b, 0x9f, 0xff, 0x66,
    0x91, 0xdb, 0x64, 0xf8, 0x0b, 0x5e, 0x92, 0xcd,
];

const ICC_ROOT_CA_MODULUS_1: &[u8] = &[
    0xb9, 0x72, 0x34, 0x5e, 0x35, 0xbc, 0xdd, 0x12, 0xdc, 0x2c, 0x8e, 0x85,
    0xf6, 0x22, 0x97, 0x97, 0x9f, 0x12, 0x2b, 0xb7, 0xc9, 0xc3, 0xed, 0x13,
    0xa0, 0xc4, 0xeb, 0x59, 0x34, 0xe7, 0x0c, 0xd6, 0xd0, 0x0c, 0x54, 0x06,
    0x18, 0x38, 0x6e, 0x42, 0xf2, 0xba, 0x00, 0x89, 0xc0, 0xdd, 0x80, 0x0e,
    0xba, 0x78, 0x3b, 0xdc, 0x9d, 0x93, 0xd9, 0xfb, 0xfc, 0x3c, 0x16, 0x9f,
    0x9a, 0xf6, 0x4e, 0x80, 0x10, 0x0f, 0xc6, 0x87, 0xcc, 0xa5, 0x62, 0xe7,
    0xfc, 0x84, 0xd1, 0x12, 0x92, 0xc2, 0x40, 0x4c, 0x59, 0xb8, 0xa8, 0x60,
    0xd3, 0x9e, 0x2d, 0x66, 0x54, 0x7d, 0xc7, 0xb2, 0xd4, 0x8c, 0xa7, 0x89,
    0x81, 0x4f, 0x43, 0x06, 0x26, 0x34, 0xe3, 0xe0, 0xc0, 0xd6, 0xbf, 0x5f,
    0x54, 0xba, 0x1d, 0x9c, 0x46, 0x64, 0x45, 0x83, 0x1d, 0xcd, 0xea, 0xb0,
    0x87, 0x08, 0xf3, 0xf6, 0x22, 0x0e, 0x07, 0x75,
];

const ICC_ROOT_CA_EXPONENT: &[u8] = &[
    0x01, 0x00, 0x01,
];

const IFD_MODULUS_0: &[u8] = &[
    0xdb, 0x2c, 0xb4, 0x1e, 0x11, 0x2b, 0xac, 0xfa, 0x2b, 0xd7, 0xc3, 0xd3,
    0xd7, 0x96, 0x7e, 0x84, 0xfb, 0x94, 0x34, 0xfc, 0x26, 0x1f, 0x9d, 0x09,
    0x0a, 0x89, 0x83, 0x94, 0x7d, 0xaf, 0x84, 0x88, 0xd3, 0xdf, 0x8f, 0xbd,
    0xcc, 0x1f, 0x92, 0x49, 0x35, 0x85, 0xe1, 0x34, 0xa1, 0xb4, 0x2d, 0xe5,
    0x19, 0xf4, 0x63, 0x24, 0x4d, 0x7e, 0xd3, 0x84, 0xe2, 0x6d, 0x51, 0x6c,
    0xc7, 0xa4, 0xff, 0x78, 0x95, 0xb1, 0x99, 0x21, 0x40, 0x04, 0x3a, 0xac,
    0xad, 0xfc, 0x12, 0xe8, 0x56, 0xb2, 0x02, 0x34, 0x6a, 0xf8, 0x22, 0x6b,
    0x1a, 0x88, 0x21, 0x37, 0xdc, 0x3c, 0x5a, 0x57, 0xf0, 0xd2, 0x81, 0x5c,
    0x1f, 0xcd, 0x4b, 0xb4, 0x6f, 0xa9, 0x15, 0x7f, 0xdf, 0xfd, 0x79, 0xec,
    0x3a, 0x10, 0xa8, 0x24, 0xcc, 0xc1, 0xeb, 0x3c, 0xe0, 0xb6, 0xb4, 0x39,
    0x6a, 0xe2, 0x36, 0x59, 0x00, 0x16, 0xba, 0x69,
];

const IFD_MODULUS_1: &[u8] = &[
    0xbd, 0xef, 0xdb, 0x84, 0xec, 0xe6, 0x98, 0xb8, 0x28, 0x7f, 0x7f, 0xe6,
    0x29, 0x6d, 0x80, 0x72, 0x98, 0x3a, 0x1b, 0x3d, 0x3b, 0x9f, 0x57, 0xad,
    0x98, 0x4f, 0xba, 0x78, 0x58, 0x1f, 0xff, 0x52, 0xe9, 0x3d, 0x89, 0x6b,
    0xf5, 0x62, 0x25, 0xe9, 0xf8, 0x2e, 0x96, 0x95, 0x14, 0x00, 0x69, 0x98,
    0x2e, 0x5b, 0x5b, 0xce, 0x37, 0xad, 0x73, 0x16, 0x45, 0x02, 0xd8, 0xac,
    0xbd, 0x60, 0x5f, 0x69, 0x12, 0x4a, 0x3c, 0xf5, 0xaf, 0xe4, 0xb0, 0x18,
    0x60, 0x2d, 0xd4, 0xba, 0x04, 0xdb, 0xc9, 0x85, 0x88, 0x45, 0xe6, 0xa9,
    0xc4, 0x05, 0x5b, 0xc5, 0xbf, 0xa0, 0xed, 0xdb, 0x86, 0x67, 0x89, 0xf0,
    0xec, 0x6a, 0x80, 0xfc, 0xe5, 0x3c, 0x66, 0x08, 0xdf, 0xdc, 0x9b, 0x9f,
    0xe2, 0xed, 0x56, 0x75, 0x2c, 0xc6, 0x05, 0x51, 0x3b, 0xa3, 0xf1, 0x75,
    0x9c, 0xdd, 0x95, 0x22, 0x75, 0x3f, 0x18, 0xd7,
];

const IFD_PIN_MODULUS_0: &[u8] = &[
    0xf4, 0x27, 0x97, 0x8d, 0xa1, 0x59, 0xba, 0x02, 0x79, 0x30, 0x8a, 0x6c,
    0x6a, 0x89, 0x50, 0x5a, 0xda, 0x5a, 0x67, 0xc3, 0xda, 0x26, 0x79, 0xea,
    0xf4, 0xa1, 0xb0, 0x11, 0x9e, 0xdd, 0x4d, 0xf4, 0x6e, 0x78, 0x04, 0x24,
    0x71, 0xa9, 0xd1, 0x30, 0x1d, 0x3f, 0xb2, 0x8f, 0x38, 0xc5, 0x7d, 0x08,
    0x89, 0xf7, 0x31, 0xdb, 0x8e, 0xdd, 0xbc, 0x13, 0x67, 0xc1, 0x34, 0xe1,
    0xe9, 0x47, 0x78, 0x6b, 0x8e, 0xc8, 0xe4, 0xb9, 0xca, 0x6a, 0xa7, 0xc2,
    0x4c, 0x86, 0x91, 0xc7, 0xbe, 0x2f, 0xd8, 0xc1, 0x23, 0x66, 0x0e, 0x98,
    0x65, 0xe1, 0x4f, 0x19, 0xdf, 0xfb, 0xb7, 0xff, 0x38, 0x08, 0xc9, 0xf2,
    0x04, 0xe7, 0x97, 0xd0, 0x6d, 0xd8, 0x33, 0x3a, 0xc5, 0x83, 0x86, 0xee,
    0x4e, 0xb6, 0x1e, 0x20, 0xec, 0xa7, 0xef, 0x38, 0xd5, 0xb0, 0x5e, 0xb1,
    0x15, 0x96, 0x6a, 0x5a, 0x89, 0xad, 0x58, 0xa5,
];

const IFD_PIN_MODULUS_1: &[u8] = &[
    0xdf, 0x03, 0x93, 0x0d, 0x4f, 0x1d, 0x97, 0x15, 0xeb, 0xb0, 0x0f, 0xbd,
    0xae, 0x48, 0xaf, 0x9c, 0x9d, 0xbf, 0xd6, 0x99, 0xca, 0xb0, 0xbd, 0xbe,
    0x5c, 0xdb, 0x01, 0x34, 0x00, 0x0e, 0x46, 0x2e, 0x71, 0x3a, 0xe9, 0x7a,
    0x2f, 0x7e, 0x20, 0xaf, 0xbf, 0x84, 0xd3, 0xce, 0x73, 0x4f, 0xe2, 0x15,
    0x75, 0x7a, 0xaf, 0xa1, 0xe8, 0x9e, 0x64, 0x57, 0xea, 0xe2, 0xe8, 0x08,
    0x11, 0x03, 0x73, 0xe2, 0x56, 0x56, 0x34, 0x94, 0xfb, 0x5d, 0x10, 0x4f,
    0x0d, 0xcc, 0x88, 0x8d, 0x47, 0x96, 0x54, 0x3f, 0x03, 0x25, 0x4f, 0x4e,
    0x2c, 0xdf, 0x98, 0xb1, 0xe1, 0x26, 0x11, 0xe3, 0x98, 0x1f, 0x53, 0x33,
    0xdf, 0x98, 0xc8, 0x86, 0x01, 0x93, 0x75, 0x84, 0x0f, 0xac, 0x61, 0xdb,
    0x8f, 0x1b, 0xa3, 0xb5, 0x43, 0xdc, 0xea, 0x3d, 0x05, 0x9e, 0x6a, 0x41,
    0x4f, 0x6d, 0xd2, 0x9f, 0xc7, 0xc9, 0x9d, 0x8b,
];

const IFD_EXPONENT: &[u8] = &[
    0x01, 0x00, 0x01,
];

const IFD_PIN_EXPONENT: &[u8] = &[
    0x01, 0x00, 0x01,
];

const IFD_PRIVATE_EXPONENT_0: &[u8] = &[
    0x18, 0xb4, 0x4a, 0x3d, 0x15, 0x5c, 0x61, 0xeb, 0xf4, 0xe3, 0x26, 0x1c,
    0x8b, 0xb1, 0x57, 0xe3, 0x6f, 0x63, 0xfe, 0x30, 0xe9, 0xaf, 0x28, 0x89,
    0x2b, 0x59, 0xe2, 0xad, 0xeb, 0x18, 0xcc, 0x8c, 0x8b, 0xad, 0x28, 0x4b,
    0x91, 0x65, 0x81, 0x9c, 0xa4, 0xde, 0xc9, 0x4a, 0xa0, 0x6b, 0x69, 0xbc,
    0xe8, 0x17, 0x06, 0xd1, 0xc1, 0xb6, 0x68, 0xeb, 0x12, 0x86, 0x95, 0xe5,
    0xf7, 0xfe, 0xde, 0x18, 0xa9, 0x08, 0xa3, 0x01, 0x1a, 0x64, 0x6a, 0x48,
    0x1d, 0x3e, 0xa7, 0x1d, 0x8a, 0x38, 0x7d, 0x47, 0x46, 0x09, 0xbd, 0x57,
    0xa8, 0x82, 0xb1, 0x82, 0xe0, 0x47, 0xde, 0x80, 0xe0, 0x4b, 0x42, 0x21,
    0x41, 0x6b, 0xd3, 0x9d, 0xfa, 0x1f, 0xac, 0x03, 0x00, 0x64, 0x19, 0x62,
    0xad, 0xb1, 0x09, 0xe2, 0x8c, 0xaf, 0x50, 0x06, 0x1b, 0x68, 0xc9, 0xca,
    0xbd, 0x9b, 0x00, 0x31, 0x3c, 0x0f, 0x46, 0xed,
];

const IFD_PRIVATE_EXPONENT_1: &[u8] = &[
    0xa0, 0x51, 0x55, 0x93, 0xd4, 0x36, 0x2b, 0x8f, 0xbd, 0xb7, 0x28, 0xa8,
    0x88, 0x2d, 0x42, 0x2e, 0xf7, 0xa8, 0x8c, 0x17, 0x5a, 0x3c, 0xfb, 0xcf,
    0xad, 0xf1, 0x15, 0xee, 0xc0, 0x4b, 0x79, 0xc2, 0x6c, 0xd6, 0xa1, 0x28,
    0xbb, 0xbd, 0x35, 0x4d, 0x50, 0x4b, 0x5a, 0x94, 0xc8, 0x86, 0x34, 0x9a,
    0xdb, 0xfe, 0x06, 0xf6, 0x7f, 0xee, 0x6a, 0x66, 0xd0, 0xa7, 0x3f, 0x66,
    0x46, 0x8e, 0x92, 0xd8, 0x73, 0xb6, 0x8e, 0xe2, 0xcb, 0x47, 0xb1, 0xa1,
    0x5a, 0x2a, 0xa7, 0xd8, 0xc6, 0xce, 0x8f, 0x3f, 0x14, 0x93, 0x0d, 0x56,
    0xb6, 0x32, 0x7f, 0x56, 0xcb, 0x21, 0x54, 0x69, 0xa5, 0x7a, 0x1e, 0xe0,
    0x18, 0x8f, 0xd6, 0xd2, 0x6d, 0x83, 0xa3, 0x80, 0xa6, 0xab, 0xd3, 0xa8,
    0x9f, 0x1b, 0x63, 0xc4, 0x99, 0x81, 0x90, 0x46, 0x53, 0x69, 0x35, 0xad,
    0xb2, 0xdb, 0x3c, 0x17, 0xcc, 0xbd, 0xaa, 0x51,
];

const IFD_PIN_PRIVATE_EXPONENT_0: &[u8] = &[
    0xd2, 0x7a, 0x03, 0x23, 0x7c, 0x72, 0x2e, 0x71, 0x8d, 0x69, 0xf4, 0x1a,
    0xec, 0x68, 0xbd, 0x95, 0xe4, 0xe0, 0xc4, 0xcd, 0x49, 0x15, 0x9c, 0x4a,
    0x99, 0x63, 0x7d, 0xb6, 0x62, 0xfe, 0xa3, 0x02, 0x51, 0xed, 0x32, 0x9c,
    0xfc, 0x43, 0x89, 0xeb, 0x71, 0x7b, 0x85, 0x02, 0x04, 0xcd, 0xf3, 0x30,
    0xd6, 0x46, 0xfc, 0x7b, 0x2b, 0x19, 0x29, 0xd6, 0x8c, 0xbe, 0x39, 0x49,
    0x7b, 0x62, 0x3a, 0x82, 0xc7, 0x64, 0x1a, 0xc3, 0x48, 0x79, 0x57, 0x3d,
    0xea, 0x0d, 0xab, 0xc7, 0xca, 0x30, 0x9a, 0xe4, 0xb3, 0xed, 0xda, 0xfa,
    0xee, 0x55, 0xd5, 0x42, 0xf7, 0x80, 0x23, 0x03, 0x51, 0xe7, 0x5e, 0x7f,
    0x32, 0xdc, 0x65, 0x2e, 0xf1, 0xed, 0x47, 0xa5, 0x1c, 0x18, 0xd9, 0xdf,
    0x9f, 0xf4, 0x8d, 0x87, 0x8d, 0xb6, 0x22, 0xea, 0x6e, 0x93, 0x70, 0xe9,
    0xc6, 0x3b, 0x35, 0x8b, 0x7c, 0x11, 0x5a, 0xa1,
];

const IFD_PIN_PRIVATE_EXPONENT_1: &[u8] = &[
    0x86, 0x6f, 0x0f, 0x2c, 0x0c, 0xaf, 0x17, 0xae, 0x7d, 0x1e, 0xea, 0xbe,
    0x3a, 0xdb, 0x52, 0x11, 0x24, 0xfe, 0xc9, 0x8c, 0x77, 0xa4, 0xc7, 0x1c,
    0x83, 0xb8, 0xf9, 0x26, 0xb1, 0x89, 0xe9, 0x40, 0x81, 0xbd, 0x33, 0x95,
    0x16, 0x1f, 0xff, 0xf0, 0x31, 0x91, 0x0e, 0x64, 0xfb, 0x1a, 0x02, 0x7d,
    0x51, 0x0e, 0x1d, 0xe5, 0x89, 0xe6, 0x41, 0x32, 0xc6, 0x42, 0xf6, 0x00,
    0x36, 0xd1, 0x4f, 0xfe, 0xd5, 0xd0, 0xce, 0x1f, 0x45, 0xe7, 0x11, 0x6f,
    0x13, 0xc4, 0xe6, 0x38, 0x8e, 0x25, 0xdd, 0x43, 0x83, 0x57, 0x78, 0x05,
    0x85, 0x73, 0xdc, 0x29, 0xad, 0x6a, 0x37, 0x32, 0x71, 0x6d, 0x08, 0x11,
    0x24, 0xb7, 0x52, 0x51, 0x40, 0xb1, 0xdd, 0xab, 0xe2, 0x51, 0xa4, 0x98,
    0x0c, 0xc5, 0xc0, 0x3a, 0x86, 0xa8, 0x2d, 0x17, 0x4f, 0xb7, 0xa8, 0x1d,
    0x24, 0x8d, 0x7c, 0xaa, 0x2b, 0x3d, 0x61, 0xd1,
];

const CV_CA_CERT_0: &[u8] = &[
    0x7f, 0x21, 0x81, 0xce, 0x5f, 0x37, 0x81, 0x80, 0x3c, 0xba, 0xdc, 0x36,
    0x84, 0xbe, 0xf3, 0x20, 0x41, 0xad, 0x15, 0x50, 0x89, 0x25, 0x8d, 0xfd,
    0x20, 0xc6, 0x91, 0x15, 0xd7, 0x2f, 0x9c, 0x38, 0xaa, 0x99, 0xad, 0x6c,
    0x1a, 0xed, 0xfa, 0xb2, 0xbf, 0xac, 0x90, 0x92, 0xfc, 0x70, 0xcc, 0xc0,
    0x0c, 0xaf, 0x48, 0x2a, 0x4b, 0xe3, 0x1a, 0xfd, 0xbd, 0x3c, 0xbc, 0x8c,
    0x83, 0x82, 0xcf, 0x06, 0xbc, 0x07, 0x19, 0xba, 0xab, 0xb5, 0x6b, 0x6e,
    0xc8, 0x07, 0x60, 0xa4, 0xa9, 0x3f, 0xa2, 0xd7, 0xc3, 0x47, 0xf3, 0x44,
    0x27, 0xf9, 0xff, 0x5c, 0x8d, 0xe6, 0xd6, 0x5d, 0xac, 0x95, 0xf2, 0xf1,
    0x9d, 0xac, 0x00, 0x53, 0xdf, 0x11, 0xa5, 0x07, 0xfb, 0x62, 0x5e, 0xeb,
    0x8d, 0xa4, 0xc0, 0x29, 0x9e, 0x4a, 0x21, 0x12, 0xab, 0x70, 0x47, 0x58,
    0x8b, 0x8d, 0x6d, 0xa7, 0x59, 0x22, 0x14, 0xf2, 0xdb, 0xa1, 0x40, 0xc7,
    0xd1, 0x22, 0x57, 0x9b, 0x5f, 0x38, 0x3d, 0x22, 0x53, 0xc8, 0xb9, 0xcb,
    0x5b, 0xc3, 0x54, 0x3a, 0x55, 0x66, 0x0b, 0xda, 0x80, 0x94, 0x6a, 0xfb,
    0x05, 0x25, 0xe8, 0xe5, 0x58, 0x6b, 0x4e, 0x63, 0xe8, 0x92, 0x41, 0x49,
    0x78, 0x36, 0xd8, 0xd3, 0xab, 0x08, 0x8c, 0xd4, 0x4c, 0x21, 0x4d, 0x6a,
    0xc8, 0x56, 0xe2, 0xa0, 0x07, 0xf4, 0x4f, 0x83, 0x74, 0x33, 0x37, 0x37,
    0x1a, 0xdd, 0x8e, 0x03, 0x00, 0x01, 0x00, 0x01, 0x42, 0x08, 0x65, 0x73,
    0x52, 0x44, 0x49, 0x60, 0x00, 0x06,
];

const CV_CA_CERT_1: &[u8] = &[
    0x7f, 0x21, 0x81, 0xce, 0x5f, 0x37, 0x81, 0x80, 0x7a, 0xa0, 0x6c, 0x96,
    0x5e, 0x8f, 0xb2, 0x19, 0x61, 0xcf, 0xd4, 0x49, 0xd0, 0x9b, 0x9d, 0xaf,
    0x03, 0x04, 0x73, 0x01, 0x15, 0x69, 0x70, 0xb7, 0x73, 0xf1, 0x9c, 0x40,
    0xf1, 0x27, 0xd3, 0x38, 0xe3, 0xc1, 0x35, 0xeb, 0x21, 0x20, 0x56, 0x6d,
    0xc6, 0xf9, 0xf7, 0x45, 0xff, 0xb8, 0xf8, 0xe2, 0xb6, 0x1e, 0xe8, 0x16,
    0x6f, 0xfd, 0x06, 0xd2, 0x8c, 0xb4, 0x8c, 0x15, 0x2a, 0x1f, 0xa4, 0xf7,
    0xe9, 0xf6, 0x09, 0xd7, 0x52, 0x76, 0x33, 0x1c, 0xb7, 0x00, 0xb8, 0x4e,
    0x36, 0xac, 0x8a, 0x0a, 0x77, 0x74, 0x46, 0x8c, 0x3c, 0xf3, 0xd1, 0x47,
    0xa4, 0x9c, 0x97, 0x6e, 0x17, 0xab, 0x02, 0xda, 0x03, 0xea, 0x4a, 0xc1,
    0x51, 0x77, 0x7e, 0xdf, 0xbc, 0x35, 0xc2, 0x7d, 0x56, 0xfb, 0xa6, 0x85,
    0x75, 0x6e, 0xd6, 0x52, 0x85, 0x1d, 0xfd, 0xe7, 0x01, 0xbf, 0x87, 0x49,
    0x92, 0xdd, 0x4d, 0xe8, 0x5f, 0x38, 0x3d, 0x33, 0xe3, 0xd5, 0x2a, 0x4b,
    0x09, 0x40, 0xe3, 0x90, 0xcd, 0x1a, 0x64, 0x1f, 0xea, 0x2e, 0x9c, 0xdd,
    0x79, 0xd3, 0x87, 0x2d, 0xd6, 0xc5, 0x08, 0xd5, 0xef, 0x23, 0x9c, 0xb0,
    0x7e, 0xb5, 0x55, 0x68, 0xce, 0x18, 0x8b, 0x65, 0x13, 0xac, 0xb8, 0x84,
    0x14, 0xc9, 0xad, 0xf7, 0xa6, 0x4e, 0x2c, 0xc0, 0xb3, 0x14, 0xd1, 0x27,
    0x54, 0xae, 0xee, 0x67, 0x00, 0x01, 0x00, 0x01, 0x42, 0x08, 0x65, 0x73,
    0x52, 0x44, 0x49, 0x62, 0x00, 0x18,
];

const CV_IFD_CERT_0: &[u8] = &[
    0x7f, 0x21, 0x81, 0xcd, 0x5f, 0x37, 0x81, 0x80, 0x82, 0x5b, 0x69, 0xc6,
    0x45, 0x1e, 0x5f, 0x51, 0x70, 0x74, 0x38, 0x5f, 0x2f, 0x17, 0xd6, 0x4d,
    0xfe, 0x2e, 0x68, 0x56, 0x75, 0x67, 0x09, 0x4b, 0x57, 0xf3, 0xc5, 0x78,
    0xe8, 0x30, 0xe4, 0x25, 0x57, 0x2d, 0xe8, 0x28, 0xfa, 0xf4, 0xde, 0x1b,
    0x01, 0xc3, 0x94, 0xe3, 0x45, 0xc2, 0xfb, 0x06, 0x29, 0xa3, 0x93, 0x49,
    0x2f, 0x94, 0xf5, 0x70, 0xb0, 0x0b, 0x1d, 0x67, 0x77, 0x29, 0xf7, 0x55,
    0xd1, 0x07, 0x02, 0x2b, 0xb0, 0xa1, 0x16, 0xe1, 0xd7, 0xd7, 0x65, 0x9d,
    0xb5, 0xc4, 0xac, 0x0d, 0xde, 0xab, 0x07, 0xff, 0x04, 0x5f, 0x37, 0xb5,
    0xda, 0xf1, 0x73, 0x2b, 0x54, 0xea, 0xb2, 0x38, 0xa2, 0xce, 0x17, 0xc9,
    0x79, 0x41, 0x87, 0x75, 0x9c, 0xea, 0x9f, 0x92, 0xa1, 0x78, 0x05, 0xa2,
    0x7c, 0x10, 0x15, 0xec, 0x56, 0xcc, 0x7e, 0x47, 0x1a, 0x48, 0x8e, 0x6f,
    0x1b, 0x91, 0xf7, 0xaa, 0x5f, 0x38, 0x3c, 0xad, 0xfc, 0x12, 0xe8, 0x56,
    0xb2, 0x02, 0x34, 0x6a, 0xf8, 0x22, 0x6b, 0x1a, 0x88, 0x21, 0x37, 0xdc,
    0x3c, 0x5a, 0x57, 0xf0, 0xd2, 0x81, 0x5c, 0x1f, 0xcd, 0x4b, 0xb4, 0x6f,
    0xa9, 0x15, 0x7f, 0xdf, 0xfd, 0x79, 0xec, 0x3a, 0x10, 0xa8, 0x24, 0xcc,
    0xc1, 0xeb, 0x3c, 0xe0, 0xb6, 0xb4, 0x39, 0x6a, 0xe2, 0x36, 0x59, 0x00,
    0x16, 0xba, 0x69, 0x00, 0x01, 0x00, 0x01, 0x42, 0x08, 0x65, 0x73, 0x53,
    0x44, 0x49, 0x60, 0x00, 0x06,
];

const CV_IFD_CERT_1: &[u8] = &[
    0x7f, 0x21, 0x81, 0xcd, 0x5f, 0x37, 0x81, 0x80, 0x5d, 0xa9, 0x4b, 0x6b,
    0x4e, 0xb8, 0x61, 0xec, 0xa6, 0x36, 0xd2, 0x67, 0x39, 0x74, 0x71, 0x1f,
    0x55, 0x63, 0x0f, 0x5b, 0x89, 0x03, 0x8c, 0x57, 0xd0, 0xbb, 0xbb, 0xc1,
    0xd2, 0xc6, 0x8c, 0xc3, 0xeb, 0x56, 0xd5, 0x30, 0x38, 0x00, 0xf5, 0xa9,
    0xf5, 0xe2, 0x96, 0x7f, 0xdf, 0x28, 0x91, 0x7b, 0xaf, 0xc8, 0x87, 0x63,
    0xb8, 0xec, 0x2c, 0x0e, 0xbe, 0x7a, 0xcb, 0x0b, 0xa4, 0xaf, 0xbf, 0xe6,
    0x6d, 0xb2, 0xa1, 0xed, 0xa1, 0x3e, 0x45, 0x64, 0xf7, 0x8e, 0x65, 0x58,
    0x6e, 0x51, 0x01, 0x76, 0xf1, 0x1c, 0x4c, 0x99, 0x36, 0x4a, 0xaf, 0x18,
    0x97, 0xd1, 0x1b, 0xf9, 0x8e, 0x9d, 0x1d, 0x0a, 0x12, 0xd0, 0x6a, 0xab,
    0x75, 0x76, 0x4a, 0xa8, 0xdc, 0x85, 0x8d, 0xf0, 0xf0, 0x03, 0xeb, 0x8b,
    0x4b, 0x3b, 0x56, 0xf5, 0xf9, 0x5f, 0xa6, 0x37, 0x53, 0x75, 0x19, 0xe4,
    0xc6, 0x55, 0x10, 0xf7, 0x5f, 0x38, 0x3c, 0x60, 0x2d, 0xd4, 0xba, 0x04,
    0xdb, 0xc9, 0x85, 0x88, 0x45, 0xe6, 0xa9, 0xc4, 0x05, 0x5b, 0xc5, 0xbf,
    0xa0, 0xed, 0xdb, 0x86, 0x67, 0x89, 0xf0, 0xec, 0x6a, 0x80, 0xfc, 0xe5,
    0x3c, 0x66, 0x08, 0xdf, 0xdc, 0x9b, 0x9f, 0xe2, 0xed, 0x56, 0x75, 0x2c,
    0xc6, 0x05, 0x51, 0x3b, 0xa3, 0xf1, 0x75, 0x9c, 0xdd, 0x95, 0x22, 0x75,
    0x3f, 0x18, 0xd7, 0x00, 0x01, 0x00, 0x01, 0x42, 0x08, 0x65, 0x73, 0x53,
    0x44, 0x49, 0x62, 0x00, 0x18,
];

const CV_IFD_PIN_CERT_0: &[u8] = &[
    0x7f, 0x21, 0x81, 0xcd, 0x5f, 0x37, 0x81, 0x80, 0x69, 0xc4, 0xe4, 0x94,
    0xf0, 0x08, 0xe2, 0x42, 0x14, 0xb1, 0xc1, 0x31, 0xb6, 0x1f, 0xce, 0x9c,
    0x15, 0xfa, 0x3c, 0xb0, 0x61, 0xdd, 0x6f, 0x02, 0xd8, 0xa2, 0xcd, 0x30,
    0xd7, 0x2f, 0xb6, 0xdf, 0x89, 0x9a, 0xf1, 0x5b, 0x71, 0x78, 0x21, 0xbf,
    0xb1, 0xaf, 0x7d, 0x75, 0x85, 0x01, 0x6d, 0x8c, 0x36, 0xaf, 0x4a, 0xc2,
    0xa0, 0xb0, 0xc5, 0x2a, 0xd6, 0x5b, 0x69, 0x25, 0x67, 0x31, 0xc3, 0x4d,
    0x59, 0x02, 0x0e, 0x87, 0xab, 0x73, 0xa2, 0x30, 0xfa, 0x69, 0xee, 0x82,
    0xb3, 0x3a, 0x31, 0xdf, 0x04, 0x0c, 0xe9, 0x0f, 0x0a, 0xfc, 0x3a, 0x11,
    0x1d, 0x35, 0xda, 0x95, 0x66, 0xa8, 0xcd, 0xab, 0xea, 0x0e, 0x3f, 0x75,
    0x94, 0xc4, 0x40, 0xd3, 0x74, 0x50, 0x7a, 0x94, 0x35, 0x57, 0x59, 0xb3,
    0x9e, 0xc5, 0xe5, 0xfc, 0xb8, 0x03, 0x8d, 0x79, 0x3d, 0x5f, 0x9b, 0xa8,
    0xb5, 0xb1, 0x0b, 0x70, 0x5f, 0x38, 0x3c, 0x4c, 0x86, 0x91, 0xc7, 0xbe,
    0x2f, 0xd8, 0xc1, 0x23, 0x66, 0x0e, 0x98, 0x65, 0xe1, 0x4f, 0x19, 0xdf,
    0xfb, 0xb7, 0xff, 0x38, 0x08, 0xc9, 0xf2, 0x04, 0xe7, 0x97, 0xd0, 0x6d,
    0xd8, 0x33, 0x3a, 0xc5, 0x83, 0x86, 0xee, 0x4e, 0xb6, 0x1e, 0x20, 0xec,
    0xa7, 0xef, 0x38, 0xd5, 0xb0, 0x5e, 0xb1, 0x15, 0x96, 0x6a, 0x5a, 0x89,
    0xad, 0x58, 0xa5, 0x00, 0x01, 0x00, 0x01, 0x42, 0x08, 0x65, 0x73, 0x53,
    0x44, 0x49, 0x60, 0x00, 0x06,
];

const CV_IFD_PIN_CERT_1: &[u8] = &[
    0x7f, 0x21, 0x81, 0xcd, 0x5f, 0x37, 0x81, 0x80, 0x0a, 0x3d, 0xb4, 0xd1,
    0x57, 0x98, 0xf2, 0x34, 0xf6, 0x31, 0xfd, 0x94, 0xc9, 0x1d, 0x2a, 0x63,
    0x63, 0xd0, 0xe1, 0x8e, 0x1b, 0x56, 0xda, 0xbd, 0xe6, 0x22, 0xbc, 0x20,
    0x1f, 0xd7, 0xc7, 0xff, 0x59, 0xff, 0x66, 0xda, 0x6e, 0x43, 0x4f, 0xe2,
    0xf7, 0xf4, 0x6e, 0x42, 0xe4, 0xa6, 0x06, 0xea, 0x82, 0x39, 0xac, 0x1a,
    0xc3, 0x0c, 0x7d, 0xad, 0xe2, 0x29, 0x65, 0xdf, 0x60, 0x6d, 0x11, 0x5e,
    0x04, 0xc8, 0xef, 0xfc, 0x77, 0x2b, 0x8f, 0x5d, 0x48, 0x77, 0x3e, 0x34,
    0x95, 0x5f, 0x33, 0xf4, 0x64, 0xed, 0x85, 0xcc, 0x0e, 0xb1, 0xbc, 0x57,
    0x2a, 0xfa, 0xba, 0x47, 0x25, 0xfb, 0xf5, 0xbd, 0xcf, 0x1d, 0x8c, 0x38,
    0xc9, 0xfe, 0x9c, 0xd8, 0x53, 0x6f, 0x34, 0x0b, 0xce, 0x14, 0x1d, 0xf5,
    0x18, 0x7f, 0xa2, 0xe2, 0x37, 0x2d, 0x73, 0xbc, 0x7f, 0x89, 0x48, 0x35,
    0x0c, 0xba, 0xde, 0xf2, 0x5f, 0x38, 0x3c, 0x0d, 0xcc, 0x88, 0x8d, 0x47,
    0x96, 0x54, 0x3f, 0x03, 0x25, 0x4f, 0x4e, 0x2c, 0xdf, 0x98, 0xb1, 0xe1,
    0x26, 0x11, 0xe3, 0x98, 0x1f, 0x53, 0x33, 0xdf, 0x98, 0xc8, 0x86, 0x01,
    0x93, 0x75, 0x84, 0x0f, 0xac, 0x61, 0xdb, 0x8f, 0x1b, 0xa3, 0xb5, 0x43,
    0xdc, 0xea, 0x3d, 0x05, 0x9e, 0x6a, 0x41, 0x4f, 0x6d, 0xd2, 0x9f, 0xc7,
    0xc9, 0x9d, 0x8b, 0x00, 0x01, 0x00, 0x01, 0x42, 0x08, 0x65, 0x73, 0x53,
    0x44, 0x49, 0x62, 0x00, 0x18,
];

const ROOT_CA_KEY_REF: &[u8] = &[
    0x02, 0x0f,
];

const ICC_PRIV_KEY_REF: &[u8] = &[
    0x02, 0x1f,
];

const INTERMEDIATE_CA_KEY_REF_0: &[u8] = &[
    0x65, 0x73, 0x53, 0x44, 0x49, 0x60, 0x00, 0x06,
];

const INTERMEDIATE_CA_KEY_REF_1: &[u8] = &[
    0x65, 0x73, 0x53, 0x44, 0x49, 0x62, 0x00, 0x18,
];

const IFD_KEY_REF_0: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

const IFD_KEY_REF_1: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0xd0, 0x02, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x02,
];

const IFD_PIN_KEY_REF_0: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

const IFD_PIN_KEY_REF_1: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0xd0, 0x02, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x04,
];

const IFD_SERIAL_0: &[u8] = &[
    0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

const IFD_SERIAL_1: &[u8] = &[
    0xd0, 0x02, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x02,
];

const IFD_PIN_SERIAL_0: &[u8] = &[
    0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

const IFD_PIN_SERIAL_1: &[u8] = &[
    0xd0, 0x02, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x04,
];

/// Credential sets indexed by generation: 0 legacy, 1 current
pub(crate) static CHANNEL_DATA: [GenerationRecord; 2] = [
    // Generation 0: cards before serial BMP100001
    GenerationRecord {
        icc_root_ca: PublicKeyComponents {
            modulus: ICC_ROOT_CA_MODULUS_0,
            exponent: ICC_ROOT_CA_EXPONENT,
        },
        ifd: KeyPairComponents {
            modulus: IFD_MODULUS_0,
            public_exponent: IFD_EXPONENT,
            private_exponent: IFD_PRIVATE_EXPONENT_0,
        },
        ifd_pin: KeyPairComponents {
            modulus: IFD_PIN_MODULUS_0,
            public_exponent: IFD_PIN_EXPONENT,
            private_exponent: IFD_PIN_PRIVATE_EXPONENT_0,
        },
        cv_ca_cert: CV_CA_CERT_0,
        cv_ifd_cert: CV_IFD_CERT_0,
        cv_ifd_pin_cert: CV_IFD_PIN_CERT_0,
        root_ca_key_ref: ROOT_CA_KEY_REF,
        icc_priv_key_ref: ICC_PRIV_KEY_REF,
        intermediate_ca_key_ref: INTERMEDIATE_CA_KEY_REF_0,
        ifd_key_ref: IFD_KEY_REF_0,
        ifd_pin_key_ref: IFD_PIN_KEY_REF_0,
        ifd_serial: IFD_SERIAL_0,
        ifd_pin_serial: IFD_PIN_SERIAL_0,
    },
    // Generation 1: cards from serial BMP100001 on
    GenerationRecord {
        icc_root_ca: PublicKeyComponents {
            modulus: ICC_ROOT_CA_MODULUS_1,
            exponent: ICC_ROOT_CA_EXPONENT,
        },
        ifd: KeyPairComponents {
            modulus: IFD_MODULUS_1,
            public_exponent: IFD_EXPONENT,
            private_exponent: IFD_PRIVATE_EXPONENT_1,
        },
        ifd_pin: KeyPairComponents {
            modulus: IFD_PIN_MODULUS_1,
            public_exponent: IFD_PIN_EXPONENT,
            private_exponent: IFD_PIN_PRIVATE_EXPONENT_1,
        },
        cv_ca_cert: CV_CA_CERT_1,
        cv_ifd_cert: CV_IFD_CERT_1,
        cv_ifd_pin_cert: CV_IFD_PIN_CERT_1,
        root_ca_key_ref: ROOT_CA_KEY_REF,
        icc_priv_key_ref: ICC_PRIV_KEY_REF,
        intermediate_ca_key_ref: INTERMEDIATE_CA_KEY_REF_1,
        ifd_key_ref: IFD_KEY_REF_1,
        ifd_pin_key_ref: IFD_PIN_KEY_REF_1,
        ifd_serial: IFD_SERIAL_1,
        ifd_pin_serial: IFD_PIN_SERIAL_1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const RSA_KEY_LEN: usize = 128;

    fn byte_fields(record: &GenerationRecord) -> [&'static [u8]; 13] {
        [
            record.icc_root_ca.modulus,
            record.icc_root_ca.exponent,
            record.ifd.modulus,
            record.ifd.public_exponent,
            record.ifd.private_exponent,
            record.ifd_pin.modulus,
            record.ifd_pin.public_exponent,
            record.ifd_pin.private_exponent,
            record.cv_ca_cert,
            record.cv_ifd_cert,
            record.cv_ifd_pin_cert,
            record.root_ca_key_ref,
            record.icc_priv_key_ref,
        ]
    }

    #[test]
    fn no_byte_string_is_empty() {
        for record in &CHANNEL_DATA {
            for field in byte_fields(record) {
                assert!(!field.is_empty());
            }
            assert!(!record.intermediate_ca_key_ref.is_empty());
            assert!(!record.ifd_key_ref.is_empty());
            assert!(!record.ifd_pin_key_ref.is_empty());
            assert!(!record.ifd_serial.is_empty());
            assert!(!record.ifd_pin_serial.is_empty());
        }
    }

    #[test]
    fn moduli_match_the_documented_key_size() {
        for record in &CHANNEL_DATA {
            assert_eq!(record.icc_root_ca.modulus.len(), RSA_KEY_LEN);
            assert_eq!(record.ifd.modulus.len(), RSA_KEY_LEN);
            assert_eq!(record.ifd.private_exponent.len(), RSA_KEY_LEN);
            assert_eq!(record.ifd_pin.modulus.len(), RSA_KEY_LEN);
            assert_eq!(record.ifd_pin.private_exponent.len(), RSA_KEY_LEN);
        }
    }

    #[test]
    fn serial_numbers_are_padded_to_eight_bytes() {
        for record in &CHANNEL_DATA {
            assert_eq!(record.ifd_serial.len(), 8);
            assert_eq!(record.ifd_pin_serial.len(), 8);
        }
    }

    #[test]
    fn generations_differ_where_they_must() {
        let [legacy, current] = &CHANNEL_DATA;
        assert_ne!(legacy.icc_root_ca.modulus, current.icc_root_ca.modulus);
        assert_ne!(legacy.ifd.modulus, current.ifd.modulus);
        assert_ne!(legacy.cv_ca_cert, current.cv_ca_cert);
        // card-side references are shared across generations
        assert_eq!(legacy.root_ca_key_ref, current.root_ca_key_ref);
        assert_eq!(legacy.icc_priv_key_ref, current.icc_priv_key_ref);
    }
}
