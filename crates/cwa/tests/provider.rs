//! Facade behaviour over a scripted card.
//!
//! The certificate fixtures are syntactically valid DER certificates with
//! dummy keys and signatures; the provider only ever inspects the issuer,
//! so nothing here needs to verify.

use std::str::FromStr;
use std::time::Duration;

use der::asn1::{BitString, ObjectIdentifier, UtcTime};
use der::Encode;
use dnie_card::{CardType, FilePath, MockCard};
use dnie_cwa::constants::{ICC_CERT_PATH, INTERMEDIATE_CA_CERT_PATH};
use dnie_cwa::{CwaProvider, Error, Generation, Profile};
use rsa::traits::PublicKeyParts;
use x509_cert::certificate::{Certificate, TbsCertificate, Version};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};
use x509_cert::time::{Time, Validity};

const LEGACY_ISSUER: &str = "CN=AC DNIE 001,OU=AC RAIZ COMPONENTES,O=POLICIA,C=ES";
const CURRENT_ISSUER: &str = "CN=AC DNIE 004,OU=AC RAIZ COMPONENTES 2,O=POLICIA,C=ES";

fn cert_der(issuer: &str) -> Vec<u8> {
    let signature_algorithm = AlgorithmIdentifierOwned {
        oid: ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11"),
        parameters: None,
    };
    let validity = Validity {
        not_before: Time::UtcTime(UtcTime::from_unix_duration(Duration::from_secs(0)).unwrap()),
        not_after: Time::UtcTime(
            UtcTime::from_unix_duration(Duration::from_secs(1_893_456_000)).unwrap(),
        ),
    };
    let tbs_certificate = TbsCertificate {
        version: Version::V3,
        serial_number: SerialNumber::new(&[0x01]).unwrap(),
        signature: signature_algorithm.clone(),
        issuer: Name::from_str(issuer).unwrap(),
        validity,
        subject: Name::from_str("CN=COMPONENTE TEST").unwrap(),
        subject_public_key_info: SubjectPublicKeyInfoOwned {
            algorithm: AlgorithmIdentifierOwned {
                oid: ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1"),
                parameters: None,
            },
            subject_public_key: BitString::from_bytes(&[0x30, 0x03, 0x02, 0x01, 0x03]).unwrap(),
        },
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: None,
    };
    Certificate {
        tbs_certificate,
        signature_algorithm,
        signature: BitString::from_bytes(&[0u8; 16]).unwrap(),
    }
    .to_der()
    .unwrap()
}

fn path(s: &str) -> FilePath {
    FilePath::from_hex(s).unwrap()
}

/// User card carrying an intermediate CA certificate with the given issuer
fn card_with_issuer(issuer: &str) -> MockCard {
    let mut card = MockCard::user();
    card.add_file(path(INTERMEDIATE_CA_CERT_PATH), cert_der(issuer));
    card
}

#[test]
fn issuer_marker_latches_the_current_generation() {
    let mut provider = CwaProvider::new(card_with_issuer(CURRENT_ISSUER));
    assert_eq!(provider.generation(), None);

    provider.root_ca_key_ref().unwrap();
    assert_eq!(provider.generation(), Some(Generation::Current));
}

#[test]
fn unmarked_issuer_latches_the_legacy_generation() {
    let mut provider = CwaProvider::new(card_with_issuer(LEGACY_ISSUER));
    provider.cv_ca_cert().unwrap();
    assert_eq!(provider.generation(), Some(Generation::Legacy));
}

#[test]
fn generation_is_resolved_with_exactly_one_read() {
    let mut provider = CwaProvider::new(card_with_issuer(CURRENT_ISSUER));

    provider.root_ca_key_ref().unwrap();
    provider.cv_ca_cert().unwrap();
    provider.cv_ifd_cert().unwrap();
    provider.ifd_serial().unwrap();
    provider.intermediate_ca_cert().unwrap();
    provider.intermediate_ca_key_ref().unwrap();

    assert_eq!(provider.card().select_count, 1);
    assert_eq!(provider.card().read_count, 1);
}

#[test]
fn cached_intermediate_ca_cert_keeps_its_issuer() {
    let mut provider = CwaProvider::new(card_with_issuer(CURRENT_ISSUER));
    let cert = provider.intermediate_ca_cert().unwrap();
    let issuer = cert.tbs_certificate.issuer.to_string();
    assert!(issuer.contains("AC RAIZ COMPONENTES 2"));
}

#[test]
fn profile_switch_changes_only_the_terminal_side() {
    let mut provider = CwaProvider::new(card_with_issuer(LEGACY_ISSUER));
    assert_eq!(provider.active_profile(), Profile::Default);

    let cv_ca = provider.cv_ca_cert().unwrap();
    let root_ref = provider.root_ca_key_ref().unwrap();
    let icc_ref = provider.icc_priv_key_ref().unwrap();
    let inter_ref = provider.intermediate_ca_key_ref().unwrap();
    let cv_ifd = provider.cv_ifd_cert().unwrap();
    let ifd_ref = provider.ifd_key_ref().unwrap();
    let ifd_serial = provider.ifd_serial().unwrap();
    let ifd_key = provider.ifd_private_key().unwrap();

    provider.use_pin_profile();
    assert_eq!(provider.active_profile(), Profile::Pin);

    // shared between the two channels
    assert_eq!(provider.cv_ca_cert().unwrap(), cv_ca);
    assert_eq!(provider.root_ca_key_ref().unwrap(), root_ref);
    assert_eq!(provider.icc_priv_key_ref().unwrap(), icc_ref);
    assert_eq!(provider.intermediate_ca_key_ref().unwrap(), inter_ref);

    // terminal-side credentials swap out
    assert_ne!(provider.cv_ifd_cert().unwrap(), cv_ifd);
    assert_ne!(provider.ifd_key_ref().unwrap(), ifd_ref);
    assert_ne!(provider.ifd_serial().unwrap(), ifd_serial);
    assert_ne!(provider.ifd_private_key().unwrap().n(), ifd_key.n());

    // switching back restores the default set
    provider.use_default_profile();
    assert_eq!(provider.cv_ifd_cert().unwrap(), cv_ifd);
    assert_eq!(provider.ifd_key_ref().unwrap(), ifd_ref);
}

#[test]
fn profile_switch_does_not_touch_the_latched_generation() {
    let mut provider = CwaProvider::new(card_with_issuer(CURRENT_ISSUER));
    provider.cv_ifd_cert().unwrap();
    provider.use_pin_profile();
    provider.cv_ifd_cert().unwrap();

    assert_eq!(provider.generation(), Some(Generation::Current));
    assert_eq!(provider.card().read_count, 1);
}

#[test]
fn pre_session_caches_the_padded_serial() {
    let mut provider = CwaProvider::new(card_with_issuer(LEGACY_ISSUER));
    provider.pre_session().unwrap();
    assert_eq!(provider.card().serial_count, 1);

    let serial = provider.icc_serial().unwrap();
    assert_eq!(serial, [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    // answered from the cache, no second query
    assert_eq!(provider.card().serial_count, 1);
}

#[test]
fn pre_session_rejects_non_user_cards() {
    for card_type in [CardType::Blank, CardType::Admin, CardType::Terminated] {
        let mut provider = CwaProvider::new(MockCard::new(card_type, &[0u8; 7]));
        let err = provider.pre_session().unwrap_err();
        assert!(matches!(err, Error::InvalidCard(t) if t == card_type));
        assert_eq!(provider.card().serial_count, 0);
    }
}

#[test]
fn icc_serial_without_pre_session_queries_the_card_once() {
    let mut provider = CwaProvider::new(card_with_issuer(LEGACY_ISSUER));
    let first = provider.icc_serial().unwrap();
    let second = provider.icc_serial().unwrap();
    assert_eq!(first, second);
    assert_eq!(provider.card().serial_count, 1);
}

#[test]
fn full_session_touches_the_card_a_bounded_number_of_times() {
    let mut provider = CwaProvider::new(card_with_issuer(CURRENT_ISSUER));

    provider.pre_session().unwrap();
    assert_eq!(provider.card().read_count, 0);

    // first credential request resolves the generation
    provider.ifd_private_key().unwrap();
    assert_eq!(provider.card().select_count, 1);
    assert_eq!(provider.card().read_count, 1);

    // everything else is served from the store and the session cache
    provider.root_ca_public_key().unwrap();
    provider.ifd_key_ref().unwrap();
    provider.ifd_serial().unwrap();
    provider.icc_serial().unwrap();
    assert_eq!(provider.card().select_count, 1);
    assert_eq!(provider.card().read_count, 1);
    assert_eq!(provider.card().serial_count, 1);
}

#[test]
fn garbage_certificate_file_does_not_latch() {
    let mut card = MockCard::user();
    card.add_file(path(INTERMEDIATE_CA_CERT_PATH), &[0xDE, 0xAD, 0xBE, 0xEF][..]);
    let mut provider = CwaProvider::new(card);

    let err = provider.root_ca_public_key().unwrap_err();
    assert!(matches!(err, Error::NotACertificate(_)));
    assert_eq!(provider.generation(), None);

    // the next request retries the read instead of serving a stale latch
    provider.root_ca_public_key().unwrap_err();
    assert_eq!(provider.card().select_count, 2);
}

#[test]
fn zero_length_certificate_file_is_reported_as_such() {
    let mut card = MockCard::user();
    card.add_file(path(INTERMEDIATE_CA_CERT_PATH), Vec::new());
    let mut provider = CwaProvider::new(card);

    let err = provider.cv_ca_cert().unwrap_err();
    assert!(matches!(err, Error::ZeroLengthFile { .. }));
}

#[test]
fn missing_certificate_file_surfaces_the_transport_error() {
    let mut provider = CwaProvider::new(MockCard::user());
    let err = provider.cv_ca_cert().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn icc_cert_is_read_from_its_own_file() {
    let mut card = card_with_issuer(CURRENT_ISSUER);
    card.add_file(path(ICC_CERT_PATH), cert_der(CURRENT_ISSUER));
    let mut provider = CwaProvider::new(card);

    let cert = provider.icc_cert().unwrap();
    assert_eq!(
        cert.tbs_certificate.subject.to_string(),
        "CN=COMPONENTE TEST"
    );
    // the component certificate is not cached
    provider.icc_cert().unwrap();
    assert_eq!(provider.card().read_count, 2);
}
