#[path = "../common/mod.rs"]
mod common;

use tagsmith::card::{ChipFamily, ChipModel, NdefStatus, classify};
use tagsmith::test_support;
use tagsmith::transport::MockTag;
use tagsmith::types::{ClassicDescriptor, Technology};

#[test]
fn ntag_models_from_version_probe() {
    common::init_logging();
    for (code, name, capacity) in [
        (0x0F, "NTAG213", 144),
        (0x11, "NTAG215", 496),
        (0x13, "NTAG216", 872),
    ] {
        let mut tag = MockTag::ntag(code, test_support::FIXTURE_UID7);
        let c = classify(&mut tag, true);
        assert_eq!(c.profile.name, name);
        assert_eq!(c.profile.family, ChipFamily::PageAddressed);
        assert_eq!(c.profile.ndef, NdefStatus::Writable);
        assert!(c.profile.writable);
        assert_eq!(c.profile.capacity, Some(capacity));
        assert_eq!(c.identity.version().map(|v| v.storage_size), Some(code));
        assert!(!tag.is_connected());
    }
}

#[test]
fn ntag213_tt_has_its_own_name() {
    let mut tag = MockTag::ntag(0x12, test_support::FIXTURE_UID7);
    let c = classify(&mut tag, true);
    assert_eq!(c.profile.model, Some(ChipModel::Ntag213Tt));
}

#[test]
fn unknown_size_code_gets_generic_label() {
    let mut tag = MockTag::ntag(0x0E, test_support::FIXTURE_UID7);
    let c = classify(&mut tag, true);
    assert!(c.profile.name.contains("unknown size"));
    assert_eq!(c.profile.family, ChipFamily::PageAddressed);
}

#[test]
fn failed_probe_degrades_instead_of_failing() {
    let mut tag = MockTag::ntag(0x11, test_support::FIXTURE_UID7).without_version();
    let c = classify(&mut tag, true);
    assert!(c.identity.version().is_none());
    assert_eq!(c.profile.family, ChipFamily::PageAddressed);

    let mut lost = MockTag::ntag(0x11, test_support::FIXTURE_UID7);
    lost.lost = true;
    let c = classify(&mut lost, true);
    assert_eq!(c.identity.uid_bytes(), &test_support::FIXTURE_UID7);
}

#[test]
fn sector_cards_by_type_and_size() {
    let cases = [
        (ClassicDescriptor::TYPE_CLASSIC, ClassicDescriptor::SIZE_1K, "Mifare Classic 1K"),
        (ClassicDescriptor::TYPE_CLASSIC, ClassicDescriptor::SIZE_4K, "Mifare Classic 4K"),
        (ClassicDescriptor::TYPE_PLUS, ClassicDescriptor::SIZE_2K, "Mifare Plus 2K"),
        (ClassicDescriptor::TYPE_PRO, ClassicDescriptor::SIZE_MINI, "Mifare Pro Mini"),
    ];
    for (type_code, size, name) in cases {
        let mut tag = MockTag::classic(ClassicDescriptor::new(type_code, size), test_support::FIXTURE_UID4);
        let c = classify(&mut tag, true);
        assert_eq!(c.profile.name, name);
        assert_eq!(c.profile.family, ChipFamily::SectorAddressed);
        // no probe was sent
        assert!(tag.sent.is_empty());
    }
}

#[test]
fn smart_cards_by_sak() {
    let mut tag = MockTag::iso_dep(0x20, &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(classify(&mut tag, true).profile.name, "Mifare DESFire");
    let mut tag = MockTag::iso_dep(0x60, &[1, 2, 3, 4]);
    assert_eq!(classify(&mut tag, true).profile.name, "ISO-DEP (CPU Card)");
}

#[test]
fn anything_else_reports_technology_list() {
    let mut tag = MockTag::with_technologies(&[1, 2, 3, 4], vec![Technology::NfcB, Technology::Ndef]);
    let c = classify(&mut tag, true);
    assert_eq!(c.profile.family, ChipFamily::Other);
    assert_eq!(c.profile.name, "NfcB, Ndef");
}
