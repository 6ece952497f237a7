#[path = "../common/mod.rs"]
mod common;

use tagsmith::ndef::{self, Record, TagContent, tlv};
use tagsmith::types::MacAddress;

fn single(record: Record) -> Vec<u8> {
    ndef::encode(&TagContent::single(record)).unwrap_or_default()
}

#[test]
fn text_record_bytes() {
    assert_eq!(single(Record::text("en", "hello")), common::hello_message());
}

#[test]
fn uri_uses_abbreviation_prefix() {
    // 0x04 = "https://"
    let bytes = single(Record::uri("https://example.com"));
    assert_eq!(&bytes[..4], &[0xD1, 0x01, 0x0C, 0x55]);
    assert_eq!(bytes[4], 0x04);
    assert_eq!(&bytes[5..], b"example.com");
}

#[test]
fn bluetooth_address_is_reversed_on_the_wire() {
    let mac = MacAddress::parse("00:1A:7D:DA:71:13").unwrap_or(MacAddress::from_bytes([0; 6]));
    let bytes = single(Record::bluetooth(mac));
    let payload = &bytes[bytes.len() - 8..];
    assert_eq!(payload, &[0x08, 0x00, 0x13, 0x71, 0xDA, 0x7D, 0x1A, 0x00]);
}

#[test]
fn open_wifi_has_no_network_key() {
    let bytes = single(Record::wifi("CafeOpen", None));
    let decoded = ndef::decode(&bytes).unwrap_or_default();
    match &decoded.records()[0] {
        Record::WifiCredential {
            passphrase,
            auth_type,
            ..
        } => {
            assert!(passphrase.is_none());
            assert_eq!(auth_type.to_string(), "Open");
        }
        other => panic!("expected wifi record, got {:?}", other),
    }
}

#[test]
fn vcard_omits_absent_fields() {
    let bytes = single(Record::vcard("Jane Doe", "", ""));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("FN:Jane Doe"));
    assert!(!text.contains("TEL"));
    assert!(!text.contains("EMAIL"));
}

#[test]
fn tlv_wrapping_and_lookup() {
    let message = common::hello_message();
    let area = tlv::wrap(&message);
    assert_eq!(area[0], 0x03);
    assert_eq!(area[1] as usize, message.len());
    assert_eq!(*area.last().unwrap_or(&0), 0xFE);
    assert_eq!(tlv::find_ndef(&area), Ok(Some(message.as_slice())));

    let long = vec![0xAB; 300];
    let area = tlv::wrap(&long);
    assert_eq!(&area[..4], &[0x03, 0xFF, 0x01, 0x2C]);
    assert_eq!(area.len(), tlv::wrapped_len(300));
}
