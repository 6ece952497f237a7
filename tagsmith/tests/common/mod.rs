// Shared fixtures for the integration test crates.
#![allow(dead_code)]

use tagsmith::ndef::{Record, TagContent};
use tagsmith::types::MacAddress;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One record of every supported kind.
pub fn every_record_kind() -> TagContent {
    TagContent::new(vec![
        Record::text("en", "hello"),
        Record::text("ja", "こんにちは"),
        Record::uri("https://www.example.com/path?q=1"),
        Record::phone("+81312345678"),
        Record::app_launch("com.example.app"),
        Record::wifi("HomeNet", Some("s3cret-pass")),
        Record::wifi("CafeOpen", None),
        Record::bluetooth(MacAddress::from_bytes([0x00, 0x1A, 0x7D, 0xDA, 0x71, 0x13])),
        Record::vcard("Jane Doe", "+15551234567", "jane@example.com"),
        Record::geo(35.6586, 139.7454),
    ])
}

/// `D1 01 08 54 02 65 6E 68 65 6C 6C 6F`: one short well-known text record.
pub fn hello_message() -> Vec<u8> {
    hex::decode("d101085402656e68656c6c6f").unwrap_or_default()
}
