#[path = "../common/mod.rs"]
mod common;

use tagsmith::ndef::{self, NdefRecord, Record, TagContent, Tnf};

#[test]
fn every_supported_kind_round_trips() -> anyhow::Result<()> {
    let content = common::every_record_kind();
    let bytes = ndef::encode(&content)?;
    let decoded = ndef::decode(&bytes)?;
    assert_eq!(decoded, content);
    Ok(())
}

#[test]
fn foreign_record_decodes_to_placeholder_not_itself() -> anyhow::Result<()> {
    let foreign = NdefRecord::new(Tnf::External, b"example.com:thing", vec![1, 2, 3]);
    let message = ndef::record::encode_message(&[
        NdefRecord::well_known(ndef::text::RTD_TEXT, ndef::text::encode_text("en", "hi")?),
        foreign.clone(),
    ]);
    let decoded = ndef::decode(&message)?;
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded.records()[0], Record::text("en", "hi"));
    match &decoded.records()[1] {
        Record::Unknown { type_label, raw } => {
            assert_eq!(type_label, "example.com:thing");
            assert_eq!(raw, &foreign);
        }
        other => panic!("expected Unknown placeholder, got {:?}", other),
    }

    // Re-encoding keeps the foreign record byte-for-byte
    assert_eq!(ndef::encode(&decoded)?, message);
    Ok(())
}

#[test]
fn malformed_record_does_not_hide_siblings() -> anyhow::Result<()> {
    // Text record whose status byte claims a 10-byte language code
    let broken = NdefRecord::well_known(ndef::text::RTD_TEXT, vec![0x0A, b'e', b'n']);
    let message = ndef::record::encode_message(&[
        broken,
        NdefRecord::well_known(ndef::uri::RTD_URI, ndef::uri::encode_uri("https://example.com")),
    ]);
    let decoded = ndef::decode(&message)?;
    assert!(matches!(decoded.records()[0], Record::Malformed { .. }));
    assert_eq!(decoded.records()[1], Record::uri("https://example.com"));
    Ok(())
}

#[test]
fn empty_input_is_a_decode_error() {
    assert!(ndef::decode(&[]).is_err());
}

#[test]
fn summary_lists_records_in_order() {
    let content = TagContent::new(vec![Record::text("en", "hello"), Record::phone("+100")]);
    assert_eq!(content.summary(), "hello\ntel:+100");
}
