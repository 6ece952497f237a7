#[path = "../common/mod.rs"]
mod common;

use tagsmith::Error;
use tagsmith::card::operations::{read_content, write_content};
use tagsmith::ndef::{Record, TagContent};
use tagsmith::test_support;
use tagsmith::transport::MockTag;

#[test]
fn write_then_read_every_record_kind() -> anyhow::Result<()> {
    common::init_logging();
    let content = common::every_record_kind();
    let mut tag = test_support::ntag215();
    write_content(&mut tag, &content, false)?;
    assert_eq!(read_content(&mut tag)?, content);
    assert!(!tag.is_connected());
    Ok(())
}

#[test]
fn blank_tag_is_formatted_when_allowed() -> anyhow::Result<()> {
    let content = TagContent::single(Record::text("en", "hello"));

    let mut tag = MockTag::blank_ntag(0x0F, test_support::FIXTURE_UID7);
    assert!(matches!(
        write_content(&mut tag, &content, false),
        Err(Error::PreconditionViolation(_))
    ));
    assert_eq!(tag.write_attempts(), 0);

    write_content(&mut tag, &content, true)?;
    assert_eq!(tag.page(3), [0xE1, 0x10, 0x12, 0x00]);
    assert_eq!(read_content(&mut tag)?, content);
    Ok(())
}

#[test]
fn content_larger_than_tag_is_rejected() {
    let long = "x".repeat(200);
    let content = TagContent::single(Record::text("en", &long));
    let mut tag = MockTag::ntag(0x0F, test_support::FIXTURE_UID7);
    match write_content(&mut tag, &content, true) {
        Err(Error::OperationFailed(msg)) => assert!(msg.contains("insufficient capacity")),
        other => panic!("expected capacity failure, got {:?}", other),
    }
    assert_eq!(tag.write_attempts(), 0);
}

#[test]
fn sector_cards_have_no_content_io() {
    let mut tag = test_support::classic_1k();
    assert!(matches!(read_content(&mut tag), Err(Error::UnsupportedChipFamily(_))));
}
