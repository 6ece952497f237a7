#[path = "../common/mod.rs"]
mod common;

use tagsmith::coordinator::{Completion, ContentSource, Coordinator, CoordinatorState};
use tagsmith::ndef::{Record, TagContent};
use tagsmith::test_support;
use tagsmith::transport::MockTag;
use tagsmith::Error;

#[test]
fn write_text_then_read_it_back() -> anyhow::Result<()> {
    common::init_logging();
    let mut coordinator = Coordinator::new();
    let mut tag = test_support::ntag215();

    coordinator.arm_write(TagContent::single(Record::text("en", "hello")))?;
    assert_eq!(coordinator.state(), CoordinatorState::ArmedWrite);

    let outcome = coordinator.on_tag(&mut tag);
    assert!(outcome.success(), "{}", outcome.message());
    assert_eq!(outcome.profile.name, "NTAG215");
    assert_eq!(coordinator.state(), CoordinatorState::ArmedRead);

    let outcome = coordinator.on_tag(&mut tag);
    assert_eq!(
        outcome.content().map(|c| c.records().to_vec()),
        Some(vec![Record::text("en", "hello")])
    );
    assert_eq!(outcome.message(), "hello");
    Ok(())
}

#[test]
fn set_password_through_coordinator() -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new();
    let mut tag = test_support::ntag215();
    let access_before = tag.page(132)[0] | 0x80;
    tag.set_page(132, [access_before, 0x05, 0x00, 0x00]);

    coordinator.arm_set_password("1234")?;
    let outcome = coordinator.on_tag(&mut tag);
    assert!(matches!(outcome.completion(), Some(Completion::PasswordSet)));

    assert_eq!(tag.page(133), [0x31, 0x32, 0x33, 0x34]);
    assert_eq!(tag.page(131)[3], 0x04);
    assert_eq!(tag.page(132)[0], access_before & 0x7F);
    assert_eq!(coordinator.state(), CoordinatorState::ArmedRead);
    Ok(())
}

#[test]
fn clone_copies_content_to_a_second_tag() -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new();
    let content = common::every_record_kind();
    let mut source = test_support::ntag_with_content(0x11, &content)?;
    let mut target = MockTag::blank_ntag(0x13, [0x04, 9, 8, 7, 6, 5, 4]);

    coordinator.on_tag(&mut source);
    coordinator.arm_clone()?;
    let outcome = coordinator.on_tag(&mut target);
    assert!(matches!(
        outcome.completion(),
        Some(Completion::Written {
            source: ContentSource::Clone
        })
    ));

    let outcome = coordinator.on_tag(&mut target);
    assert_eq!(outcome.content(), Some(&content));
    Ok(())
}

#[test]
fn failures_are_reported_not_propagated() -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new();
    coordinator.arm_set_password("1234")?;
    let mut classic = test_support::classic_1k();
    let outcome = coordinator.on_tag(&mut classic);
    assert!(!outcome.success());
    assert!(matches!(outcome.result, Err(Error::UnsupportedChipFamily(_))));
    assert_eq!(coordinator.state(), CoordinatorState::ArmedRead);

    coordinator.arm_lock()?;
    let mut lost = test_support::ntag215();
    lost.lost = true;
    let outcome = coordinator.on_tag(&mut lost);
    assert!(matches!(outcome.result, Err(Error::OperationFailed(_))));
    assert_eq!(coordinator.state(), CoordinatorState::ArmedRead);
    Ok(())
}

#[test]
fn uid_rewrite_uses_configured_key() -> anyhow::Result<()> {
    let key = [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5];
    let mut coordinator = Coordinator::builder().with_classic_key(key).build();
    let mut tag = test_support::magic_classic_1k().with_key_a(key);

    coordinator.arm_write_uid("01:02:03:04")?;
    let outcome = coordinator.on_tag(&mut tag);
    assert!(outcome.success(), "{}", outcome.message());
    assert_eq!(tag.stored_uid(), vec![1, 2, 3, 4]);
    Ok(())
}
