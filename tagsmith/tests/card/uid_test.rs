use tagsmith::card::operations::write_uid;
use tagsmith::constants::DEFAULT_CLASSIC_KEY;
use tagsmith::test_support;
use tagsmith::transport::MockTag;
use tagsmith::{Error, Uid};

#[test]
fn magic_page_tag_takes_seven_byte_identifier() -> anyhow::Result<()> {
    let target = Uid::parse("07 A1 B2 C3 D4 E5 F6")?;
    let mut tag = MockTag::ntag(0x11, [0x04, 1, 2, 3, 4, 5, 6]).magic();
    let internal = tag.page(2)[1];
    write_uid(&mut tag, &target, &DEFAULT_CLASSIC_KEY)?;

    assert_eq!(tag.page(0), [0x07, 0xA1, 0xB2, 0x88 ^ 0x07 ^ 0xA1 ^ 0xB2]);
    assert_eq!(tag.page(1), [0xC3, 0xD4, 0xE5, 0xF6]);
    assert_eq!(tag.page(2)[0], 0xC3 ^ 0xD4 ^ 0xE5 ^ 0xF6);
    assert_eq!(tag.page(2)[1], internal);
    Ok(())
}

#[test]
fn magic_sector_card_keeps_manufacturer_bytes() -> anyhow::Result<()> {
    let mut tag = test_support::magic_classic_1k();
    let before = tag.block(0);
    let target = Uid::parse("11:22:33:44")?;
    write_uid(&mut tag, &target, &DEFAULT_CLASSIC_KEY)?;

    let after = tag.block(0);
    assert_eq!(&after[..4], &[0x11, 0x22, 0x33, 0x44]);
    assert_eq!(after[4], 0x11 ^ 0x22 ^ 0x33 ^ 0x44);
    assert_eq!(&after[5..], &before[5..]);
    Ok(())
}

#[test]
fn identifier_length_must_match_family() -> anyhow::Result<()> {
    let mut classic = test_support::magic_classic_1k();
    let seven = Uid::parse("07A1B2C3D4E5F6")?;
    assert!(matches!(
        write_uid(&mut classic, &seven, &DEFAULT_CLASSIC_KEY),
        Err(Error::UnsupportedUidLength { expected: 4, actual: 7 })
    ));
    assert_eq!(classic.connect_count, 0);

    let mut ntag = test_support::ntag215().magic();
    let four = Uid::parse("01020304")?;
    assert!(matches!(
        write_uid(&mut ntag, &four, &DEFAULT_CLASSIC_KEY),
        Err(Error::UnsupportedUidLength { expected: 7, actual: 4 })
    ));
    Ok(())
}

#[test]
fn ordinary_tags_refuse_the_rewrite() -> anyhow::Result<()> {
    let target = Uid::parse("07A1B2C3D4E5F6")?;
    let mut tag = test_support::ntag215();
    assert!(matches!(
        write_uid(&mut tag, &target, &DEFAULT_CLASSIC_KEY),
        Err(Error::OperationFailed(_))
    ));
    assert_eq!(tag.stored_uid(), test_support::FIXTURE_UID7.to_vec());

    let mut classic = test_support::magic_classic_1k().with_key_a([0x12; 6]);
    assert!(matches!(
        write_uid(&mut classic, &Uid::parse("01020304")?, &DEFAULT_CLASSIC_KEY),
        Err(Error::OperationFailed(_))
    ));
    Ok(())
}
