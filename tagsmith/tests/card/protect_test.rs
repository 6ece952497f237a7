use tagsmith::card::operations::{lock, remove_password, set_password};
use tagsmith::test_support;
use tagsmith::transport::{MockTag, Transport};
use tagsmith::{Error, Password, Technology};

#[test]
fn set_password_on_ntag215() -> anyhow::Result<()> {
    let mut tag = test_support::ntag215();
    tag.set_page(132, [0x85, 0x05, 0x00, 0x00]);
    set_password(&mut tag, &Password::new("1234")?)?;

    assert_eq!(tag.page(133), [0x31, 0x32, 0x33, 0x34]);
    assert_eq!(tag.page(131)[3], 0x04);
    assert_eq!(tag.page(132)[0], 0x05);
    assert_eq!(tag.page(134), [0; 4]);
    Ok(())
}

#[test]
fn unknown_size_codes_write_nothing() -> anyhow::Result<()> {
    for code in [0x0B, 0x0E, 0x10, 0x12, 0x14] {
        let mut tag = MockTag::ntag(code, test_support::FIXTURE_UID7);
        match set_password(&mut tag, &Password::new("1234")?) {
            Err(Error::UnknownChipModel { size_code }) => assert_eq!(size_code, code),
            other => panic!("expected UnknownChipModel for {:#04x}, got {:?}", code, other),
        }
        assert_eq!(tag.write_attempts(), 0);
    }
    Ok(())
}

#[test]
fn password_cycle() -> anyhow::Result<()> {
    let password = Password::new("abcd")?;
    let mut tag = MockTag::ntag(0x13, test_support::FIXTURE_UID7);
    set_password(&mut tag, &password)?;
    assert_eq!(tag.page(229), *b"abcd");

    assert!(matches!(
        remove_password(&mut tag, &Password::new("abce")?),
        Err(Error::AuthenticationFailed)
    ));
    remove_password(&mut tag, &password)?;
    assert_eq!(tag.page(227)[3], 0xFF);
    assert_eq!(tag.page(229), [0; 4]);

    tag.connect(Technology::MifareUltralight)?;
    assert_eq!(tag.transceive(&[0xA2, 4, 9, 9, 9, 9])?, vec![0x0A]);
    tag.close()?;
    Ok(())
}

#[test]
fn lock_is_permanent() -> anyhow::Result<()> {
    let mut tag = test_support::ntag215_with_text("hello")?;
    lock(&mut tag)?;
    assert_eq!(tag.page(3)[3], 0x0F);
    assert_eq!(&tag.page(2)[2..], &[0xFF, 0xFF]);
    assert!(matches!(lock(&mut tag), Err(Error::PreconditionViolation(_))));
    Ok(())
}
