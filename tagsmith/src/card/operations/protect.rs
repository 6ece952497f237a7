// tagsmith/src/card/operations/protect.rs

//! Password protection and permanent locking of NTAG21x tags.
//!
//! Configuration bytes: AUTH0 (byte 3 of the first config page) is the
//! first protected page, ACCESS (byte 0 of the second config page) bit 7
//! selects read+write protection over write-only protection.

use log::{info, warn};

use crate::card::classify;
use crate::card::layout;
use crate::card::session::Session;
use crate::constants::{
    ACCESS_PROT_BIT, AUTH0_DISABLED, AUTH0_PROTECT_USER_DATA, CC_PAGE, LOCK_PAGE,
};
use crate::transport::Transport;
use crate::types::{Password, Technology, UltralightKind};
use crate::{Error, Result};

fn require_password_capable(tag: &dyn Transport) -> Result<()> {
    if tag.ultralight_kind() == Some(UltralightKind::UltralightC) {
        return Err(Error::UnsupportedChipFamily(
            "Ultralight C uses 3DES authentication, not a 4-byte password".into(),
        ));
    }
    crate::card::require_page_addressed(tag, "password protection")
}

/// Make the tag permanently read-only. Cannot be undone.
pub fn lock(tag: &mut dyn Transport) -> Result<()> {
    lock_inner(tag).map_err(Error::normalize)
}

fn lock_inner(tag: &mut dyn Transport) -> Result<()> {
    crate::card::require_page_addressed(tag, "locking")?;
    let version = classify::probe(tag);
    let dynamic = version
        .and_then(|v| layout::layout_for(v.storage_size))
        .map(|l| l.dynamic_lock);

    let mut session = Session::open(tag, Technology::MifareUltralight)?;
    let cc = session.read_capability_container()?;
    if !cc.is_ndef() || !cc.write_access_granted() {
        return Err(Error::PreconditionViolation("tag is not lockable".into()));
    }

    session.write_page(CC_PAGE, cc.read_only().to_page())?;

    let lock = session.read_page(LOCK_PAGE)?;
    session.write_page(LOCK_PAGE, [lock[0], lock[1], 0xFF, 0xFF])?;

    match dynamic {
        Some(d) => {
            let mut page = session.read_page(d.page)?;
            page[..d.bytes].fill(0xFF);
            session.write_page(d.page, page)?;
        }
        None => warn!("model unknown, dynamic lock bytes left untouched"),
    }
    info!("tag locked permanently");
    Ok(())
}

/// Set `password` and protect writes from the first user page on.
pub fn set_password(tag: &mut dyn Transport, password: &Password) -> Result<()> {
    set_inner(tag, password).map_err(Error::normalize)
}

fn set_inner(tag: &mut dyn Transport, password: &Password) -> Result<()> {
    require_password_capable(tag)?;
    let mut session = Session::open(tag, Technology::MifareUltralight)?;
    let version = session.get_version()?;
    let pages = layout::password_pages(version.storage_size)?;

    session.write_page(pages.pwd, *password.as_bytes())?;
    session.write_page(pages.pack, [0; 4])?;

    let cfg = session.read(pages.config)?;
    let mut config = [cfg[0], cfg[1], cfg[2], cfg[3]];
    let mut access = [cfg[4], cfg[5], cfg[6], cfg[7]];
    access[0] &= !ACCESS_PROT_BIT;
    config[3] = AUTH0_PROTECT_USER_DATA;

    // Once AUTH0 drops the config pages themselves are protected.
    session.write_page(pages.access(), access)?;
    session.write_page(pages.config, config)?;
    info!("password protection enabled from page {}", AUTH0_PROTECT_USER_DATA);
    Ok(())
}

/// Authenticate with `password`, then disable protection and clear it.
pub fn remove_password(tag: &mut dyn Transport, password: &Password) -> Result<()> {
    remove_inner(tag, password).map_err(Error::normalize)
}

fn remove_inner(tag: &mut dyn Transport, password: &Password) -> Result<()> {
    require_password_capable(tag)?;
    let mut session = Session::open(tag, Technology::MifareUltralight)?;
    if let Err(e) = session.pwd_auth(password) {
        warn!("password authentication rejected: {}", e);
        return Err(Error::AuthenticationFailed);
    }
    let version = session.get_version()?;
    let pages = layout::password_pages(version.storage_size)?;

    let mut config = session.read_page(pages.config)?;
    config[3] = AUTH0_DISABLED;
    session.write_page(pages.config, config)?;
    session.write_page(pages.pwd, [0; 4])?;
    info!("password protection removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTag;
    use crate::types::ClassicDescriptor;

    const UID7: [u8; 7] = [0x04, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60];

    fn pwd(s: &str) -> Password {
        Password::new(s).unwrap()
    }

    #[test]
    fn set_password_page_triples() {
        for (code, pwd_page, pack_page, config_page) in
            [(0x0F, 43, 44, 41), (0x11, 133, 134, 131), (0x13, 229, 230, 227)]
        {
            let mut tag = MockTag::ntag(code, UID7);
            set_password(&mut tag, &pwd("abcd")).unwrap();
            assert_eq!(tag.page(pwd_page), *b"abcd");
            assert_eq!(tag.page(pack_page), [0; 4]);
            assert_eq!(tag.page(config_page)[3], 0x04);
            assert!(!tag.is_connected());
        }
    }

    #[test]
    fn set_password_preserves_other_config_bits() {
        let mut tag = MockTag::ntag(0x11, UID7);
        tag.set_page(131, [0x04, 0x00, 0x10, 0xFF]);
        tag.set_page(132, [0x85, 0x05, 0x00, 0x00]);
        set_password(&mut tag, &pwd("1234")).unwrap();
        assert_eq!(tag.page(133), [0x31, 0x32, 0x33, 0x34]);
        assert_eq!(tag.page(131), [0x04, 0x00, 0x10, 0x04]);
        assert_eq!(tag.page(132), [0x05, 0x05, 0x00, 0x00]);
    }

    #[test]
    fn access_is_written_before_auth0() {
        let mut tag = MockTag::ntag(0x0F, UID7);
        set_password(&mut tag, &pwd("abcd")).unwrap();
        let order: Vec<u8> = tag.writes.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![43, 44, 42, 41]);
    }

    #[test]
    fn unknown_model_writes_nothing() {
        for code in [0x0B, 0x12, 0x0E] {
            let mut tag = MockTag::ntag(code, UID7);
            assert!(matches!(
                set_password(&mut tag, &pwd("abcd")),
                Err(Error::UnknownChipModel { size_code }) if size_code == code
            ));
            assert_eq!(tag.write_attempts(), 0);
        }
    }

    #[test]
    fn ultralight_c_is_unsupported() {
        let mut tag = MockTag::ultralight_c(UID7);
        assert!(matches!(
            set_password(&mut tag, &pwd("abcd")),
            Err(Error::UnsupportedChipFamily(_))
        ));
        assert_eq!(tag.connect_count, 0);
    }

    #[test]
    fn protection_blocks_writes_until_removed() {
        let mut tag = MockTag::ntag(0x0F, UID7);
        set_password(&mut tag, &pwd("abcd")).unwrap();

        tag.connect(Technology::MifareUltralight).unwrap();
        assert_eq!(tag.transceive(&[0xA2, 4, 1, 2, 3, 4]).unwrap(), vec![0x00]);
        tag.close().unwrap();

        remove_password(&mut tag, &pwd("abcd")).unwrap();
        assert_eq!(tag.page(41)[3], 0xFF);
        assert_eq!(tag.page(43), [0; 4]);

        tag.connect(Technology::MifareUltralight).unwrap();
        assert_eq!(tag.transceive(&[0xA2, 4, 1, 2, 3, 4]).unwrap(), vec![0x0A]);
        tag.close().unwrap();
    }

    #[test]
    fn wrong_password_is_authentication_failure_without_writes() {
        let mut tag = MockTag::ntag(0x11, UID7).with_password(*b"abcd", [0x80, 0x80]);
        assert!(matches!(
            remove_password(&mut tag, &pwd("zzzz")),
            Err(Error::AuthenticationFailed)
        ));
        assert_eq!(tag.write_attempts(), 0);
        assert_eq!(tag.page(131)[3], 0x04);
    }

    #[test]
    fn lost_tag_fails_without_writes() {
        let mut tag = MockTag::ntag(0x11, UID7).with_password(*b"abcd", [0, 0]);
        tag.lost = true;
        assert!(matches!(
            remove_password(&mut tag, &pwd("abcd")),
            Err(Error::OperationFailed(_))
        ));
        assert!(matches!(
            set_password(&mut tag, &pwd("abcd")),
            Err(Error::OperationFailed(_))
        ));
        assert_eq!(tag.write_attempts(), 0);
    }

    #[test]
    fn lock_sets_cc_static_and_dynamic_bits() {
        let mut tag = MockTag::ntag(0x11, UID7);
        tag.set_page(130, [0x00, 0x00, 0x00, 0xBD]);
        lock(&mut tag).unwrap();
        assert_eq!(tag.page(3), [0xE1, 0x10, 0x3E, 0x0F]);
        assert_eq!(tag.page(2)[2..], [0xFF, 0xFF]);
        assert_eq!(tag.page(130), [0xFF, 0xFF, 0xFF, 0xBD]);
    }

    #[test]
    fn lock_without_known_model_skips_dynamic_bits() {
        let mut tag = MockTag::ultralight_c(UID7);
        lock(&mut tag).unwrap();
        assert_eq!(tag.page(3)[3], 0x0F);
        assert_eq!(tag.page(2)[2..], [0xFF, 0xFF]);
    }

    #[test]
    fn lock_requires_writable_ndef_container() {
        let mut tag = MockTag::blank_ntag(0x0F, UID7);
        assert!(matches!(lock(&mut tag), Err(Error::PreconditionViolation(_))));

        let mut tag = MockTag::ntag(0x0F, UID7);
        lock(&mut tag).unwrap();
        assert!(matches!(lock(&mut tag), Err(Error::PreconditionViolation(_))));
    }

    #[test]
    fn sector_cards_cannot_be_locked() {
        let mut tag = MockTag::classic(ClassicDescriptor::new(0, 1024), [1, 2, 3, 4]);
        assert!(matches!(lock(&mut tag), Err(Error::UnsupportedChipFamily(_))));
        assert!(matches!(
            set_password(&mut tag, &pwd("abcd")),
            Err(Error::UnsupportedChipFamily(_))
        ));
    }
}
