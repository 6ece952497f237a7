// tagsmith/src/card/operations/uid.rs

//! Identifier rewrite for "magic" tags that accept writes to their
//! manufacturer block or identifier pages. Regular tags reject the write;
//! that surfaces as `OperationFailed`.

use log::info;

use crate::card::session::Session;
use crate::constants::LOCK_PAGE;
use crate::protocol::checksum::{bcc, bcc0, bcc1};
use crate::transport::Transport;
use crate::types::{BlockData, PageData, Technology, Uid};
use crate::{Error, Result};

/// Rewrite the identifier, choosing the strategy by technology.
pub fn write_uid(tag: &mut dyn Transport, target: &Uid, key_a: &[u8; 6]) -> Result<()> {
    let result = if tag.has_technology(Technology::MifareClassic) {
        write_sector_uid(tag, target, key_a)
    } else if tag.has_technology(Technology::MifareUltralight) {
        write_page_uid(tag, target)
    } else {
        Err(Error::UnsupportedChipFamily(
            "identifier rewrite needs a sector- or page-addressed tag".into(),
        ))
    };
    result.map_err(Error::normalize)
}

/// Manufacturer block with a new 4-byte identifier and its BCC. Bytes
/// 5..16 are kept.
pub fn rewrite_block0(block: &BlockData, uid: &[u8; 4]) -> BlockData {
    let mut out = *block.as_bytes();
    out[..4].copy_from_slice(uid);
    out[4] = bcc(uid);
    BlockData::from_bytes(out)
}

/// Pages 0-2 for a 7-byte identifier. Bytes 1..4 of page 2 (internal and
/// static lock bytes) come from `page2`.
pub fn identifier_pages(uid: &[u8; 7], page2: PageData) -> [PageData; 3] {
    [
        [uid[0], uid[1], uid[2], bcc0(uid)],
        [uid[3], uid[4], uid[5], uid[6]],
        [bcc1(uid), page2[1], page2[2], page2[3]],
    ]
}

fn write_sector_uid(tag: &mut dyn Transport, target: &Uid, key_a: &[u8; 6]) -> Result<()> {
    let uid: [u8; 4] = target
        .as_bytes()
        .try_into()
        .map_err(|_| Error::UnsupportedUidLength {
            expected: 4,
            actual: target.len(),
        })?;

    let mut session = Session::open(tag, Technology::MifareClassic)?;
    if !session.authenticate_sector_key_a(0, key_a)? {
        return Err(Error::OperationFailed(
            "sector 0 rejected key A".into(),
        ));
    }
    let block = session.read_block(0)?;
    session.write_block(0, rewrite_block0(&block, &uid))?;
    info!("manufacturer block rewritten to {}", target);
    Ok(())
}

fn write_page_uid(tag: &mut dyn Transport, target: &Uid) -> Result<()> {
    let uid: [u8; 7] = target
        .as_bytes()
        .try_into()
        .map_err(|_| Error::UnsupportedUidLength {
            expected: 7,
            actual: target.len(),
        })?;

    let mut session = Session::open(tag, Technology::MifareUltralight)?;
    let page2 = session.read_page(LOCK_PAGE)?;
    for (page, data) in identifier_pages(&uid, page2).into_iter().enumerate() {
        session.write_page(page as u8, data)?;
    }
    info!("identifier pages rewritten to {}", target);
    Ok(())
}
