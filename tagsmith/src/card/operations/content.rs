// tagsmith/src/card/operations/content.rs

//! NDEF content on page-addressed (Type 2) tags.

use log::{debug, info};

use crate::card::cc::CapabilityContainer;
use crate::card::classify;
use crate::card::session::Session;
use crate::constants::{CC_PAGE, PAGE_SIZE, USER_DATA_START_PAGE};
use crate::error::DecodeError;
use crate::ndef::{self, TagContent, tlv};
use crate::transport::Transport;
use crate::types::Technology;
use crate::{Error, Result};

/// Bytes from the first user page up to page 255, the last one a one-byte
/// address reaches.
const ADDRESSABLE_AREA_BYTES: usize =
    (u8::MAX as usize + 1 - USER_DATA_START_PAGE as usize) * PAGE_SIZE;

/// Read and decode the NDEF message of a page-addressed tag.
///
/// An empty NDEF TLV, or none at all, is empty content.
pub fn read_content(tag: &mut dyn Transport) -> Result<TagContent> {
    read_inner(tag).map_err(Error::normalize)
}

fn read_inner(tag: &mut dyn Transport) -> Result<TagContent> {
    crate::card::require_page_addressed(tag, "NDEF read")?;
    let mut session = Session::open(tag, Technology::MifareUltralight)?;
    let cc = session.read_capability_container()?;
    if !cc.is_ndef() {
        return Err(Error::PreconditionViolation(
            "tag is not NDEF formatted".into(),
        ));
    }

    let area_len = cc.data_area_bytes();
    let mut area = Vec::with_capacity(area_len);
    let mut page = USER_DATA_START_PAGE;
    loop {
        area.extend_from_slice(&session.read(page)?);
        match tlv::find_ndef(&area) {
            Ok(Some(message)) if message.is_empty() => return Ok(TagContent::default()),
            Ok(Some(message)) => {
                debug!("ndef message of {} bytes", message.len());
                return Ok(ndef::decode(message)?);
            }
            Ok(None) => return Ok(TagContent::default()),
            Err(DecodeError::TruncatedPayload { .. }) if area.len() < area_len => {
                page = page.checked_add(4).ok_or_else(|| {
                    Error::OperationFailed(
                        "ndef message runs past the last addressable page".into(),
                    )
                })?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Encode `content` and write it to a page-addressed tag. Blank tags are
/// formatted first when `format_blank` is set.
pub fn write_content(tag: &mut dyn Transport, content: &TagContent, format_blank: bool) -> Result<()> {
    write_inner(tag, content, format_blank).map_err(Error::normalize)
}

fn write_inner(tag: &mut dyn Transport, content: &TagContent, format_blank: bool) -> Result<()> {
    content.validate()?;
    let area = tlv::wrap(&ndef::encode(content)?);
    crate::card::require_page_addressed(tag, "NDEF write")?;

    let current = {
        let mut session = Session::open(tag, Technology::MifareUltralight)?;
        session.read_capability_container()?
    };

    let format = if current.is_blank() {
        if !format_blank {
            return Err(Error::PreconditionViolation(
                "tag is not NDEF formatted".into(),
            ));
        }
        let version = classify::probe(tag);
        let cc = classify::container_for(version.as_ref(), tag.ultralight_kind()).ok_or_else(
            || Error::OperationFailed("cannot determine memory size of blank tag".into()),
        )?;
        Some(cc)
    } else {
        None
    };
    let cc: CapabilityContainer = format.unwrap_or(current);

    if !cc.is_ndef() {
        return Err(Error::PreconditionViolation(
            "tag is not NDEF formatted".into(),
        ));
    }
    if !cc.write_access_granted() {
        return Err(Error::OperationFailed("tag is read-only".into()));
    }
    let capacity = cc.data_area_bytes().min(ADDRESSABLE_AREA_BYTES);
    if area.len() > capacity {
        return Err(Error::OperationFailed(format!(
            "insufficient capacity: message needs {} bytes, tag holds {}",
            area.len(),
            capacity
        )));
    }

    let mut session = Session::open(tag, Technology::MifareUltralight)?;
    if let Some(cc) = format {
        info!("formatting blank tag, data area {} bytes", cc.data_area_bytes());
        session.write_page(CC_PAGE, cc.to_page())?;
    }
    for (i, chunk) in area.chunks(PAGE_SIZE).enumerate() {
        let mut page = [0u8; PAGE_SIZE];
        page[..chunk.len()].copy_from_slice(chunk);
        let address = u8::try_from(i)
            .ok()
            .and_then(|i| USER_DATA_START_PAGE.checked_add(i))
            .ok_or_else(|| Error::OperationFailed(format!("page {} is not addressable", i)))?;
        session.write_page(address, page)?;
    }
    info!("wrote {} records ({} bytes)", content.len(), area.len());
    Ok(())
}
