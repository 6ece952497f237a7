//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTag setup so tests across the
//! crate and tests/ directory can reuse the same tags.
#![allow(dead_code)]

use crate::ndef::{self, Record, TagContent};
use crate::transport::MockTag;
use crate::types::ClassicDescriptor;

/// Identifier used by the page-addressed fixtures.
pub const FIXTURE_UID7: [u8; 7] = [0x04, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6];

/// Identifier used by the sector-addressed fixtures.
pub const FIXTURE_UID4: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// Formatted, empty NTAG215.
#[doc(hidden)]
pub fn ntag215() -> MockTag {
    MockTag::ntag(0x11, FIXTURE_UID7)
}

/// NTAG tag of the given size code holding `content`.
#[doc(hidden)]
pub fn ntag_with_content(size_code: u8, content: &TagContent) -> crate::Result<MockTag> {
    let message = ndef::encode(content)?;
    Ok(MockTag::ntag(size_code, FIXTURE_UID7).with_ndef_message(&message))
}

/// NTAG215 holding a single English text record.
#[doc(hidden)]
pub fn ntag215_with_text(text: &str) -> crate::Result<MockTag> {
    ntag_with_content(0x11, &TagContent::single(Record::text("en", text)))
}

/// Password-protected NTAG215 (AUTH0 = 4).
#[doc(hidden)]
pub fn protected_ntag215(password: [u8; 4]) -> MockTag {
    ntag215().with_password(password, [0x80, 0x80])
}

/// Mifare Classic 1K with factory key A.
#[doc(hidden)]
pub fn classic_1k() -> MockTag {
    MockTag::classic(
        ClassicDescriptor::new(ClassicDescriptor::TYPE_CLASSIC, ClassicDescriptor::SIZE_1K),
        FIXTURE_UID4,
    )
}

/// Magic (identifier-writable) Classic 1K.
#[doc(hidden)]
pub fn magic_classic_1k() -> MockTag {
    classic_1k().magic()
}
