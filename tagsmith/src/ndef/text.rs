// tagsmith/src/ndef/text.rs

//! Well-known `T` payload: status byte, language code, text.
//!
//! Status byte: bit 7 selects UTF-16, bits 0..5 hold the language code
//! length. Text is always written as UTF-8.

use crate::error::DecodeError;

/// Well-known type of a text record.
pub const RTD_TEXT: &[u8] = b"T";

const STATUS_UTF16: u8 = 0x80;
const LANGUAGE_LEN_MASK: u8 = 0x3F;
/// Longest language code the status byte can describe.
pub const MAX_LANGUAGE_LEN: usize = 63;

/// UTF-8 text payload. Fails when the language code does not fit.
pub fn encode_text(language: &str, value: &str) -> Result<Vec<u8>, DecodeError> {
    check_language(language.as_bytes())?;
    let mut payload = Vec::with_capacity(1 + language.len() + value.len());
    payload.push(language.len() as u8);
    payload.extend_from_slice(language.as_bytes());
    payload.extend_from_slice(value.as_bytes());
    Ok(payload)
}

/// Decode a text payload into `(language, value)`.
pub fn decode_text(payload: &[u8]) -> Result<(String, String), DecodeError> {
    let (&status, rest) = payload
        .split_first()
        .ok_or(DecodeError::TruncatedPayload {
            needed: 1,
            available: 0,
        })?;
    let lang_len = (status & LANGUAGE_LEN_MASK) as usize;
    if rest.len() < lang_len {
        return Err(DecodeError::TruncatedPayload {
            needed: lang_len,
            available: rest.len(),
        });
    }
    let (lang, body) = rest.split_at(lang_len);
    check_language(lang)?;
    // ASCII was checked above
    let language = String::from_utf8_lossy(lang).into_owned();

    let value = if status & STATUS_UTF16 != 0 {
        decode_utf16(body)?
    } else {
        String::from_utf8(body.to_vec())
            .map_err(|e| DecodeError::MalformedTextRecord(format!("invalid utf-8: {}", e)))?
    };
    Ok((language, value))
}

fn check_language(lang: &[u8]) -> Result<(), DecodeError> {
    if lang.len() > MAX_LANGUAGE_LEN {
        return Err(DecodeError::MalformedTextRecord(format!(
            "language code is {} bytes, at most {} allowed",
            lang.len(),
            MAX_LANGUAGE_LEN
        )));
    }
    if !lang.is_ascii() {
        return Err(DecodeError::MalformedTextRecord(
            "language code must be ascii".into(),
        ));
    }
    Ok(())
}

// Big endian unless a byte order mark says otherwise.
fn decode_utf16(body: &[u8]) -> Result<String, DecodeError> {
    if body.len() % 2 != 0 {
        return Err(DecodeError::MalformedTextRecord(
            "utf-16 text has odd length".into(),
        ));
    }
    let (little_endian, body) = match body {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, body),
    };
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            if little_endian {
                u16::from_le_bytes([c[0], c[1]])
            } else {
                u16::from_be_bytes([c[0], c[1]])
            }
        })
        .collect();
    String::from_utf16(&units)
        .map_err(|e| DecodeError::MalformedTextRecord(format!("invalid utf-16: {}", e)))
}
