// tagsmith/src/ndef/vcard.rs

//! Minimal vCard 3.0 (`text/vcard`) carrying a name, phone and email.

use crate::error::DecodeError;

/// Record type written by `encode_vcard`.
pub const MIME_VCARD: &str = "text/vcard";
/// Older type still found on tags; read only.
pub const MIME_VCARD_LEGACY: &str = "text/x-vcard";

/// Contact fields carried by a vCard record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCardFields {
    /// `FN` property.
    pub name: Option<String>,
    /// First `TEL` property.
    pub phone: Option<String>,
    /// First `EMAIL` property.
    pub email: Option<String>,
}

/// Serialize as vCard 3.0 with `\n` line endings.
pub fn encode_vcard(fields: &VCardFields) -> Vec<u8> {
    let mut s = String::from("BEGIN:VCARD\nVERSION:3.0\n");
    if let Some(name) = &fields.name {
        s.push_str(&format!("N:{};;;\nFN:{}\n", name, name));
    }
    if let Some(phone) = &fields.phone {
        s.push_str(&format!("TEL;TYPE=CELL:{}\n", phone));
    }
    if let Some(email) = &fields.email {
        s.push_str(&format!("EMAIL:{}\n", email));
    }
    s.push_str("END:VCARD");
    s.into_bytes()
}

/// First `FN`, `TEL` and `EMAIL` properties win; `N` is used when there is
/// no `FN`. Property parameters (`;TYPE=...`) are ignored.
pub fn decode_vcard(payload: &[u8]) -> Result<VCardFields, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::TruncatedPayload {
            needed: 1,
            available: 0,
        });
    }
    let text = std::str::from_utf8(payload)
        .map_err(|e| DecodeError::MalformedRecord(format!("vcard is not utf-8: {}", e)))?;
    if !text.trim_start().to_ascii_uppercase().starts_with("BEGIN:VCARD") {
        return Err(DecodeError::MalformedRecord("missing BEGIN:VCARD".into()));
    }

    let mut fields = VCardFields::default();
    let mut structured_name = None;
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let property = key.split(';').next().unwrap_or(key).to_ascii_uppercase();
        match property.as_str() {
            "FN" if fields.name.is_none() => fields.name = Some(value.to_string()),
            "N" if structured_name.is_none() => {
                structured_name = value.split(';').next().map(str::to_string)
            }
            "TEL" if fields.phone.is_none() => fields.phone = Some(value.to_string()),
            "EMAIL" if fields.email.is_none() => fields.email = Some(value.to_string()),
            _ => {}
        }
    }
    if fields.name.is_none() {
        fields.name = structured_name.filter(|n| !n.is_empty());
    }
    Ok(fields)
}
