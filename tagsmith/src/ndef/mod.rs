// tagsmith/src/ndef/mod.rs

//! Typed tag content and its NDEF encoding.
//!
//! `encode` turns a [`TagContent`] into an NDEF message; `decode` walks a
//! message and maps every record to a typed [`Record`]. Records the codec
//! does not understand, or whose payload is broken, come back as
//! placeholders carrying the raw record so siblings are still shown and a
//! clone writes them back unchanged.

pub mod bluetooth;
pub mod record;
pub mod text;
pub mod tlv;
pub mod uri;
pub mod vcard;
pub mod wifi;

pub use record::{NdefRecord, Tnf};
pub use wifi::{WifiAuthType, WifiEncryptionType};

use crate::error::DecodeError;
use crate::types::MacAddress;
use crate::{Error, Result};
use std::fmt;

/// External type used by Android application records.
pub const EXTERNAL_APP_LAUNCH: &str = "android.com:pkg";

/// One typed record of a tag's content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Record {
    /// Well-known text record.
    Text {
        /// IANA language code, e.g. `en`.
        language: String,
        /// Text in any script.
        value: String,
    },
    /// Any URI other than `tel:` and plain `geo:` ones.
    Uri {
        /// Full URI, prefix expanded.
        value: String,
    },
    /// Phone number without the `tel:` scheme.
    Phone {
        /// Number without the scheme.
        value: String,
    },
    /// Android application record.
    AppLaunch {
        /// Package name, e.g. `com.example.app`.
        package_id: String,
    },
    /// WiFi Simple Configuration credential.
    WifiCredential {
        /// Network name.
        ssid: String,
        /// `None` for open networks.
        passphrase: Option<String>,
        /// Authentication type.
        auth_type: WifiAuthType,
        /// Encryption type.
        enc_type: WifiEncryptionType,
    },
    /// Bluetooth out-of-band pairing record.
    BluetoothPairing {
        /// Device address.
        mac_address: MacAddress,
    },
    /// Contact card.
    VCard {
        /// Formatted name.
        name: Option<String>,
        /// Phone number.
        phone: Option<String>,
        /// Email address.
        email: Option<String>,
    },
    /// `geo:` URI with plain coordinates.
    GeoLocation {
        /// Degrees north.
        lat: f64,
        /// Degrees east.
        lon: f64,
    },
    /// A record type this codec does not interpret.
    Unknown {
        /// Printable record type.
        type_label: String,
        /// Record as read, written back verbatim by a clone.
        raw: NdefRecord,
    },
    /// A recognised record type whose payload could not be decoded, or a
    /// framing error that ended the message (`raw` is then `None`).
    Malformed {
        /// Printable record type.
        type_label: String,
        /// Why decoding failed.
        reason: String,
        /// Record as read, when it could be framed.
        raw: Option<NdefRecord>,
    },
}

impl Record {
    /// Text record in `language`.
    pub fn text(language: &str, value: &str) -> Self {
        Self::Text {
            language: language.to_string(),
            value: value.to_string(),
        }
    }

    /// `tel:` numbers become [`Record::Phone`] and plain `geo:lat,lon`
    /// URIs become [`Record::GeoLocation`], matching what `decode` yields.
    pub fn uri(value: &str) -> Self {
        uri_record(value.to_string())
    }

    /// Phone record from a bare number.
    pub fn phone(value: &str) -> Self {
        Self::Phone {
            value: value.to_string(),
        }
    }

    /// Android application record.
    pub fn app_launch(package_id: &str) -> Self {
        Self::AppLaunch {
            package_id: package_id.to_string(),
        }
    }

    /// An empty passphrase means an open network.
    pub fn wifi(ssid: &str, passphrase: Option<&str>) -> Self {
        match passphrase.filter(|p| !p.is_empty()) {
            Some(key) => Self::WifiCredential {
                ssid: ssid.to_string(),
                passphrase: Some(key.to_string()),
                auth_type: WifiAuthType::Wpa2Personal,
                enc_type: WifiEncryptionType::Aes,
            },
            None => Self::WifiCredential {
                ssid: ssid.to_string(),
                passphrase: None,
                auth_type: WifiAuthType::Open,
                enc_type: WifiEncryptionType::None,
            },
        }
    }

    /// Bluetooth pairing record.
    pub fn bluetooth(mac_address: MacAddress) -> Self {
        Self::BluetoothPairing { mac_address }
    }

    /// Empty strings are treated as absent fields.
    pub fn vcard(name: &str, phone: &str, email: &str) -> Self {
        let opt = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self::VCard {
            name: opt(name),
            phone: opt(phone),
            email: opt(email),
        }
    }

    /// Location record.
    pub fn geo(lat: f64, lon: f64) -> Self {
        Self::GeoLocation { lat, lon }
    }

    /// True for records kept only so they are shown and cloned.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Unknown { .. } | Self::Malformed { .. })
    }

    /// Check the fields a write needs. Runs before any tag I/O.
    pub fn validate(&self) -> Result<()> {
        let missing = |what: &str| -> Result<()> {
            Err(Error::PreconditionViolation(format!("{} is required", what)))
        };
        match self {
            Self::Text { language, value } => {
                if value.is_empty() {
                    return missing("text");
                }
                text::encode_text(language, value)
                    .map(|_| ())
                    .map_err(|e| Error::PreconditionViolation(e.to_string()))
            }
            Self::Uri { value } if value.is_empty() => missing("uri"),
            Self::Uri { value } if dedicated_uri_kind(value).is_some() => {
                Err(dedicated_uri_error(value))
            }
            Self::Phone { value } if value.is_empty() => missing("phone number"),
            Self::AppLaunch { package_id } if package_id.is_empty() => missing("package id"),
            Self::WifiCredential { ssid, .. } if ssid.is_empty() => missing("ssid"),
            Self::VCard { name, phone, .. } if name.is_none() && phone.is_none() => {
                missing("contact name or phone")
            }
            Self::GeoLocation { lat, lon } if !uri::valid_coordinates(*lat, *lon) => {
                Err(Error::PreconditionViolation(format!(
                    "coordinates out of range: {}, {}",
                    lat, lon
                )))
            }
            _ => Ok(()),
        }
    }

    /// Wire record for this value. Placeholders without a raw record have
    /// nothing to write and yield `None`.
    pub fn to_ndef(&self) -> Result<Option<NdefRecord>> {
        let rec = match self {
            Self::Text { language, value } => {
                NdefRecord::well_known(text::RTD_TEXT, text::encode_text(language, value)?)
            }
            Self::Uri { value } if dedicated_uri_kind(value).is_some() => {
                return Err(dedicated_uri_error(value));
            }
            Self::Uri { value } => NdefRecord::well_known(uri::RTD_URI, uri::encode_uri(value)),
            Self::Phone { value } => NdefRecord::well_known(
                uri::RTD_URI,
                uri::encode_uri(&format!("{}{}", uri::PREFIX_TEL, value)),
            ),
            Self::GeoLocation { lat, lon } => {
                NdefRecord::well_known(uri::RTD_URI, uri::encode_uri(&uri::format_geo(*lat, *lon)))
            }
            Self::AppLaunch { package_id } => {
                NdefRecord::external(EXTERNAL_APP_LAUNCH, package_id.as_bytes().to_vec())
            }
            Self::WifiCredential {
                ssid,
                passphrase,
                auth_type,
                enc_type,
            } => NdefRecord::mime(
                wifi::MIME_WIFI,
                wifi::encode_wifi(&wifi::WifiFields {
                    ssid: ssid.clone(),
                    passphrase: passphrase.clone(),
                    auth_type: *auth_type,
                    enc_type: *enc_type,
                }),
            ),
            Self::BluetoothPairing { mac_address } => NdefRecord::mime(
                bluetooth::MIME_BLUETOOTH_OOB,
                bluetooth::encode_bluetooth(mac_address),
            ),
            Self::VCard { name, phone, email } => NdefRecord::mime(
                vcard::MIME_VCARD,
                vcard::encode_vcard(&vcard::VCardFields {
                    name: name.clone(),
                    phone: phone.clone(),
                    email: email.clone(),
                }),
            ),
            Self::Unknown { raw, .. } => raw.clone(),
            Self::Malformed { raw, .. } => match raw {
                Some(raw) => raw.clone(),
                None => return Ok(None),
            },
        };
        Ok(Some(rec))
    }

    /// Map one wire record to a typed record. Never fails: payload errors
    /// become `Malformed`.
    pub fn from_ndef(raw: NdefRecord) -> Self {
        match interpret(&raw) {
            Ok(Some(rec)) => rec,
            Ok(None) => Self::Unknown {
                type_label: raw.type_label(),
                raw,
            },
            Err(e) => Self::Malformed {
                type_label: raw.type_label(),
                reason: e.to_string(),
                raw: Some(raw),
            },
        }
    }
}

fn interpret(raw: &NdefRecord) -> std::result::Result<Option<Record>, DecodeError> {
    let payload = raw.payload.as_slice();
    let rec = match (raw.tnf, raw.record_type.as_slice()) {
        (Tnf::WellKnown, text::RTD_TEXT) => {
            let (language, value) = text::decode_text(payload)?;
            Record::Text { language, value }
        }
        (Tnf::WellKnown, uri::RTD_URI) => uri_record(uri::decode_uri(payload)?),
        (Tnf::AbsoluteUri, t) => uri_record(
            std::str::from_utf8(t)
                .map_err(|e| DecodeError::MalformedRecord(format!("uri is not utf-8: {}", e)))?
                .to_string(),
        ),
        (Tnf::External, t) if t == EXTERNAL_APP_LAUNCH.as_bytes() => {
            if payload.is_empty() {
                return Err(DecodeError::TruncatedPayload {
                    needed: 1,
                    available: 0,
                });
            }
            let package_id = String::from_utf8(payload.to_vec())
                .map_err(|e| DecodeError::MalformedRecord(format!("package id: {}", e)))?;
            Record::AppLaunch { package_id }
        }
        (Tnf::MimeMedia, t) => {
            let mime = String::from_utf8_lossy(t).to_ascii_lowercase();
            match mime.as_str() {
                wifi::MIME_WIFI => {
                    let f = wifi::decode_wifi(payload)?;
                    Record::WifiCredential {
                        ssid: f.ssid,
                        passphrase: f.passphrase,
                        auth_type: f.auth_type,
                        enc_type: f.enc_type,
                    }
                }
                bluetooth::MIME_BLUETOOTH_OOB => Record::BluetoothPairing {
                    mac_address: bluetooth::decode_bluetooth(payload)?,
                },
                vcard::MIME_VCARD | vcard::MIME_VCARD_LEGACY => {
                    let f = vcard::decode_vcard(payload)?;
                    Record::VCard {
                        name: f.name,
                        phone: f.phone,
                        email: f.email,
                    }
                }
                _ => return Ok(None),
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(rec))
}

fn uri_record(value: String) -> Record {
    dedicated_uri_kind(&value).unwrap_or(Record::Uri { value })
}

// `tel:` URIs and `geo:` URIs that re-encode byte for byte from their
// coordinates have their own record kinds. A `Uri` holding one would
// decode as something else.
fn dedicated_uri_kind(value: &str) -> Option<Record> {
    if let Some(number) = value.strip_prefix(uri::PREFIX_TEL) {
        return Some(Record::Phone {
            value: number.to_string(),
        });
    }
    uri::parse_geo(value)
        .filter(|&(lat, lon)| uri::format_geo(lat, lon) == value)
        .map(|(lat, lon)| Record::GeoLocation { lat, lon })
}

fn dedicated_uri_error(value: &str) -> Error {
    Error::PreconditionViolation(format!(
        "uri {:?} must be given as a phone or location record",
        value
    ))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { value, .. } => f.write_str(value),
            Self::Uri { value } => f.write_str(value),
            Self::Phone { value } => write!(f, "{}{}", uri::PREFIX_TEL, value),
            Self::AppLaunch { package_id } => write!(f, "App: {}", package_id),
            Self::WifiCredential {
                ssid, auth_type, ..
            } => write!(f, "WiFi: {} ({})", ssid, auth_type),
            Self::BluetoothPairing { mac_address } => write!(f, "Bluetooth: {}", mac_address),
            Self::VCard { name, phone, email } => {
                let parts: Vec<&str> = [name, phone, email]
                    .into_iter()
                    .filter_map(|p| p.as_deref())
                    .collect();
                write!(f, "Contact: {}", parts.join(", "))
            }
            Self::GeoLocation { lat, lon } => f.write_str(&uri::format_geo(*lat, *lon)),
            Self::Unknown { type_label, .. } => write!(f, "[Type: {}]", type_label),
            Self::Malformed {
                type_label, reason, ..
            } => write!(f, "[Malformed {}: {}]", type_label, reason),
        }
    }
}

/// Ordered records read from or destined for a tag.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagContent {
    records: Vec<Record>,
}

impl TagContent {
    /// Content from records in message order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Content with one record.
    pub fn single(record: Record) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Records in message order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records, placeholders included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One line per record, for the read display.
    pub fn summary(&self) -> String {
        self.records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Content must have at least one record that produces bytes and every
    /// record must carry its required fields.
    pub fn validate(&self) -> Result<()> {
        let writable = self
            .records
            .iter()
            .filter(|r| !matches!(r, Record::Malformed { raw: None, .. }))
            .count();
        if writable == 0 {
            return Err(Error::PreconditionViolation("content is empty".into()));
        }
        self.records.iter().try_for_each(Record::validate)
    }
}

impl FromIterator<Record> for TagContent {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagContent {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Encode content as one NDEF message.
pub fn encode(content: &TagContent) -> Result<Vec<u8>> {
    let mut records = Vec::with_capacity(content.len());
    for rec in content.iter() {
        match rec.to_ndef()? {
            Some(r) => records.push(r),
            None => log::warn!("dropping placeholder without raw bytes: {}", rec),
        }
    }
    if records.is_empty() {
        return Err(Error::PreconditionViolation("content is empty".into()));
    }
    Ok(record::encode_message(&records))
}

/// Decode an NDEF message.
///
/// Only an empty input fails as a whole. Empty (TNF 0) records are
/// skipped, so `D0 00 00` decodes to empty content.
pub fn decode(data: &[u8]) -> std::result::Result<TagContent, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::TruncatedPayload {
            needed: 3,
            available: 0,
        });
    }
    let (raw_records, framing_error) = record::decode_message(data);
    let mut content: TagContent = raw_records
        .into_iter()
        .filter(|r| r.tnf != Tnf::Empty)
        .map(Record::from_ndef)
        .collect();
    if let Some(e) = framing_error {
        log::warn!("ndef message ended early: {}", e);
        content.push(Record::Malformed {
            type_label: "ndef".into(),
            reason: e.to_string(),
            raw: None,
        });
    }
    Ok(content)
}
