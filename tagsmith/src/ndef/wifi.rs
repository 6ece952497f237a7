// tagsmith/src/ndef/wifi.rs

//! WiFi Simple Configuration credential (`application/vnd.wfa.wsc`).
//!
//! Attributes are `id(2, BE) len(2, BE) value`. The payload holds one
//! Credential attribute whose value nests the network attributes.

use crate::error::DecodeError;
use derive_more::Display;

/// Record type of a WiFi credential.
pub const MIME_WIFI: &str = "application/vnd.wfa.wsc";

/// Credential attribute, wraps the others
pub const ATTR_CREDENTIAL: u16 = 0x100E;
/// Network index, always 1
pub const ATTR_NETWORK_INDEX: u16 = 0x1026;
/// SSID
pub const ATTR_SSID: u16 = 0x1045;
/// Authentication type
pub const ATTR_AUTH_TYPE: u16 = 0x1003;
/// Encryption type
pub const ATTR_ENCRYPTION_TYPE: u16 = 0x100F;
/// Network key (passphrase)
pub const ATTR_NETWORK_KEY: u16 = 0x1027;

/// Authentication type attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WifiAuthType {
    /// No authentication.
    Open,
    /// Deprecated by WSC 2.0.
    #[display(fmt = "WPA-Personal")]
    WpaPersonal,
    /// Shared-key WEP, deprecated.
    Shared,
    /// Deprecated by WSC 2.0.
    #[display(fmt = "WPA-Enterprise")]
    WpaEnterprise,
    /// 802.1X.
    #[display(fmt = "WPA2-Enterprise")]
    Wpa2Enterprise,
    /// Pre-shared key.
    #[display(fmt = "WPA2-Personal")]
    Wpa2Personal,
    /// Mixed mode, as written by many routers.
    #[display(fmt = "WPA/WPA2-Personal")]
    WpaWpa2Personal,
    /// Any other attribute value.
    #[display(fmt = "auth {:#06x}", _0)]
    Other(u16),
}

impl WifiAuthType {
    /// Attribute value on the wire.
    pub fn code(self) -> u16 {
        match self {
            Self::Open => 0x0001,
            Self::WpaPersonal => 0x0002,
            Self::Shared => 0x0004,
            Self::WpaEnterprise => 0x0008,
            Self::Wpa2Enterprise => 0x0010,
            Self::Wpa2Personal => 0x0020,
            Self::WpaWpa2Personal => 0x0022,
            Self::Other(c) => c,
        }
    }

    /// Parse an attribute value; unknown codes are kept as `Other`.
    pub fn from_code(code: u16) -> Self {
        match code {
            0x0001 => Self::Open,
            0x0002 => Self::WpaPersonal,
            0x0004 => Self::Shared,
            0x0008 => Self::WpaEnterprise,
            0x0010 => Self::Wpa2Enterprise,
            0x0020 => Self::Wpa2Personal,
            0x0022 => Self::WpaWpa2Personal,
            c => Self::Other(c),
        }
    }
}

/// Encryption type attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WifiEncryptionType {
    /// Open network.
    None,
    /// Deprecated.
    #[display(fmt = "WEP")]
    Wep,
    /// Deprecated by WSC 2.0.
    #[display(fmt = "TKIP")]
    Tkip,
    /// CCMP.
    #[display(fmt = "AES")]
    Aes,
    /// Mixed mode.
    #[display(fmt = "AES/TKIP")]
    AesTkip,
    /// Any other attribute value.
    #[display(fmt = "enc {:#06x}", _0)]
    Other(u16),
}

impl WifiEncryptionType {
    /// Attribute value on the wire.
    pub fn code(self) -> u16 {
        match self {
            Self::None => 0x0001,
            Self::Wep => 0x0002,
            Self::Tkip => 0x0004,
            Self::Aes => 0x0008,
            Self::AesTkip => 0x000C,
            Self::Other(c) => c,
        }
    }

    /// Parse an attribute value; unknown codes are kept as `Other`.
    pub fn from_code(code: u16) -> Self {
        match code {
            0x0001 => Self::None,
            0x0002 => Self::Wep,
            0x0004 => Self::Tkip,
            0x0008 => Self::Aes,
            0x000C => Self::AesTkip,
            c => Self::Other(c),
        }
    }
}

/// Decoded credential fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiFields {
    /// Network name.
    pub ssid: String,
    /// `None` for open networks.
    pub passphrase: Option<String>,
    /// Authentication type.
    pub auth_type: WifiAuthType,
    /// Encryption type.
    pub enc_type: WifiEncryptionType,
}

fn push_attr(out: &mut Vec<u8>, id: u16, value: &[u8]) {
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    out.extend_from_slice(value);
}

/// Credential payload with one network.
pub fn encode_wifi(fields: &WifiFields) -> Vec<u8> {
    let mut cred = Vec::new();
    push_attr(&mut cred, ATTR_NETWORK_INDEX, &[0x01]);
    push_attr(&mut cred, ATTR_SSID, fields.ssid.as_bytes());
    push_attr(&mut cred, ATTR_AUTH_TYPE, &fields.auth_type.code().to_be_bytes());
    push_attr(
        &mut cred,
        ATTR_ENCRYPTION_TYPE,
        &fields.enc_type.code().to_be_bytes(),
    );
    if let Some(key) = &fields.passphrase {
        push_attr(&mut cred, ATTR_NETWORK_KEY, key.as_bytes());
    }

    let mut payload = Vec::with_capacity(cred.len() + 4);
    push_attr(&mut payload, ATTR_CREDENTIAL, &cred);
    payload
}

/// Iterate `(id, value)` attributes. Stops with an error when a declared
/// length runs past the buffer.
fn attributes(mut data: &[u8]) -> Result<Vec<(u16, &[u8])>, DecodeError> {
    let mut out = Vec::new();
    while !data.is_empty() {
        if data.len() < 4 {
            return Err(DecodeError::TruncatedPayload {
                needed: 4,
                available: data.len(),
            });
        }
        let id = u16::from_be_bytes([data[0], data[1]]);
        let len = u16::from_be_bytes([data[2], data[3]]) as usize;
        let rest = &data[4..];
        if rest.len() < len {
            return Err(DecodeError::TruncatedPayload {
                needed: len,
                available: rest.len(),
            });
        }
        out.push((id, &rest[..len]));
        data = &rest[len..];
    }
    Ok(out)
}

fn utf8(value: &[u8], what: &str) -> Result<String, DecodeError> {
    String::from_utf8(value.to_vec())
        .map_err(|_| DecodeError::MalformedRecord(format!("wifi {} is not utf-8", what)))
}

fn be_u16(value: &[u8], what: &str) -> Result<u16, DecodeError> {
    match value {
        [hi, lo] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => Err(DecodeError::MalformedRecord(format!(
            "wifi {} must be 2 bytes, got {}",
            what,
            value.len()
        ))),
    }
}

/// Decode the first network of a credential payload.
pub fn decode_wifi(payload: &[u8]) -> Result<WifiFields, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::TruncatedPayload {
            needed: 4,
            available: 0,
        });
    }
    let cred = attributes(payload)?
        .into_iter()
        .find(|(id, _)| *id == ATTR_CREDENTIAL)
        .map(|(_, v)| v)
        .ok_or_else(|| DecodeError::MalformedRecord("no credential attribute".into()))?;

    let mut ssid = None;
    let mut passphrase = None;
    let mut auth_type = WifiAuthType::Open;
    let mut enc_type = WifiEncryptionType::None;
    for (id, value) in attributes(cred)? {
        match id {
            ATTR_SSID => ssid = Some(utf8(value, "ssid")?),
            ATTR_NETWORK_KEY => passphrase = Some(utf8(value, "network key")?),
            ATTR_AUTH_TYPE => auth_type = WifiAuthType::from_code(be_u16(value, "auth type")?),
            ATTR_ENCRYPTION_TYPE => {
                enc_type = WifiEncryptionType::from_code(be_u16(value, "encryption type")?)
            }
            _ => {}
        }
    }
    let ssid = ssid.ok_or_else(|| DecodeError::MalformedRecord("credential without ssid".into()))?;
    Ok(WifiFields {
        ssid,
        passphrase,
        auth_type,
        enc_type,
    })
}
