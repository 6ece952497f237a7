// tagsmith/src/ndef/uri.rs

//! Well-known `U` payload: one prefix byte from the NFC Forum abbreviation
//! table followed by the rest of the URI in UTF-8.

use crate::error::DecodeError;

/// Well-known type of a URI record.
pub const RTD_URI: &[u8] = b"U";

/// Prefix abbreviations indexed by their identifier code.
pub const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Scheme of phone numbers.
pub const PREFIX_TEL: &str = "tel:";
/// Scheme of locations.
pub const PREFIX_GEO: &str = "geo:";

/// Encode a URI, abbreviating the longest matching prefix.
pub fn encode_uri(uri: &str) -> Vec<u8> {
    let (code, prefix) = URI_PREFIXES
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, p)| uri.starts_with(*p))
        .max_by_key(|(_, p)| p.len())
        .map(|(i, p)| (i as u8, *p))
        .unwrap_or((0, ""));
    let rest = &uri[prefix.len()..];
    let mut payload = Vec::with_capacity(1 + rest.len());
    payload.push(code);
    payload.extend_from_slice(rest.as_bytes());
    payload
}

/// Expand the prefix byte and append the rest of the payload.
pub fn decode_uri(payload: &[u8]) -> Result<String, DecodeError> {
    let (&code, rest) = payload
        .split_first()
        .ok_or(DecodeError::TruncatedPayload {
            needed: 1,
            available: 0,
        })?;
    let prefix = URI_PREFIXES
        .get(code as usize)
        .ok_or_else(|| DecodeError::MalformedRecord(format!("unknown uri prefix {:#04x}", code)))?;
    let rest = std::str::from_utf8(rest)
        .map_err(|e| DecodeError::MalformedRecord(format!("uri is not utf-8: {}", e)))?;
    Ok(format!("{}{}", prefix, rest))
}

/// Parse the `lat,lon` part of a `geo:` URI. Altitude, `;` parameters and
/// `?` queries are ignored. Out of range coordinates yield `None`.
pub fn parse_geo(uri: &str) -> Option<(f64, f64)> {
    let body = uri.strip_prefix(PREFIX_GEO)?;
    let body = body.split(['?', ';']).next()?;
    let mut parts = body.split(',');
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    let lon: f64 = parts.next()?.trim().parse().ok()?;
    if valid_coordinates(lat, lon) {
        Some((lat, lon))
    } else {
        None
    }
}

/// `geo:lat,lon` with the shortest decimal form of each coordinate.
pub fn format_geo(lat: f64, lon: f64) -> String {
    format!("{}{},{}", PREFIX_GEO, lat, lon)
}

/// Finite, latitude within ±90 and longitude within ±180.
pub fn valid_coordinates(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_prefix_is_abbreviated() {
        assert_eq!(encode_uri("tel:+123"), b"\x05+123");
    }

    #[test]
    fn longest_prefix_wins() {
        assert_eq!(encode_uri("https://www.example.com")[0], 0x02);
        assert_eq!(encode_uri("https://example.com")[0], 0x04);
        assert_eq!(encode_uri("ftp://ftp.example.com")[0], 0x08);
        assert_eq!(encode_uri("urn:epc:id:x")[0], 0x1E);
        assert_eq!(encode_uri("geo:1,2")[0], 0x00);
    }

    #[test]
    fn decode_expands_prefix() {
        assert_eq!(decode_uri(b"\x01example.com").unwrap(), "http://www.example.com");
        assert_eq!(decode_uri(b"\x00geo:1,2").unwrap(), "geo:1,2");
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            decode_uri(&[]),
            Err(DecodeError::TruncatedPayload { .. })
        ));
        assert!(matches!(
            decode_uri(&[0x40, b'a']),
            Err(DecodeError::MalformedRecord(_))
        ));
    }

    #[test]
    fn geo_parsing() {
        assert_eq!(parse_geo("geo:35.68,139.76"), Some((35.68, 139.76)));
        assert_eq!(parse_geo("geo:1.5,-2.25;u=35"), Some((1.5, -2.25)));
        assert_eq!(parse_geo("geo:0,0?q=cafe"), Some((0.0, 0.0)));
        assert_eq!(parse_geo("geo:91,0"), None);
        assert_eq!(parse_geo("geo:abc"), None);
        assert_eq!(parse_geo("http://x"), None);
    }

    #[test]
    fn geo_format_round_trips_through_parse() {
        let s = format_geo(-33.8688, 151.2093);
        assert_eq!(s, "geo:-33.8688,151.2093");
        assert_eq!(parse_geo(&s), Some((-33.8688, 151.2093)));
    }
}
