//! Hexadecimal helpers used for identifiers, logging and display.
//!
//! Three output forms are provided: compact lowercase (`dead`), spaced
//! lowercase for frame dumps (`de ad`) and colon separated uppercase for
//! identifiers shown to users (`DE:AD`). The parser accepts all of them.

/// Lowercase hex without separators, as used for compact identifiers.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, ' ', false)
}

/// Convert a byte slice to uppercase hex octets joined by `:`.
///
/// Example: `&[0x04, 0xa1]` -> `"04:A1"`
pub fn bytes_to_hex_colon(bytes: &[u8]) -> String {
    join_hex(bytes, ':', true)
}

fn join_hex(bytes: &[u8], sep: char, upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(sep);
        }
        use std::fmt::Write;
        let _ = if upper {
            write!(&mut s, "{:02X}", b)
        } else {
            write!(&mut s, "{:02x}", b)
        };
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace and `:` separators are ignored. Returns an error message
/// string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|_| "non-ascii input".to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
