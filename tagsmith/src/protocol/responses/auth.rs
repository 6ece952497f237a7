// tagsmith/src/protocol/responses/auth.rs

//! PWD_AUTH reply.

use crate::protocol::parser;
use crate::{Error, Result};

/// Decode a PWD_AUTH reply: the 2-byte PACK on success, a 4-bit NAK
/// when the password is wrong.
pub fn decode_pack(data: &[u8]) -> Result<[u8; 2]> {
    if let [code] = data {
        return Err(Error::Nak { code: *code });
    }
    let s = parser::slice_at(data, 0, 2)?;
    Ok([s[0], s[1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_pack_ok() {
        assert_eq!(decode_pack(&[0x80, 0x80]).unwrap(), [0x80, 0x80]);
    }

    #[test]
    fn decode_pack_nak() {
        assert!(matches!(decode_pack(&[0x04]), Err(Error::Nak { code: 0x04 })));
        assert!(matches!(
            decode_pack(&[]),
            Err(Error::InvalidLength { .. })
        ));
    }
}
