// tagsmith/src/ndef/record.rs

//! Raw NDEF record framing.
//!
//! Header byte: MB(0x80) ME(0x40) CF(0x20) SR(0x10) IL(0x08) TNF(0x07),
//! then type length, payload length (1 byte when SR, else 4 bytes BE),
//! optional id length, type, id and payload.

use crate::error::DecodeError;

/// Message begin
pub const FLAG_MB: u8 = 0x80;
/// Message end
pub const FLAG_ME: u8 = 0x40;
/// Chunk flag
pub const FLAG_CF: u8 = 0x20;
/// Short record: one-byte payload length
pub const FLAG_SR: u8 = 0x10;
/// ID length present
pub const FLAG_IL: u8 = 0x08;
/// Type Name Format bits
pub const TNF_MASK: u8 = 0x07;

/// Type Name Format of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tnf {
    /// No type, no payload.
    Empty = 0,
    /// NFC Forum well-known type such as `T` or `U`.
    WellKnown = 1,
    /// RFC 2046 media type.
    MimeMedia = 2,
    /// Type field is an absolute URI.
    AbsoluteUri = 3,
    /// NFC Forum external type, `domain:type`.
    External = 4,
    /// Payload of unknown type.
    Unknown = 5,
    /// Continuation chunk.
    Unchanged = 6,
    /// Reserved.
    Reserved = 7,
}

impl Tnf {
    /// TNF from the low three bits of a header byte.
    pub fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0 => Tnf::Empty,
            1 => Tnf::WellKnown,
            2 => Tnf::MimeMedia,
            3 => Tnf::AbsoluteUri,
            4 => Tnf::External,
            5 => Tnf::Unknown,
            6 => Tnf::Unchanged,
            _ => Tnf::Reserved,
        }
    }

    /// Value for the header byte.
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// One record as it appears on the wire, chunks already joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefRecord {
    /// Type Name Format.
    pub tnf: Tnf,
    /// Type field, interpreted according to `tnf`.
    pub record_type: Vec<u8>,
    /// Record id, usually empty.
    pub id: Vec<u8>,
    /// Payload, chunks joined.
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Record without an id.
    pub fn new(tnf: Tnf, record_type: &[u8], payload: Vec<u8>) -> Self {
        Self {
            tnf,
            record_type: record_type.to_vec(),
            id: Vec::new(),
            payload,
        }
    }

    /// Well-known type record.
    pub fn well_known(record_type: &[u8], payload: Vec<u8>) -> Self {
        Self::new(Tnf::WellKnown, record_type, payload)
    }

    /// Media type record.
    pub fn mime(mime_type: &str, payload: Vec<u8>) -> Self {
        Self::new(Tnf::MimeMedia, mime_type.as_bytes(), payload)
    }

    /// External type record.
    pub fn external(domain_type: &str, payload: Vec<u8>) -> Self {
        Self::new(Tnf::External, domain_type.as_bytes(), payload)
    }

    /// Human-readable type, e.g. `T`, `text/vcard`, `android.com:pkg`.
    pub fn type_label(&self) -> String {
        if self.record_type.is_empty() {
            return format!("{:?}", self.tnf);
        }
        String::from_utf8_lossy(&self.record_type).into_owned()
    }

    /// Append the wire form of this record to `out`.
    pub fn encode_into(&self, first: bool, last: bool, out: &mut Vec<u8>) {
        let short = self.payload.len() < 256;
        let mut header = self.tnf.bits();
        if first {
            header |= FLAG_MB;
        }
        if last {
            header |= FLAG_ME;
        }
        if short {
            header |= FLAG_SR;
        }
        if !self.id.is_empty() {
            header |= FLAG_IL;
        }
        out.push(header);
        out.push(self.record_type.len() as u8);
        if short {
            out.push(self.payload.len() as u8);
        } else {
            out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        }
        if !self.id.is_empty() {
            out.push(self.id.len() as u8);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
    }
}

/// Serialize records into one message with MB on the first and ME on the
/// last record.
pub fn encode_message(records: &[NdefRecord]) -> Vec<u8> {
    let mut out = Vec::new();
    let last = records.len().saturating_sub(1);
    for (i, rec) in records.iter().enumerate() {
        rec.encode_into(i == 0, i == last, &mut out);
    }
    out
}

/// A single framed record (one chunk) and the header it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub header: u8,
    pub record: NdefRecord,
}

impl Frame {
    /// ME flag set.
    pub fn is_last(&self) -> bool {
        self.header & FLAG_ME != 0
    }

    /// CF flag set.
    pub fn is_chunked(&self) -> bool {
        self.header & FLAG_CF != 0
    }
}

fn take<'a>(data: &'a [u8], pos: &mut usize, n: usize) -> Result<&'a [u8], DecodeError> {
    let available = data.len().saturating_sub(*pos);
    if available < n {
        return Err(DecodeError::TruncatedPayload {
            needed: n,
            available,
        });
    }
    let s = &data[*pos..*pos + n];
    *pos += n;
    Ok(s)
}

/// Parse one record frame starting at `*pos`, advancing it past the frame.
pub(crate) fn parse_frame(data: &[u8], pos: &mut usize) -> Result<Frame, DecodeError> {
    let header = take(data, pos, 1)?[0];
    let type_len = take(data, pos, 1)?[0] as usize;
    let payload_len = if header & FLAG_SR != 0 {
        take(data, pos, 1)?[0] as usize
    } else {
        let b = take(data, pos, 4)?;
        u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as usize
    };
    let id_len = if header & FLAG_IL != 0 {
        take(data, pos, 1)?[0] as usize
    } else {
        0
    };
    let record_type = take(data, pos, type_len)?.to_vec();
    let id = take(data, pos, id_len)?.to_vec();
    let payload = take(data, pos, payload_len)?.to_vec();
    Ok(Frame {
        header,
        record: NdefRecord {
            tnf: Tnf::from_bits(header),
            record_type,
            id,
            payload,
        },
    })
}

/// Walk a message, joining chunked records.
///
/// Returns every record that could be framed plus the framing error that
/// stopped the walk, if any. Records before the error stay usable.
pub fn decode_message(data: &[u8]) -> (Vec<NdefRecord>, Option<DecodeError>) {
    let mut records = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        let frame = match parse_frame(data, &mut pos) {
            Ok(f) => f,
            Err(e) => return (records, Some(e)),
        };
        let mut last = frame.is_last();
        let mut chunked = frame.is_chunked();
        let mut record = frame.record;
        while chunked {
            let next = match parse_frame(data, &mut pos) {
                Ok(f) => f,
                Err(e) => return (records, Some(e)),
            };
            if next.record.tnf != Tnf::Unchanged || !next.record.record_type.is_empty() {
                return (
                    records,
                    Some(DecodeError::MalformedRecord(
                        "chunk continuation must use TNF unchanged with no type".into(),
                    )),
                );
            }
            record.payload.extend_from_slice(&next.record.payload);
            chunked = next.is_chunked();
            last = next.is_last();
        }
        records.push(record);
        if last {
            break;
        }
    }
    (records, None)
}
