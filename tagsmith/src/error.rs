// tagsmith/src/error.rs

//! Error types shared by every operation.

use thiserror::Error;

/// Errors raised while decoding a single NDEF record.
///
/// These are recoverable: the codec turns them into a placeholder record so
/// the remaining records of a message can still be shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before a length field was satisfied.
    #[error("truncated payload: needed {needed} bytes, {available} available")]
    TruncatedPayload {
        /// Bytes the length field asked for.
        needed: usize,
        /// Bytes actually left.
        available: usize,
    },

    /// Bad status byte, language code or UTF-8 in a text record.
    #[error("malformed text record: {0}")]
    MalformedTextRecord(String),

    /// Any other payload that does not match its record type.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Another action is pending.
    #[error("another action is already armed")]
    Busy,

    /// Input rejected before any tag I/O.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// New identifier length does not match the tag's.
    #[error("unsupported uid length: expected {expected} bytes, got {actual}")]
    UnsupportedUidLength {
        /// Length the tag family stores.
        expected: usize,
        /// Length that was given.
        actual: usize,
    },

    /// Operation is not available for this kind of tag.
    #[error("unsupported chip family: {0}")]
    UnsupportedChipFamily(String),

    /// GET_VERSION reported a size code without a known page layout.
    #[error("unknown chip model: storage size code {size_code:#04x}")]
    UnknownChipModel {
        /// Storage size byte of the GET_VERSION reply.
        size_code: u8,
    },

    /// PWD_AUTH was refused or returned the wrong PACK.
    #[error("password authentication failed")]
    AuthenticationFailed,

    /// The tag was reached but the operation did not complete.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// Content could not be decoded as a whole.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    // Transport-level failures. Operations fold these into
    // `OperationFailed` through `Error::normalize`.
    /// Reply frame shorter than the command requires.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Minimum reply length.
        expected: usize,
        /// Received length.
        actual: usize,
    },

    /// Tag answered with a 4-bit NAK.
    #[error("tag replied with NAK {code:#04x}")]
    Nak {
        /// Raw NAK byte.
        code: u8,
    },

    /// Tag left the field.
    #[error("tag was lost")]
    TagLost,

    /// Platform stack reported an I/O error.
    #[error("transceive failed: {0}")]
    Transceive(String),

    /// Platform cannot perform this request.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// True for the errors that are raised before any tag I/O happens.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::Busy | Error::PreconditionViolation(_) | Error::UnsupportedUidLength { .. }
        )
    }

    /// Collapse hardware/transport errors into `OperationFailed`, keeping the
    /// underlying message. Domain errors pass through unchanged.
    pub fn normalize(self) -> Self {
        match self {
            Error::InvalidLength { .. }
            | Error::Nak { .. }
            | Error::TagLost
            | Error::Transceive(_)
            | Error::UnsupportedOperation(_) => Error::OperationFailed(self.to_string()),
            other => other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
