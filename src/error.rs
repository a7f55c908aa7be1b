//! Error types for frame decoding

use std::fmt;
use std::io;

/// Result type alias for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frame decoding error
///
/// Every variant aborts the in-progress frame; the source position afterwards
/// is wherever the last pull left it, so a caller that sees any of these
/// should treat the stream as desynchronized (per RFC 6455 a framing error is
/// fatal to the connection).
#[derive(Debug)]
pub enum Error {
    /// I/O error from the underlying byte source, passed through unchanged
    Io(io::Error),
    /// The source ran out of bytes inside a fixed-size header field
    UnexpectedEof {
        /// Which field was being read (e.g. "masking key")
        field: &'static str,
        /// Bytes the field requires
        needed: usize,
        /// Bytes actually obtained before end-of-input
        got: usize,
    },
    /// The 4-bit opcode value has no defined mapping (reserved range)
    InvalidOpCode(u8),
    /// Fewer payload bytes were available than the header declared
    PayloadTruncated {
        /// Declared payload length from the header
        declared: u64,
        /// Payload bytes actually read
        read: u64,
    },
    /// Invalid UTF-8 in a text frame payload (from `Frame::as_text` only)
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::UnexpectedEof { field, needed, got } => write!(
                f,
                "unexpected end of input reading {}: needed {} bytes, got {}",
                field, needed, got
            ),
            Error::InvalidOpCode(op) => write!(f, "invalid opcode: {:#x}", op),
            Error::PayloadTruncated { declared, read } => write!(
                f,
                "truncated payload: header declared {} bytes, read {}",
                declared, read
            ),
            Error::InvalidUtf8 => write!(f, "invalid UTF-8 in text payload"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
