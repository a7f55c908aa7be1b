//! # pullframe: pull-based WebSocket frame decoder
//!
//! A small library that decodes single RFC 6455 WebSocket frames from an
//! ordered byte source into a typed [`Frame`]: header fields plus unmasked
//! payload bytes.
//!
//! The decoder is deliberately narrow. It consumes an abstract [`ByteSource`]
//! one byte at a time and produces exactly one frame per call, so the same
//! code path serves an in-memory buffer, a blocking socket, or any iterator
//! of bytes. Everything above framing (handshake, fragmentation reassembly,
//! extension negotiation, close-code semantics) belongs to the caller.
//!
//! ## Example
//!
//! ```
//! use pullframe::{FrameDeserializer, OpCode};
//!
//! // FIN + text, unmasked, "Hello" (RFC 6455 §5.7)
//! let wire = [0x81, 0x05, 0x48, 0x65, 0x6C, 0x6C, 0x6F];
//! let mut de = FrameDeserializer::from_slice(&wire);
//!
//! let frame = de.accept_frame().unwrap();
//! assert!(frame.header.fin);
//! assert_eq!(frame.header.opcode, OpCode::Text);
//! assert_eq!(frame.payload.as_ref(), b"Hello");
//! ```

pub mod deframe;
pub mod error;
pub mod frame;
pub mod mask;
pub mod source;

pub use deframe::FrameDeserializer;
pub use error::{Error, Result};
pub use frame::{Frame, FrameHeader, MaskingKey, OpCode};
pub use source::{ByteSource, IterSource, ReadSource, SliceSource};

/// Maximum WebSocket frame header size (2 + 8 + 4 = 14 bytes)
pub const MAX_FRAME_HEADER_SIZE: usize = 14;

/// Largest payload length representable inline in the 7-bit length field
pub const SMALL_PAYLOAD_MAX: u64 = 125;

/// Largest payload length representable in the 16-bit extended length field
pub const U16_PAYLOAD_MAX: u64 = 65535;

/// Cap on payload buffer preallocation (64KB)
///
/// An attacker-supplied 64-bit length field must not force a huge allocation
/// before a single payload byte has arrived; the buffer grows past this only
/// as bytes actually come in.
pub const PAYLOAD_PREALLOC_LIMIT: usize = 64 * 1024;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deframe::FrameDeserializer;
    pub use crate::error::{Error, Result};
    pub use crate::frame::{Frame, FrameHeader, MaskingKey, OpCode};
    pub use crate::source::{ByteSource, ReadSource, SliceSource};
}
