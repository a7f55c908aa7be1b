//! WebSocket frame types
//!
//! Value types produced by the decoder: [`OpCode`], [`MaskingKey`],
//! [`FrameHeader`], and [`Frame`]. All are plain data, built once per frame
//! and never mutated.

use std::str;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::mask::apply_mask;

/// WebSocket opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Continuation frame
    Continuation = 0x0,
    /// Text frame
    Text = 0x1,
    /// Binary frame
    Binary = 0x2,
    /// Connection close
    Close = 0x8,
    /// Ping
    Ping = 0x9,
    /// Pong
    Pong = 0xA,
}

impl OpCode {
    /// Parse opcode from the low 4 bits of a byte.
    ///
    /// The ten reserved values (0x3-0x7, 0xB-0xF) have no mapping and yield
    /// `None`; the decoder rejects them with
    /// [`Error::InvalidOpCode`](crate::Error::InvalidOpCode).
    #[inline]
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x0 => Some(OpCode::Continuation),
            0x1 => Some(OpCode::Text),
            0x2 => Some(OpCode::Binary),
            0x8 => Some(OpCode::Close),
            0x9 => Some(OpCode::Ping),
            0xA => Some(OpCode::Pong),
            _ => None,
        }
    }

    /// Check if this is a control frame
    #[inline]
    pub fn is_control(&self) -> bool {
        (*self as u8) >= 0x8
    }

    /// Check if this is a data frame
    #[inline]
    pub fn is_data(&self) -> bool {
        (*self as u8) <= 0x2
    }
}

/// Masking key of a frame: absent, or the 4 key bytes
///
/// Carries the payload transform itself: the `None` variant is an identity,
/// so payload handling has a single code path for masked and unmasked
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskingKey {
    /// Unmasked frame
    #[default]
    None,
    /// Masked frame with its 4-byte key
    Key([u8; 4]),
}

impl MaskingKey {
    /// The key bytes, if the frame was masked
    #[inline]
    pub fn key(&self) -> Option<[u8; 4]> {
        match self {
            MaskingKey::None => None,
            MaskingKey::Key(k) => Some(*k),
        }
    }

    /// Transform `payload` in place: XOR against the repeating key, or leave
    /// untouched for `None`. XOR is self-inverse, so this both masks and
    /// unmasks.
    #[inline]
    pub fn unmask(&self, payload: &mut [u8]) {
        match self {
            MaskingKey::None => {}
            MaskingKey::Key(k) => apply_mask(payload, *k),
        }
    }

    /// Transform a single byte at payload position `i` (0-indexed from the
    /// start of the payload)
    #[inline]
    pub fn unmask_byte(&self, i: usize, byte: u8) -> u8 {
        match self {
            MaskingKey::None => byte,
            MaskingKey::Key(k) => byte ^ k[i & 3],
        }
    }
}

/// A decoded WebSocket frame header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// Final fragment flag
    pub fin: bool,
    /// RSV1 (used by extensions, carried as-is)
    pub rsv1: bool,
    /// RSV2 (reserved)
    pub rsv2: bool,
    /// RSV3 (reserved)
    pub rsv3: bool,
    /// Frame opcode
    pub opcode: OpCode,
    /// Mask flag from the wire
    pub masked: bool,
    /// Payload length; always equals the actual payload byte count
    pub payload_len: u64,
    /// Masking key; `MaskingKey::None` exactly when `masked` is false
    pub mask: MaskingKey,
}

/// A complete decoded WebSocket frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame header
    pub header: FrameHeader,
    /// Frame payload (already unmasked)
    pub payload: Bytes,
}

impl Frame {
    /// Assemble a frame, checking that the payload byte count matches
    /// `header.payload_len`.
    ///
    /// Fails with [`Error::PayloadTruncated`](crate::Error::PayloadTruncated)
    /// on disagreement; a `Frame` never carries a length its payload does not
    /// have.
    pub fn from_parts(header: FrameHeader, payload: Bytes) -> Result<Self> {
        if payload.len() as u64 != header.payload_len {
            return Err(Error::PayloadTruncated {
                declared: header.payload_len,
                read: payload.len() as u64,
            });
        }
        Ok(Self { header, payload })
    }

    /// Check if this is a control frame
    #[inline]
    pub fn is_control(&self) -> bool {
        self.header.opcode.is_control()
    }

    /// Check if this is the final fragment
    #[inline]
    pub fn is_final(&self) -> bool {
        self.header.fin
    }

    /// Get the payload as a string (for text frames)
    pub fn as_text(&self) -> Result<&str> {
        str::from_utf8(&self.payload).map_err(|_| Error::InvalidUtf8)
    }
}
