//! Frame deserialization
//!
//! [`FrameDeserializer`] pulls one RFC 6455 frame out of a [`ByteSource`]:
//! header byte 0 (FIN/RSV/opcode), header byte 1 (mask flag + 7-bit length
//! indicator), the optional 16- or 64-bit extended length, the optional
//! 4-byte masking key, then exactly `payload_len` payload bytes, unmasked
//! through the key's uniform transform.
//!
//! The pipeline is linear with no backward transitions. Any failure aborts
//! the whole frame: nothing partial is ever returned, and bytes already
//! consumed stay consumed, so a framing error leaves the stream
//! desynchronized exactly as WebSocket semantics dictate.

use bytes::{BufMut, BytesMut};

use crate::error::{Error, Result};
use crate::frame::{Frame, FrameHeader, MaskingKey, OpCode};
use crate::source::{ByteSource, SliceSource};
use crate::PAYLOAD_PREALLOC_LIMIT;

/// Pull-based decoder producing one [`Frame`] per call
///
/// Holds the source exclusively (own it, or lend an `&mut` via the blanket
/// `ByteSource` impl) and keeps no state between frames: each
/// [`accept_frame`](FrameDeserializer::accept_frame) starts fresh at the
/// first header byte.
///
/// # Example
///
/// ```
/// use pullframe::{FrameDeserializer, OpCode};
///
/// let wire = [0x89, 0x00]; // unmasked ping, empty payload
/// let frame = FrameDeserializer::from_slice(&wire).accept_frame().unwrap();
/// assert_eq!(frame.header.opcode, OpCode::Ping);
/// assert!(frame.payload.is_empty());
/// ```
#[derive(Debug)]
pub struct FrameDeserializer<S> {
    source: S,
}

impl<'a> FrameDeserializer<SliceSource<'a>> {
    /// Decode from an in-memory byte slice
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::new(SliceSource::new(data))
    }
}

impl<S: ByteSource> FrameDeserializer<S> {
    /// Wrap a byte source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Unwrap back into the source, at whatever position decoding left it
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Decode exactly one frame, consuming exactly its bytes.
    ///
    /// Fails with [`Error::UnexpectedEof`] if the source ends inside a header
    /// field, [`Error::InvalidOpCode`] for a reserved opcode nibble,
    /// [`Error::PayloadTruncated`] if the source ends mid-payload, and
    /// [`Error::Io`] for transport failures. On any error no frame is
    /// produced and the source position is wherever the last pull left it.
    pub fn accept_frame(&mut self) -> Result<Frame> {
        let b0 = self.pull("frame header", 2, 0)?;
        self.accept_frame_after(b0)
    }

    /// Decode the rest of a frame whose first header byte is `b0`
    fn accept_frame_after(&mut self, b0: u8) -> Result<Frame> {
        let fin = b0 & 0x80 != 0;
        let rsv1 = b0 & 0x40 != 0;
        let rsv2 = b0 & 0x20 != 0;
        let rsv3 = b0 & 0x10 != 0;
        let opcode = OpCode::from_u8(b0 & 0x0F).ok_or(Error::InvalidOpCode(b0 & 0x0F))?;

        let b1 = self.pull("frame header", 2, 1)?;
        let masked = b1 & 0x80 != 0;

        // Three-tier length: 7-bit inline, or 126/127 marking a 16/64-bit
        // big-endian extension.
        let payload_len = match b1 & 0x7F {
            126 => u16::from_be_bytes(self.pull_array("extended payload length")?) as u64,
            127 => u64::from_be_bytes(self.pull_array("extended payload length")?),
            n => n as u64,
        };

        let mask = if masked {
            MaskingKey::Key(self.pull_array("masking key")?)
        } else {
            MaskingKey::None
        };

        let mut payload =
            BytesMut::with_capacity(payload_len.min(PAYLOAD_PREALLOC_LIMIT as u64) as usize);
        while (payload.len() as u64) < payload_len {
            match self.source.next_byte()? {
                Some(b) => payload.put_u8(b),
                None => {
                    return Err(Error::PayloadTruncated {
                        declared: payload_len,
                        read: payload.len() as u64,
                    });
                }
            }
        }
        mask.unmask(&mut payload);

        let header = FrameHeader {
            fin,
            rsv1,
            rsv2,
            rsv3,
            opcode,
            masked,
            payload_len,
            mask,
        };
        Frame::from_parts(header, payload.freeze())
    }

    /// Pull one byte of a fixed-size field of `needed` bytes, `got` of which
    /// have been read already
    fn pull(&mut self, field: &'static str, needed: usize, got: usize) -> Result<u8> {
        self.source
            .next_byte()?
            .ok_or(Error::UnexpectedEof { field, needed, got })
    }

    /// Pull an N-byte field whole, or fail reporting how far it got
    fn pull_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.pull(field, N, i)?;
        }
        Ok(buf)
    }
}

/// Decode frames until the source is cleanly exhausted.
///
/// End-of-input before the first header byte of a frame ends iteration;
/// end-of-input anywhere inside a frame is an error item. A parse error
/// desynchronizes the stream, so callers should stop at the first `Err`.
impl<S: ByteSource> Iterator for FrameDeserializer<S> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.source.next_byte() {
            Ok(Some(b0)) => Some(self.accept_frame_after(b0)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
