//! Pull-based byte sources
//!
//! The decoder consumes bytes through one capability: [`ByteSource`], a
//! mutable cursor that yields the next unread byte, signals end-of-input, or
//! fails with a transport error. Finite in-memory data and live streams
//! satisfy the same contract, so the decoder never distinguishes them.

use std::io::{self, Read};

use bytes::{Buf, Bytes};

use crate::error::Result;

/// An ordered source of bytes consumed one at a time
///
/// The decoder never requests byte N+1 before byte N is consumed, and never
/// buffers beyond the byte it just pulled. Implementations only need a
/// cursor.
pub trait ByteSource {
    /// Pull the next unread byte.
    ///
    /// Returns `Ok(Some(byte))`, `Ok(None)` once the input is exhausted, or
    /// an error for a transport-level failure. A blocking implementation may
    /// block until one of the three is known.
    fn next_byte(&mut self) -> Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        (**self).next_byte()
    }
}

/// In-memory source over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wrap a slice; the cursor starts at the first byte
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}

/// `Bytes` is already a consuming cursor, so it is a source as-is
impl ByteSource for Bytes {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.has_remaining() {
            Ok(Some(self.get_u8()))
        } else {
            Ok(None)
        }
    }
}

/// Streaming source over any blocking [`io::Read`] (e.g. `TcpStream`)
///
/// Each pull issues a single one-byte read: `Ok(0)` from the reader maps to
/// end-of-input, `ErrorKind::Interrupted` is retried, and every other error
/// passes through as [`Error::Io`](crate::Error::Io). A caller wanting read
/// timeouts sets them on the reader itself (e.g.
/// `TcpStream::set_read_timeout`).
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

impl<R: Read> ReadSource<R> {
    /// Wrap a blocking reader
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Get a mutable reference to the underlying reader
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap back into the reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Generic adapter over any iterator of bytes
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator<Item = u8>> IterSource<I> {
    /// Wrap an iterator
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator<Item = u8>> ByteSource for IterSource<I> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.iter.next())
    }
}
