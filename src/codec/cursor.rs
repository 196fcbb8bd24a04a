//! Offset-tracking reader over a response payload.

use crate::error::{DecodeResult, ProtocolError};

/// A byte reader for the little-endian, null-terminated-string layout the
/// query protocol uses.
///
/// All reads are bounds-checked. A failed read leaves the position where it
/// was, and the error reports that position.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(self.truncated(len));
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> DecodeResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_i32_le(&mut self) -> DecodeResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_u64_le(&mut self) -> DecodeResult<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_f32_le(&mut self) -> DecodeResult<f32> {
        self.read_array().map(f32::from_le_bytes)
    }

    /// Reads a null-terminated string and moves past the terminator.
    ///
    /// A string with no terminator before the end of the buffer is truncated.
    pub fn read_cstring(&mut self) -> DecodeResult<String> {
        let rest = &self.buf[self.pos..];
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            return Err(self.truncated(rest.len() + 1));
        };
        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len + 1;
        Ok(text)
    }

    fn truncated(&self, needed: usize) -> ProtocolError {
        ProtocolError::Truncated {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }
}
