use crate::error::{DecodeResult, ProtocolError};

const HEADER_SIZE: usize = 5;
const SINGLE_PACKET: i32 = -1;
const SPLIT_PACKET: i32 = -2;

/// Response type byte following the header marker.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PacketType {
    Info = b'I',
    Players = b'D',
    Rules = b'E',
    Challenge = b'A',
    Ack = b'j',
}

impl PacketType {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

/// A single-packet response with a validated header.
#[derive(Debug, Clone, Copy)]
pub struct ResPacket<'a> {
    pub payload: &'a [u8],
}

impl<'a> ResPacket<'a> {
    /// Checks the header of `buf` against the type the query expects and
    /// returns the payload behind it.
    pub fn parse(buf: &'a [u8], expected: PacketType) -> DecodeResult<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(ProtocolError::TooShort {
                actual: buf.len(),
                required: HEADER_SIZE,
            });
        }

        let marker = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        match marker {
            SINGLE_PACKET => {}
            SPLIT_PACKET => return Err(ProtocolError::UnsupportedSplitPacket),
            found => return Err(ProtocolError::BadMarker { found }),
        }

        let seen = buf[4];
        if seen != expected.as_byte() {
            return Err(ProtocolError::UnexpectedType {
                seen,
                expected: expected.as_byte(),
            });
        }

        Ok(Self {
            payload: &buf[HEADER_SIZE..],
        })
    }
}
