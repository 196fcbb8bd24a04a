use super::Cursor;
use crate::error::{DecodeResult, ProtocolError};
use serde::Serialize;
use std::fmt;

pub(crate) const CHALLENGE_SIZE: usize = 4;

/// Token a server hands out for player and rules queries.
///
/// Only meaningful to the server/port that issued it, and only until the next
/// challenged request. The bytes are echoed back untouched.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[repr(transparent)]
pub struct Challenge([u8; CHALLENGE_SIZE]);

impl Challenge {
    /// The "no token yet" value; servers answer it with a fresh challenge.
    pub const PLACEHOLDER: Self = Self([0xFF; CHALLENGE_SIZE]);

    pub const fn new(bytes: [u8; CHALLENGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; CHALLENGE_SIZE] {
        &self.0
    }

    pub(crate) fn decode(payload: &[u8]) -> DecodeResult<Self> {
        if payload.len() != CHALLENGE_SIZE {
            return Err(ProtocolError::InvalidChallengeLength {
                actual: payload.len(),
            });
        }

        let mut bytes = [0u8; CHALLENGE_SIZE];
        bytes.copy_from_slice(Cursor::new(payload).read_bytes(CHALLENGE_SIZE)?);
        Ok(Self(bytes))
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
