use super::Cursor;
use crate::error::{DecodeResult, ProtocolError};
use serde::Serialize;

/// A server cvar from an `A2S_RULES` response.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Rule {
    pub name: String,
    pub value: String,
}

impl Rule {
    pub(crate) fn decode_list(payload: &[u8]) -> DecodeResult<Vec<Self>> {
        let mut cursor = Cursor::new(payload);
        let expected = usize::from(cursor.read_u16_le()?);

        // Every rule takes at least two terminator bytes.
        let mut rules = Vec::with_capacity(expected.min(cursor.remaining() / 2));
        while !cursor.is_empty() {
            rules.push(Self {
                name: cursor.read_cstring()?,
                value: cursor.read_cstring()?,
            });
        }

        if rules.len() != expected {
            return Err(ProtocolError::CountMismatch {
                expected,
                actual: rules.len(),
            });
        }

        Ok(rules)
    }
}
