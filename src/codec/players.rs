use super::Cursor;
use crate::error::DecodeResult;
use serde::Serialize;

/// One entry of an `A2S_PLAYER` response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Player {
    pub index: u8,
    pub name: String,
    pub score: i32,
    /// Seconds connected.
    pub duration: f32,
}

impl Player {
    fn read(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        Ok(Self {
            index: cursor.read_u8()?,
            name: cursor.read_cstring()?,
            score: cursor.read_i32_le()?,
            duration: cursor.read_f32_le()?,
        })
    }

    /// Decodes records until the payload is exhausted.
    ///
    /// The leading count is only what the server saw when it started
    /// answering; players joining or leaving mid-query make it drift, so a
    /// mismatch is logged rather than rejected.
    pub(crate) fn decode_list(payload: &[u8]) -> DecodeResult<Vec<Self>> {
        let mut cursor = Cursor::new(payload);
        let advertised = cursor.read_u8()?;

        let mut players = Vec::with_capacity(usize::from(advertised));
        while !cursor.is_empty() {
            players.push(Self::read(&mut cursor)?);
        }

        if players.len() != usize::from(advertised) {
            debug!(
                "Server advertised {} players but sent {}",
                advertised,
                players.len()
            );
        }

        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    fn two_players(count: u8) -> Vec<u8> {
        let mut buf = vec![count];
        buf.extend([0x00, b'A', 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0xA0, 0x41]);
        buf.extend([0x01, b'B', 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xA0, 0x41]);
        buf
    }

    #[test]
    fn decodes_records_in_order() {
        let players = Player::decode_list(&two_players(2)).unwrap();
        assert_eq!(
            players,
            vec![
                Player {
                    index: 0,
                    name: "A".into(),
                    score: 1,
                    duration: 20.0,
                },
                Player {
                    index: 1,
                    name: "B".into(),
                    score: 2,
                    duration: 20.0,
                },
            ]
        );
    }

    #[test]
    fn advertised_count_is_only_a_hint() {
        for count in [0, 1, 3, 255] {
            let players = Player::decode_list(&two_players(count)).unwrap();
            assert_eq!(players.len(), 2, "count byte {count}");
        }
    }

    #[test]
    fn empty_server() {
        assert!(Player::decode_list(&[0]).unwrap().is_empty());
    }

    #[test]
    fn negative_score() {
        let mut buf = vec![1, 5];
        buf.extend(b"neg\0");
        buf.extend((-3i32).to_le_bytes());
        buf.extend(1.5f32.to_le_bytes());
        let players = Player::decode_list(&buf).unwrap();
        assert_eq!(players[0].score, -3);
        assert_eq!(players[0].duration, 1.5);
    }

    #[test]
    fn missing_count_byte() {
        assert!(matches!(
            Player::decode_list(&[]),
            Err(ProtocolError::Truncated { offset: 0, .. })
        ));
    }

    #[test]
    fn partial_trailing_record_is_truncated() {
        let mut buf = two_players(2);
        buf.pop();
        assert_eq!(
            Player::decode_list(&buf),
            Err(ProtocolError::Truncated {
                offset: 19,
                needed: 4,
                available: 3,
            })
        );
    }
}
