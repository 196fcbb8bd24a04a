use super::{Challenge, PacketType};

static PACKET_PREFIX: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

const A2A_PING: u8 = 0x69;
const A2S_INFO: u8 = 0x54;
const A2S_INFO_PAYLOAD: &[u8] = b"Source Engine Query\0";
const A2S_SERVERQUERY_GETCHALLENGE: u8 = 0x57;
const A2S_PLAYER: u8 = 0x55;
const A2S_RULES: u8 = 0x56;

/// An outgoing query.
///
/// Player and rules queries cannot be built without a token; use
/// [`Challenge::PLACEHOLDER`] to have the server issue one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Request {
    Ping,
    Info(Option<Challenge>),
    GetChallenge,
    Players(Challenge),
    Rules(Challenge),
}

impl Request {
    /// Response type a well-behaved server answers this request with.
    pub const fn expected_response(&self) -> PacketType {
        match self {
            Self::Ping => PacketType::Ack,
            Self::Info(_) => PacketType::Info,
            Self::GetChallenge => PacketType::Challenge,
            Self::Players(_) => PacketType::Players,
            Self::Rules(_) => PacketType::Rules,
        }
    }

    /// Whether a server may answer this request with a challenge to echo.
    pub const fn accepts_challenge(&self) -> bool {
        matches!(self, Self::Info(_) | Self::Players(_) | Self::Rules(_))
    }

    /// The same request carrying `challenge`, if this kind can carry one.
    pub const fn with_challenge(self, challenge: Challenge) -> Option<Self> {
        match self {
            Self::Info(_) => Some(Self::Info(Some(challenge))),
            Self::Players(_) => Some(Self::Players(challenge)),
            Self::Rules(_) => Some(Self::Rules(challenge)),
            Self::Ping | Self::GetChallenge => None,
        }
    }

    const fn header(&self) -> u8 {
        match self {
            Self::Ping => A2A_PING,
            Self::Info(_) => A2S_INFO,
            Self::GetChallenge => A2S_SERVERQUERY_GETCHALLENGE,
            Self::Players(_) => A2S_PLAYER,
            Self::Rules(_) => A2S_RULES,
        }
    }

    const fn challenge(&self) -> Option<Challenge> {
        match self {
            Self::Info(challenge) => *challenge,
            Self::Players(challenge) | Self::Rules(challenge) => Some(*challenge),
            Self::Ping | Self::GetChallenge => None,
        }
    }

    pub fn to_raw(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(PACKET_PREFIX.len() + 1 + A2S_INFO_PAYLOAD.len() + 4);

        buffer.extend(PACKET_PREFIX);

        buffer.push(self.header());

        if let Self::Info(_) = self {
            buffer.extend(A2S_INFO_PAYLOAD);
        }

        if let Some(challenge) = self.challenge() {
            buffer.extend(challenge.as_bytes());
        }

        buffer
    }
}
