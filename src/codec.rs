//! Encoding of query requests and decoding of single-packet responses.
//!
//! Everything here is a pure function of its input buffer. Every decoder
//! checks the response header first via [`ResPacket::parse`], then reads the
//! payload with an offset-tracking cursor.

mod challenge;
mod cursor;
mod info;
mod players;
mod req_packet;
mod res_packet;
mod rules;

pub(crate) use cursor::Cursor;

pub use challenge::Challenge;
pub use info::{
    Environment, ExtraData, ExtraField, ServerInfo, ServerType, SourceTv, EDF_GAME_ID,
    EDF_KEYWORDS, EDF_PORT, EDF_SOURCE_TV, EDF_STEAM_ID,
};
pub use players::Player;
pub use req_packet::Request;
pub use res_packet::{PacketType, ResPacket};
pub use rules::Rule;

use crate::error::DecodeResult;

/// Decodes the reply to [`Request::Ping`].
pub fn decode_ack(buf: &[u8]) -> DecodeResult<()> {
    let packet = ResPacket::parse(buf, PacketType::Ack)?;
    decode_ack_payload(packet.payload)
}

pub(crate) fn decode_ack_payload(payload: &[u8]) -> DecodeResult<()> {
    let mut cursor = Cursor::new(payload);
    if !cursor.is_empty() {
        cursor.read_cstring()?;
    }
    Ok(())
}

pub fn decode_info(buf: &[u8]) -> DecodeResult<ServerInfo> {
    let packet = ResPacket::parse(buf, PacketType::Info)?;
    ServerInfo::decode(packet.payload)
}

pub fn decode_players(buf: &[u8]) -> DecodeResult<Vec<Player>> {
    let packet = ResPacket::parse(buf, PacketType::Players)?;
    Player::decode_list(packet.payload)
}

pub fn decode_rules(buf: &[u8]) -> DecodeResult<Vec<Rule>> {
    let packet = ResPacket::parse(buf, PacketType::Rules)?;
    Rule::decode_list(packet.payload)
}

pub fn decode_challenge(buf: &[u8]) -> DecodeResult<Challenge> {
    let packet = ResPacket::parse(buf, PacketType::Challenge)?;
    Challenge::decode(packet.payload)
}
