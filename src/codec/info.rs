use super::Cursor;
use crate::error::DecodeResult;
use serde::Serialize;

pub const EDF_PORT: u8 = 0x80;
pub const EDF_STEAM_ID: u8 = 0x10;
pub const EDF_SOURCE_TV: u8 = 0x40;
pub const EDF_KEYWORDS: u8 = 0x20;
pub const EDF_GAME_ID: u8 = 0x01;

type FieldDecoder = fn(&mut Cursor<'_>) -> DecodeResult<ExtraField>;

/// Optional trailing fields in wire order, keyed by their EDF bit.
const EXTRA_FIELDS: [(u8, FieldDecoder); 5] = [
    (EDF_PORT, decode_port),
    (EDF_STEAM_ID, decode_steam_id),
    (EDF_SOURCE_TV, decode_source_tv),
    (EDF_KEYWORDS, decode_keywords),
    (EDF_GAME_ID, decode_game_id),
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ServerType {
    Dedicated,
    NonDedicated,
    SourceTv,
    Unknown(u8),
}

impl From<u8> for ServerType {
    fn from(code: u8) -> Self {
        match code {
            b'd' | b'D' => Self::Dedicated,
            b'l' | b'L' => Self::NonDedicated,
            b'p' | b'P' => Self::SourceTv,
            other => Self::Unknown(other),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Environment {
    Linux,
    Windows,
    Mac,
    Unknown(u8),
}

impl From<u8> for Environment {
    fn from(code: u8) -> Self {
        match code {
            b'l' | b'L' => Self::Linux,
            b'w' | b'W' => Self::Windows,
            b'm' | b'o' => Self::Mac,
            other => Self::Unknown(other),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SourceTv {
    pub port: u16,
    pub name: String,
}

/// One EDF-selected trailing field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExtraField {
    Port(u16),
    SteamId(u64),
    SourceTv(SourceTv),
    Keywords(String),
    GameId(u64),
}

/// The optional fields of an info response; `None` where the EDF bit is clear.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ExtraData {
    pub port: Option<u16>,
    pub steam_id: Option<u64>,
    pub source_tv: Option<SourceTv>,
    pub keywords: Option<String>,
    pub game_id: Option<u64>,
}

impl ExtraData {
    fn insert(&mut self, field: ExtraField) {
        match field {
            ExtraField::Port(port) => self.port = Some(port),
            ExtraField::SteamId(id) => self.steam_id = Some(id),
            ExtraField::SourceTv(tv) => self.source_tv = Some(tv),
            ExtraField::Keywords(keywords) => self.keywords = Some(keywords),
            ExtraField::GameId(id) => self.game_id = Some(id),
        }
    }
}

/// Decoded `A2S_INFO` response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServerInfo {
    pub protocol: u8,
    pub name: String,
    pub map: String,
    pub folder: String,
    pub game: String,
    pub app_id: u16,
    pub players: u8,
    pub max_players: u8,
    pub bots: u8,
    pub server_type: ServerType,
    pub environment: Environment,
    pub password: bool,
    pub vac: bool,
    pub version: String,
    /// Raw extra data flag byte.
    pub edf: u8,
    pub extra: ExtraData,
}

impl ServerInfo {
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        let mut info = Self {
            protocol: cursor.read_u8()?,
            name: cursor.read_cstring()?,
            map: cursor.read_cstring()?,
            folder: cursor.read_cstring()?,
            game: cursor.read_cstring()?,
            app_id: cursor.read_u16_le()?,
            players: cursor.read_u8()?,
            max_players: cursor.read_u8()?,
            bots: cursor.read_u8()?,
            server_type: cursor.read_u8()?.into(),
            environment: cursor.read_u8()?.into(),
            password: cursor.read_u8()? != 0,
            vac: cursor.read_u8()? != 0,
            version: cursor.read_cstring()?,
            edf: cursor.read_u8()?,
            extra: ExtraData::default(),
        };

        for (bit, decode) in EXTRA_FIELDS {
            if info.edf & bit != 0 {
                let field = decode(cursor)?;
                info.extra.insert(field);
            }
        }

        Ok(info)
    }

    pub(crate) fn decode(payload: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(payload);
        let info = Self::read(&mut cursor)?;
        if !cursor.is_empty() {
            trace!(
                "Ignoring {} trailing bytes at offset {}",
                cursor.remaining(),
                cursor.position()
            );
        }
        Ok(info)
    }
}

fn decode_port(cursor: &mut Cursor<'_>) -> DecodeResult<ExtraField> {
    cursor.read_u16_le().map(ExtraField::Port)
}

fn decode_steam_id(cursor: &mut Cursor<'_>) -> DecodeResult<ExtraField> {
    cursor.read_u64_le().map(ExtraField::SteamId)
}

fn decode_source_tv(cursor: &mut Cursor<'_>) -> DecodeResult<ExtraField> {
    let port = cursor.read_u16_le()?;
    let name = cursor.read_cstring()?;
    Ok(ExtraField::SourceTv(SourceTv { port, name }))
}

fn decode_keywords(cursor: &mut Cursor<'_>) -> DecodeResult<ExtraField> {
    cursor.read_cstring().map(ExtraField::Keywords)
}

fn decode_game_id(cursor: &mut Cursor<'_>) -> DecodeResult<ExtraField> {
    cursor.read_u64_le().map(ExtraField::GameId)
}
