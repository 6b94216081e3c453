//! Levels

use std::sync::Arc;

use gdwire_crypto::{CipherPurpose, alphabet, coder, unzip_level_data};
use tracing::{debug, trace};

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};
use crate::index::LevelField;
use crate::model::enums::{DemonDifficulty, LevelDifficulty, LevelLength, TimelyType};
use crate::model::song::Song;
use crate::model::user::AbstractUser;
use crate::record::Record;

/// Wire value of an unset password
const NO_PASSWORD: &str = "0";

/// Decoded password of a level that is free to copy
const FREE_COPY: &str = "1";

/// A level with its metadata and, when downloaded, its geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Level id
    pub id: i64,
    /// Title
    pub name: String,
    /// Description, decoded from base64
    pub description: String,
    /// Revision counter
    pub version: i64,
    /// Uploader
    pub creator: Arc<AbstractUser>,
    /// Soundtrack
    pub song: Arc<Song>,
    /// Decompressed geometry, only present on downloads
    pub data: Option<String>,
    /// Copy password; `Some("")` for free copies, `None` when not copyable
    pub password: Option<String>,
    /// Difficulty face
    pub difficulty: LevelDifficulty,
    /// Demon flag as sent
    pub is_demon: bool,
    /// Auto flag as sent
    pub is_auto: bool,
    /// Star reward
    pub stars: i64,
    /// Stars the creator asked for
    pub requested_stars: i64,
    /// User coins placed
    pub coins: i64,
    /// Whether the coins are verified
    pub verified_coins: bool,
    /// Featured score; zero when not featured
    pub score: i64,
    /// Epic rating
    pub is_epic: bool,
    /// Download count
    pub downloads: i64,
    /// Like count as sent
    pub rating: i64,
    /// Length class
    pub length: LevelLength,
    /// Game version the level was uploaded with
    pub game_version: i64,
    /// Id of the level this one was copied from, zero for originals
    pub original: i64,
    /// Two player mode
    pub two_player: bool,
    /// Has a low detail toggle
    pub low_detail_mode: bool,
    /// Object count
    pub object_count: i64,
    /// Upload age as displayed by the server
    pub uploaded_timestamp: Option<String>,
    /// Update age as displayed by the server
    pub last_updated_timestamp: Option<String>,
    /// Daily/weekly status
    pub timely_type: TimelyType,
    /// Daily/weekly number, `-1` for regular levels
    pub timely_index: i64,
    /// Seconds until the next daily/weekly, `-1` for regular levels
    pub cooldown: i64,
}

impl Level {
    /// Assemble a level from its record and the already built song and creator
    ///
    /// The description, password and geometry are decoded here. An absent
    /// password or geometry is not an error; a present one that fails to
    /// decode is.
    pub fn from_record(
        record: &Record,
        song: Arc<Song>,
        creator: Arc<AbstractUser>,
        config: &DecodeConfig,
    ) -> Result<Self> {
        let id: i64 = record.parse(LevelField::Id)?;

        let numerator: i64 = record.parse(LevelField::Difficulty)?;
        let is_demon = record.flag(LevelField::IsDemon);
        let is_auto = record.flag(LevelField::IsAuto);
        let demon = record.enumerated_or(LevelField::DemonDifficulty, DemonDifficulty::Hard);
        let difficulty = LevelDifficulty::derive(numerator, demon, is_demon, is_auto).ok_or_else(
            || DecodeError::unknown_variant(LevelField::Difficulty, numerator, "difficulty"),
        )?;

        let description = record
            .decode_opt(LevelField::Description, alphabet::decode_text)?
            .unwrap_or_default();

        let data = unzip_level_data(
            record.field(LevelField::Data).filter(|raw| !raw.is_empty()),
            config.max_level_data_size,
        )
        .map_err(|e| DecodeError::codec(LevelField::Data, e))?;

        let password = decode_password(record)?;

        trace!("Assembled level {id}");
        Ok(Self {
            id,
            name: record.require(LevelField::Name)?.to_string(),
            description,
            version: record.parse(LevelField::Version)?,
            creator,
            song,
            data,
            password,
            difficulty,
            is_demon,
            is_auto,
            stars: record.parse(LevelField::Stars)?,
            requested_stars: record.parse_or(LevelField::RequestedStars, 0),
            coins: record.parse_or(LevelField::CoinCount, 0),
            verified_coins: record.flag(LevelField::CoinsVerified),
            score: record.parse(LevelField::FeaturedScore)?,
            is_epic: record.flag(LevelField::IsEpic),
            downloads: record.parse(LevelField::Downloads)?,
            rating: record.parse(LevelField::Likes)?,
            length: record.enumerated(LevelField::Length)?,
            game_version: record.parse(LevelField::GameVersion)?,
            original: record.parse_or(LevelField::Original, 0),
            two_player: record.flag(LevelField::TwoPlayer),
            low_detail_mode: record.flag(LevelField::LowDetailMode),
            object_count: record.parse_or(LevelField::ObjectCount, 0),
            uploaded_timestamp: record
                .field(LevelField::UploadedTimestamp)
                .map(str::to_string),
            last_updated_timestamp: record
                .field(LevelField::LastUpdatedTimestamp)
                .map(str::to_string),
            timely_type: record.enumerated_or(LevelField::TimelyType, TimelyType::NotTimely),
            timely_index: record.parse_or(LevelField::TimelyIndex, -1),
            cooldown: record.parse_or(LevelField::TimelyCooldown, -1),
        })
    }

    /// Whether the level can be copied
    pub const fn is_copyable(&self) -> bool {
        self.password.is_some()
    }

    /// Whether the level has a featured score
    pub const fn is_featured(&self) -> bool {
        self.score > 0
    }

    /// Whether this is the current daily or weekly level
    pub fn is_timely(&self) -> bool {
        self.timely_type != TimelyType::NotTimely
    }
}

fn decode_password(record: &Record) -> Result<Option<String>> {
    let Some(raw) = record
        .field(LevelField::Password)
        .filter(|raw| *raw != NO_PASSWORD)
    else {
        return Ok(None);
    };

    let password = coder::decode_str(CipherPurpose::LevelPassword, raw)
        .map_err(|e| DecodeError::codec(LevelField::Password, e))?;
    if password == FREE_COPY {
        debug!("Level password marks a free copy");
        return Ok(Some(String::new()));
    }
    Ok(Some(password))
}
