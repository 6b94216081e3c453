//! Level search pages
//!
//! A search response bundles four `#` separated sections:
//!
//! ```text
//! level|level|...#player_id:name:account_id|...#song~:~song...#total:offset:page_size
//! ```
//!
//! Levels only reference their creator and song by id, so both side tables
//! are decoded first and shared between the levels that point at them.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};
use crate::index::LevelField;
use crate::model::{AbstractUser, Level, Song};
use crate::parser::Parser;
use crate::record::Record;

/// Response body sent when a search has no results
const NO_RESULTS: &str = "-1";

const LEVELS: usize = 0;
const CREATORS: usize = 1;
const SONGS: usize = 2;
const PAGE_INFO: usize = 3;

/// One page of level search results
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPage {
    /// Levels on this page, in response order
    pub levels: Vec<Level>,
    /// Total number of results across all pages
    pub total: i64,
    /// Index of the first result on this page
    pub offset: i64,
    /// Results per page
    pub page_size: i64,
}

impl LevelPage {
    /// Decode a search response
    ///
    /// Level chunks the parser abstains on are skipped; a level that parses
    /// but fails to assemble fails the whole page.
    pub fn parse(text: &str, config: &DecodeConfig) -> Result<Self> {
        let text = text.trim();
        if text == NO_RESULTS {
            debug!("Search returned no results");
            return Ok(Self::empty());
        }

        let creators = creators(&section(text, CREATORS, "|")?);
        let songs = songs(&section(text, SONGS, "~:~")?, config)?;
        let (total, offset, page_size) = page_info(&section(text, PAGE_INFO, ":")?)?;

        let level_parser = Parser::new().split_on(":").pair_split();
        let levels = section(text, LEVELS, "|")?
            .iter()
            .filter(|chunk| !chunk.is_empty())
            .filter_map(|chunk| level_parser.run(chunk))
            .map(|record| assemble(&record, &creators, &songs, config))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Decoded page of {} levels ({} creators, {} songs), {offset}/{total}",
            levels.len(),
            creators.len(),
            songs.len()
        );
        Ok(Self {
            levels,
            total,
            offset,
            page_size,
        })
    }

    /// A page with no results
    pub const fn empty() -> Self {
        Self {
            levels: Vec::new(),
            total: 0,
            offset: 0,
            page_size: 0,
        }
    }

    /// Whether more results follow this page
    pub fn has_next(&self) -> bool {
        let shown = i64::try_from(self.levels.len()).unwrap_or(i64::MAX);
        self.offset.saturating_add(shown) < self.total
    }
}

fn section(text: &str, index: usize, delimiter: &str) -> Result<Vec<String>> {
    Parser::new()
        .split_on("#")
        .take(index)
        .then_split(delimiter)
        .run_sequence(text)
        .ok_or_else(|| DecodeError::Page(format!("section {index} is missing")))
}

fn creators(entries: &[String]) -> HashMap<i64, Arc<AbstractUser>> {
    entries
        .iter()
        .filter_map(|entry| {
            let mut parts = entry.splitn(3, ':');
            let (Some(id), Some(name), Some(account_id)) = (parts.next(), parts.next(), parts.next())
            else {
                debug!("Skipping malformed creator entry {entry:?}");
                return None;
            };
            let user = AbstractUser::new(name, id.parse().ok()?, account_id.parse().unwrap_or(0));
            Some((user.id, Arc::new(user)))
        })
        .collect()
}

fn songs(chunks: &[String], config: &DecodeConfig) -> Result<HashMap<i64, Arc<Song>>> {
    let parser = Parser::new().split_on("~|~").pair_split();
    chunks
        .iter()
        .filter(|chunk| !chunk.is_empty())
        .filter_map(|chunk| parser.run(chunk))
        .map(|record| Song::from_record(&record, config).map(|song| (song.id, Arc::new(song))))
        .collect()
}

fn page_info(parts: &[String]) -> Result<(i64, i64, i64)> {
    let number = |index: usize| -> Result<i64> {
        parts
            .get(index)
            .and_then(|part| part.trim().parse().ok())
            .ok_or_else(|| DecodeError::Page(format!("page info {parts:?} is malformed")))
    };
    Ok((number(0)?, number(1)?, number(2)?))
}

fn assemble(
    record: &Record,
    creators: &HashMap<i64, Arc<AbstractUser>>,
    songs: &HashMap<i64, Arc<Song>>,
    config: &DecodeConfig,
) -> Result<Level> {
    let creator_id: i64 = record.parse_or(LevelField::CreatorId, 0);
    let creator = creators
        .get(&creator_id)
        .cloned()
        .unwrap_or_else(|| Arc::new(AbstractUser::unknown(creator_id)));

    let custom_song: i64 = record.parse_or(LevelField::CustomSong, 0);
    let song = (custom_song > 0)
        .then(|| songs.get(&custom_song).cloned())
        .flatten()
        .unwrap_or_else(|| Arc::new(Song::official(record.parse_or(LevelField::OfficialSong, 0))));

    Level::from_record(record, song, creator, config)
}
