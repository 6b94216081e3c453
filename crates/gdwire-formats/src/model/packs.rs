//! Map packs and gauntlets

use tracing::trace;

use crate::error::Result;
use crate::index::{GauntletField, MapPackField};
use crate::model::color::Color;
use crate::model::enums::{GauntletKind, LevelDifficulty, WireEnum};
use crate::record::Record;

const MAP_PACK_LEVELS: [i64; 3] = [0; 3];
const GAUNTLET_LEVELS: [i64; 5] = [0; 5];

/// A curated bundle of three levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPack {
    /// Pack id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Levels in the pack
    pub level_ids: Vec<i64>,
    /// Star reward
    pub stars: i64,
    /// Coin reward
    pub coins: i64,
    /// Difficulty face
    pub difficulty: LevelDifficulty,
    /// Title color
    pub color: Color,
    /// Bar color, falling back to the title color
    pub bar_color: Color,
}

impl MapPack {
    /// Assemble a map pack from its record
    pub fn from_record(record: &Record) -> Result<Self> {
        let id: i64 = record.parse(MapPackField::Id)?;
        let color = record
            .field(MapPackField::Color)
            .and_then(Color::parse_rgb)
            .unwrap_or(Color::WHITE);

        trace!("Assembled map pack {id}");
        Ok(Self {
            id,
            name: record.require(MapPackField::Name)?.to_string(),
            level_ids: record.int_list_or(MapPackField::LevelIds, &MAP_PACK_LEVELS),
            stars: record.parse(MapPackField::Stars)?,
            coins: record.parse(MapPackField::Coins)?,
            difficulty: LevelDifficulty::from_pack_value(
                record.parse_or(MapPackField::Difficulty, -1),
            ),
            color,
            bar_color: record
                .field(MapPackField::Color2)
                .and_then(Color::parse_rgb)
                .unwrap_or(color),
        })
    }
}

/// A themed gauntlet of five levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gauntlet {
    /// Theme
    pub kind: GauntletKind,
    /// Display name, e.g. `Fire Gauntlet`
    pub name: String,
    /// Levels in the gauntlet
    pub level_ids: Vec<i64>,
}

impl Gauntlet {
    /// Assemble a gauntlet from its record
    pub fn from_record(record: &Record) -> Result<Self> {
        let kind: GauntletKind = record.enumerated(GauntletField::Id)?;
        trace!("Assembled gauntlet {}", kind.value());
        Ok(Self {
            kind,
            name: format!("{} Gauntlet", kind.title()),
            level_ids: record.int_list_or(GauntletField::LevelIds, &GAUNTLET_LEVELS),
        })
    }

    /// Gauntlet id as sent
    pub fn id(&self) -> i64 {
        self.kind.value()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Parser;
    use crate::error::DecodeError;

    fn parse(raw: &str) -> Record {
        Parser::new()
            .split_on(":")
            .pair_split()
            .run(raw)
            .expect("Test operation should succeed")
    }

    #[test]
    fn test_map_pack() {
        let pack = MapPack::from_record(&parse(
            "1:1:2:Easy Map Pack:3:1,4,6:4:4:5:2:6:1:7:255,255,0:8:120,120,0",
        ))
        .expect("Test operation should succeed");
        assert_eq!(pack.level_ids, vec![1, 4, 6]);
        assert_eq!(pack.difficulty, LevelDifficulty::Easy);
        assert_eq!(pack.color, Color::from_rgb(255, 255, 0));
        assert_eq!(pack.bar_color, Color::from_rgb(120, 120, 0));
    }

    #[test]
    fn test_map_pack_defaults() {
        let pack = MapPack::from_record(&parse("1:9:2:Bare:4:10:5:1"))
            .expect("Test operation should succeed");
        assert_eq!(pack.level_ids, vec![0, 0, 0]);
        assert_eq!(pack.color, Color::WHITE);
        assert_eq!(pack.bar_color, Color::WHITE);
        assert_eq!(pack.difficulty, LevelDifficulty::Na);
    }

    #[test]
    fn test_demon_pack() {
        let pack = MapPack::from_record(&parse("1:20:2:Demon Pack:4:10:5:2:6:6"))
            .expect("Test operation should succeed");
        assert!(pack.difficulty.is_demon());
    }

    #[test]
    fn test_gauntlet() {
        let gauntlet = Gauntlet::from_record(&parse("1:1:3:27732941,28200611,27483789,28225110,27912136"))
            .expect("Test operation should succeed");
        assert_eq!(gauntlet.name, "Fire Gauntlet");
        assert_eq!(gauntlet.id(), 1);
        assert_eq!(gauntlet.level_ids.len(), 5);
    }

    #[test]
    fn test_gauntlet_defaults_and_unknown_theme() {
        let gauntlet = Gauntlet::from_record(&parse("1:15")).expect("Test operation should succeed");
        assert_eq!(gauntlet.name, "Death Gauntlet");
        assert_eq!(gauntlet.level_ids, vec![0; 5]);

        assert!(matches!(
            Gauntlet::from_record(&parse("1:99")),
            Err(DecodeError::UnknownVariant { value: 99, .. })
        ));
    }
}
