//! Closed small-integer enumerations read from the wire

use std::fmt;

/// An enumeration encoded on the wire as a small integer
pub trait WireEnum: Copy + Sized {
    /// Name used in errors
    const NAME: &'static str;

    /// Variant for `value`, if the table has one
    fn from_value(value: i64) -> Option<Self>;

    /// Wire value of this variant
    fn value(self) -> i64;
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl WireEnum for $name {
            const NAME: &'static str = $label;

            fn from_value(value: i64) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn value(self) -> i64 {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }
    };
}

wire_enum! {
    /// Who may send a user private messages
    MessagePolicy: "message policy" {
        /// Anyone
        OpenToAll = 0,
        /// Friends only
        FriendsOnly = 1,
        /// Nobody
        Closed = 2,
    }
}

wire_enum! {
    /// Whether a user accepts friend requests
    FriendRequestPolicy: "friend request policy" {
        /// Requests accepted
        Open = 0,
        /// Requests refused
        Closed = 1,
    }
}

wire_enum! {
    /// Who may see a user's comment history
    CommentPolicy: "comment policy" {
        /// Anyone
        OpenToAll = 0,
        /// Friends only
        FriendsOnly = 1,
        /// Nobody
        Closed = 2,
    }
}

wire_enum! {
    /// Moderator status
    Role: "role" {
        /// Regular player
        User = 0,
        /// Moderator
        Moderator = 1,
        /// Elder moderator
        ElderModerator = 2,
    }
}

wire_enum! {
    /// Level length class
    LevelLength: "level length" {
        /// Under 10 seconds
        Tiny = 0,
        /// Under 30 seconds
        Short = 1,
        /// Under a minute
        Medium = 2,
        /// Under two minutes
        Long = 3,
        /// Two minutes or more
        ExtraLong = 4,
        /// Platformer level, no fixed length
        Platformer = 5,
    }
}

wire_enum! {
    /// Daily/weekly status of a level
    TimelyType: "timely type" {
        /// Regular level
        NotTimely = 0,
        /// Daily level
        Daily = 1,
        /// Weekly demon
        Weekly = 2,
    }
}

wire_enum! {
    /// Where a comment was posted
    CommentType: "comment type" {
        /// Level comment
        Level = 0,
        /// Profile post
        Profile = 1,
    }
}

wire_enum! {
    /// Game mode shown as a user's main icon
    IconType: "icon type" {
        /// Cube
        Cube = 0,
        /// Ship
        Ship = 1,
        /// Ball
        Ball = 2,
        /// UFO
        Ufo = 3,
        /// Wave
        Wave = 4,
        /// Robot
        Robot = 5,
        /// Spider
        Spider = 6,
    }
}

wire_enum! {
    /// Demon tier as sent in the demon difficulty tag
    DemonDifficulty: "demon difficulty" {
        /// Hard demon, the default tier
        Hard = 0,
        /// Easy demon
        Easy = 3,
        /// Medium demon
        Medium = 4,
        /// Insane demon
        Insane = 5,
        /// Extreme demon
        Extreme = 6,
    }
}

wire_enum! {
    /// Gauntlet theme
    GauntletKind: "gauntlet" {
        /// Fire
        Fire = 1,
        /// Ice
        Ice = 2,
        /// Poison
        Poison = 3,
        /// Shadow
        Shadow = 4,
        /// Lava
        Lava = 5,
        /// Bonus
        Bonus = 6,
        /// Chaos
        Chaos = 7,
        /// Demon
        Demon = 8,
        /// Time
        Time = 9,
        /// Crystal
        Crystal = 10,
        /// Magic
        Magic = 11,
        /// Spike
        Spike = 12,
        /// Monster
        Monster = 13,
        /// Doom
        Doom = 14,
        /// Death
        Death = 15,
    }
}

impl GauntletKind {
    /// Display word for the theme
    pub const fn title(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Poison => "Poison",
            Self::Shadow => "Shadow",
            Self::Lava => "Lava",
            Self::Bonus => "Bonus",
            Self::Chaos => "Chaos",
            Self::Demon => "Demon",
            Self::Time => "Time",
            Self::Crystal => "Crystal",
            Self::Magic => "Magic",
            Self::Spike => "Spike",
            Self::Monster => "Monster",
            Self::Doom => "Doom",
            Self::Death => "Death",
        }
    }
}

/// Difficulty face of a level or map pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelDifficulty {
    /// Not rated
    Na,
    /// Auto
    Auto,
    /// Easy
    Easy,
    /// Normal
    Normal,
    /// Hard
    Hard,
    /// Harder
    Harder,
    /// Insane
    Insane,
    /// Demon of the given tier
    Demon(DemonDifficulty),
}

impl LevelDifficulty {
    /// Face for a non-demon difficulty numerator (`0`, `10`, ... `50`)
    pub fn from_numerator(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Na),
            10 => Some(Self::Easy),
            20 => Some(Self::Normal),
            30 => Some(Self::Hard),
            40 => Some(Self::Harder),
            50 => Some(Self::Insane),
            _ => None,
        }
    }

    /// Face for a level: auto wins over demon, demon over the numerator
    ///
    /// `numerator` is only consulted for non-demon, non-auto levels.
    pub fn derive(numerator: i64, demon: DemonDifficulty, is_demon: bool, is_auto: bool) -> Option<Self> {
        if is_auto {
            Some(Self::Auto)
        } else if is_demon {
            Some(Self::Demon(demon))
        } else {
            Self::from_numerator(numerator)
        }
    }

    /// Face for a map pack difficulty value; unknown values are not rated
    pub fn from_pack_value(value: i64) -> Self {
        match value {
            1 => Self::Easy,
            2 => Self::Normal,
            3 => Self::Hard,
            4 => Self::Harder,
            5 => Self::Insane,
            6 => Self::Demon(DemonDifficulty::Hard),
            _ => Self::Na,
        }
    }

    /// Whether this is any demon tier
    pub const fn is_demon(self) -> bool {
        matches!(self, Self::Demon(_))
    }
}

impl fmt::Display for LevelDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Na => "N/A",
            Self::Auto => "Auto",
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Harder => "Harder",
            Self::Insane => "Insane",
            Self::Demon(DemonDifficulty::Easy) => "Easy Demon",
            Self::Demon(DemonDifficulty::Medium) => "Medium Demon",
            Self::Demon(DemonDifficulty::Hard) => "Hard Demon",
            Self::Demon(DemonDifficulty::Insane) => "Insane Demon",
            Self::Demon(DemonDifficulty::Extreme) => "Extreme Demon",
        };
        f.write_str(text)
    }
}

/// Which side of a message or friend request the requesting account is on
///
/// The server reports direction as an indicator integer; even means the
/// requester received the item, odd means the requester sent it. Nothing else
/// in the payload documents this, so the rule lives only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sent to the requester by the counterpart
    Incoming,
    /// Sent by the requester to the counterpart
    Outgoing,
}

impl Direction {
    /// Direction for an indicator value, by parity
    pub const fn from_indicator(indicator: i64) -> Self {
        if indicator.rem_euclid(2) == 0 {
            Self::Incoming
        } else {
            Self::Outgoing
        }
    }

    /// Whether the identity embedded in the record wrote the item
    pub const fn embedded_is_author(self) -> bool {
        matches!(self, Self::Incoming)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_enum_round_trip() {
        for value in 0..=6 {
            let icon = IconType::from_value(value).expect("Test operation should succeed");
            assert_eq!(icon.value(), value);
        }
        assert_eq!(IconType::from_value(7), None);
        assert_eq!(Role::from_value(-1), None);
    }

    #[test]
    fn test_demon_table_is_not_contiguous() {
        assert_eq!(DemonDifficulty::from_value(0), Some(DemonDifficulty::Hard));
        assert_eq!(DemonDifficulty::from_value(3), Some(DemonDifficulty::Easy));
        assert_eq!(DemonDifficulty::from_value(1), None);
    }

    #[test]
    fn test_derive_difficulty() {
        assert_eq!(
            LevelDifficulty::derive(30, DemonDifficulty::Hard, false, false),
            Some(LevelDifficulty::Hard)
        );
        assert_eq!(
            LevelDifficulty::derive(50, DemonDifficulty::Extreme, true, false),
            Some(LevelDifficulty::Demon(DemonDifficulty::Extreme))
        );
        assert_eq!(
            LevelDifficulty::derive(10, DemonDifficulty::Hard, true, true),
            Some(LevelDifficulty::Auto)
        );
        assert_eq!(LevelDifficulty::derive(35, DemonDifficulty::Hard, false, false), None);
    }

    #[test]
    fn test_pack_difficulty() {
        assert_eq!(LevelDifficulty::from_pack_value(4), LevelDifficulty::Harder);
        assert!(LevelDifficulty::from_pack_value(6).is_demon());
        assert_eq!(LevelDifficulty::from_pack_value(42), LevelDifficulty::Na);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(LevelDifficulty::Na.to_string(), "N/A");
        assert_eq!(
            LevelDifficulty::Demon(DemonDifficulty::Medium).to_string(),
            "Medium Demon"
        );
    }

    #[test]
    fn test_direction_by_parity() {
        assert_eq!(Direction::from_indicator(0), Direction::Incoming);
        assert_eq!(Direction::from_indicator(1), Direction::Outgoing);
        assert_eq!(Direction::from_indicator(4), Direction::Incoming);
        assert_eq!(Direction::from_indicator(-3), Direction::Outgoing);
        assert!(Direction::Incoming.embedded_is_author());
        assert!(!Direction::Outgoing.embedded_is_author());
    }

    #[test]
    fn test_gauntlet_titles() {
        assert_eq!(GauntletKind::from_value(15).map(GauntletKind::title), Some("Death"));
        assert_eq!(GauntletKind::from_value(0), None);
    }
}
