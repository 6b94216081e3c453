//! Users, their stats and icon loadouts

use tracing::trace;

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};
use crate::index::UserField;
use crate::model::color::Color;
use crate::model::enums::{CommentPolicy, FriendRequestPolicy, IconType, MessagePolicy, Role};
use crate::record::Record;

/// Minimal identity attached to levels, comments, messages and requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbstractUser {
    /// Display name
    pub name: String,
    /// Player id
    pub id: i64,
    /// Account id; zero for unregistered players
    pub account_id: i64,
}

impl AbstractUser {
    /// Build an identity from its parts
    pub fn new(name: impl Into<String>, id: i64, account_id: i64) -> Self {
        Self {
            name: name.into(),
            id,
            account_id,
        }
    }

    /// Stand-in for a player the response did not describe
    pub fn unknown(id: i64) -> Self {
        Self::new("-", id, 0)
    }

    /// Assemble an identity from a user fragment (name, player id, account id)
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            name: record.require(UserField::Name)?.to_string(),
            id: record.parse_or(UserField::PlayerId, 0),
            account_id: record.parse_or(UserField::AccountId, 0),
        })
    }

    /// Whether the player has an account
    pub const fn is_registered(&self) -> bool {
        self.account_id > 0
    }
}

/// Leaderboard and search row for a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Display name
    pub name: String,
    /// Player id
    pub player_id: i64,
    /// Account id
    pub account_id: i64,
    /// Stars
    pub stars: i64,
    /// Demons beaten
    pub demons: i64,
    /// Creator points
    pub creator_points: i64,
    /// Diamonds
    pub diamonds: i64,
    /// User coins
    pub coins: i64,
    /// Secret coins
    pub secret_coins: i64,
    /// Leaderboard place, `-1` outside leaderboards
    pub leaderboard_place: i64,
}

impl UserStats {
    /// Assemble stats from a user record
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            name: record.require(UserField::Name)?.to_string(),
            player_id: record.parse(UserField::PlayerId)?,
            account_id: record.parse(UserField::AccountId)?,
            stars: record.parse(UserField::Stars)?,
            demons: record.parse(UserField::Demons)?,
            creator_points: record.parse(UserField::CreatorPoints)?,
            diamonds: record.parse(UserField::Diamonds)?,
            coins: record.parse(UserField::Coins)?,
            secret_coins: record.parse(UserField::SecretCoins)?,
            leaderboard_place: record.parse_or(UserField::TopPlace, -1),
        })
    }

    /// Identity part of these stats
    pub fn identity(&self) -> AbstractUser {
        AbstractUser::new(self.name.clone(), self.player_id, self.account_id)
    }
}

/// A social handle and the link built from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Handle or channel id as sent
    pub handle: String,
    /// Full profile URL
    pub url: String,
}

impl SocialLink {
    fn from_field(record: &Record, field: UserField, prefix: &str) -> Option<Self> {
        record
            .field(field)
            .filter(|handle| !handle.is_empty())
            .map(|handle| Self {
                handle: handle.to_string(),
                url: format!("{prefix}{handle}"),
            })
    }
}

/// Cosmetic loadout, read from the contiguous icon block of a user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    /// Icon id shown next to the name
    pub main_icon: i64,
    /// Game mode of the main icon
    pub main_icon_type: IconType,
    /// Primary color
    pub color_1: Color,
    /// Secondary color
    pub color_2: Color,
    /// Glow outline enabled
    pub has_glow_outline: bool,
    /// Cube
    pub icon_cube: i64,
    /// Ship
    pub icon_ship: i64,
    /// Ball
    pub icon_ball: i64,
    /// UFO
    pub icon_ufo: i64,
    /// Wave
    pub icon_wave: i64,
    /// Robot
    pub icon_robot: i64,
    /// Spider
    pub icon_spider: i64,
    /// Death effect
    pub explosion: i64,
}

impl IconSet {
    /// Assemble the loadout from a user record
    ///
    /// Profiles omit the main icon block, so it defaults to the cube.
    pub fn from_record(record: &Record) -> Result<Self> {
        let icon_cube = record.parse(UserField::IconCube)?;
        Ok(Self {
            main_icon: record.parse_or(UserField::Icon, icon_cube),
            main_icon_type: record.enumerated_or(UserField::IconType, IconType::Cube),
            color_1: player_color(record, UserField::Color1)?,
            color_2: player_color(record, UserField::Color2)?,
            has_glow_outline: record.flag(UserField::GlowOutline2)
                || record.flag(UserField::GlowOutline),
            icon_cube,
            icon_ship: record.parse(UserField::IconShip)?,
            icon_ball: record.parse(UserField::IconBall)?,
            icon_ufo: record.parse(UserField::IconUfo)?,
            icon_wave: record.parse(UserField::IconWave)?,
            icon_robot: record.parse(UserField::IconRobot)?,
            icon_spider: record.parse(UserField::IconSpider)?,
            explosion: record.parse_or(UserField::Explosion, 0),
        })
    }
}

fn player_color(record: &Record, field: UserField) -> Result<Color> {
    let index: i64 = record.parse(field)?;
    Color::player(index).ok_or_else(|| DecodeError::unknown_variant(field, index, "player color"))
}

/// Full user profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Counters and identity
    pub stats: UserStats,
    /// Moderator status
    pub role: Role,
    /// Global rank, if ranked
    pub global_rank: Option<i64>,
    /// YouTube channel
    pub youtube: Option<SocialLink>,
    /// Twitter profile
    pub twitter: Option<SocialLink>,
    /// Twitch channel
    pub twitch: Option<SocialLink>,
    /// Private message policy
    pub message_policy: MessagePolicy,
    /// Friend request policy
    pub friend_request_policy: FriendRequestPolicy,
    /// Comment history policy
    pub comment_policy: CommentPolicy,
    /// Icon loadout
    pub icon_set: IconSet,
}

impl User {
    /// Assemble a profile from a user record
    pub fn from_record(record: &Record, config: &DecodeConfig) -> Result<Self> {
        let stats = UserStats::from_record(record)?;
        let user = Self {
            role: record.enumerated_or(UserField::Role, Role::User),
            global_rank: record
                .parse_opt(UserField::GlobalRank)
                .filter(|rank: &i64| *rank > 0),
            youtube: SocialLink::from_field(record, UserField::Youtube, &config.youtube_url),
            twitter: SocialLink::from_field(record, UserField::Twitter, &config.twitter_url),
            twitch: SocialLink::from_field(record, UserField::Twitch, &config.twitch_url),
            message_policy: record.enumerated(UserField::MessagePolicy)?,
            friend_request_policy: record.enumerated(UserField::FriendRequestPolicy)?,
            comment_policy: record.enumerated_or(UserField::CommentPolicy, CommentPolicy::OpenToAll),
            icon_set: IconSet::from_record(record)?,
            stats,
        };

        trace!("Assembled user {}", user.stats.account_id);
        Ok(user)
    }

    /// Identity part of this profile
    pub fn identity(&self) -> AbstractUser {
        self.stats.identity()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Parser;
    use crate::index::Field;

    const PROFILE: &str = "1:RobTop:2:16:13:149:17:0:10:9:11:12:3:1500:46:2000:4:12:8:0:18:0:19:0:50:0:20:UCz_yk8mDSAnxJq0ar66L4sw:21:1:22:1:23:1:24:1:25:1:26:1:28:0:43:1:48:1:30:0:16:71:31:0:44:RobTopGames:45::49:2";

    fn profile() -> Record {
        Parser::new()
            .split_on(":")
            .pair_split()
            .run(PROFILE)
            .expect("Test operation should succeed")
    }

    #[test]
    fn test_user_profile() {
        let user = User::from_record(&profile(), &DecodeConfig::default())
            .expect("Test operation should succeed");

        assert_eq!(user.stats.name, "RobTop");
        assert_eq!(user.stats.player_id, 16);
        assert_eq!(user.stats.account_id, 71);
        assert_eq!(user.stats.leaderboard_place, -1);
        assert_eq!(user.role, Role::ElderModerator);
        assert_eq!(user.global_rank, None);
        assert_eq!(
            user.youtube.as_ref().map(|l| l.url.as_str()),
            Some("https://www.youtube.com/channel/UCz_yk8mDSAnxJq0ar66L4sw")
        );
        assert_eq!(
            user.twitter.as_ref().map(|l| l.handle.as_str()),
            Some("RobTopGames")
        );
        assert!(user.twitch.is_none());
        assert_eq!(user.message_policy, MessagePolicy::OpenToAll);
        assert_eq!(user.icon_set.color_1, Color::from_rgb(255, 0, 0));
        assert_eq!(user.icon_set.color_2, Color::WHITE);
        assert_eq!(user.icon_set.main_icon, 1);
        assert_eq!(user.icon_set.main_icon_type, IconType::Cube);
        assert!(!user.icon_set.has_glow_outline);
        assert_eq!(user.identity(), AbstractUser::new("RobTop", 16, 71));
    }

    #[test]
    fn test_out_of_palette_color_is_an_error() {
        let mut record = profile();
        record.insert(UserField::Color1.tag(), "77");
        let err = User::from_record(&record, &DecodeConfig::default()).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownVariant { tag: 10, value: 77, .. }));
    }

    #[test]
    fn test_missing_stat_is_an_error() {
        let mut record = profile();
        record.insert(UserField::Stars.tag(), "lots");
        assert!(matches!(
            UserStats::from_record(&record),
            Err(DecodeError::InvalidValue { tag: 3, .. })
        ));
    }

    #[test]
    fn test_leaderboard_place() {
        let mut record = profile();
        record.insert(UserField::TopPlace.tag(), "3");
        let stats = UserStats::from_record(&record).expect("Test operation should succeed");
        assert_eq!(stats.leaderboard_place, 3);
    }

    #[test]
    fn test_abstract_user_defaults() {
        let record = Parser::new()
            .split_on(":")
            .pair_split()
            .run("1:Guest")
            .expect("Test operation should succeed");
        let user = AbstractUser::from_record(&record).expect("Test operation should succeed");
        assert_eq!(user, AbstractUser::new("Guest", 0, 0));
        assert!(!user.is_registered());
    }
}
