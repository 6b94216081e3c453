//! Field index: numeric wire tags to semantic field names
//!
//! Every record kind has its own tag namespace; tag `2` is a song name in a
//! song record and a player id in a user record. Each namespace is a closed
//! enum implementing [`Field`], and a compile-time assertion rejects duplicate
//! tags inside one namespace.
//!
//! Tags at or above [`EXTENSION_TAG_BASE`] are never sent by the server. The
//! caller attaches them with [`Parser::merge_extra`](crate::Parser::merge_extra)
//! when the transport knows something the record does not carry.

use std::fmt;

/// Numeric key of a field inside one record kind
pub type Tag = u32;

/// First tag reserved for caller-attached fields
pub const EXTENSION_TAG_BASE: Tag = 101;

/// Kind of record a tag namespace belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Custom song metadata
    Song,
    /// User profile or leaderboard row
    User,
    /// Level metadata and geometry
    Level,
    /// Private message
    Message,
    /// Friend request
    Request,
    /// Level or profile comment
    Comment,
    /// Map pack
    MapPack,
    /// Gauntlet
    Gauntlet,
}

impl RecordKind {
    /// Every record kind
    pub const ALL: [Self; 8] = [
        Self::Song,
        Self::User,
        Self::Level,
        Self::Message,
        Self::Request,
        Self::Comment,
        Self::MapPack,
        Self::Gauntlet,
    ];

    /// Lowercase name used in errors and logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::User => "user",
            Self::Level => "level",
            Self::Message => "message",
            Self::Request => "friend request",
            Self::Comment => "comment",
            Self::MapPack => "map pack",
            Self::Gauntlet => "gauntlet",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of one record kind
pub trait Field: Copy + fmt::Debug + 'static {
    /// Record kind owning this namespace
    const KIND: RecordKind;

    /// Every field of the namespace, in tag order
    const ALL: &'static [Self];

    /// Wire tag of this field
    fn tag(self) -> Tag;

    /// Semantic name of this field
    fn name(self) -> &'static str;

    /// Field carried under `tag`, if any
    fn from_tag(tag: Tag) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.tag() == tag)
    }

    /// Field called `name`, if any
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

const fn tags_are_unique(tags: &[Tag]) -> bool {
    let mut i = 0;
    while i < tags.len() {
        let mut j = i + 1;
        while j < tags.len() {
            if tags[i] == tags[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

macro_rules! field_index {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal => $fname:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Field for $name {
            const KIND: RecordKind = RecordKind::$kind;
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn tag(self) -> Tag {
                match self {
                    $( Self::$variant => $tag, )+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $fname, )+
                }
            }
        }

        const _: () = assert!(
            tags_are_unique(&[ $( $tag, )+ ]),
            concat!("duplicate tag in ", stringify!($name))
        );
    };
}

field_index! {
    /// Song record tags (`~|~` separated)
    SongField => Song {
        /// Newgrounds audio id
        Id = 1 => "id",
        /// Track title
        Name = 2 => "name",
        /// Newgrounds artist id
        ArtistId = 3 => "artist_id",
        /// Artist name
        Author = 4 => "author",
        /// File size in megabytes
        Size = 5 => "size",
        /// YouTube video id
        VideoId = 6 => "video_id",
        /// YouTube channel URL
        YoutubeUrl = 7 => "youtube_url",
        /// Artist scouted flag
        IsVerified = 8 => "is_verified",
        /// Percent-encoded download URL
        Url = 10 => "url",
    }
}

field_index! {
    /// User record tags, shared by profiles, leaderboards and user fragments
    UserField => User {
        /// Display name
        Name = 1 => "name",
        /// Player id
        PlayerId = 2 => "player_id",
        /// Stars
        Stars = 3 => "stars",
        /// Demons beaten
        Demons = 4 => "demons",
        /// Leaderboard place
        TopPlace = 6 => "top_place",
        /// Creator points
        CreatorPoints = 8 => "creator_points",
        /// Main icon id
        Icon = 9 => "icon",
        /// Primary color index
        Color1 = 10 => "color_1",
        /// Secondary color index
        Color2 = 11 => "color_2",
        /// Secret coins
        SecretCoins = 13 => "secret_coins",
        /// Main icon type
        IconType = 14 => "icon_type",
        /// Glow flag as sent in lists
        GlowOutline = 15 => "glow_outline",
        /// Account id
        AccountId = 16 => "account_id",
        /// User coins
        Coins = 17 => "coins",
        /// Private message policy
        MessagePolicy = 18 => "message_policy",
        /// Friend request policy
        FriendRequestPolicy = 19 => "friend_request_policy",
        /// YouTube channel id
        Youtube = 20 => "youtube",
        /// Cube icon id
        IconCube = 21 => "icon_cube",
        /// Ship icon id
        IconShip = 22 => "icon_ship",
        /// Ball icon id
        IconBall = 23 => "icon_ball",
        /// UFO icon id
        IconUfo = 24 => "icon_ufo",
        /// Wave icon id
        IconWave = 25 => "icon_wave",
        /// Robot icon id
        IconRobot = 26 => "icon_robot",
        /// Glow flag as sent in profiles
        GlowOutline2 = 28 => "glow_outline_2",
        /// Global rank
        GlobalRank = 30 => "global_rank",
        /// Friend state relative to the requester
        FriendState = 31 => "friend_state",
        /// Spider icon id
        IconSpider = 43 => "icon_spider",
        /// Twitter handle
        Twitter = 44 => "twitter",
        /// Twitch handle
        Twitch = 45 => "twitch",
        /// Diamonds
        Diamonds = 46 => "diamonds",
        /// Death effect id
        Explosion = 48 => "explosion",
        /// Moderator role
        Role = 49 => "role",
        /// Comment history policy
        CommentPolicy = 50 => "comment_policy",
    }
}

field_index! {
    /// Level record tags (`:` separated)
    LevelField => Level {
        /// Level id
        Id = 1 => "id",
        /// Level name
        Name = 2 => "name",
        /// Base64 description
        Description = 3 => "description",
        /// Compressed geometry
        Data = 4 => "data",
        /// Level version
        Version = 5 => "version",
        /// Creator player id
        CreatorId = 6 => "creator_id",
        /// Difficulty denominator
        DifficultyDenominator = 8 => "difficulty_denominator",
        /// Difficulty numerator
        Difficulty = 9 => "difficulty",
        /// Downloads
        Downloads = 10 => "downloads",
        /// Official song index
        OfficialSong = 12 => "official_song",
        /// Game version the level was saved with
        GameVersion = 13 => "game_version",
        /// Likes minus dislikes
        Likes = 14 => "likes",
        /// Length class
        Length = 15 => "length",
        /// Dislikes, unused since 1.9
        Dislikes = 16 => "dislikes",
        /// Demon flag
        IsDemon = 17 => "is_demon",
        /// Star reward
        Stars = 18 => "stars",
        /// Featured score
        FeaturedScore = 19 => "featured_score",
        /// Auto flag
        IsAuto = 25 => "is_auto",
        /// Replay record string
        RecordString = 26 => "record_string",
        /// Ciphered copy password
        Password = 27 => "password",
        /// Human readable upload age
        UploadedTimestamp = 28 => "uploaded_timestamp",
        /// Human readable update age
        LastUpdatedTimestamp = 29 => "last_updated_timestamp",
        /// Original level id for copies
        Original = 30 => "original",
        /// Two-player flag
        TwoPlayer = 31 => "two_player",
        /// Custom song id
        CustomSong = 35 => "custom_song",
        /// Extra string
        ExtraString = 36 => "extra_string",
        /// User coin count
        CoinCount = 37 => "coin_count",
        /// Coins verified flag
        CoinsVerified = 38 => "coins_verified",
        /// Stars requested by the creator
        RequestedStars = 39 => "requested_stars",
        /// Low detail mode flag
        LowDetailMode = 40 => "low_detail_mode",
        /// Daily or weekly index
        TimelyIndex = 41 => "timely_index",
        /// Epic flag
        IsEpic = 42 => "is_epic",
        /// Demon difficulty
        DemonDifficulty = 43 => "demon_difficulty",
        /// Object count
        ObjectCount = 45 => "object_count",
        /// Seconds spent in the editor
        EditorTime = 46 => "editor_time",
        /// Editor seconds including copies
        EditorTimeCopies = 47 => "editor_time_copies",
        /// Daily/weekly kind, attached by the caller
        TimelyType = 101 => "timely_type",
        /// Seconds until the next daily/weekly, attached by the caller
        TimelyCooldown = 102 => "timely_cooldown",
    }
}

field_index! {
    /// Private message tags
    MessageField => Message {
        /// Message id
        Id = 1 => "id",
        /// Counterpart account id
        SenderAccountId = 2 => "sender_account_id",
        /// Counterpart player id
        SenderPlayerId = 3 => "sender_player_id",
        /// Base64 subject
        Subject = 4 => "subject",
        /// Ciphered body, only sent when a message is downloaded
        Body = 5 => "body",
        /// Counterpart name
        SenderName = 6 => "sender_name",
        /// Human readable age
        Timestamp = 7 => "timestamp",
        /// Read flag
        IsRead = 8 => "is_read",
        /// Direction indicator
        Indicator = 9 => "indicator",
    }
}

field_index! {
    /// Friend request tags
    RequestField => Request {
        /// Counterpart name
        SenderName = 1 => "sender_name",
        /// Counterpart player id
        SenderPlayerId = 2 => "sender_player_id",
        /// Counterpart account id
        SenderAccountId = 16 => "sender_account_id",
        /// Request id
        Id = 32 => "id",
        /// Base64 body
        Body = 35 => "body",
        /// Human readable age
        Timestamp = 37 => "timestamp",
        /// Set while the request is unread
        IsUnread = 41 => "is_unread",
        /// Direction indicator, attached by the caller
        Indicator = 101 => "indicator",
    }
}

field_index! {
    /// Comment tags (`~` separated)
    CommentField => Comment {
        /// Level the comment was posted on
        LevelId = 1 => "level_id",
        /// Base64 body
        Body = 2 => "body",
        /// Author player id
        AuthorPlayerId = 3 => "author_player_id",
        /// Likes minus dislikes
        Rating = 4 => "rating",
        /// Comment id
        Id = 6 => "id",
        /// Spam flag
        IsSpam = 7 => "is_spam",
        /// Human readable age
        Timestamp = 9 => "timestamp",
        /// Best percentage shown with the comment
        LevelPercentage = 10 => "level_percentage",
        /// Moderator badge level
        ModBadge = 11 => "mod_badge",
        /// Comment text color
        Color = 12 => "color",
        /// Level or profile comment, attached by the caller
        Type = 101 => "type",
    }
}

field_index! {
    /// Map pack tags
    MapPackField => MapPack {
        /// Pack id
        Id = 1 => "id",
        /// Pack name
        Name = 2 => "name",
        /// Comma separated level ids
        LevelIds = 3 => "level_ids",
        /// Star reward
        Stars = 4 => "stars",
        /// Coin reward
        Coins = 5 => "coins",
        /// Pack difficulty
        Difficulty = 6 => "difficulty",
        /// Title color as `r,g,b`
        Color = 7 => "color",
        /// Bar color as `r,g,b`
        Color2 = 8 => "color_2",
    }
}

field_index! {
    /// Gauntlet tags
    GauntletField => Gauntlet {
        /// Gauntlet id
        Id = 1 => "id",
        /// Comma separated level ids
        LevelIds = 3 => "level_ids",
    }
}

fn lookup_tag<F: Field>(name: &str) -> Option<Tag> {
    F::from_name(name).map(Field::tag)
}

fn lookup_name<F: Field>(tag: Tag) -> Option<&'static str> {
    F::from_tag(tag).map(Field::name)
}

/// Tag carrying `name` in records of `kind`
pub fn tag_for(kind: RecordKind, name: &str) -> Option<Tag> {
    match kind {
        RecordKind::Song => lookup_tag::<SongField>(name),
        RecordKind::User => lookup_tag::<UserField>(name),
        RecordKind::Level => lookup_tag::<LevelField>(name),
        RecordKind::Message => lookup_tag::<MessageField>(name),
        RecordKind::Request => lookup_tag::<RequestField>(name),
        RecordKind::Comment => lookup_tag::<CommentField>(name),
        RecordKind::MapPack => lookup_tag::<MapPackField>(name),
        RecordKind::Gauntlet => lookup_tag::<GauntletField>(name),
    }
}

/// Semantic name of `tag` in records of `kind`
pub fn name_for(kind: RecordKind, tag: Tag) -> Option<&'static str> {
    match kind {
        RecordKind::Song => lookup_name::<SongField>(tag),
        RecordKind::User => lookup_name::<UserField>(tag),
        RecordKind::Level => lookup_name::<LevelField>(tag),
        RecordKind::Message => lookup_name::<MessageField>(tag),
        RecordKind::Request => lookup_name::<RequestField>(tag),
        RecordKind::Comment => lookup_name::<CommentField>(tag),
        RecordKind::MapPack => lookup_name::<MapPackField>(tag),
        RecordKind::Gauntlet => lookup_name::<GauntletField>(tag),
    }
}
