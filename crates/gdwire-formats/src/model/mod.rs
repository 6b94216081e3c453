//! Typed domain records assembled from parsed records

pub mod color;
pub mod comment;
pub mod enums;
pub mod level;
pub mod message;
pub mod packs;
pub mod song;
pub mod user;

pub use color::Color;
pub use comment::Comment;
pub use enums::{
    CommentPolicy, CommentType, DemonDifficulty, Direction, FriendRequestPolicy, GauntletKind,
    IconType, LevelDifficulty, LevelLength, MessagePolicy, Role, TimelyType, WireEnum,
};
pub use level::Level;
pub use message::{FriendRequest, Message};
pub use packs::{Gauntlet, MapPack};
pub use song::Song;
pub use user::{AbstractUser, IconSet, SocialLink, User, UserStats};
