//! Level comments and profile posts

use std::sync::Arc;

use gdwire_crypto::alphabet;
use tracing::trace;

use crate::error::Result;
use crate::index::CommentField;
use crate::model::color::Color;
use crate::model::enums::CommentType;
use crate::model::user::AbstractUser;
use crate::record::Record;

/// A comment on a level or a post on a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment id
    pub id: i64,
    /// Text, decoded from base64
    pub body: String,
    /// Likes minus dislikes
    pub rating: i64,
    /// Age as displayed by the server
    pub timestamp: String,
    /// Flagged as spam
    pub is_spam: bool,
    /// Level or profile comment
    pub kind: CommentType,
    /// Text color, white unless the author is a moderator
    pub color: Color,
    /// Level commented on, zero for profile posts
    pub level_id: i64,
    /// Best percentage the author showed, `-1` when hidden
    pub level_percentage: i64,
    /// Moderator badge level, zero for regular players
    pub mod_badge: i64,
    /// Author identity
    pub author: Arc<AbstractUser>,
}

impl Comment {
    /// Assemble a level comment from the comment record and the author fragment
    ///
    /// The fragment carries the name and account id; the player id is a tag
    /// of the comment itself.
    pub fn from_records(record: &Record, author: &Record) -> Result<Self> {
        let mut identity = AbstractUser::from_record(author)?;
        identity.id = record.parse(CommentField::AuthorPlayerId)?;
        Self::from_parts(record, Arc::new(identity))
    }

    /// Assemble a comment whose author is already known, as for profile posts
    ///
    /// The comment type is not on the wire and must be merged in under its
    /// extension tag.
    pub fn from_parts(record: &Record, author: Arc<AbstractUser>) -> Result<Self> {
        let id: i64 = record.parse(CommentField::Id)?;

        trace!("Assembled comment {id}");
        Ok(Self {
            id,
            body: record.decode(CommentField::Body, alphabet::decode_text)?,
            rating: record.parse(CommentField::Rating)?,
            timestamp: record.require(CommentField::Timestamp)?.to_string(),
            is_spam: record.flag(CommentField::IsSpam),
            kind: record.enumerated(CommentField::Type)?,
            color: record
                .field(CommentField::Color)
                .and_then(Color::parse_rgb)
                .unwrap_or(Color::WHITE),
            level_id: record.parse_or(CommentField::LevelId, 0),
            level_percentage: record.parse_or(CommentField::LevelPercentage, -1),
            mod_badge: record.parse_or(CommentField::ModBadge, 0),
            author,
        })
    }
}
