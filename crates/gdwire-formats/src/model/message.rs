//! Private messages and friend requests
//!
//! Both kinds carry two identities: the one in the record's own sender tags
//! and a counterpart that the caller supplies, either as a second user
//! fragment or as an identity it already holds. Which of the two wrote the
//! item is decided by the parity of the record's indicator tag, see
//! [`Direction`].

use std::sync::Arc;

use gdwire_crypto::{CipherPurpose, alphabet, coder};
use tracing::trace;

use crate::error::Result;
use crate::index::{MessageField, RequestField};
use crate::model::enums::Direction;
use crate::model::user::AbstractUser;
use crate::record::Record;

/// Orders the wire identity and the counterpart as (author, recipient)
fn assign(
    direction: Direction,
    wire: Arc<AbstractUser>,
    counterpart: Arc<AbstractUser>,
) -> (Arc<AbstractUser>, Arc<AbstractUser>) {
    if direction.embedded_is_author() {
        (wire, counterpart)
    } else {
        (counterpart, wire)
    }
}

/// A private message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message id
    pub id: i64,
    /// Subject line, decoded from base64
    pub subject: String,
    /// Body, only present when the message was downloaded
    pub body: Option<String>,
    /// Age as displayed by the server
    pub timestamp: String,
    /// Whether the recipient opened it
    pub is_read: bool,
    /// Side the requesting account is on
    pub direction: Direction,
    /// Writer
    pub author: Arc<AbstractUser>,
    /// Addressee
    pub recipient: Arc<AbstractUser>,
}

impl Message {
    /// Assemble a message from its record and the counterpart's user fragment
    pub fn from_records(record: &Record, counterpart: &Record) -> Result<Self> {
        Self::from_parts(record, Arc::new(AbstractUser::from_record(counterpart)?))
    }

    /// Assemble a message from its record and an already built counterpart
    pub fn from_parts(record: &Record, counterpart: Arc<AbstractUser>) -> Result<Self> {
        let id: i64 = record.parse(MessageField::Id)?;
        let direction = Direction::from_indicator(record.parse(MessageField::Indicator)?);

        let wire = Arc::new(AbstractUser {
            name: record.require(MessageField::SenderName)?.to_string(),
            id: record.parse(MessageField::SenderPlayerId)?,
            account_id: record.parse(MessageField::SenderAccountId)?,
        });
        let (author, recipient) = assign(direction, wire, counterpart);

        trace!("Assembled {direction:?} message {id}");
        Ok(Self {
            id,
            subject: record.decode(MessageField::Subject, alphabet::decode_text)?,
            body: record.decode_opt(MessageField::Body, |raw| {
                coder::decode_str(CipherPurpose::Message, raw)
            })?,
            timestamp: record.require(MessageField::Timestamp)?.to_string(),
            is_read: record.flag(MessageField::IsRead),
            direction,
            author,
            recipient,
        })
    }
}

/// A friend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRequest {
    /// Request id
    pub id: i64,
    /// Attached note, decoded from base64; empty when none was written
    pub body: String,
    /// Age as displayed by the server
    pub timestamp: String,
    /// Whether the recipient has seen it
    pub is_read: bool,
    /// Side the requesting account is on
    pub direction: Direction,
    /// Sender
    pub author: Arc<AbstractUser>,
    /// Addressee
    pub recipient: Arc<AbstractUser>,
}

impl FriendRequest {
    /// Assemble a request from its record and the counterpart's user fragment
    pub fn from_records(record: &Record, counterpart: &Record) -> Result<Self> {
        Self::from_parts(record, Arc::new(AbstractUser::from_record(counterpart)?))
    }

    /// Assemble a request from its record and an already built counterpart
    ///
    /// The indicator is not on the wire for requests and must be merged in
    /// under its extension tag.
    pub fn from_parts(record: &Record, counterpart: Arc<AbstractUser>) -> Result<Self> {
        let id: i64 = record.parse(RequestField::Id)?;
        let direction = Direction::from_indicator(record.parse(RequestField::Indicator)?);

        let wire = Arc::new(AbstractUser {
            name: record.require(RequestField::SenderName)?.to_string(),
            id: record.parse(RequestField::SenderPlayerId)?,
            account_id: record.parse(RequestField::SenderAccountId)?,
        });
        let (author, recipient) = assign(direction, wire, counterpart);

        trace!("Assembled {direction:?} friend request {id}");
        Ok(Self {
            id,
            body: record
                .decode_opt(RequestField::Body, alphabet::decode_text)?
                .unwrap_or_default(),
            timestamp: record.require(RequestField::Timestamp)?.to_string(),
            is_read: !record.flag(RequestField::IsUnread),
            direction,
            author,
            recipient,
        })
    }
}
