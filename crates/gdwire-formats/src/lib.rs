//! Response decoding for the Geometry Dash server protocol
//!
//! Server responses are delimited text: a record is a flat sequence of
//! `tag, value, tag, value, ...` pairs, and list responses chain records with
//! further delimiters. Decoding happens in three steps:
//!
//! - **Parsing**: a [`Parser`] pipeline splits raw text into a [`Record`],
//!   or abstains when the text is not a well-formed record
//! - **Field lookup**: the [`index`] tables name every numeric tag per record
//!   kind, and [`Record`] accessors coerce values through them
//! - **Assembly**: [`model`] constructors build typed objects, decoding
//!   obfuscated fields through `gdwire-crypto`
//!
//! # Examples
//!
//! ```
//! use gdwire_formats::{DecodeConfig, Parser, Song};
//!
//! let record = Parser::new()
//!     .split_on("~|~")
//!     .pair_split()
//!     .run("1~|~810215~|~2~|~TestSong~|~4~|~TestAuthor~|~5~|~1.5~|~10~|~http%3A%2F%2Fexample.test%2Fa.mp3")
//!     .expect("well-formed record");
//! let song = Song::from_record(&record, &DecodeConfig::default()).expect("complete song");
//! assert_eq!(song.name, "TestSong");
//! assert_eq!(song.download_url.as_deref(), Some("http://example.test/a.mp3"));
//! ```
//!
//! Everything here is synchronous and pure. Domain objects hold their related
//! objects behind `Arc`, so decoded values can be shared across threads.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod page;
pub mod parser;
pub mod record;

pub use config::DecodeConfig;
pub use error::{DecodeError, Result};
pub use index::{Field, RecordKind, Tag, name_for, tag_for};
pub use page::LevelPage;
pub use parser::Parser;
pub use record::Record;

// Re-export commonly used types
pub use model::{
    AbstractUser, Color, Comment, FriendRequest, Gauntlet, IconSet, Level, MapPack, Message, Song,
    User, UserStats,
};
