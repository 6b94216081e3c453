//! Tag→value records and their typed accessors
//!
//! A [`Record`] is what the [`Parser`](crate::Parser) produces from one chunk
//! of server text. Absence of a tag is distinct from an empty value. Accessors
//! come in three flavours:
//!
//! - mandatory ([`Record::require`], [`Record::parse`]): absent or invalid is an error
//! - optional with default ([`Record::get_or`], [`Record::parse_or`]): never fails
//! - optional ([`Record::parse_opt`], [`Record::decode_opt`]): absent is `None`

use gdwire_crypto::CodecError;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::index::{Field, Tag};
use crate::model::enums::WireEnum;

/// Ordered mapping from tag to raw wire value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: BTreeMap<Tag, String>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, tag: Tag, value: impl Into<String>) -> Option<String> {
        self.entries.insert(tag, value.into())
    }

    /// Overlay `extra` on this record; overlay entries win
    pub fn merge<I, V>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (Tag, V)>,
        V: Into<String>,
    {
        for (tag, value) in extra {
            self.entries.insert(tag, value.into());
        }
    }

    /// Raw value under `tag`
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.entries.get(&tag).map(String::as_str)
    }

    /// Whether `tag` is present
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Number of tags present
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in tag order
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &str)> {
        self.entries.iter().map(|(tag, value)| (*tag, value.as_str()))
    }

    /// Raw value of `field`
    #[must_use]
    pub fn field<F: Field>(&self, field: F) -> Option<&str> {
        self.get(field.tag())
    }

    /// Raw value of a mandatory `field`
    pub fn require<F: Field>(&self, field: F) -> Result<&str> {
        self.field(field).ok_or_else(|| DecodeError::missing(field))
    }

    /// Raw value of an optional `field`, or `default`
    #[must_use]
    pub fn get_or<'a, F: Field>(&'a self, field: F, default: &'a str) -> &'a str {
        self.field(field).unwrap_or(default)
    }

    /// Coerce a mandatory `field`
    pub fn parse<F: Field, T: FromStr>(&self, field: F) -> Result<T> {
        let raw = self.require(field)?;
        raw.trim()
            .parse()
            .map_err(|_| DecodeError::invalid(field, raw, std::any::type_name::<T>()))
    }

    /// Coerce an optional `field`; absent or invalid values yield `None`
    #[must_use]
    pub fn parse_opt<F: Field, T: FromStr>(&self, field: F) -> Option<T> {
        let raw = self.field(field)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(
                    "Ignoring invalid {} field {} value {:?}",
                    F::KIND,
                    field.name(),
                    raw
                );
                None
            }
        }
    }

    /// Coerce an optional `field`, falling back to `default`
    #[must_use]
    pub fn parse_or<F: Field, T: FromStr>(&self, field: F, default: T) -> T {
        self.parse_opt(field).unwrap_or(default)
    }

    /// Integer flag: any nonzero value is true, absent or invalid is false
    #[must_use]
    pub fn flag<F: Field>(&self, field: F) -> bool {
        self.parse_or::<F, i64>(field, 0) != 0
    }

    /// Look up a mandatory enumerated `field`
    pub fn enumerated<F: Field, E: WireEnum>(&self, field: F) -> Result<E> {
        let value: i64 = self.parse(field)?;
        E::from_value(value).ok_or_else(|| DecodeError::unknown_variant(field, value, E::NAME))
    }

    /// Look up an optional enumerated `field`, falling back to `default`
    #[must_use]
    pub fn enumerated_or<F: Field, E: WireEnum>(&self, field: F, default: E) -> E {
        self.parse_opt::<F, i64>(field)
            .and_then(E::from_value)
            .unwrap_or(default)
    }

    /// Comma separated integers of an optional `field`, or `default`
    ///
    /// A list with any malformed element falls back to `default` as a whole.
    #[must_use]
    pub fn int_list_or<F: Field>(&self, field: F, default: &[i64]) -> Vec<i64> {
        self.field(field)
            .and_then(parse_int_list)
            .unwrap_or_else(|| default.to_vec())
    }

    /// Run a codec over a mandatory `field`
    pub fn decode<F, T, D>(&self, field: F, decoder: D) -> Result<T>
    where
        F: Field,
        D: FnOnce(&str) -> std::result::Result<T, CodecError>,
    {
        let raw = self.require(field)?;
        decoder(raw).map_err(|e| DecodeError::codec(field, e))
    }

    /// Run a codec over an optional `field`
    ///
    /// Absent is `Ok(None)`; present but undecodable is an error.
    pub fn decode_opt<F, T, D>(&self, field: F, decoder: D) -> Result<Option<T>>
    where
        F: Field,
        D: FnOnce(&str) -> std::result::Result<T, CodecError>,
    {
        self.field(field)
            .map(|raw| decoder(raw).map_err(|e| DecodeError::codec(field, e)))
            .transpose()
    }
}

impl FromIterator<(Tag, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (Tag, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Parse `1,2,3` into integers; `None` if any element is malformed
pub fn parse_int_list(text: &str) -> Option<Vec<i64>> {
    text.split(',')
        .map(|part| part.trim().parse::<i64>().ok())
        .collect()
}
