//! Decode error types

use gdwire_crypto::CodecError;
use thiserror::Error;

use crate::index::{Field, RecordKind, Tag};

/// Errors raised while assembling domain objects from records
///
/// Parser abstentions are not errors: [`Parser::run`](crate::Parser::run)
/// returns `None` for them.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A mandatory tag is absent
    #[error("Missing field {name} (tag {tag}) in {kind} record")]
    MissingField {
        /// Record kind being assembled
        kind: RecordKind,
        /// Missing tag
        tag: Tag,
        /// Semantic name of the tag
        name: &'static str,
    },

    /// A mandatory value could not be coerced to its target type
    #[error("Invalid value {value:?} for {kind} field {name} (tag {tag}), expected {expected}")]
    InvalidValue {
        /// Record kind being assembled
        kind: RecordKind,
        /// Offending tag
        tag: Tag,
        /// Semantic name of the tag
        name: &'static str,
        /// Raw wire value
        value: String,
        /// Description of the expected type
        expected: &'static str,
    },

    /// A mandatory enumerated value is outside its closed table
    #[error("Unknown {enumeration} {value} in {kind} field {name} (tag {tag})")]
    UnknownVariant {
        /// Record kind being assembled
        kind: RecordKind,
        /// Offending tag
        tag: Tag,
        /// Semantic name of the tag
        name: &'static str,
        /// Integer read from the wire
        value: i64,
        /// Name of the enumeration
        enumeration: &'static str,
    },

    /// A present obfuscated value failed to decode
    #[error("Failed to decode {kind} field {name} (tag {tag}): {source}")]
    Codec {
        /// Record kind being assembled
        kind: RecordKind,
        /// Offending tag
        tag: Tag,
        /// Semantic name of the tag
        name: &'static str,
        /// Underlying codec failure
        #[source]
        source: CodecError,
    },

    /// A list response is missing one of its sections
    #[error("Malformed page: {0}")]
    Page(String),

    /// Decoder configuration is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DecodeError {
    /// Missing mandatory `field`
    pub fn missing<F: Field>(field: F) -> Self {
        Self::MissingField {
            kind: F::KIND,
            tag: field.tag(),
            name: field.name(),
        }
    }

    /// `value` of `field` is not a valid `expected`
    pub fn invalid<F: Field>(field: F, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            kind: F::KIND,
            tag: field.tag(),
            name: field.name(),
            value: value.to_string(),
            expected,
        }
    }

    /// `value` of `field` is outside `enumeration`
    pub fn unknown_variant<F: Field>(field: F, value: i64, enumeration: &'static str) -> Self {
        Self::UnknownVariant {
            kind: F::KIND,
            tag: field.tag(),
            name: field.name(),
            value,
            enumeration,
        }
    }

    /// `field` failed a codec step
    pub fn codec<F: Field>(field: F, source: CodecError) -> Self {
        Self::Codec {
            kind: F::KIND,
            tag: field.tag(),
            name: field.name(),
            source,
        }
    }

    /// Record kind the error was raised for, if any
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Self::MissingField { kind, .. }
            | Self::InvalidValue { kind, .. }
            | Self::UnknownVariant { kind, .. }
            | Self::Codec { kind, .. } => Some(*kind),
            Self::Page(_) | Self::Config(_) => None,
        }
    }
}

/// Result alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;
