//! Delimited record parser
//!
//! A [`Parser`] is an immutable pipeline description. Each builder call
//! returns a new pipeline; [`Parser::run`] executes it against one input.
//!
//! ```
//! use gdwire_formats::Parser;
//!
//! let parser = Parser::new().split_on(":").pair_split();
//! let record = parser.run("1:128:2:1st level").expect("well-formed record");
//! assert_eq!(record.get(2), Some("1st level"));
//!
//! // Odd arity abstains instead of failing
//! assert!(parser.run("1:128:2").is_none());
//! ```
//!
//! Execution is fail-soft: any stage that cannot apply makes the whole run
//! produce `None`. Server payloads are routinely truncated, and a caller
//! walking a list of records skips such chunks rather than aborting.

use std::fmt;
use tracing::debug;

use crate::index::Tag;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Split(String),
    Take(usize),
    RequireNonEmpty,
}

/// Intermediate pipeline value
enum Value<'a> {
    Text(&'a str),
    Seq(Vec<&'a str>),
}

/// Why a run produced no record
#[derive(Debug, Clone, PartialEq, Eq)]
enum Abstain {
    SplitOnSequence,
    TakeOnText,
    IndexOutOfRange(usize),
    Empty,
    NotPaired,
    OddLength(usize),
    BadTag(String),
    NotASequence,
}

impl fmt::Display for Abstain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitOnSequence => f.write_str("split applied to a sequence"),
            Self::TakeOnText => f.write_str("take applied to text"),
            Self::IndexOutOfRange(i) => write!(f, "index {i} out of range"),
            Self::Empty => f.write_str("empty value"),
            Self::NotPaired => f.write_str("pipeline has no pair split"),
            Self::OddLength(len) => write!(f, "odd sequence length {len}"),
            Self::BadTag(key) => write!(f, "key {key:?} is not a tag"),
            Self::NotASequence => f.write_str("pair split applied to text"),
        }
    }
}

/// Immutable record-splitting pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    first_split: Option<String>,
    stages: Vec<Stage>,
    paired: bool,
    extra: Vec<(Tag, String)>,
}

impl Parser {
    /// Create an empty pipeline
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the split applied to the raw input, replacing any earlier one
    #[must_use]
    pub fn split_on(mut self, delimiter: impl Into<String>) -> Self {
        self.first_split = Some(delimiter.into());
        self
    }

    /// Split the current text again, typically after [`Parser::take`]
    #[must_use]
    pub fn then_split(mut self, delimiter: impl Into<String>) -> Self {
        self.stages.push(Stage::Split(delimiter.into()));
        self
    }

    /// Select element `index` of the current sequence
    #[must_use]
    pub fn take(mut self, index: usize) -> Self {
        self.stages.push(Stage::Take(index));
        self
    }

    /// Abstain if the current value is empty
    ///
    /// A sequence holding a single empty string (what splitting `""` yields)
    /// counts as empty.
    #[must_use]
    pub fn require_nonempty(mut self) -> Self {
        self.stages.push(Stage::RequireNonEmpty);
        self
    }

    /// Pair up the final sequence as `tag, value, tag, value, ...`
    #[must_use]
    pub fn pair_split(mut self) -> Self {
        self.paired = true;
        self
    }

    /// Overlay fixed entries on the built record; they win over wire values
    #[must_use]
    pub fn merge_extra<I, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (Tag, V)>,
        V: Into<String>,
    {
        self.extra
            .extend(extra.into_iter().map(|(tag, value)| (tag, value.into())));
        self
    }

    /// Run the pipeline, producing a record or abstaining
    pub fn run(&self, raw: &str) -> Option<Record> {
        match self.execute(raw) {
            Ok(record) => Some(record),
            Err(reason) => {
                debug!("Parser abstained on {} byte input: {}", raw.len(), reason);
                None
            }
        }
    }

    /// Run the pipeline without pairing, producing the final sequence
    pub fn run_sequence(&self, raw: &str) -> Option<Vec<String>> {
        match self.stages(raw) {
            Ok(Value::Seq(seq)) => Some(seq.into_iter().map(str::to_string).collect()),
            Ok(Value::Text(text)) => Some(vec![text.to_string()]),
            Err(reason) => {
                debug!("Parser abstained on {} byte input: {}", raw.len(), reason);
                None
            }
        }
    }

    /// Split `raw` on `record_delimiter` and run the pipeline on each chunk
    ///
    /// Chunks that abstain are skipped. The iterator is lazy.
    pub fn run_many<'a>(
        &'a self,
        raw: &'a str,
        record_delimiter: &'a str,
    ) -> impl Iterator<Item = Record> + 'a {
        raw.split(record_delimiter)
            .filter(|chunk| !chunk.is_empty())
            .filter_map(move |chunk| self.run(chunk))
    }

    fn stages<'a>(&self, raw: &'a str) -> Result<Value<'a>, Abstain> {
        let mut value = match &self.first_split {
            Some(delimiter) => Value::Seq(raw.split(delimiter.as_str()).collect()),
            None => Value::Text(raw),
        };

        for stage in &self.stages {
            value = match (stage, value) {
                (Stage::Split(delimiter), Value::Text(text)) => {
                    Value::Seq(text.split(delimiter.as_str()).collect())
                }
                (Stage::Split(_), Value::Seq(_)) => return Err(Abstain::SplitOnSequence),
                (Stage::Take(index), Value::Seq(seq)) => Value::Text(
                    seq.get(*index)
                        .copied()
                        .ok_or(Abstain::IndexOutOfRange(*index))?,
                ),
                (Stage::Take(_), Value::Text(_)) => return Err(Abstain::TakeOnText),
                (Stage::RequireNonEmpty, value) => {
                    if is_empty(&value) {
                        return Err(Abstain::Empty);
                    }
                    value
                }
            };
        }

        Ok(value)
    }

    fn execute(&self, raw: &str) -> Result<Record, Abstain> {
        if !self.paired {
            return Err(Abstain::NotPaired);
        }

        let Value::Seq(seq) = self.stages(raw)? else {
            return Err(Abstain::NotASequence);
        };

        if seq.len() % 2 != 0 {
            return Err(Abstain::OddLength(seq.len()));
        }

        let mut record = Record::new();
        for pair in seq.chunks_exact(2) {
            let key = pair[0].trim();
            let tag = key
                .parse::<Tag>()
                .map_err(|_| Abstain::BadTag(key.to_string()))?;
            record.insert(tag, pair[1]);
        }

        record.merge(self.extra.iter().cloned());
        Ok(record)
    }
}

fn is_empty(value: &Value<'_>) -> bool {
    match value {
        Value::Text(text) => text.is_empty(),
        Value::Seq(seq) => seq.is_empty() || (seq.len() == 1 && seq[0].is_empty()),
    }
}
