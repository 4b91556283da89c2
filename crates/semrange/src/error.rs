//! Error types for version and range parsing

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A letter showed up in a range where only digits, wildcards or
    /// pre-release identifiers are allowed
    #[error("encountered alpha character in range string: `{0}`")]
    AlphaCharacterInRange(String),
    #[error("failed to parse version string `{input}`: {reason}")]
    VersionParseFailure { input: String, reason: ParseFailure },
    #[error("invalid comparator set `{segment}`: {reason}")]
    InvalidComparatorSet { segment: String, reason: String },
}

/// Why a version literal was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },
    #[error("empty version component")]
    EmptyComponent,
    #[error("numeric component overflows")]
    Overflow,
}

impl Error {
    pub(crate) fn version(input: &[u8], reason: ParseFailure) -> Self {
        Error::VersionParseFailure {
            input: String::from_utf8_lossy(input).into_owned(),
            reason,
        }
    }

    pub(crate) fn comparator_set(segment: &str, reason: impl Into<String>) -> Self {
        Error::InvalidComparatorSet {
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }
}
