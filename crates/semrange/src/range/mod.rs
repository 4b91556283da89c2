//! Range types and satisfaction checks

mod comparator;
mod comparator_set;
mod operator;

use std::fmt;
use std::str::FromStr;

pub use comparator::Comparator;
pub use comparator_set::ComparatorSet;
pub use operator::RangeOperator;

use crate::error::{Error, Result};
use crate::version::Version;

/// A parsed range expression: comparator sets OR'd together
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Range {
    sets: Vec<ComparatorSet>,
}

impl Range {
    pub fn new(sets: Vec<ComparatorSet>) -> Self {
        Range { sets }
    }

    /// Parse a range expression
    pub fn parse(input: &str) -> Result<Self> {
        crate::range_parser::parse_range(input)
    }

    pub fn sets(&self) -> &[ComparatorSet] {
        &self.sets
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Check if the version matches any comparator set.
    ///
    /// Sets are tried in order and the first match wins. A range without any
    /// sets matches nothing.
    pub fn satisfies(&self, version: &Version) -> bool {
        self.sets.iter().any(|set| set.matches(version))
    }
}

/// Check if a version satisfies a range
pub fn satisfies(version: &Version, range: &Range) -> bool {
    range.satisfies(version)
}

impl Version {
    /// Check if this version is covered by the range
    pub fn satisfies(&self, range: &Range) -> bool {
        range.satisfies(self)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            write!(f, "{set}")?;
        }
        Ok(())
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Range::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Range {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Range {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
