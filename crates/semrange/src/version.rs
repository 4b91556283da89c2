//! Semantic version value type

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which leading components of a partial version were written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownPrefix {
    /// Nothing was given (`*`, `x`, empty input)
    None,
    /// Only the major component (`1`, `1.x`)
    Major,
    /// Major and minor components (`1.2`, `1.2.x`)
    MajorMinor,
}

/// How much of a version was textually present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `MAJOR.MINOR.PATCH` all given
    Full,
    /// Some trailing components were omitted or wildcarded
    Partial(KnownPrefix),
}

/// A parsed semantic version.
///
/// Components that were not present in the source text read as `0`. The
/// pre-release and build strings are carried for display only and never
/// take part in comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    precision: Precision,
    pre: String,
    build: String,
}

impl Version {
    /// Create a fully specified version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            precision: Precision::Full,
            pre: String::new(),
            build: String::new(),
        }
    }

    /// The "any version" value produced by `*` and the empty string
    pub fn any() -> Self {
        Version {
            major: 0,
            minor: 0,
            patch: 0,
            precision: Precision::Partial(KnownPrefix::None),
            pre: String::new(),
            build: String::new(),
        }
    }

    pub(crate) fn from_parts(
        fields: [Option<u64>; 3],
        pre: String,
        build: String,
    ) -> Self {
        let precision = match fields {
            [Some(_), Some(_), Some(_)] => Precision::Full,
            [Some(_), Some(_), None] => Precision::Partial(KnownPrefix::MajorMinor),
            [Some(_), None, _] => Precision::Partial(KnownPrefix::Major),
            [None, _, _] => Precision::Partial(KnownPrefix::None),
        };

        Version {
            major: fields[0].unwrap_or(0),
            minor: fields[1].unwrap_or(0),
            patch: fields[2].unwrap_or(0),
            precision,
            pre,
            build,
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self> {
        crate::version_parser::parse_version(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Pre-release label without the leading `-`, empty when absent
    pub fn pre_release(&self) -> &str {
        &self.pre
    }

    /// Build metadata without the leading `+`, empty when absent
    pub fn build(&self) -> &str {
        &self.build
    }

    /// True when any of the three numeric components was omitted or wildcarded
    pub fn is_partial(&self) -> bool {
        matches!(self.precision, Precision::Partial(_))
    }

    pub fn major_parsed(&self) -> bool {
        !matches!(self.precision, Precision::Partial(KnownPrefix::None))
    }

    pub fn minor_parsed(&self) -> bool {
        matches!(
            self.precision,
            Precision::Full | Precision::Partial(KnownPrefix::MajorMinor)
        )
    }

    pub fn patch_parsed(&self) -> bool {
        self.precision == Precision::Full
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
