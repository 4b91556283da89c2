//! Semantic version parsing and range matching
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRE][+BUILD]` versions and npm-style
//! range expressions (`>=1.2.3 <2`, `1.2.x`, `~1.2`, `^0.3`, `1 - 2.3`,
//! `a || b`) and decides whether a version satisfies a range. Ordering only
//! looks at major, minor and patch; pre-release and build labels are carried
//! along but never compared.
//!
//! ```
//! let version = semrange::parse_version("1.5.0").unwrap();
//! let range = semrange::parse_range(">1 <2").unwrap();
//! assert!(semrange::satisfies(&version, &range));
//! assert_eq!(semrange::parse_range("~1.2.3").unwrap().to_string(), ">=1.2.3 <1.3.0");
//! ```

mod classify;
mod compare;
mod error;
pub mod range;
mod range_parser;
mod semver;
mod version;
mod version_parser;

pub use classify::{
    is_alpha, is_digit, is_lower_letter, is_operator_symbol, is_upper_letter, is_wildcard,
};
pub use compare::compare;
pub use error::{Error, ParseFailure, Result};
pub use range::{satisfies, Comparator, ComparatorSet, Range, RangeOperator};
pub use range_parser::parse_range;
pub use semver::Semver;
pub use version::{KnownPrefix, Precision, Version};
pub use version_parser::parse_version;
