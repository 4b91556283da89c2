//! Ordinal version comparison

use std::cmp::Ordering;

use crate::version::Version;

/// Compare two versions by major, minor and patch.
///
/// Pre-release labels and build metadata are ignored, so `1.2.3-alpha`
/// and `1.2.3+build` compare equal to `1.2.3`.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
}

impl Version {
    /// Shorthand for [`compare`]
    pub fn compare(&self, other: &Version) -> Ordering {
        compare(self, other)
    }

    /// Check if self > other
    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Check if self >= other
    pub fn greater_than_or_equal_to(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// Check if self < other
    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Check if self <= other
    pub fn less_than_or_equal_to(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Check if self == other, ignoring pre-release and build
    pub fn equal_to(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }
}
