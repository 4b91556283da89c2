use std::fmt;

use super::Comparator;
use crate::version::Version;

/// One OR-branch of a range: a lone comparator or an AND'd pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComparatorSet {
    Single(Comparator),
    Bounded(Comparator, Comparator),
}

impl ComparatorSet {
    /// Check if the version satisfies every comparator in the set
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            ComparatorSet::Single(comparator) => comparator.matches(version),
            ComparatorSet::Bounded(lower, upper) => {
                lower.matches(version) && upper.matches(version)
            }
        }
    }

    /// The comparators in declaration order
    pub fn comparators(&self) -> impl Iterator<Item = &Comparator> {
        let (first, second) = match self {
            ComparatorSet::Single(comparator) => (comparator, None),
            ComparatorSet::Bounded(lower, upper) => (lower, Some(upper)),
        };
        std::iter::once(first).chain(second)
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorSet::Single(comparator) => write!(f, "{comparator}"),
            ComparatorSet::Bounded(lower, upper) => write!(f, "{lower} {upper}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeOperator;

    fn v(input: &str) -> Version {
        input.parse().unwrap()
    }

    #[test]
    fn test_bounded_requires_both() {
        let set = ComparatorSet::Bounded(
            Comparator::new(RangeOperator::GreaterThan, v("1.0.0")),
            Comparator::new(RangeOperator::LessThanOrEqual, v("3.1.0")),
        );
        assert!(set.matches(&v("3.1.0")));
        assert!(set.matches(&v("1.0.1")));
        assert!(!set.matches(&v("1.0.0")));
        assert!(!set.matches(&v("3.1.1")));
        assert_eq!(set.to_string(), ">1.0.0 <=3.1.0");
        assert_eq!(set.comparators().count(), 2);
    }

    #[test]
    fn test_single() {
        let set = ComparatorSet::Single(Comparator::new(RangeOperator::LessThan, v("2.0.0")));
        assert!(set.matches(&v("1.5.0")));
        assert!(!set.matches(&v("2.0.0")));
        assert_eq!(set.to_string(), "<2.0.0");
        assert_eq!(set.comparators().count(), 1);
    }
}
