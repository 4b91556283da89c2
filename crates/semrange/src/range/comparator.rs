use std::cmp::Ordering;
use std::fmt;

use super::RangeOperator;
use crate::compare::compare;
use crate::version::Version;

/// A single bound: an operator applied to a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparator {
    operator: RangeOperator,
    version: Version,
    explicit: bool,
}

impl Comparator {
    /// A comparator whose operator was written out in the source text
    pub fn new(operator: RangeOperator, version: Version) -> Self {
        Comparator {
            operator,
            version,
            explicit: true,
        }
    }

    /// A comparator whose operator was filled in while expanding shorthand
    pub fn implied(operator: RangeOperator, version: Version) -> Self {
        Comparator {
            operator,
            version,
            explicit: false,
        }
    }

    pub fn operator(&self) -> RangeOperator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Whether the operator appeared in the parsed text
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Check if the version falls inside this bound
    pub fn matches(&self, version: &Version) -> bool {
        let ordering = compare(version, &self.version);
        match self.operator {
            RangeOperator::Equal => ordering == Ordering::Equal,
            RangeOperator::LessThan => ordering == Ordering::Less,
            RangeOperator::LessThanOrEqual => ordering != Ordering::Greater,
            RangeOperator::GreaterThan => ordering == Ordering::Greater,
            RangeOperator::GreaterThanOrEqual => ordering != Ordering::Less,
            RangeOperator::Unknown => false,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
