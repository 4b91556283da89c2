//! Operator types for range comparators

use std::fmt;

/// Comparison operators for range comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperator {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Anything else made of operator symbols, e.g. `=>` or `<<`
    Unknown,
}

impl RangeOperator {
    /// Parse an operator token. Unrecognized tokens map to [`RangeOperator::Unknown`].
    pub fn from_token(s: &str) -> Self {
        match s {
            "=" => RangeOperator::Equal,
            "<" => RangeOperator::LessThan,
            "<=" => RangeOperator::LessThanOrEqual,
            ">" => RangeOperator::GreaterThan,
            ">=" => RangeOperator::GreaterThanOrEqual,
            _ => RangeOperator::Unknown,
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOperator::Equal => "=",
            RangeOperator::LessThan => "<",
            RangeOperator::LessThanOrEqual => "<=",
            RangeOperator::GreaterThan => ">",
            RangeOperator::GreaterThanOrEqual => ">=",
            RangeOperator::Unknown => "<>",
        }
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
