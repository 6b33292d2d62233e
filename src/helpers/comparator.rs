use std::cmp::Ordering;

use crate::processor::FilterOperator;

/// Operand pair resolved at comparison time.
///
/// Both sides become `Numeric` only when both parse as `f64`; otherwise the
/// raw texts are compared code point by code point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<'a> {
    Numeric(f64, f64),
    Textual(&'a str, &'a str),
}

impl<'a> Operands<'a> {
    pub fn resolve(cell: &'a str, target: &'a str) -> Self {
        match (parse_number(cell), parse_number(target)) {
            (Some(a), Some(b)) => Operands::Numeric(a, b),
            _ => Operands::Textual(cell, target),
        }
    }

    /// `None` when the numbers are unordered (NaN)
    pub fn compare(&self) -> Option<Ordering> {
        match *self {
            Operands::Numeric(a, b) => a.partial_cmp(&b),
            Operands::Textual(a, b) => Some(a.cmp(b)),
        }
    }
}

/// Parses a cell as a float, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

impl FilterOperator {
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            FilterOperator::Equals => ordering == Ordering::Equal,
            FilterOperator::GreaterThan => ordering == Ordering::Greater,
            FilterOperator::LessThan => ordering == Ordering::Less,
            FilterOperator::GreaterOrEqual => ordering != Ordering::Less,
            FilterOperator::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

/// Does `cell <operator> target` hold?
pub fn matches(cell: &str, operator: FilterOperator, target: &str) -> bool {
    Operands::resolve(cell, target)
        .compare()
        .is_some_and(|ordering| operator.accepts(ordering))
}
