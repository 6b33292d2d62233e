//! Parsers for the `--where` and `--aggregate` condition grammars.
//!
//! Filter conditions have the shape `column<op>value` where `<op>` is one of
//! `>=`, `<=`, `>`, `<`, `=`. Two grammars are available:
//!
//! - [`parse_filter_condition`]: the legacy grammar. Operators are tried in
//!   the fixed priority order `>=, <=, >, <, =` and the first symbol found
//!   *anywhere* in the text is used. A value containing `>` or `<` therefore
//!   wins over an intended `=` (`note=a>b` splits as `note=a` `>` `b`).
//! - [`parse_filter_condition_leftmost`]: the operator that starts earliest
//!   in the text is used, two-character operators winning at equal position.
//!
//! Aggregate conditions have the shape `column=operation`.

use crate::processor::{
    AggregateCondition, AggregateOp, FilterCondition, FilterOperator, ProcessorError,
};

const FILTER_USAGE: &str =
    "column=value, column>value, column<value, column>=value, column<=value";
const AGGREGATE_USAGE: &str = "column=operation";

/// Which filter-condition grammar to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionGrammar {
    /// Priority-ordered containment scan
    #[default]
    Legacy,
    /// Left-to-right scan for the first operator
    Leftmost,
}

impl ConditionGrammar {
    pub fn parse_filter(self, condition: &str) -> Result<FilterCondition, ProcessorError> {
        match self {
            ConditionGrammar::Legacy => parse_filter_condition(condition),
            ConditionGrammar::Leftmost => parse_filter_condition_leftmost(condition),
        }
    }
}

impl std::str::FromStr for ConditionGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(ConditionGrammar::Legacy),
            "leftmost" => Ok(ConditionGrammar::Leftmost),
            other => Err(format!(
                "unknown grammar '{other}' (expected 'legacy' or 'leftmost')"
            )),
        }
    }
}

fn invalid_filter(condition: &str) -> ProcessorError {
    ProcessorError::InvalidConditionFormat {
        condition: condition.to_string(),
        usage: FILTER_USAGE,
    }
}

fn invalid_aggregate(condition: &str) -> ProcessorError {
    ProcessorError::InvalidConditionFormat {
        condition: condition.to_string(),
        usage: AGGREGATE_USAGE,
    }
}

fn build_filter(
    condition: &str,
    operator: FilterOperator,
    at: usize,
) -> Result<FilterCondition, ProcessorError> {
    let column = condition[..at].trim();
    let value = condition[at + operator.symbol().len()..].trim();

    // An empty value is allowed and selects blank or missing cells
    if column.is_empty() {
        return Err(invalid_filter(condition));
    }

    Ok(FilterCondition {
        column: column.to_string(),
        operator,
        value: value.to_string(),
    })
}

/// Parses a filter condition with the legacy priority-ordered grammar
///
/// # Example
/// ```rust
/// # use table_processor::processor::{FilterOperator, condition::parse_filter_condition};
/// let cond = parse_filter_condition("brand = apple").unwrap();
/// assert_eq!(cond.column, "brand");
/// assert_eq!(cond.operator, FilterOperator::Equals);
/// assert_eq!(cond.value, "apple");
/// ```
pub fn parse_filter_condition(condition: &str) -> Result<FilterCondition, ProcessorError> {
    for operator in FilterOperator::PRIORITY {
        if let Some(at) = condition.find(operator.symbol()) {
            return build_filter(condition, operator, at);
        }
    }

    Err(invalid_filter(condition))
}

/// Parses a filter condition, splitting on the leftmost operator in the text
pub fn parse_filter_condition_leftmost(
    condition: &str,
) -> Result<FilterCondition, ProcessorError> {
    let bytes = condition.as_bytes();

    for (at, &b) in bytes.iter().enumerate() {
        let followed_by_eq = bytes.get(at + 1) == Some(&b'=');
        let operator = match (b, followed_by_eq) {
            (b'>', true) => FilterOperator::GreaterOrEqual,
            (b'<', true) => FilterOperator::LessOrEqual,
            (b'>', false) => FilterOperator::GreaterThan,
            (b'<', false) => FilterOperator::LessThan,
            (b'=', _) => FilterOperator::Equals,
            _ => continue,
        };
        return build_filter(condition, operator, at);
    }

    Err(invalid_filter(condition))
}

/// Parses an aggregate condition of the form `column=operation`
pub fn parse_aggregate_condition(condition: &str) -> Result<AggregateCondition, ProcessorError> {
    let mut parts = condition.split('=');
    let (Some(column), Some(operation), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid_aggregate(condition));
    };

    let column = column.trim();
    let operation = operation.trim();
    if column.is_empty() || operation.is_empty() {
        return Err(invalid_aggregate(condition));
    }

    Ok(AggregateCondition {
        column: column.to_string(),
        operation: operation.parse::<AggregateOp>()?,
    })
}
