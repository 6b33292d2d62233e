use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub mod condition;
pub mod table;
pub mod table_processor;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error reading file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found in CSV file.")]
    UnknownColumn(String),

    #[error("Invalid condition '{condition}'. Use format: {usage}")]
    InvalidConditionFormat {
        condition: String,
        usage: &'static str,
    },

    #[error("Unknown operation '{0}'. Supported: avg, min, max")]
    UnknownOperation(String),

    #[error("Column '{0}' contains non-numeric values. Aggregation requires numeric data.")]
    NonNumericColumn(String),

    #[error("No numeric values found in column '{0}'.")]
    EmptyColumn(String),

    #[error("Cannot use both --where and --aggregate simultaneously.")]
    ConflictingOperations,

    #[error("Must specify either --where or --aggregate option.")]
    MissingOperation,

    #[error("No table loaded")]
    NotLoaded,
}

/// Coarse error category, stable across the concrete causes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Io,
    UnknownColumn,
    InvalidConditionFormat,
    UnknownOperation,
    NonNumericColumn,
    EmptyColumn,
    Usage,
    NotLoaded,
}

impl ProcessorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessorError::FileNotFound(_) => ErrorKind::FileNotFound,
            ProcessorError::Io(_) | ProcessorError::Csv(_) => ErrorKind::Io,
            ProcessorError::UnknownColumn(_) => ErrorKind::UnknownColumn,
            ProcessorError::InvalidConditionFormat { .. } => ErrorKind::InvalidConditionFormat,
            ProcessorError::UnknownOperation(_) => ErrorKind::UnknownOperation,
            ProcessorError::NonNumericColumn(_) => ErrorKind::NonNumericColumn,
            ProcessorError::EmptyColumn(_) => ErrorKind::EmptyColumn,
            ProcessorError::ConflictingOperations | ProcessorError::MissingOperation => {
                ErrorKind::Usage
            }
            ProcessorError::NotLoaded => ErrorKind::NotLoaded,
        }
    }
}

/// Comparison operator of a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`
    Equals,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
}

impl FilterOperator {
    /// Priority order used by the legacy condition grammar
    pub const PRIORITY: [FilterOperator; 5] = [
        FilterOperator::GreaterOrEqual,
        FilterOperator::LessOrEqual,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::Equals,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            FilterOperator::Equals => "=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FilterOperator {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOperator::PRIORITY
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| ProcessorError::UnknownOperation(s.to_string()))
    }
}

/// Parsed `--where` condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub column: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

/// Aggregate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    /// Arithmetic mean
    Avg,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl AggregateOp {
    pub fn name(self) -> &'static str {
        match self {
            AggregateOp::Avg => "avg",
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
        }
    }

    /// Human readable label shown in reports
    pub fn label(self) -> &'static str {
        match self {
            AggregateOp::Avg => "Average",
            AggregateOp::Min => "Minimum",
            AggregateOp::Max => "Maximum",
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregateOp {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(AggregateOp::Avg),
            "min" => Ok(AggregateOp::Min),
            "max" => Ok(AggregateOp::Max),
            other => Err(ProcessorError::UnknownOperation(other.to_string())),
        }
    }
}

/// Parsed `--aggregate` condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateCondition {
    pub column: String,
    pub operation: AggregateOp,
}

/// Result of an aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub operation: AggregateOp,
    pub column: String,
    pub value: f64,
}

impl AggregateResult {
    pub fn label(&self) -> &'static str {
        self.operation.label()
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_loaded: usize,
    /// Rows carrying fewer cells than there are headers
    pub short_rows: usize,
}
