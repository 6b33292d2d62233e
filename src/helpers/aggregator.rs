use crate::helpers::comparator::parse_number;
use crate::processor::{AggregateOp, ProcessorError};

/// Reduces the textual values of `column` with `op`.
///
/// Every value must be numeric; a single non-numeric cell fails the whole
/// aggregation with [`ProcessorError::NonNumericColumn`].
pub fn aggregate<'a, I>(column: &str, values: I, op: AggregateOp) -> Result<f64, ProcessorError>
where
    I: IntoIterator<Item = &'a str>,
{
    let numbers = values
        .into_iter()
        .map(|v| parse_number(v).ok_or_else(|| ProcessorError::NonNumericColumn(column.into())))
        .collect::<Result<Vec<f64>, _>>()?;

    if numbers.is_empty() {
        return Err(ProcessorError::EmptyColumn(column.to_string()));
    }

    Ok(aggregate_f64(&numbers, op))
}

/// Scalar reduction over a non-empty slice
pub fn aggregate_f64(values: &[f64], op: AggregateOp) -> f64 {
    match op {
        AggregateOp::Avg => values.iter().sum::<f64>() / values.len() as f64,
        AggregateOp::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregateOp::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICES: [&str; 4] = ["999", "1199", "199", "299"];

    #[test]
    fn test_aggregate_prices() {
        assert_eq!(aggregate("price", PRICES, AggregateOp::Avg).unwrap(), 674.0);
        assert_eq!(aggregate("price", PRICES, AggregateOp::Min).unwrap(), 199.0);
        assert_eq!(aggregate("price", PRICES, AggregateOp::Max).unwrap(), 1199.0);
    }

    #[test]
    fn test_aggregate_negative_and_zero() {
        let values = ["0", "-5.99", "100.50"];
        let avg = aggregate("price", values, AggregateOp::Avg).unwrap();
        assert!((avg - 31.503333).abs() < 1e-3);
        assert_eq!(aggregate("price", values, AggregateOp::Min).unwrap(), -5.99);
    }

    #[test]
    fn test_min_avg_max_ordering() {
        let values = ["3.5", "-2", "17", "0.25", "8"];
        let min = aggregate("v", values, AggregateOp::Min).unwrap();
        let avg = aggregate("v", values, AggregateOp::Avg).unwrap();
        let max = aggregate("v", values, AggregateOp::Max).unwrap();
        assert!(min <= avg && avg <= max);
    }

    #[test]
    fn test_non_numeric_aborts() {
        let err = aggregate("brand", ["1", "apple", "2"], AggregateOp::Max).unwrap_err();
        assert!(matches!(err, ProcessorError::NonNumericColumn(c) if c == "brand"));
    }

    #[test]
    fn test_empty_cell_is_non_numeric() {
        let err = aggregate("price", ["1", ""], AggregateOp::Avg).unwrap_err();
        assert!(matches!(err, ProcessorError::NonNumericColumn(_)));
    }

    #[test]
    fn test_empty_column() {
        let err = aggregate("price", std::iter::empty(), AggregateOp::Avg).unwrap_err();
        assert!(matches!(err, ProcessorError::EmptyColumn(c) if c == "price"));
    }
}
