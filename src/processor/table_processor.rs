use log::{debug, warn};
use memmap2::Mmap;
use std::{fs::File, io, path::Path};

use crate::{
    config::ProcessorConfig,
    helpers::{aggregator, comparator},
    processor::{
        AggregateCondition, AggregateOp, AggregateResult, FilterCondition, FilterOperator,
        LoadSummary, ProcessorError,
        table::{Row, Table},
    },
};

/// Loads a CSV file once and answers filter / aggregate requests over it
///
/// # Examples
///
/// ```rust,no_run
/// # use table_processor::processor::{AggregateOp, table_processor::TableProcessor};
/// let mut processor = TableProcessor::new();
/// processor.load_csv("phones.csv".as_ref()).unwrap();
/// let avg = processor.aggregate("price", AggregateOp::Avg).unwrap();
/// println!("{}: {:.2}", avg.label(), avg.value);
/// ```
#[derive(Debug, Default)]
pub struct TableProcessor {
    config: ProcessorConfig,
    table: Option<Table>,
}

impl TableProcessor {
    /// Create an empty processor with the default configuration
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        TableProcessor {
            config,
            table: None,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Loads a CSV file into memory using memory mapping
    ///
    /// The first record supplies the headers, every following record a row.
    /// All cells are kept as text. An empty file produces an empty table.
    ///
    /// # Errors
    /// Returns a [`ProcessorError`] if:
    /// - the path does not exist ([`ProcessorError::FileNotFound`])
    /// - the file cannot be read or mapped, or is not valid UTF-8 CSV
    pub fn load_csv(&mut self, path: &Path) -> Result<LoadSummary, ProcessorError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProcessorError::FileNotFound(path.to_path_buf()),
            _ => ProcessorError::Io(e),
        })?;

        // Zero-length files cannot be mapped portably
        let (table, summary) = if file.metadata()?.len() == 0 {
            (Table::default(), LoadSummary::default())
        } else {
            // SAFETY: assumes no other process truncates or rewrites the file while
            // it is mapped; the mapping only lives for the parse below.
            let mmap = unsafe { Mmap::map(&file)? };
            self.parse_table(&mmap[..])?
        };

        debug!(
            "loaded {} rows x {} columns from {}",
            summary.rows_loaded,
            table.headers().len(),
            path.display()
        );
        if summary.short_rows > 0 {
            warn!(
                "{} rows in {} have fewer cells than headers; missing cells read as empty",
                summary.short_rows,
                path.display()
            );
        }

        self.table = Some(table);
        Ok(summary)
    }

    fn parse_table(&self, buf: &[u8]) -> Result<(Table, LoadSummary), ProcessorError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(buf);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let width = headers.len();

        let mut rows = Vec::new();
        let mut short_rows = 0;
        for record in reader.records() {
            let record = record?;
            if record.len() < width {
                short_rows += 1;
            }
            rows.push(Row::new(
                record.iter().take(width).map(str::to_string).collect(),
            ));
        }

        let summary = LoadSummary {
            rows_loaded: rows.len(),
            short_rows,
        };
        Ok((Table::new(headers, rows), summary))
    }

    pub fn table(&self) -> Result<&Table, ProcessorError> {
        self.table.as_ref().ok_or(ProcessorError::NotLoaded)
    }

    pub fn headers(&self) -> &[String] {
        self.table.as_ref().map(Table::headers).unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Row] {
        self.table.as_ref().map(Table::rows).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.table.as_ref().map_or(0, Table::row_count)
    }

    /// Rows whose `column` value satisfies `operator` against `value`, in file order
    ///
    /// # Example
    /// ```rust,no_run
    /// # use table_processor::processor::{FilterOperator, table_processor::TableProcessor};
    /// # let mut processor = TableProcessor::new();
    /// # processor.load_csv("phones.csv".as_ref()).unwrap();
    /// let rows = processor.filter("price", FilterOperator::GreaterThan, "500").unwrap();
    /// ```
    pub fn filter(
        &self,
        column: &str,
        operator: FilterOperator,
        value: &str,
    ) -> Result<Vec<&Row>, ProcessorError> {
        let table = self.table()?;
        let idx = table.column_index(column)?;

        let selected: Vec<&Row> = table
            .rows()
            .iter()
            .filter(|row| comparator::matches(row.get(idx), operator, value))
            .collect();

        debug!(
            "filter {column} {operator} {value}: {} of {} rows",
            selected.len(),
            table.row_count()
        );
        Ok(selected)
    }

    pub fn filter_condition(&self, cond: &FilterCondition) -> Result<Vec<&Row>, ProcessorError> {
        self.filter(&cond.column, cond.operator, &cond.value)
    }

    /// Parses `condition` with the configured grammar and filters with it
    pub fn query_where(
        &self,
        condition: &str,
    ) -> Result<(FilterCondition, Vec<&Row>), ProcessorError> {
        let cond = self.config.grammar.parse_filter(condition)?;
        let rows = self.filter_condition(&cond)?;
        Ok((cond, rows))
    }

    /// Aggregates a numeric column
    ///
    /// # Errors
    /// [`ProcessorError::UnknownColumn`] for a missing column,
    /// [`ProcessorError::NonNumericColumn`] if any cell is not a number and
    /// [`ProcessorError::EmptyColumn`] when the table has no rows.
    pub fn aggregate(
        &self,
        column: &str,
        op: AggregateOp,
    ) -> Result<AggregateResult, ProcessorError> {
        let table = self.table()?;
        let idx = table.column_index(column)?;
        let value = aggregator::aggregate(column, table.column_values(idx), op)?;

        debug!("{op}({column}) = {value}");
        Ok(AggregateResult {
            operation: op,
            column: column.to_string(),
            value,
        })
    }

    pub fn run_aggregate(&self, cond: &AggregateCondition) -> Result<AggregateResult, ProcessorError> {
        self.aggregate(&cond.column, cond.operation)
    }
}
