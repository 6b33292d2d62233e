//! # TableProcessor
//!
//! `TableProcessor` loads a CSV file into memory and answers exactly one
//! question about it per run:
//!
//! - **Filtering**: `column<op>value` with `=`, `>`, `<`, `>=`, `<=`.
//!   Cells are compared as numbers when both sides parse as `f64`,
//!   otherwise lexicographically as text.
//! - **Aggregation**: average, minimum or maximum of a column whose cells
//!   are all numeric.
//!
//! # Features
//!
//! - **Text cells**: no schema inference; every cell stays a string until a
//!   comparison or aggregation asks for a number
//! - **Memory-mapped loading** through the `csv` reader
//! - **Two condition grammars**: the priority-ordered legacy grammar and a
//!   left-to-right grammar
//! - **Grid output** for filtered rows and aggregate reports
//!
//! # Example
//!
//! ```rust,no_run
//! use table_processor::processor::{
//!     AggregateOp, FilterOperator, condition::parse_aggregate_condition,
//!     table_processor::TableProcessor,
//! };
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut processor = TableProcessor::new();
//!
//!     // Load CSV
//!     processor.load_csv(Path::new("phones.csv"))?;
//!
//!     // Filter rows
//!     let expensive = processor.filter("price", FilterOperator::GreaterThan, "500")?;
//!     println!("{} phones above 500", expensive.len());
//!
//!     // Aggregate numeric column
//!     let cond = parse_aggregate_condition("price=avg")?;
//!     let avg = processor.run_aggregate(&cond)?;
//!     println!("{} of {}: {:.2}", avg.label(), avg.column, avg.value);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod display;
pub mod helpers;
pub mod processor;
