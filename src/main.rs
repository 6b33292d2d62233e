//! table-processor - filter or aggregate a CSV file

use clap::Parser as ClapParser;
use std::path::PathBuf;
use std::process::ExitCode;

use table_processor::config::{ProcessorConfig, parse_delimiter};
use table_processor::display::{render_aggregate, render_rows};
use table_processor::processor::ProcessorError;
use table_processor::processor::condition::{ConditionGrammar, parse_aggregate_condition};
use table_processor::processor::table_processor::TableProcessor;

/// Process CSV files with filtering and aggregation capabilities.
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV file to process
    file: PathBuf,

    /// Filter condition (e.g. "price>100", "brand=apple", "rating<4.5")
    #[arg(long = "where", value_name = "CONDITION")]
    where_condition: Option<String>,

    /// Aggregation condition (e.g. "price=avg", "rating=min", "price=max")
    #[arg(long, value_name = "CONDITION")]
    aggregate: Option<String>,

    /// Filter condition grammar: legacy or leftmost
    #[arg(long, env = "TABLE_PROCESSOR_GRAMMAR", default_value = "legacy")]
    grammar: ConditionGrammar,

    /// Field delimiter (single ASCII character, or "tab")
    #[arg(short, long, env = "TABLE_PROCESSOR_DELIMITER", default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// The single operation requested on the command line
#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    Filter(&'a str),
    Aggregate(&'a str),
}

impl Args {
    fn mode(&self) -> Result<Mode<'_>, ProcessorError> {
        match (given(&self.where_condition), given(&self.aggregate)) {
            (Some(_), Some(_)) => Err(ProcessorError::ConflictingOperations),
            (Some(cond), None) => Ok(Mode::Filter(cond)),
            (None, Some(cond)) => Ok(Mode::Aggregate(cond)),
            (None, None) => Err(ProcessorError::MissingOperation),
        }
    }

    fn config(&self) -> ProcessorConfig {
        ProcessorConfig::default()
            .with_delimiter(self.delimiter)
            .with_grammar(self.grammar)
    }
}

/// An empty condition counts as not given
fn given(cond: &Option<String>) -> Option<&str> {
    cond.as_deref().filter(|c| !c.is_empty())
}

fn run(args: &Args) -> Result<String, ProcessorError> {
    let mode = args.mode()?;

    let mut processor = TableProcessor::with_config(args.config());
    processor.load_csv(&args.file)?;
    log::debug!("processing {:?} with {:?}", args.file, processor.config());

    let mut out = String::new();
    match mode {
        Mode::Filter(condition) => {
            let (cond, rows) = processor.query_where(condition)?;
            out.push_str(&format!("Filtered results for: {cond}\n"));
            out.push_str(&format!("Found {} records:\n\n", rows.len()));
            out.push_str(&render_rows(processor.headers(), &rows));
        }
        Mode::Aggregate(condition) => {
            let cond = parse_aggregate_condition(condition)?;
            let result = processor.run_aggregate(&cond)?;
            out.push_str("Aggregation results:\n\n");
            out.push_str(&render_aggregate(&result));
        }
    }
    Ok(out)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            print!("{}", e.render());
            return ExitCode::from(e.exit_code() as u8);
        }
        Err(e) => e.exit(),
    };

    // Set up logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&args) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("aborting: {e:?}");
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_mode_requires_exactly_one_operation() {
        let args = parse(&["table-processor", "data.csv", "--where", "price>1"]);
        assert_eq!(args.mode().unwrap(), Mode::Filter("price>1"));

        let args = parse(&["table-processor", "data.csv", "--aggregate", "price=avg"]);
        assert_eq!(args.mode().unwrap(), Mode::Aggregate("price=avg"));

        let args = parse(&[
            "table-processor",
            "data.csv",
            "--where",
            "price>1",
            "--aggregate",
            "price=avg",
        ]);
        assert!(matches!(args.mode(), Err(ProcessorError::ConflictingOperations)));

        let args = parse(&["table-processor", "data.csv"]);
        assert!(matches!(args.mode(), Err(ProcessorError::MissingOperation)));
    }

    #[test]
    fn test_empty_condition_is_not_given() {
        let args = parse(&[
            "table-processor",
            "data.csv",
            "--where",
            "",
            "--aggregate",
            "price=avg",
        ]);
        assert_eq!(args.mode().unwrap(), Mode::Aggregate("price=avg"));

        let args = parse(&["table-processor", "data.csv", "--aggregate", ""]);
        assert!(matches!(args.mode(), Err(ProcessorError::MissingOperation)));
    }

    #[test]
    fn test_config_from_flags() {
        let args = parse(&[
            "table-processor",
            "data.csv",
            "-d",
            ";",
            "--grammar",
            "leftmost",
            "--where",
            "a=b",
        ]);
        let config = args.config();
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.grammar, ConditionGrammar::Leftmost);
    }

    #[test]
    fn test_rejects_bad_delimiter() {
        assert!(Args::try_parse_from(["table-processor", "data.csv", "-d", "ab"]).is_err());
    }

    #[test]
    fn test_missing_file_reported_before_condition() {
        let args = parse(&["table-processor", "missing.csv", "--where", "garbage"]);
        assert!(matches!(run(&args), Err(ProcessorError::FileNotFound(_))));
    }
}
