use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const PHONES: &str = "name,brand,price,rating\n\
    iphone 15 pro,apple,999,4.9\n\
    galaxy s23 ultra,samsung,1199,4.8\n\
    redmi note 12,xiaomi,199,4.6\n\
    poco x5 pro,xiaomi,299,4.4\n";

fn phones_file() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", PHONES).unwrap();
    tmp
}

fn run(args: &[&str]) -> (Output, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_table-processor"))
        .args(args)
        .env_remove("TABLE_PROCESSOR_DELIMITER")
        .env_remove("TABLE_PROCESSOR_GRAMMAR")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    (output, stdout)
}

#[test]
fn test_filter_run() {
    let file = phones_file();
    let path = file.path().to_str().unwrap();
    let (output, stdout) = run(&[path, "--where", "brand=xiaomi"]);

    assert!(output.status.success());
    assert!(stdout.starts_with("Filtered results for: brand = xiaomi\nFound 2 records:\n\n"));
    assert!(stdout.contains("redmi note 12"));
    assert!(stdout.contains("poco x5 pro"));
    assert!(!stdout.contains("iphone"));
}

#[test]
fn test_filter_without_matches() {
    let file = phones_file();
    let path = file.path().to_str().unwrap();
    let (output, stdout) = run(&[path, "--where", "price>5000"]);

    assert!(output.status.success());
    assert!(stdout.contains("Found 0 records:"));
    assert!(stdout.ends_with("No data to display.\n"));
}

#[test]
fn test_aggregate_run() {
    let file = phones_file();
    let path = file.path().to_str().unwrap();
    let (output, stdout) = run(&[path, "--aggregate", "price=avg"]);

    assert!(output.status.success());
    assert!(stdout.starts_with("Aggregation results:\n\n"));
    assert!(stdout.contains("Average"));
    assert!(stdout.contains("674.00"));
}

#[test]
fn test_errors_exit_non_zero_on_stdout() {
    let file = phones_file();
    let path = file.path().to_str().unwrap();

    let cases: [(&[&str], &str); 5] = [
        (
            &[path, "--where", "price>1", "--aggregate", "price=avg"],
            "Error: Cannot use both --where and --aggregate simultaneously.",
        ),
        (&[path], "Error: Must specify either --where or --aggregate option."),
        (
            &[path, "--aggregate", "brand=avg"],
            "Error: Column 'brand' contains non-numeric values.",
        ),
        (
            &[path, "--aggregate", "price=median"],
            "Error: Unknown operation 'median'.",
        ),
        (
            &[path, "--where", "color=red"],
            "Error: Column 'color' not found in CSV file.",
        ),
    ];

    for (args, expected) in cases {
        let (output, stdout) = run(args);
        assert!(!output.status.success(), "{args:?}");
        assert!(stdout.starts_with(expected), "{stdout}");
    }
}

#[test]
fn test_missing_file() {
    let (output, stdout) = run(&["no/such/file.csv", "--where", "a=b"]);
    assert!(!output.status.success());
    assert_eq!(stdout, "Error: File 'no/such/file.csv' not found.\n");
}
