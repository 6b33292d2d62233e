//! Grid rendering of filter results and aggregate reports.

use prettytable::{Cell, Row as GridRow, Table as Grid, format::Alignment};

use crate::helpers::comparator::parse_number;
use crate::processor::{AggregateResult, table::Row};

pub const NO_DATA: &str = "No data to display.";

/// Renders `rows` under `headers`; columns holding only numbers are right aligned
pub fn render_rows(headers: &[String], rows: &[&Row]) -> String {
    if rows.is_empty() {
        return format!("{NO_DATA}\n");
    }

    let numeric: Vec<bool> = (0..headers.len())
        .map(|idx| rows.iter().all(|row| parse_number(row.get(idx)).is_some()))
        .collect();

    let mut grid = Grid::new();
    grid.set_titles(GridRow::new(headers.iter().map(|h| Cell::new(h)).collect()));

    for row in rows {
        let cells = numeric
            .iter()
            .enumerate()
            .map(|(idx, &is_numeric)| {
                let align = if is_numeric {
                    Alignment::RIGHT
                } else {
                    Alignment::LEFT
                };
                Cell::new_align(row.get(idx), align)
            })
            .collect();
        grid.add_row(GridRow::new(cells));
    }

    grid.to_string()
}

/// Two-column `Metric | Value` report of an aggregation
pub fn render_aggregate(result: &AggregateResult) -> String {
    let mut grid = Grid::new();
    grid.set_titles(GridRow::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    grid.add_row(GridRow::new(vec![
        Cell::new("Operation"),
        Cell::new(result.label()),
    ]));
    grid.add_row(GridRow::new(vec![Cell::new("Column"), Cell::new(&result.column)]));
    grid.add_row(GridRow::new(vec![
        Cell::new("Value"),
        Cell::new(&format!("{:.2}", result.value)),
    ]));
    grid.to_string()
}
