use crate::processor::ProcessorError;

/// One data record; cells are positionally aligned with the table headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Row { cells }
    }

    /// Cell at `idx`, or `""` when the record was too short to carry it
    pub fn get(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// In-memory table: header names plus textual rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Table { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of `name` among the headers; first occurrence wins on duplicates
    pub fn column_index(&self, name: &str) -> Result<usize, ProcessorError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ProcessorError::UnknownColumn(name.to_string()))
    }

    /// Value of `column` in `row`, treating absent cells as empty
    pub fn cell<'a>(&self, row: &'a Row, column: &str) -> Result<&'a str, ProcessorError> {
        Ok(row.get(self.column_index(column)?))
    }

    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row.get(idx))
    }
}
