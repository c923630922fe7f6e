// Tabular input loading.
//
// Reads a leaderboard CSV into an untyped header/rows table. Column meaning
// is decided later by the schema layer, so every cell stays a string here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("no header row found in {path} after skipping {skipped} row(s)")]
    Empty { path: String, skipped: usize },
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// An untyped table: one header row plus data rows, all cells as strings.
/// Rows are padded or truncated to the header width so later positional
/// access never goes out of bounds.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Load a table from a CSV file, skipping `skip_rows` leading banner
    /// rows before the header row (sheets commonly carry a title line).
    pub fn from_csv_path(path: &Path, skip_rows: usize) -> Result<Table, TableError> {
        let display = path.display().to_string();
        let file = File::open(path).map_err(|e| TableError::Io {
            path: display.clone(),
            source: e,
        })?;
        Self::from_reader(file, skip_rows, &display)
    }

    /// Load a table from any reader. `path` is used in error messages only.
    pub fn from_reader<R: Read>(
        reader: R,
        skip_rows: usize,
        path: &str,
    ) -> Result<Table, TableError> {
        // Records vary in length across banner/summary rows, so the reader
        // must be flexible and header handling is done by hand.
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut headers: Option<Vec<String>> = None;
        let mut rows: Vec<Vec<String>> = Vec::new();

        for (i, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| TableError::Csv {
                path: path.to_string(),
                source: e,
            })?;
            if i < skip_rows {
                continue;
            }
            let cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();
            match &headers {
                None => headers = Some(cells),
                Some(h) => {
                    let mut row = cells;
                    row.resize(h.len(), String::new());
                    rows.push(row);
                }
            }
        }

        let headers = headers.ok_or_else(|| TableError::Empty {
            path: path.to_string(),
            skipped: skip_rows,
        })?;

        Ok(Table { headers, rows })
    }

    /// Cell at (row, column), or `None` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(|s| s.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_simple_csv() {
        let data = "Player,R01,R02\nAlice,40,35\nBob,30,20\n";
        let table = Table::from_reader(data.as_bytes(), 0, "test.csv").unwrap();
        assert_eq!(table.headers, vec!["Player", "R01", "R02"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, 1), Some("40"));
        assert_eq!(table.cell(1, 0), Some("Bob"));
    }

    #[test]
    fn skips_banner_rows_before_header() {
        let data = "League Standings 2025\nPlayer,R01\nAlice,40\n";
        let table = Table::from_reader(data.as_bytes(), 1, "test.csv").unwrap();
        assert_eq!(table.headers, vec!["Player", "R01"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn short_rows_are_padded_to_header_width() {
        let data = "Player,R01,R02\nAlice,40\n";
        let table = Table::from_reader(data.as_bytes(), 0, "test.csv").unwrap();
        assert_eq!(table.rows[0], vec!["Alice", "40", ""]);
        assert_eq!(table.cell(0, 2), Some(""));
    }

    #[test]
    fn long_rows_are_truncated_to_header_width() {
        let data = "Player,R01\nAlice,40,extra,junk\n";
        let table = Table::from_reader(data.as_bytes(), 0, "test.csv").unwrap();
        assert_eq!(table.rows[0], vec!["Alice", "40"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = Table::from_reader("".as_bytes(), 0, "empty.csv").unwrap_err();
        match err {
            TableError::Empty { path, skipped } => {
                assert_eq!(path, "empty.csv");
                assert_eq!(skipped, 0);
            }
            other => panic!("expected Empty, got: {other}"),
        }
    }

    #[test]
    fn skipping_everything_is_an_error() {
        let data = "only row\n";
        let err = Table::from_reader(data.as_bytes(), 5, "test.csv").unwrap_err();
        assert!(matches!(err, TableError::Empty { skipped: 5, .. }));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err =
            Table::from_csv_path(Path::new("/nonexistent/leaderboard.csv"), 0).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn out_of_range_cell_is_none() {
        let data = "Player\nAlice\n";
        let table = Table::from_reader(data.as_bytes(), 0, "test.csv").unwrap();
        assert_eq!(table.cell(0, 5), None);
        assert_eq!(table.cell(9, 0), None);
    }
}
