//! Tolerant delimited-table reader.
//!
//! Rows the source exports get wrong are dropped rather than failing the
//! whole file:
//! - a row with more fields than the header is malformed and skipped
//! - a row with fewer fields is padded with empty cells
//! - a row the CSV parser rejects (e.g. invalid UTF-8) is skipped
//!
//! Only an unreadable file or a missing header row is fatal.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use potentyx_common::{PotentyxError, Result};
use tracing::{debug, info};

use crate::normalise::normalize_column_name;

/// Header plus records of one input file, as read from disk.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names exactly as they appear in the file
    headers: Vec<String>,
    rows: Vec<StringRecord>,
    /// Records dropped while reading
    skipped: usize,
}

impl RawTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column names after [`normalize_column_name`].
    pub fn normalized_headers(&self) -> Vec<String> {
        self.headers.iter().map(|h| normalize_column_name(h)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &StringRecord> {
        self.rows.iter()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Cell `idx` of `row`; short rows read as empty.
    pub fn cell<'a>(row: &'a StringRecord, idx: usize) -> &'a str {
        row.get(idx).unwrap_or("")
    }
}

/// Read `path` as a table separated by `delimiter`.
pub fn read_table(path: &Path, delimiter: u8) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| PotentyxError::io(path, e))?;
    parse_table(&bytes, delimiter, path)
}

/// Parse an in-memory table. `origin` is only used in errors and logs.
pub fn parse_table(bytes: &[u8], delimiter: u8, origin: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.is_empty() {
        return Err(PotentyxError::EmptyInput(origin.to_path_buf()));
    }

    let mut table = RawTable {
        headers,
        ..Default::default()
    };

    for result in reader.records() {
        match result {
            Ok(record) => {
                if record.len() > table.headers.len() {
                    debug!(
                        line = record.position().map(|p| p.line()),
                        fields = record.len(),
                        expected = table.headers.len(),
                        "Skipping malformed row"
                    );
                    table.skipped += 1;
                    continue;
                }
                table.rows.push(record);
            }
            Err(e) if e.is_io_error() => {
                return Err(e.into());
            }
            Err(e) => {
                debug!(line = e.position().map(|p| p.line()), error = %e, "Skipping unparsable row");
                table.skipped += 1;
            }
        }
    }

    if table.skipped > 0 {
        info!(
            file = %origin.display(),
            skipped = table.skipped,
            kept = table.rows.len(),
            "Dropped malformed rows"
        );
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, delimiter: u8) -> RawTable {
        parse_table(text.as_bytes(), delimiter, Path::new("test.csv")).unwrap()
    }

    #[test]
    fn test_reads_headers_and_rows() {
        let table = parse("a;b\n1;2\n3;4\n", b';');
        assert_eq!(table.headers(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.skipped(), 0);
    }

    #[test]
    fn test_skips_overlong_rows() {
        let table = parse("a;b\n1;2\n1;2;3\n5;6\n", b';');
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.skipped(), 1);
        let last = table.rows().last().unwrap();
        assert_eq!(RawTable::cell(last, 0), "5");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse("a;b;c\n1;2\n", b';');
        let row = table.rows().next().unwrap();
        assert_eq!(RawTable::cell(row, 1), "2");
        assert_eq!(RawTable::cell(row, 2), "");
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let table = parse("\"id\";\"name\"\n\"X1\";\"a;b\"\n", b';');
        assert_eq!(table.headers()[0], "id");
        let row = table.rows().next().unwrap();
        assert_eq!(RawTable::cell(row, 1), "a;b");
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut bytes = b"a,b\n1,2\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b',', b'3', b'\n']);
        bytes.extend_from_slice(b"4,5\n");
        let table = parse_table(&bytes, b',', Path::new("bad.csv")).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.skipped(), 1);
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let err = parse_table(b"", b',', Path::new("empty.csv")).unwrap_err();
        assert!(matches!(err, PotentyxError::EmptyInput(_)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_table(Path::new("/nonexistent/potentyx/input.csv"), b',').unwrap_err();
        assert!(matches!(err, PotentyxError::Io { .. }));
    }
}
