//! Delimited text reading with header-keyed row access.
//!
//! Files are read whole, decoded to UTF-8, and parsed into a [`Table`]. Rows
//! are looked up by header name, so column order in the source file does not
//! matter and extra columns are ignored.
//!
//! # Examples
//!
//! ```no_run
//! use grw_io::read_table;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let table = read_table("fixtures/people.csv", b',').await?;
//! for row in table.rows() {
//!     println!("{} works at {}", row.get("Name")?, row.get("Institution")?);
//! }
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Byte order mark some spreadsheet tools prepend to UTF-8 exports.
const UTF8_BOM: char = '\u{feff}';

/// A parsed delimited file: one header record plus data records.
#[derive(Debug, Clone)]
pub struct Table {
    path: PathBuf,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    /// Parses already-decoded text.
    ///
    /// `path` is only used for error messages. Rows may be shorter or longer
    /// than the header; short rows fail when a missing column is requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] if the text is not well-formed delimited data
    /// (for example, an unterminated quoted field).
    pub fn parse(path: impl Into<PathBuf>, text: &str, delimiter: u8) -> Result<Self> {
        let path = path.into();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|source| Error::Csv {
                path: path.clone(),
                source,
            })?
            .clone();

        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| Error::Csv {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            headers,
            records,
        })
    }

    /// Path the table was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header names in file order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    /// Number of data rows (the header is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the file has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the named column.
    ///
    /// When a header name repeats, the last occurrence wins, the same as a
    /// dictionary built from the header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if no header has that name.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, header)| *header == name)
            .map(|(index, _)| index)
            .last()
            .ok_or_else(|| Error::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Iterates over data rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |record| Row {
            table: self,
            record,
        })
    }
}

/// One data row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Value of the named column in this row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the header lacks the column, or
    /// [`Error::MissingField`] if this row stops before it.
    pub fn get(&self, column: &str) -> Result<&'a str> {
        let index = self.table.column(column)?;
        self.record.get(index).ok_or_else(|| Error::MissingField {
            path: self.table.path.clone(),
            line: self.line(),
            column: column.to_string(),
        })
    }

    /// 1-based line number where this row starts in the source file.
    #[must_use]
    pub fn line(&self) -> u64 {
        self.record.position().map_or(0, csv::Position::line)
    }
}

/// Decodes raw file bytes to text.
///
/// UTF-8 is tried first (dropping a leading byte order mark). A file with no
/// multi-byte UTF-8 sequence at all is decoded as Windows-1252, the usual
/// encoding of spreadsheet exports. `path` is only used for error messages.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the file mixes valid multi-byte UTF-8 with
/// invalid bytes.
pub fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        }),
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            let bytes = e.into_bytes();
            let mixed = bytes
                .utf8_chunks()
                .any(|chunk| !chunk.valid().is_ascii());

            if mixed {
                let line = bytes[..valid_up_to]
                    .iter()
                    .fold(1, |line, &byte| line + u64::from(byte == b'\n'));
                Err(Error::Encoding {
                    path: path.to_path_buf(),
                    line,
                })
            } else {
                tracing::debug!(
                    path = %path.display(),
                    "Input is not valid UTF-8, decoding as Windows-1252"
                );
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Reads and parses a delimited file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Encoding`] if
/// its bytes mix encodings, or [`Error::Csv`] if its contents cannot be
/// parsed.
pub async fn read_table(path: impl AsRef<Path>, delimiter: u8) -> Result<Table> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let text = decode_text(path, bytes)?;
    let table = Table::parse(path, &text, delimiter)?;

    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        "Read delimited file"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::parse(
            "people.csv",
            "Institution,Name\nMIT,Jane Doe\nETH Zürich,Hans Müller\n",
            b',',
        )
        .unwrap()
    }

    #[test]
    fn parse_reads_headers_and_rows() {
        let table = people();
        assert_eq!(table.headers().collect::<Vec<_>>(), ["Institution", "Name"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn row_get_by_header_name() {
        let table = people();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].get("Name").unwrap(), "Jane Doe");
        assert_eq!(rows[1].get("Institution").unwrap(), "ETH Zürich");
    }

    #[test]
    fn row_line_numbers_are_one_based() {
        let table = people();
        let lines: Vec<_> = table.rows().map(|row| row.line()).collect();
        assert_eq!(lines, [2, 3]);
    }

    #[test]
    fn missing_column_is_reported() {
        let table = people();
        let row = table.rows().next().unwrap();
        let err = row.get("Paper").unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "Paper"));
    }

    #[test]
    fn short_row_is_reported_with_line() {
        let table = Table::parse("people.csv", "Institution,Name\nMIT\n", b',').unwrap();
        let row = table.rows().next().unwrap();
        let err = row.get("Name").unwrap_err();
        assert!(matches!(err, Error::MissingField { line: 2, .. }));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let table = Table::parse("p.csv", "Paper,Name\nP1,Ann,extra\n", b',').unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("Name").unwrap(), "Ann");
    }

    #[test]
    fn duplicate_header_uses_last_occurrence() {
        let table = Table::parse("p.csv", "Name,Name\nfirst,second\n", b',').unwrap();
        assert_eq!(table.column("Name").unwrap(), 1);
    }

    #[test]
    fn custom_delimiter() {
        let table = Table::parse("p.tsv", "Paper\tName\nP1\tAnn, Jr.\n", b'\t').unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("Name").unwrap(), "Ann, Jr.");
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let table = Table::parse("p.csv", "Paper,Name\n\"Graphs, Vol. 2\",Ann\n", b',').unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("Paper").unwrap(), "Graphs, Vol. 2");
    }

    #[test]
    fn header_only_table_is_empty() {
        let table = Table::parse("p.csv", "Paper,Name\n", b',').unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column("Paper").unwrap(), 0);
    }

    fn decode(bytes: &[u8]) -> Result<String> {
        decode_text(Path::new("people.csv"), bytes.to_vec())
    }

    #[test]
    fn decode_text_passes_utf8_through() {
        assert_eq!(decode("Zürich".as_bytes()).unwrap(), "Zürich");
    }

    #[test]
    fn decode_text_strips_bom() {
        assert_eq!(
            decode(b"\xEF\xBB\xBFInstitution,Name").unwrap(),
            "Institution,Name"
        );
    }

    #[test]
    fn decode_text_falls_back_to_windows_1252() {
        // "Zürich" with 0xFC for u-umlaut
        assert_eq!(decode(b"Z\xFCrich").unwrap(), "Zürich");
    }

    #[test]
    fn decode_text_rejects_mixed_encodings() {
        let mut bytes = "Institution,Name\nETH Zürich,Ann\nUni,J".as_bytes().to_vec();
        bytes.extend_from_slice(b"\xFCrgen\n");

        let err = decode(&bytes).unwrap_err();

        assert!(matches!(err, Error::Encoding { line: 3, .. }));
    }

    #[test]
    fn decode_text_mixed_error_names_file() {
        let err = decode(b"Paper,Name\n\xFC,\xC3\xA9\n").unwrap_err();
        assert_eq!(err.to_string(), "people.csv:2: mixes UTF-8 with other encodings");
    }
}
