//! Typed input rows.
//!
//! Tables read by `grw-io` are converted into these records before graph
//! building, so the extractors never deal with header lookups.

use grw_io::{Row, Table};

/// Column holding a person's institution in `people.csv`.
pub const INSTITUTION_COLUMN: &str = "Institution";

/// Column holding a person's name in both input files.
pub const NAME_COLUMN: &str = "Name";

/// Column identifying a publication in `papers.csv`.
pub const PAPER_COLUMN: &str = "Paper";

/// One person's affiliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Institution name as written.
    pub institution: String,
    /// Person name as written.
    pub name: String,
}

impl PersonRecord {
    /// Creates a record from raw text.
    pub fn new(institution: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            name: name.into(),
        }
    }

    /// Reads the `Institution` and `Name` columns of a row.
    ///
    /// # Errors
    ///
    /// Returns an error if either column is missing.
    pub fn from_row(row: &Row<'_>) -> grw_io::Result<Self> {
        Ok(Self::new(row.get(INSTITUTION_COLUMN)?, row.get(NAME_COLUMN)?))
    }
}

/// One author listed on one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Paper title or key as written.
    pub paper: String,
    /// Author name as written.
    pub name: String,
}

impl AuthorRecord {
    /// Creates a record from raw text.
    pub fn new(paper: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            paper: paper.into(),
            name: name.into(),
        }
    }

    /// Reads the `Paper` and `Name` columns of a row.
    ///
    /// # Errors
    ///
    /// Returns an error if either column is missing.
    pub fn from_row(row: &Row<'_>) -> grw_io::Result<Self> {
        Ok(Self::new(row.get(PAPER_COLUMN)?, row.get(NAME_COLUMN)?))
    }
}

/// Converts every row of a people table.
///
/// # Errors
///
/// Fails on the first row lacking a required column.
pub fn people_from_table(table: &Table) -> grw_io::Result<Vec<PersonRecord>> {
    table.rows().map(|row| PersonRecord::from_row(&row)).collect()
}

/// Converts every row of a papers table.
///
/// # Errors
///
/// Fails on the first row lacking a required column.
pub fn authors_from_table(table: &Table) -> grw_io::Result<Vec<AuthorRecord>> {
    table.rows().map(|row| AuthorRecord::from_row(&row)).collect()
}
