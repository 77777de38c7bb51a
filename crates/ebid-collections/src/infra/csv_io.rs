//! CSV ingestion for the monthly sales export.
//!
//! The export is a header row followed by comma-separated records with
//! double-quote quoting (titles regularly contain commas). Only four of
//! the columns matter here; their offsets live in [`crate::constants`].
//!
//! A malformed row never aborts a load: it is logged and skipped, and
//! the outcome reports how many rows were dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::constants::{AMOUNT_COLUMN, FUND_COLUMN, ID_COLUMN, MIN_COLUMNS, TITLE_COLUMN};
use crate::domain::bid::{self, Bid};

/// Reason a single data row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BidRowError {
    /// The row carries fewer columns than the export schema.
    #[error("expected at least {expected} columns, found {found}")]
    MissingColumns {
        /// Columns the schema requires.
        expected: usize,
        /// Columns actually present.
        found: usize,
    },
    /// The amount column does not hold a currency value.
    #[error("column {column} does not hold a currency amount")]
    BadAmount {
        /// Zero-based column index.
        column: usize,
        #[source]
        source: bid::ParseAmountError,
    },
}

/// Error aborting a whole load.
#[derive(Debug, Error)]
pub enum CsvLoadError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result of one load: the parsed bids plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Bids parsed in file order.
    pub bids: Vec<Bid>,
    /// Count of malformed rows that were dropped.
    pub skipped: usize,
}

/// Load bids from the CSV file at `path`.
///
/// The first line is treated as the header and skipped. Malformed rows
/// are logged at warn level and counted in the outcome; blank lines are
/// ignored silently.
///
/// # Errors
///
/// Returns [`CsvLoadError::Io`] when the file cannot be opened or read.
pub fn load_bids(path: impl AsRef<Path>) -> Result<LoadOutcome, CsvLoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => debug!("header: {}", header?),
        None => return Ok(LoadOutcome::default()),
    }

    let mut outcome = LoadOutcome::default();
    for (number, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(&line);
        match parse_row(&fields) {
            Ok(bid) => outcome.bids.push(bid),
            Err(err) => {
                // line numbers are 1-based and the header was line 1
                warn!("skipping row {}: {}", number + 2, err);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Split one CSV record into fields, honoring double-quote quoting.
///
/// A doubled quote inside a quoted field is an escaped quote. Fields
/// spanning lines are not supported; the export never produces them.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

fn parse_row(fields: &[String]) -> Result<Bid, BidRowError> {
    if fields.len() < MIN_COLUMNS {
        return Err(BidRowError::MissingColumns {
            expected: MIN_COLUMNS,
            found: fields.len(),
        });
    }

    let amount = bid::parse_amount(&fields[AMOUNT_COLUMN]).map_err(|source| {
        BidRowError::BadAmount {
            column: AMOUNT_COLUMN,
            source,
        }
    })?;

    Ok(Bid {
        id: fields[ID_COLUMN].trim().to_string(),
        title: fields[TITLE_COLUMN].trim().to_string(),
        fund: fields[FUND_COLUMN].trim().to_string(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str =
        "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,CC Fee,FeePercent,AuctionTitle,Fund,InventoryID";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
        writeln!(file, "{HEADER}").expect("write header");
        for row in rows {
            writeln!(file, "{row}").expect("write row");
        }
        file
    }

    #[test]
    fn test_split_record_plain_fields() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_record_quoted_comma() {
        assert_eq!(
            split_record(r#""Table, oak",98109,x"#),
            vec!["Table, oak", "98109", "x"]
        );
    }

    #[test]
    fn test_split_record_escaped_quote() {
        assert_eq!(
            split_record(r#""7"" vise",98109"#),
            vec![r#"7" vise"#, "98109"]
        );
    }

    #[test]
    fn test_split_record_empty_fields() {
        assert_eq!(split_record("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn test_load_bids_parses_columns() {
        let file = write_csv(&[
            "Zebra,98109,ADM,2016-12-10,$100.00,,2.95,December Sale,Enterprise,1001",
            "Apple,98110,ADM,2016-12-10,$50.00,,2.95,December Sale,General Fund,1002",
        ]);

        let outcome = load_bids(file.path()).expect("load");
        assert_eq!(outcome.bids.len(), 2);
        assert_eq!(outcome.skipped, 0);

        let first = &outcome.bids[0];
        assert_eq!(first.id, "98109");
        assert_eq!(first.title, "Zebra");
        assert_eq!(first.fund, "Enterprise");
        assert_eq!(first.amount, 100.0);
    }

    #[test]
    fn test_load_bids_keeps_quoted_titles_whole() {
        let file = write_csv(&[
            r#""Mower, reel",98111,ADM,2016-12-10,"$1,400.00",,2.95,December Sale,General Fund,1003"#,
        ]);

        let outcome = load_bids(file.path()).expect("load");
        assert_eq!(outcome.bids.len(), 1);
        assert_eq!(outcome.bids[0].title, "Mower, reel");
        assert_eq!(outcome.bids[0].amount, 1400.0);
    }

    #[test]
    fn test_load_bids_skips_malformed_rows() {
        let file = write_csv(&[
            "Zebra,98109,ADM,2016-12-10,$100.00,,2.95,December Sale,Enterprise,1001",
            "short,row",
            "Apple,98110,ADM,2016-12-10,not-a-price,,2.95,December Sale,General Fund,1002",
            "Mango,98111,ADM,2016-12-10,$25.00,,2.95,December Sale,General Fund,1003",
        ]);

        let outcome = load_bids(file.path()).expect("load");
        let ids: Vec<&str> = outcome.bids.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["98109", "98111"]);
        assert_eq!(outcome.skipped, 2);
    }

    #[test]
    fn test_load_bids_ignores_blank_lines() {
        let file = write_csv(&[
            "Zebra,98109,ADM,2016-12-10,$100.00,,2.95,December Sale,Enterprise,1001",
            "",
        ]);

        let outcome = load_bids(file.path()).expect("load");
        assert_eq!(outcome.bids.len(), 1);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_load_bids_empty_file() {
        let file = tempfile::NamedTempFile::new().expect("create temp csv");

        let outcome = load_bids(file.path()).expect("load");
        assert!(outcome.bids.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_load_bids_missing_file() {
        let result = load_bids("/nonexistent/path/bids.csv");
        assert!(matches!(result, Err(CsvLoadError::Io(_))));
    }
}
