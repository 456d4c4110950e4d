use std::num::ParseFloatError;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Record, Series};
use crate::config::MARKER;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A data row that cannot be turned into a [`Record`]. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("line {line}: expected at least two columns, found {found}")]
    MissingColumn { line: usize, found: usize },

    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a report from disk and parse its data section.
pub fn load_report(path: &Path, divisor: f64) -> Result<Series> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading report {}", path.display()))?;
    let series = parse_report(&text, divisor)
        .with_context(|| format!("parsing report {}", path.display()))?;
    Ok(series)
}

// ---------------------------------------------------------------------------
// Report parser
// ---------------------------------------------------------------------------

/// Expected layout:
///
/// ```text
/// <free-form preamble, ignored>
///   nm      CD[mdeg]     DY/DX
///   180.0   -1.2345      0.0021
///   181.0   -1.1021      0.0019
/// ```
///
/// Every line containing `DY/DX` is skipped; all lines after the first such
/// line are data rows. Blank rows are ignored, columns past the second too.
/// A report without the marker yields an empty series.
pub fn parse_report(text: &str, divisor: f64) -> Result<Series, ReportError> {
    let mut in_data = false;
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if line.contains(MARKER) {
            if !in_data {
                log::debug!("Data section starts after line {line_no}");
            }
            in_data = true;
            continue;
        }
        if !in_data {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {
                log::debug!("Skipping blank line {line_no}");
            }
            [_] => {
                return Err(ReportError::MissingColumn {
                    line: line_no,
                    found: 1,
                });
            }
            [x, y_raw, ..] => {
                let x = parse_number(x, line_no)?;
                let y_raw = parse_number(y_raw, line_no)?;
                records.push(Record::new(x, y_raw / divisor));
            }
        }
    }

    let series = Series::from_records(records);
    if !in_data {
        log::warn!("No '{MARKER}' line found; report has no data section");
    } else if series.is_empty() {
        log::warn!("'{MARKER}' line found but no data rows follow it");
    }

    Ok(series)
}

fn parse_number(token: &str, line: usize) -> Result<f64, ReportError> {
    token
        .parse::<f64>()
        .map_err(|source| ReportError::InvalidNumber {
            line,
            token: token.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DIVISOR;

    const REPORT: &str = "\
Sample: test
Instrument: J-1500
  nm      CD[mdeg]   DY/DX
 150.0   10.0
 300.0   20.0
 450.0 30.0
";

    #[test]
    fn parses_rows_after_marker_and_rescales_y() {
        let series = parse_report(REPORT, DIVISOR).unwrap();
        assert_eq!(series.len(), 3);
        let xs: Vec<f64> = series.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![150.0, 300.0, 450.0]);
        assert_eq!(series.records()[1].y, 20.0 / 3.2982);
    }

    #[test]
    fn report_without_marker_is_empty() {
        let text = "header\n 300.0 20.0\n 310.0 21.0\n";
        let series = parse_report(text, DIVISOR).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn preamble_numbers_are_ignored() {
        let text = "1.0 2.0\nnot even numbers\nDY/DX\n250 5\n";
        let series = parse_report(text, 1.0).unwrap();
        assert_eq!(series.records(), &[Record::new(250.0, 5.0)]);
    }

    #[test]
    fn blank_lines_and_repeated_separators_are_tolerated() {
        let text = "DY/DX\n\n   \n  200.0\t\t 3.2982   0.5\n\n";
        let series = parse_report(text, DIVISOR).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.records()[0], Record::new(200.0, 1.0));
    }

    #[test]
    fn later_marker_lines_are_skipped_too() {
        let text = "DY/DX\n210 1\n  nm  CD  DY/DX\n220 2\n";
        let series = parse_report(text, 1.0).unwrap();
        let xs: Vec<f64> = series.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![210.0, 220.0]);
    }

    #[test]
    fn crlf_line_endings_parse() {
        let text = "head\r\nDY/DX\r\n300.0 20.0\r\n";
        let series = parse_report(text, 1.0).unwrap();
        assert_eq!(series.records(), &[Record::new(300.0, 20.0)]);
    }

    #[test]
    fn single_token_row_aborts() {
        let text = "DY/DX\n 250.0 1.0\n 300.0\n 350.0 2.0\n";
        let err = parse_report(text, DIVISOR).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { line: 3, found: 1 }));
    }

    #[test]
    fn non_numeric_token_aborts() {
        let text = "DY/DX\n 250.0 abc\n";
        let err = parse_report(text, DIVISOR).unwrap_err();
        match err {
            ReportError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report(&dir.path().join("absent.txt"), DIVISOR).unwrap_err();
        assert!(format!("{err:#}").contains("absent.txt"));
    }

    #[test]
    fn load_report_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.txt");
        std::fs::write(&path, REPORT).unwrap();
        let series = load_report(&path, DIVISOR).unwrap();
        assert_eq!(series.len(), 3);
    }
}
