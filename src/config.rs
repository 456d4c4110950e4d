use std::path::PathBuf;

use crate::data::filter::XRange;

// ---------------------------------------------------------------------------
// Fixed run parameters
// ---------------------------------------------------------------------------

/// Substring identifying the column header line that precedes the data rows.
pub const MARKER: &str = "DY/DX";

/// Every raw y value is divided by this before it is stored.
pub const DIVISOR: f64 = 3.2982;

pub const X_MIN: f64 = 200.0;
pub const X_MAX: f64 = 400.0;

pub const INPUT_FILE: &str = "1.txt";
pub const OUTPUT_FILE: &str = "ECDout.csv";

/// Everything a single extraction run needs.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Report to scan (relative to the working directory by default).
    pub input: PathBuf,
    /// CSV destination, truncated on every run.
    pub output: PathBuf,
    pub divisor: f64,
    /// Rows whose x falls inside this closed range are written.
    pub range: XRange,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            output: PathBuf::from(OUTPUT_FILE),
            divisor: DIVISOR,
            range: XRange::new(X_MIN, X_MAX),
        }
    }
}
