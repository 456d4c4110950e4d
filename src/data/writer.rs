use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use super::model::Record;

// ---------------------------------------------------------------------------
// CSV output
// ---------------------------------------------------------------------------

/// Create (or truncate) `path` and write one `x,y` line per record.
///
/// No header row; `\n` terminators. An empty slice still leaves an empty
/// file behind.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for (row_no, rec) in records.iter().enumerate() {
        writer
            .write_record([format_float(rec.x), format_float(rec.y)])
            .with_context(|| format!("writing row {row_no} to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Float rendering
// ---------------------------------------------------------------------------

/// Shortest round-trip text for `v`, always showing it is a float.
///
/// * `300.0`, `6.063913649869626`, `0.0001`
/// * below `1e-4` or from `1e16` on: `1e-05`, `1.5e+16`
/// * `nan`, `inf`, `-inf`
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "-1.25e-7".
    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if (-4..16).contains(&exp) {
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        format!("{sign}{}", positional(&digits, exp))
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs())
    }
}

/// Place the decimal point in `digits` (d.ddd × 10^exp) for -4 <= exp < 16.
fn positional(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}
