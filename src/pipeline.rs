use anyhow::Result;

use crate::config::Settings;
use crate::data::{filter, loader, writer};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records parsed from the report's data section.
    pub parsed: usize,
    /// Records inside the x range, i.e. rows written to the CSV.
    pub written: usize,
}

/// Load → filter → write. The first failure aborts the run; the output file
/// is only touched once the whole report has parsed.
pub fn run(settings: &Settings) -> Result<RunSummary> {
    let series = loader::load_report(&settings.input, settings.divisor)?;
    log::info!(
        "Parsed {} records from {}",
        series.len(),
        settings.input.display()
    );

    let selected = filter::select(&series, &settings.range);
    writer::write_csv(&settings.output, &selected)?;
    log::info!(
        "Wrote {} records with {} <= x <= {} to {}",
        selected.len(),
        settings.range.min,
        settings.range.max,
        settings.output.display()
    );

    Ok(RunSummary {
        parsed: series.len(),
        written: selected.len(),
    })
}
