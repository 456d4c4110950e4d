mod config;
mod data;
mod pipeline;

use anyhow::Result;
use config::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let summary = pipeline::run(&Settings::default())?;
    log::info!(
        "Done: {} of {} records inside the window",
        summary.written, summary.parsed
    );
    Ok(())
}
