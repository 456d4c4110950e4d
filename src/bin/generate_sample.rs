use std::fmt::Write as _;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// (centre nm, width nm, amplitude mdeg)
const BANDS: [(f64, f64, f64); 4] = [
    (195.0, 8.0, 25.0),
    (222.0, 10.0, -14.0),
    (275.0, 15.0, 6.5),
    (330.0, 20.0, -3.0),
];

const LONG_NM: u32 = 450;
const SHORT_NM: u32 = 180;

/// One Cotton-effect band: a Gaussian in wavelength.
fn band(nm: f64, (centre, width, amplitude): (f64, f64, f64)) -> f64 {
    amplitude * (-(nm - centre).powi(2) / (2.0 * width.powi(2))).exp()
}

/// Zero-mean normal noise via Box-Muller.
fn noise<R: Rng>(rng: &mut R, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Render a full report: preamble, `DY/DX` header, rows from long to short wavelength.
fn render_report<R: Rng>(rng: &mut R) -> Result<String> {
    let n_points = LONG_NM - SHORT_NM + 1;

    let mut report = String::new();
    writeln!(report, "TITLE\tSynthetic ECD sample")?;
    writeln!(report, "DATA TYPE\tCD")?;
    writeln!(report, "XUNITS\tNANOMETERS")?;
    writeln!(report, "YUNITS\tCD [mdeg]")?;
    writeln!(report, "FIRSTX\t{LONG_NM}.0000")?;
    writeln!(report, "LASTX\t{SHORT_NM}.0000")?;
    writeln!(report, "NPOINTS\t{n_points}")?;
    writeln!(report)?;
    writeln!(report, "      nm        CD[mdeg]        DY/DX")?;

    let mut prev: Option<f64> = None;
    for nm in (SHORT_NM..=LONG_NM).rev() {
        let nm = f64::from(nm);
        let cd = BANDS.iter().map(|&b| band(nm, b)).sum::<f64>() + noise(rng, 0.05);
        let slope = prev.map_or(0.0, |p| p - cd);
        prev = Some(cd);
        writeln!(report, "  {nm:8.1}  {cd:12.5}  {slope:12.5}")?;
    }
    Ok(report)
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);
    let report = render_report(&mut rng)?;

    let output_path = "sample_report.txt";
    std::fs::write(output_path, &report)
        .with_context(|| format!("writing {output_path}"))?;

    log::info!("Wrote {LONG_NM} → {SHORT_NM} nm scan to {output_path}");
    println!("Wrote synthetic ECD report to {output_path}; copy it to 1.txt to extract it");
    Ok(())
}
