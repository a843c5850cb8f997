use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use bistatic_rcs::config::Scenario;
use bistatic_rcs::{direction_grid, geometry, sweep};

/// Compute bistatic radar geometry and synthetic RCS for a scenario file.
#[derive(Parser)]
#[command(name = "bistatic-rcs", version)]
struct Cli {
    /// Scenario TOML file; without it the built-in demo scenario runs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every direction-grid cell instead of a summary
    #[arg(long)]
    dump_grid: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scenario = match &cli.config {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    let geom = geometry(
        &scenario.transmitter_point(),
        &scenario.receiver_point(),
        &scenario.target_point(),
        &scenario.attitude,
    );

    println!(
        "incidence az/el = {:.1}/{:.1} deg, scatter az/el = {:.1}/{:.1} deg",
        geom.incidence_az_deg, geom.incidence_el_deg, geom.scatter_az_deg, geom.scatter_el_deg
    );
    if !geom.incidence_el_deg.is_finite() || !geom.scatter_el_deg.is_finite() {
        eprintln!("Warning: degenerate geometry (station coincides with target)");
    }

    let result = sweep(
        scenario.sweep.start_ghz,
        scenario.sweep.stop_ghz,
        scenario.sweep.points,
        geom.incidence_az_deg,
        geom.incidence_el_deg,
        geom.scatter_az_deg,
        geom.scatter_el_deg,
    );

    println!();
    println!("freq (GHz)  RCS (dBsm)");
    for (freq, rcs) in result.freqs_ghz.iter().zip(&result.rcs_values) {
        println!("{:>10.3}  {:>10.3}", freq, rcs);
    }

    let azimuths = scenario.grid.azimuths_deg();
    let elevations = scenario.grid.elevations_deg();
    let grid_freq = scenario.grid_freq_ghz();
    let grid = direction_grid(
        grid_freq,
        &azimuths,
        &elevations,
        geom.incidence_az_deg,
        geom.incidence_el_deg,
        geom.scatter_az_deg,
        geom.scatter_el_deg,
    );

    println!();
    println!(
        "direction grid at {:.2} GHz: {} elevations x {} azimuths",
        grid_freq,
        elevations.len(),
        azimuths.len()
    );

    if cli.dump_grid {
        for (el, row) in elevations.iter().zip(&grid) {
            for (az, rcs) in azimuths.iter().zip(row) {
                println!("{:>8.1} {:>8.1} {:>10.3}", az, el, rcs);
            }
        }
    } else {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for rcs in grid.iter().flatten() {
            min = min.min(*rcs);
            max = max.max(*rcs);
        }
        println!("RCS range: {:.3} to {:.3} dBsm", min, max);
    }

    Ok(())
}
