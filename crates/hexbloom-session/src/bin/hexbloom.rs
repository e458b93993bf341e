//! Hexbloom demo runner
//!
//! Grows a grid, pins two colors at opposite ends of the middle row and
//! diffuses them across the grid, printing the final cell set as JSON.
//!
//! Usage: `hexbloom [radius] [config.json]`

use std::env;
use std::num::ParseIntError;

use hexbloom_lattice::{Address, Rgb, Sublattice};
use hexbloom_session::{Session, SessionConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = match args.get(2) {
        Some(path) => SessionConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => SessionConfig::default(),
    };
    if let Some(radius) = parse_radius(args.get(1).map(String::as_str))? {
        config.radius = radius;
    }

    let mut session = Session::new(config);
    let radius = i64::from(session.config().radius);

    session.set_color(Address::ORIGIN, Rgb::new(255, 0, 0))?;
    if radius > 0 {
        session.set_color(Address::new(Sublattice::Base, 0, radius), Rgb::new(0, 0, 255))?;
    }

    let report = session.reflow_default();

    eprintln!("Hexbloom");
    eprintln!("========");
    eprintln!("  Cells:       {}", session.grid().len());
    eprintln!("  Initialized: {}", session.grid().initialized_count());
    eprintln!("  Iterations:  {}", report.iterations());
    eprintln!("  Stopped:     {:?}", report.stop);

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

/// A missing radius keeps the configured one; a malformed one is an error.
fn parse_radius(arg: Option<&str>) -> Result<Option<u32>, ParseIntError> {
    arg.map(str::parse::<u32>).transpose()
}
