//! Radar host binary.
//!
//! # Examples
//!
//! ```bash
//! # Run the bundled courtyard script
//! cargo run -p radar-client -- \
//!     --defaults crates/radar/content/data/defaults.toml \
//!     --scenario crates/radar/content/data/courtyard.ron \
//!     crates/radar/content/data/courtyard.radar
//!
//! # Interactive: one command per line on stdin
//! RUST_LOG=debug cargo run -p radar-client -- --map crates/radar/content/data/maps/courtyard.ron
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use radar_client::{HostConfig, logging, run_script};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = HostConfig::parse();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let mut session = config.load_session()?;
    tracing::info!(radius = session.defaults().radius, "Session ready");

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let summary = match &config.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_script(&mut session, BufReader::new(file), &mut output)?
        }
        None => run_script(&mut session, io::stdin().lock(), &mut output)?,
    };

    tracing::info!(
        executed = summary.executed,
        errors = summary.errors,
        "Script finished"
    );
    Ok(())
}
