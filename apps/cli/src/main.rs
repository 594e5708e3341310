// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HullMass CLI - mass properties and plate utilities for OBJ hull models.
//!
//! # Commands
//!
//! - `hullmass mass <PATH>...` - per-part and aggregate mass report
//! - `hullmass bend <PATH>` - normalised bend-angle field per part
//! - `hullmass perimeter <PATH>...` - boundary length per part
//! - `hullmass distance --from X,Y,Z --to X,Y,Z` - reference distance and scale factor
//! - `hullmass scale <INPUT> ... --output FILE` - rescale an assembly to a reference
//!
//! Exit codes: 0 success, 1 failure, 2 degenerate weight or invalid scale,
//! 3 malformed boundary.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod loader;

use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hullmass=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    tracing::debug!(
        density = config.density,
        thickness = config.thickness,
        weld_tolerance = config.weld_tolerance,
        worker_threads = config.worker_threads,
        "Starting hullmass"
    );

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
    {
        tracing::warn!(error = %e, "Could not size the worker pool, using defaults");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::run(cli, config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(error::exit_code(&e))
        }
    }
}
