// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hullmass_geometry::Point3;

#[derive(Debug, Parser)]
#[command(name = "hullmass")]
#[command(version, about = "Mass properties and plate utilities for OBJ hull models", long_about = None)]
pub struct Cli {
    /// Print compact single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Volume, area, weight and center of gravity of every part
    Mass {
        /// .obj files or directories of .obj files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Plate density in kg/m³ (default: HULLMASS_DENSITY or 2653)
        #[arg(long)]
        density: Option<f64>,
        /// Plate thickness in m (default: HULLMASS_THICKNESS or 0.003)
        #[arg(long)]
        thickness: Option<f64>,
        /// JSON file with per-part material overrides
        #[arg(long)]
        overrides: Option<PathBuf>,
    },
    /// Normalised bend-angle field of every part
    Bend {
        /// .obj file or directory of .obj files
        path: PathBuf,
        /// Only report this part (`<file stem>/<object>`)
        #[arg(long)]
        part: Option<String>,
    },
    /// Boundary length of every part
    Perimeter {
        /// .obj files or directories of .obj files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Distance between two points and the scale factor to a target length
    Distance {
        /// First point as X,Y,Z
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point3<f64>,
        /// Second point as X,Y,Z
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point3<f64>,
        /// Real length the distance should have
        #[arg(long)]
        target: Option<f64>,
    },
    /// Rescale an OBJ assembly so a reference distance gets a known length
    Scale {
        /// Input .obj file
        input: PathBuf,
        /// First reference point as X,Y,Z
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point3<f64>,
        /// Second reference point as X,Y,Z
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point3<f64>,
        /// Real length of the reference
        #[arg(long)]
        target: f64,
        /// Output .obj file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Parses `X,Y,Z`.
pub fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{}': {}", s, e))?;
    match coords.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected X,Y,Z, got {} values", coords.len())),
    }
}
