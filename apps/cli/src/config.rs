// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use hullmass_geometry::{Material, PartProperties, DEFAULT_THICKNESS};
use hullmass_topology::DEFAULT_WELD_TOLERANCE;

/// Run configuration. Command-line flags override these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default plate density in kg/m³.
    pub density: f64,
    /// Default plate thickness in m.
    pub thickness: f64,
    /// Distance under which mesh corners are welded together.
    pub weld_tolerance: f64,
    /// Number of worker threads for parallel part measurement.
    pub worker_threads: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            density: lookup("HULLMASS_DENSITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| Material::default().density()),
            thickness: lookup("HULLMASS_THICKNESS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_THICKNESS),
            weld_tolerance: lookup("HULLMASS_WELD_TOLERANCE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WELD_TOLERANCE),
            worker_threads: lookup("HULLMASS_WORKER_THREADS")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or_else(num_cpus::get),
        }
    }

    /// Applies command-line density/thickness over the environment values.
    pub fn with_material(mut self, density: Option<f64>, thickness: Option<f64>) -> Self {
        if let Some(density) = density {
            self.density = density;
        }
        if let Some(thickness) = thickness {
            self.thickness = thickness;
        }
        self
    }

    /// Validated base properties for every part.
    pub fn part_properties(&self) -> hullmass_geometry::Result<PartProperties> {
        PartProperties::new(self.density, self.thickness)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
