// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report types emitted by the pipeline.

use serde::{Deserialize, Serialize};

use hullmass_geometry::{AggregateResult, MeasurementResult, PartProperties};

use crate::part::PartHandle;

/// Measured mass properties of one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartReport {
    pub handle: PartHandle,
    /// Enclosed volume (m³).
    pub volume: f64,
    /// Signed volume (m³). Negative means the faces are wound inward.
    pub signed_volume: f64,
    /// Area of the counted faces (m²).
    pub surface_area: f64,
    /// Number of faces counted toward the area.
    pub face_count: usize,
    /// Plate weight (kg).
    pub weight: f64,
    /// Volume centroid in world space.
    pub centroid: [f64; 3],
    /// Area centroid of the counted faces. The assembly CG uses it when
    /// `degenerate_volume` is set.
    pub surface_centroid: [f64; 3],
    /// Density used (kg/m³).
    pub density: f64,
    /// Plate thickness used (m).
    pub thickness: f64,
    /// Enclosed volume was zero; `centroid` must not be trusted.
    pub degenerate_volume: bool,
    pub inverted: bool,
}

impl PartReport {
    pub fn new(
        handle: PartHandle,
        measurement: &MeasurementResult,
        properties: &PartProperties,
    ) -> Self {
        let c = measurement.centroid;
        let s = measurement.surface_centroid;
        Self {
            handle,
            volume: measurement.volume,
            signed_volume: measurement.signed_volume,
            surface_area: measurement.surface_area,
            face_count: measurement.face_count,
            weight: measurement.weight,
            centroid: [c.x, c.y, c.z],
            surface_centroid: [s.x, s.y, s.z],
            density: properties.density,
            thickness: properties.thickness,
            degenerate_volume: measurement.degenerate_volume,
            inverted: measurement.is_inverted(),
        }
    }
}

/// Total weight and center of gravity of the assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// kg
    pub total_weight: f64,
    pub center_of_gravity: [f64; 3],
    /// Total weight was not positive; the CG is reported at the origin.
    pub degenerate: bool,
    /// Parts without enclosed volume, placed at their surface centroid.
    #[serde(default)]
    pub unreliable_parts: usize,
}

impl From<&AggregateResult> for AggregateReport {
    fn from(result: &AggregateResult) -> Self {
        let cg = result.center_of_gravity;
        Self {
            total_weight: result.total_weight,
            center_of_gravity: [cg.x, cg.y, cg.z],
            degenerate: result.degenerate,
            unreliable_parts: 0,
        }
    }
}

/// Per-part and aggregate results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub parts: Vec<PartReport>,
    pub aggregate: AggregateReport,
}

impl AssemblyReport {
    /// The assembly CG cannot be trusted.
    pub fn is_degenerate(&self) -> bool {
        self.aggregate.degenerate
    }

    /// Parts whose volume centroid is unreliable.
    pub fn degenerate_parts(&self) -> impl Iterator<Item = &PartReport> {
        self.parts.iter().filter(|p| p.degenerate_volume)
    }

    pub fn part(&self, handle: &str) -> Option<&PartReport> {
        self.parts.iter().find(|p| p.handle.as_str() == handle)
    }
}

/// Boundary length of one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartPerimeter {
    pub handle: PartHandle,
    /// m
    pub perimeter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerimeterReport {
    pub parts: Vec<PartPerimeter>,
    /// m
    pub total: f64,
}
