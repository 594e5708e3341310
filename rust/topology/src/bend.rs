// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bend-angle field: a relative, per-face visual cue for sharp folds.
//!
//! Each face gets its largest dihedral angle to any neighbour. The field
//! value is how far that angle sits above the smallest such angle in the
//! mesh, normalised by the spread of those angles across the mesh. It is a
//! visualisation aid for plate work, not a structural stress: a value of 1
//! only means "folded hardest relative to this mesh".

use serde::{Deserialize, Serialize};

use hullmass_geometry::Mesh;

use crate::adjacency::{build_adjacency, AdjacencyGraph};

/// Normalised bend values plus the raw angles they were derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BendAngleField {
    /// Normalised value per face, in `[0, 1]`.
    pub values: Vec<f64>,
    /// Largest neighbour angle per face, degrees. 0 for isolated faces.
    pub max_angles: Vec<f64>,
    pub min_max_angle: f64,
    pub max_max_angle: f64,
}

impl BendAngleField {
    pub fn from_adjacency(graph: &AdjacencyGraph) -> Self {
        let max_angles: Vec<f64> = (0..graph.face_count())
            .map(|f| graph.max_angle(f))
            .collect();

        if max_angles.is_empty() {
            return Self::default();
        }

        let min_max_angle = max_angles.iter().copied().fold(f64::INFINITY, f64::min);
        let max_max_angle = max_angles
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let range = max_max_angle - min_max_angle;

        let values = max_angles
            .iter()
            .map(|&angle| {
                if range > 0.0 {
                    ((angle - min_max_angle).abs() / range).clamp(0.0, 1.0)
                } else {
                    0.0
                }
            })
            .collect();

        Self {
            values,
            max_angles,
            min_max_angle,
            max_max_angle,
        }
    }

    /// Spread of the per-face maximum angles.
    pub fn range(&self) -> f64 {
        self.max_max_angle - self.min_max_angle
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Blue (0) → green (0.5) → red (1) RGBA colour for a face.
    pub fn color(&self, face: usize) -> Option<[f32; 4]> {
        let v = *self.values.get(face)? as f32;
        let r = (2.0 * v - 1.0).clamp(0.0, 1.0);
        let g = 1.0 - (2.0 * v - 1.0).abs();
        let b = (1.0 - 2.0 * v).clamp(0.0, 1.0);
        Some([r, g, b, 1.0])
    }
}

/// Computes the bend field of a mesh, welding with the default tolerance.
pub fn compute_bend_field(mesh: &Mesh) -> BendAngleField {
    BendAngleField::from_adjacency(&build_adjacency(mesh))
}
