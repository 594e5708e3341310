// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary classification and perimeter measurement.

use hullmass_geometry::Mesh;

use crate::arena::MeshTopology;
use crate::error::{Error, Result};
use crate::keys::EdgeKey;

impl MeshTopology {
    /// Edges used by fewer than two faces.
    pub fn boundary_edges(&self) -> Vec<EdgeKey> {
        self.edge_keys()
            .filter(|&ek| self.edge_faces(ek).len() < 2)
            .collect()
    }

    /// Edges used by more than two faces.
    pub fn non_manifold_edges(&self) -> Vec<EdgeKey> {
        self.edge_keys()
            .filter(|&ek| self.edge_faces(ek).len() > 2)
            .collect()
    }

    /// True when every edge is shared by exactly two faces.
    pub fn is_closed(&self) -> bool {
        self.edge_count() > 0 && self.edge_keys().all(|ek| self.edge_faces(ek).len() == 2)
    }

    /// True when no edge is shared by more than two faces.
    pub fn is_manifold(&self) -> bool {
        self.edge_keys().all(|ek| self.edge_faces(ek).len() <= 2)
    }

    /// Sum of boundary edge lengths.
    ///
    /// Only stand-alone faces or closed surfaces are accepted. An open patch
    /// of connected faces, where boundary edges coexist with shared edges, or
    /// any edge joining more than two faces, yields
    /// [`Error::MalformedBoundary`] instead of a partial sum.
    pub fn perimeter_length(&self) -> Result<f64> {
        let mut boundary_edges = 0;
        let mut shared_edges = 0;
        let mut non_manifold_edges = 0;
        let mut length = 0.0;

        for ek in self.edge_keys() {
            match self.edge_faces(ek).len() {
                0 | 1 => {
                    boundary_edges += 1;
                    length += self.edge_length(ek).unwrap_or(0.0);
                }
                2 => shared_edges += 1,
                _ => non_manifold_edges += 1,
            }
        }

        if non_manifold_edges > 0 || (boundary_edges > 0 && shared_edges > 0) {
            return Err(Error::MalformedBoundary {
                boundary_edges,
                shared_edges,
                non_manifold_edges,
            });
        }

        Ok(length)
    }
}

/// Perimeter of a mesh's open boundary, welding with the default tolerance.
pub fn perimeter_length(mesh: &Mesh) -> Result<f64> {
    MeshTopology::from_mesh_default(mesh).perimeter_length()
}
