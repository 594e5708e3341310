// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building topology from a polygon mesh with tolerance-based vertex and
//! edge sharing (face sewing).
//!
//! Faces whose corners lie within the weld tolerance of each other end up
//! sharing vertices, and therefore sharing edges, even when the source mesh
//! stores a private copy of every corner per face.

use hullmass_geometry::Mesh;

use crate::arena::MeshTopology;
use crate::error::{Error, Result};
use crate::spatial::SpatialIndex;

/// Default distance under which two corners are treated as one vertex.
pub const DEFAULT_WELD_TOLERANCE: f64 = 1e-6;

impl MeshTopology {
    /// Welds a mesh into shared-vertex topology.
    ///
    /// Every mesh face produces exactly one topology face, in the same order.
    pub fn from_mesh(mesh: &Mesh, tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(Error::InvalidTolerance(tolerance));
        }
        Ok(Self::weld(mesh, tolerance))
    }

    /// Welds a mesh with [`DEFAULT_WELD_TOLERANCE`].
    pub fn from_mesh_default(mesh: &Mesh) -> Self {
        Self::weld(mesh, DEFAULT_WELD_TOLERANCE)
    }

    fn weld(mesh: &Mesh, tolerance: f64) -> Self {
        let mut topo = MeshTopology::new();
        let mut index = SpatialIndex::new(tolerance.max(1e-10));

        for face in mesh.faces() {
            let loop_vertices = face
                .vertices()
                .iter()
                .map(|p| topo.find_or_add_vertex(&mut index, p.x, p.y, p.z, tolerance))
                .collect();
            topo.add_face(loop_vertices);
        }

        topo
    }
}
