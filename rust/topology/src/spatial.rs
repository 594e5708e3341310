// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial index for tolerance-based vertex welding.
//!
//! Uses a grid-based spatial hash for O(1) average-case nearest-vertex queries.
//! Mesh exporters duplicate vertices per face; welding them back together is
//! what lets neighbouring faces share edges.

use rustc_hash::FxHashMap;

use crate::arena::MeshTopology;
use crate::keys::VertexKey;

/// A spatial hash grid for fast tolerance-based vertex lookup.
///
/// The grid divides 3D space into cubic cells of side `cell_size`. Lookups
/// check the 27 neighboring cells (3x3x3 neighborhood) for candidates.
#[derive(Debug)]
pub struct SpatialIndex {
    cell_size: f64,
    grid: FxHashMap<(i64, i64, i64), Vec<VertexKey>>,
}

impl SpatialIndex {
    /// Creates a new spatial index with the given cell size.
    ///
    /// `cell_size` should be >= the tolerance used for queries.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            grid: FxHashMap::default(),
        }
    }

    /// Inserts a vertex key at the given coordinates.
    pub fn insert(&mut self, key: VertexKey, x: f64, y: f64, z: f64) {
        let cell = self.cell_coords(x, y, z);
        self.grid.entry(cell).or_default().push(key);
    }

    /// Finds the closest vertex within `tolerance` of `(x, y, z)`.
    pub fn find_near(
        &self,
        topology: &MeshTopology,
        x: f64,
        y: f64,
        z: f64,
        tolerance: f64,
    ) -> Option<VertexKey> {
        let (cx, cy, cz) = self.cell_coords(x, y, z);
        let tol_sq = tolerance * tolerance;
        let mut best: Option<(VertexKey, f64)> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    // Cells saturate far from the origin at tiny cell sizes
                    let cell = (
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    );
                    let Some(keys) = self.grid.get(&cell) else {
                        continue;
                    };
                    for &vk in keys {
                        if let Some(v) = topology.vertex(vk) {
                            let dist_sq =
                                (v.x - x).powi(2) + (v.y - y).powi(2) + (v.z - z).powi(2);
                            if dist_sq <= tol_sq && best.map_or(true, |(_, d)| dist_sq < d) {
                                best = Some((vk, dist_sq));
                            }
                        }
                    }
                }
            }
        }

        best.map(|(vk, _)| vk)
    }

    fn cell_coords(&self, x: f64, y: f64, z: f64) -> (i64, i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
            (z / self.cell_size).floor() as i64,
        )
    }
}

impl MeshTopology {
    /// Returns an existing vertex within `tolerance` of `(x, y, z)`, or
    /// creates a new one. This is the "merge-or-create" step of welding.
    pub(crate) fn find_or_add_vertex(
        &mut self,
        index: &mut SpatialIndex,
        x: f64,
        y: f64,
        z: f64,
        tolerance: f64,
    ) -> VertexKey {
        if let Some(existing) = index.find_near(self, x, y, z, tolerance) {
            return existing;
        }

        let key = self.add_vertex(x, y, z);
        index.insert(key, x, y, z);
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welds_within_tolerance() {
        let mut topo = MeshTopology::new();
        let mut index = SpatialIndex::new(1e-3);

        let a = topo.find_or_add_vertex(&mut index, 0.0, 0.0, 0.0, 1e-3);
        let b = topo.find_or_add_vertex(&mut index, 0.0005, 0.0, 0.0, 1e-3);
        let c = topo.find_or_add_vertex(&mut index, 0.01, 0.0, 0.0, 1e-3);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(topo.vertex_count(), 2);
    }

    #[test]
    fn far_coordinates_with_tiny_cells_do_not_overflow() {
        let mut topo = MeshTopology::new();
        let mut index = SpatialIndex::new(1e-10);

        let a = topo.find_or_add_vertex(&mut index, 1e12, -1e12, 0.0, 0.0);
        let b = topo.find_or_add_vertex(&mut index, 1e12, -1e12, 0.0, 0.0);
        let c = topo.find_or_add_vertex(&mut index, f64::MAX, 0.0, 0.0, 0.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(topo.vertex_count(), 2);
    }

    #[test]
    fn welds_across_cell_boundary() {
        let mut topo = MeshTopology::new();
        let mut index = SpatialIndex::new(1.0);

        // Either side of the x = 1.0 cell wall
        let a = topo.find_or_add_vertex(&mut index, 0.9999, 0.0, 0.0, 0.001);
        let b = topo.find_or_add_vertex(&mut index, 1.0001, 0.0, 0.0, 0.001);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_tolerance_only_merges_exact_duplicates() {
        let mut topo = MeshTopology::new();
        let mut index = SpatialIndex::new(1e-10);

        let a = topo.find_or_add_vertex(&mut index, 1.0, 2.0, 3.0, 0.0);
        let b = topo.find_or_add_vertex(&mut index, 1.0, 2.0, 3.0, 0.0);
        let c = topo.find_or_add_vertex(&mut index, 1.0, 2.0, 3.0 + 1e-9, 0.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
