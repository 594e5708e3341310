// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face adjacency graph with dihedral angles.
//!
//! Two faces are neighbours when they share at least one welded edge. Every
//! face sharing an edge counts, so a non-manifold edge joining three or more
//! faces makes all of them pairwise neighbours. Each neighbour pair carries
//! the angle between the two unit face normals, in degrees.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use hullmass_geometry::Mesh;

use crate::arena::MeshTopology;
use crate::builders::DEFAULT_WELD_TOLERANCE;
use crate::error::Result;

/// One neighbour of a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Index of the neighbouring face in the source mesh.
    pub face: usize,
    /// Angle between the two face normals in degrees, in `[0, 180]`.
    pub angle: f64,
}

/// Per-face neighbour lists, indexed like the source mesh faces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<Neighbor>>,
}

impl AdjacencyGraph {
    /// Derives the graph from welded topology.
    pub fn from_topology(topo: &MeshTopology) -> Self {
        let face_count = topo.face_count();
        let normals: Vec<_> = topo
            .face_keys()
            .iter()
            .map(|&fk| topo.face_normal(fk))
            .collect();

        // (low, high) face index → angle; each pair once even if it shares
        // several edges
        let mut pairs: FxHashMap<(usize, usize), f64> = FxHashMap::default();
        for ek in topo.edge_keys() {
            let faces = topo.edge_faces(ek);
            for (i, &fa) in faces.iter().enumerate() {
                for &fb in &faces[i + 1..] {
                    let (Some(a), Some(b)) = (topo.face(fa), topo.face(fb)) else {
                        continue;
                    };
                    let key = (a.index.min(b.index), a.index.max(b.index));
                    pairs
                        .entry(key)
                        .or_insert_with(|| normal_angle(normals[key.0], normals[key.1]));
                }
            }
        }

        let mut neighbors = vec![Vec::new(); face_count];
        for (&(a, b), &angle) in &pairs {
            neighbors[a].push(Neighbor { face: b, angle });
            neighbors[b].push(Neighbor { face: a, angle });
        }
        for list in &mut neighbors {
            list.sort_by_key(|n| n.face);
        }

        Self { neighbors }
    }

    /// Neighbours of a face, sorted by face index. Empty for unknown faces.
    pub fn neighbors(&self, face: usize) -> &[Neighbor] {
        self.neighbors
            .get(face)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Dihedral angle between two faces, if they are neighbours.
    pub fn angle(&self, a: usize, b: usize) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .find(|n| n.face == b)
            .map(|n| n.angle)
    }

    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of distinct neighbouring face pairs.
    pub fn pair_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Largest neighbour angle of a face, 0 when it has no neighbours.
    pub fn max_angle(&self, face: usize) -> f64 {
        self.neighbors(face)
            .iter()
            .map(|n| n.angle)
            .fold(0.0, f64::max)
    }
}

/// Angle in degrees between two unit normals; 0 if either is degenerate.
fn normal_angle(
    a: Option<nalgebra::Vector3<f64>>,
    b: Option<nalgebra::Vector3<f64>>,
) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.dot(&b).clamp(-1.0, 1.0).acos().to_degrees(),
        _ => 0.0,
    }
}

/// Builds the adjacency graph of a mesh with [`DEFAULT_WELD_TOLERANCE`].
pub fn build_adjacency(mesh: &Mesh) -> AdjacencyGraph {
    AdjacencyGraph::from_topology(&MeshTopology::from_mesh_default(mesh))
}

/// Builds the adjacency graph, welding corners closer than `tolerance`.
pub fn build_adjacency_with_tolerance(mesh: &Mesh, tolerance: f64) -> Result<AdjacencyGraph> {
    let topo = MeshTopology::from_mesh(mesh, tolerance)?;
    Ok(AdjacencyGraph::from_topology(&topo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hullmass_geometry::{unit_cube, Face};

    #[test]
    fn cube_faces_meet_at_right_angles() {
        let graph = build_adjacency(&unit_cube());
        assert_eq!(graph.face_count(), 6);
        assert_eq!(graph.pair_count(), 12);
        for f in 0..6 {
            assert_eq!(graph.neighbors(f).len(), 4);
            for n in graph.neighbors(f) {
                assert_relative_eq!(n.angle, 90.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn coplanar_triangles_have_zero_angle() {
        let a = Face::from_coords(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]).unwrap();
        let b = Face::from_coords(&[[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]).unwrap();
        let graph = build_adjacency(&Mesh::from_faces(vec![a, b]));

        assert_eq!(graph.pair_count(), 1);
        assert_relative_eq!(graph.angle(0, 1).unwrap(), 0.0, epsilon = 1e-6);
        assert_eq!(graph.angle(0, 1), graph.angle(1, 0));
    }

    #[test]
    fn non_manifold_edge_links_every_face() {
        // Three fins on the x axis
        let fins = [
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 0.0, 1.0]],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, -1.0, 0.0]],
        ];
        let faces = fins
            .iter()
            .map(|c| Face::from_coords(c).unwrap())
            .collect();
        let graph = build_adjacency(&Mesh::from_faces(faces));

        assert_eq!(graph.pair_count(), 3);
        for f in 0..3 {
            assert_eq!(graph.neighbors(f).len(), 2);
        }
        // Fins 0 and 2 have opposite normals
        assert_relative_eq!(graph.angle(0, 2).unwrap(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_face_contributes_zero_angle() {
        let good = Face::from_coords(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        let flat = Face::from_coords(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]).unwrap();
        let graph = build_adjacency(&Mesh::from_faces(vec![good, flat]));
        assert_eq!(graph.angle(0, 1), Some(0.0));
    }

    #[test]
    fn unknown_face_has_no_neighbors() {
        let graph = build_adjacency(&unit_cube());
        assert!(graph.neighbors(99).is_empty());
        assert_eq!(graph.max_angle(99), 0.0);
    }
}
