// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for adjacency graphs, bend fields and welded topology.
//!
//! Snapshots refer to entities by dense indices rather than slot map keys so
//! that consumers outside Rust can read them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyGraph;
use crate::arena::MeshTopology;
use crate::bend::BendAngleField;
use crate::error::{Error, Result};
use crate::keys::VertexKey;

/// Serializable representation of welded topology.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopologySnapshot {
    pub vertices: Vec<[f64; 3]>,
    pub edges: Vec<EdgeSnapshot>,
    /// Vertex loop per face, in source mesh order.
    pub faces: Vec<Vec<usize>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub start: usize,
    pub end: usize,
    /// Indices of the faces using this edge.
    pub faces: Vec<usize>,
}

impl MeshTopology {
    pub fn to_snapshot(&self) -> TopologySnapshot {
        let mut vertex_ids: FxHashMap<VertexKey, usize> = FxHashMap::default();
        let mut vertices = Vec::with_capacity(self.vertices.len());
        for (i, (key, v)) in self.vertices.iter().enumerate() {
            vertex_ids.insert(key, i);
            vertices.push([v.x, v.y, v.z]);
        }

        let edges = self
            .edges
            .iter()
            .map(|(ek, e)| EdgeSnapshot {
                start: vertex_ids[&e.start],
                end: vertex_ids[&e.end],
                faces: self
                    .edge_faces(ek)
                    .iter()
                    .filter_map(|&fk| self.face(fk).map(|f| f.index))
                    .collect(),
            })
            .collect();

        let faces = self
            .face_order
            .iter()
            .filter_map(|&fk| self.face(fk))
            .map(|f| f.vertices.iter().map(|vk| vertex_ids[vk]).collect())
            .collect();

        TopologySnapshot {
            vertices,
            edges,
            faces,
        }
    }

    /// Serializes the welded topology to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_snapshot())
            .map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl AdjacencyGraph {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl BendAngleField {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::build_adjacency;
    use crate::bend::compute_bend_field;
    use hullmass_geometry::unit_cube;

    #[test]
    fn cube_snapshot_counts() {
        let topo = MeshTopology::from_mesh_default(&unit_cube());
        let snap = topo.to_snapshot();
        assert_eq!(snap.vertices.len(), 8);
        assert_eq!(snap.edges.len(), 12);
        assert_eq!(snap.faces.len(), 6);
        assert!(snap.edges.iter().all(|e| e.faces.len() == 2));
        assert!(topo.to_json().unwrap().contains("\"edges\""));
    }

    #[test]
    fn adjacency_json_reloads() {
        let graph = build_adjacency(&unit_cube());
        let restored = AdjacencyGraph::from_json(&graph.to_json().unwrap()).unwrap();
        assert_eq!(restored.face_count(), 6);
        assert_eq!(restored.pair_count(), graph.pair_count());
        for f in 0..6 {
            for (a, b) in restored.neighbors(f).iter().zip(graph.neighbors(f)) {
                assert_eq!(a.face, b.face);
                approx::assert_relative_eq!(a.angle, b.angle, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn bend_field_json_has_named_fields() {
        let json = compute_bend_field(&unit_cube()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["values"].as_array().unwrap().len(), 6);
        assert_eq!(value["min_max_angle"], value["max_max_angle"]);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            AdjacencyGraph::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }
}
