// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for welded mesh topology.
//!
//! [`MeshTopology`] owns the welded vertices, the undirected edges and the
//! faces of one mesh in slot maps with stable, generational keys. An
//! edge → faces index gives the upward traversal needed for adjacency and
//! boundary queries.
//!
//! Faces keep the order of the source [`Mesh`](hullmass_geometry::Mesh), so
//! `face_order[i]` is the topology face for mesh face `i`. Faces that weld
//! down to fewer than three distinct vertices are kept (with no edges) so
//! that this alignment never breaks.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::keys::*;

/// Data stored for a vertex: a point in 3D space.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Data stored for an edge: a segment between two distinct welded vertices.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub start: VertexKey,
    pub end: VertexKey,
}

/// Data stored for a face: its welded vertex loop and the edges it uses.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Vertex loop in source winding order, consecutive duplicates removed.
    pub vertices: Vec<VertexKey>,
    /// Distinct edges of the loop.
    pub edges: Vec<EdgeKey>,
    /// Position of the face in the source mesh.
    pub index: usize,
}

/// Faces incident to one edge. Manifold edges have at most two.
pub type EdgeFaces = SmallVec<[FaceKey; 2]>;

/// The arena that owns all topology entities of one mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshTopology {
    pub(crate) vertices: SlotMap<VertexKey, VertexData>,
    pub(crate) edges: SlotMap<EdgeKey, EdgeData>,
    pub(crate) faces: SlotMap<FaceKey, FaceData>,
    pub(crate) face_order: Vec<FaceKey>,
    pub(crate) edge_to_faces: FxHashMap<EdgeKey, EdgeFaces>,
    /// Canonical `(min, max)` vertex pair → edge
    pub(crate) edge_lookup: FxHashMap<(VertexKey, VertexKey), EdgeKey>,
}

impl MeshTopology {
    /// Creates an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.face_order.len()
    }

    pub fn vertex(&self, key: VertexKey) -> Option<&VertexData> {
        self.vertices.get(key)
    }

    pub fn edge(&self, key: EdgeKey) -> Option<&EdgeData> {
        self.edges.get(key)
    }

    pub fn face(&self, key: FaceKey) -> Option<&FaceData> {
        self.faces.get(key)
    }

    /// Topology key of the face at mesh position `index`.
    pub fn face_key(&self, index: usize) -> Option<FaceKey> {
        self.face_order.get(index).copied()
    }

    /// Face keys in source mesh order.
    pub fn face_keys(&self) -> &[FaceKey] {
        &self.face_order
    }

    pub fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.keys()
    }

    /// Faces incident to an edge.
    pub fn edge_faces(&self, key: EdgeKey) -> &[FaceKey] {
        self.edge_to_faces
            .get(&key)
            .map(|faces| faces.as_slice())
            .unwrap_or(&[])
    }

    /// Looks up the edge joining two vertices, in either direction.
    pub fn find_edge(&self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        self.edge_lookup.get(&canonical_pair(a, b)).copied()
    }

    // =====================================================================
    // Construction primitives
    // =====================================================================

    pub(crate) fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> VertexKey {
        self.vertices.insert(VertexData { x, y, z })
    }

    /// Returns the edge between `a` and `b`, creating it on first use.
    pub(crate) fn find_or_add_edge(&mut self, a: VertexKey, b: VertexKey) -> EdgeKey {
        let pair = canonical_pair(a, b);
        if let Some(&ek) = self.edge_lookup.get(&pair) {
            return ek;
        }
        let ek = self.edges.insert(EdgeData {
            start: pair.0,
            end: pair.1,
        });
        self.edge_lookup.insert(pair, ek);
        ek
    }

    /// Inserts a face over an already welded vertex loop.
    ///
    /// Self-loop edges (a vertex repeated consecutively) are skipped, and an
    /// edge used twice by the same face is registered only once.
    pub(crate) fn add_face(&mut self, mut loop_vertices: Vec<VertexKey>) -> FaceKey {
        loop_vertices.dedup();
        while loop_vertices.len() > 1 && loop_vertices.first() == loop_vertices.last() {
            loop_vertices.pop();
        }

        let mut edges: Vec<EdgeKey> = Vec::with_capacity(loop_vertices.len());
        let n = loop_vertices.len();
        if n >= 3 {
            for i in 0..n {
                let a = loop_vertices[i];
                let b = loop_vertices[(i + 1) % n];
                let ek = self.find_or_add_edge(a, b);
                if !edges.contains(&ek) {
                    edges.push(ek);
                }
            }
        }

        let index = self.face_order.len();
        let fk = self.faces.insert(FaceData {
            vertices: loop_vertices,
            edges: edges.clone(),
            index,
        });
        self.face_order.push(fk);
        for ek in edges {
            self.edge_to_faces.entry(ek).or_default().push(fk);
        }
        fk
    }
}

#[inline]
pub(crate) fn canonical_pair(a: VertexKey, b: VertexKey) -> (VertexKey, VertexKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
