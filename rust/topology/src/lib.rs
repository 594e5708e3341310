// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # HullMass Topology
//!
//! Welded mesh topology for plate models.
//!
//! Exported meshes usually give each face its own copy of its corners.
//! [`MeshTopology`] welds corners within a tolerance into shared vertices
//! and sews faces together along shared undirected edges, stored in slot
//! maps with an edge → faces index. On top of it this crate provides:
//!
//! - [`AdjacencyGraph`]: face neighbours and the dihedral angle between them
//! - [`BendAngleField`]: a normalised per-face fold indicator for colouring
//! - boundary classification and [`perimeter_length`]
//!
//! ```
//! use hullmass_geometry::unit_cube;
//! use hullmass_topology::{compute_bend_field, perimeter_length};
//!
//! let cube = unit_cube();
//! assert_eq!(perimeter_length(&cube).unwrap(), 0.0);
//! // Every cube face meets its neighbours at 90°, so nothing stands out
//! assert!(compute_bend_field(&cube).values.iter().all(|&v| v == 0.0));
//! ```

pub mod adjacency;
pub mod arena;
pub mod bend;
pub mod boundary;
pub mod builders;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod serialization;
pub mod spatial;

pub use adjacency::{build_adjacency, build_adjacency_with_tolerance, AdjacencyGraph, Neighbor};
pub use arena::{EdgeData, FaceData, MeshTopology, VertexData};
pub use bend::{compute_bend_field, BendAngleField};
pub use boundary::perimeter_length;
pub use builders::DEFAULT_WELD_TOLERANCE;
pub use error::{Error, Result};
pub use keys::{EdgeKey, FaceKey, VertexKey};
pub use serialization::{EdgeSnapshot, TopologySnapshot};
pub use spatial::SpatialIndex;
