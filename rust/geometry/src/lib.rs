// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HullMass Geometry
//!
//! Polygon meshes in world space and the mass-property engine built on them:
//! signed-tetrahedron volume and centroid, surface area with host selection
//! filters, plate weight, and weighted center-of-gravity aggregation.
//! nalgebra provides the vector math.

pub mod error;
pub mod mass;
pub mod material;
pub mod measure;
pub mod mesh;
pub mod transform;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};

pub use error::{Error, Result};
pub use mass::{
    aggregate_center_of_gravity, all_faces, compute_part_weight, compute_surface_area,
    compute_volume_and_centroid, measure_faces, measure_part, selected, AggregateResult,
    FaceAreaSummary, MeasurementResult, VolumeAndCentroid,
};
pub use material::{Material, PartProperties, DEFAULT_THICKNESS};
pub use measure::{distance_between_points, distance_between_selected, scale_factor};
pub use mesh::{unit_cube, Face, Mesh};
pub use transform::{is_mirroring, translation, uniform_scale};
pub use triangulation::fan_triangulate;
