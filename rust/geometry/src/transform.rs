// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! World-transform utilities
//!
//! Scene providers usually hand over object-local geometry plus a 4x4
//! object-to-world matrix. The mass-property engine works in world space,
//! so meshes are baked through [`Mesh::transformed`] first.

use nalgebra::{Matrix4, Vector3};

use crate::mesh::Mesh;

/// Returns `true` if the linear part of `matrix` mirrors space
/// (negative determinant), which inverts polygon winding.
#[inline]
pub fn is_mirroring(matrix: &Matrix4<f64>) -> bool {
    matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0
}

/// Uniform scale about the world origin
#[inline]
pub fn uniform_scale(factor: f64) -> Matrix4<f64> {
    Matrix4::new_scaling(factor)
}

/// Translation matrix
#[inline]
pub fn translation(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(x, y, z))
}

impl Mesh {
    /// Bake `matrix` into every vertex.
    ///
    /// Mirroring transforms would turn outward normals inward; the winding of
    /// every face is reversed in that case so the result stays outward-facing.
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Mesh {
        let baked = self.map_vertices(|p| matrix.transform_point(p));
        if is_mirroring(matrix) {
            baked.flipped()
        } else {
            baked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass::compute_volume_and_centroid;
    use crate::mesh::unit_cube;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_translation_moves_centroid() {
        let cube = unit_cube().transformed(&translation(10.0, 0.0, -2.0));
        let vc = compute_volume_and_centroid(&cube);
        assert_relative_eq!(vc.signed_volume, 1.0, epsilon = 1e-9);
        assert_relative_eq!(vc.centroid, Point3::new(10.5, 0.5, -1.5), epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_scale_cubes_volume() {
        let cube = unit_cube().transformed(&uniform_scale(2.0));
        assert_relative_eq!(compute_volume_and_centroid(&cube).signed_volume, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mirror_keeps_outward_orientation() {
        let mirror = Matrix4::new_nonuniform_scaling(&Vector3::new(-1.0, 1.0, 1.0));
        assert!(is_mirroring(&mirror));
        assert!(!is_mirroring(&uniform_scale(3.0)));

        let vc = compute_volume_and_centroid(&unit_cube().transformed(&mirror));
        assert_relative_eq!(vc.signed_volume, 1.0, epsilon = 1e-9);
        assert_relative_eq!(vc.centroid.x, -0.5, epsilon = 1e-9);
    }
}
