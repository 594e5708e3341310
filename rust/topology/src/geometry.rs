// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric queries on topology entities.
//!
//! Lengths, areas and normals computed straight from welded vertex positions.

use nalgebra::{Point3, Vector3};

use crate::arena::MeshTopology;
use crate::keys::*;

impl MeshTopology {
    /// Returns the 3D position of a vertex as a nalgebra Point3.
    pub fn vertex_point(&self, key: VertexKey) -> Option<Point3<f64>> {
        self.vertices
            .get(key)
            .map(|v| Point3::new(v.x, v.y, v.z))
    }

    /// Computes the Euclidean length of an edge.
    pub fn edge_length(&self, key: EdgeKey) -> Option<f64> {
        let edge = self.edges.get(key)?;
        let p0 = self.vertex_point(edge.start)?;
        let p1 = self.vertex_point(edge.end)?;
        Some((p1 - p0).norm())
    }

    /// Computes the face normal using Newell's method.
    ///
    /// Works for any planar polygon (convex or concave). The normal direction
    /// follows the right-hand rule relative to the vertex winding order.
    /// Returns `None` for faces with no measurable area.
    pub fn face_normal(&self, key: FaceKey) -> Option<Vector3<f64>> {
        let verts = &self.faces.get(key)?.vertices;
        if verts.len() < 3 {
            return None;
        }

        let mut normal = Vector3::new(0.0, 0.0, 0.0);
        let n = verts.len();

        for i in 0..n {
            let curr = self.vertex_point(verts[i])?;
            let next = self.vertex_point(verts[(i + 1) % n])?;

            normal.x += (curr.y - next.y) * (curr.z + next.z);
            normal.y += (curr.z - next.z) * (curr.x + next.x);
            normal.z += (curr.x - next.x) * (curr.y + next.y);
        }

        let len = normal.norm();
        if len < 1e-15 {
            return None; // degenerate face
        }

        Some(normal / len)
    }

    /// Computes the area of a face using the cross-product triangle fan method.
    pub fn face_area(&self, key: FaceKey) -> Option<f64> {
        let verts = &self.faces.get(key)?.vertices;
        if verts.len() < 3 {
            return Some(0.0);
        }

        let p0 = self.vertex_point(verts[0])?;
        let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
        for i in 1..verts.len() - 1 {
            let p1 = self.vertex_point(verts[i])?;
            let p2 = self.vertex_point(verts[i + 1])?;
            cross_sum += (p1 - p0).cross(&(p2 - p0));
        }

        Some(cross_sum.norm() * 0.5)
    }

    /// Computes the centroid of a face (average of its welded vertices).
    pub fn face_centroid(&self, key: FaceKey) -> Option<Point3<f64>> {
        let verts = &self.faces.get(key)?.vertices;
        if verts.is_empty() {
            return None;
        }

        let mut sum = Vector3::new(0.0, 0.0, 0.0);
        for &vk in verts {
            sum += self.vertex_point(vk)?.coords;
        }
        Some(Point3::from(sum / verts.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::MeshTopology;
    use approx::assert_relative_eq;
    use hullmass_geometry::{Face, Mesh};

    fn single(coords: &[[f64; 3]]) -> MeshTopology {
        let mesh = Mesh::from_faces(vec![Face::from_coords(coords).unwrap()]);
        MeshTopology::from_mesh_default(&mesh)
    }

    #[test]
    fn face_normal_xy_plane() {
        let topo = single(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        let n = topo.face_normal(topo.face_key(0).unwrap()).unwrap();
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn face_area_and_centroid_unit_square() {
        let topo = single(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        let fk = topo.face_key(0).unwrap();
        assert_relative_eq!(topo.face_area(fk).unwrap(), 1.0, epsilon = 1e-12);
        let c = topo.face_centroid(fk).unwrap();
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn collinear_face_has_no_normal() {
        let topo = single(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let fk = topo.face_key(0).unwrap();
        assert!(topo.face_normal(fk).is_none());
        assert_relative_eq!(topo.face_area(fk).unwrap(), 0.0);
    }

    #[test]
    fn edge_length_unit() {
        let topo = single(&[[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [3.0, 4.0, 0.0]]);
        let mut lengths: Vec<f64> = topo
            .edge_keys()
            .map(|ek| topo.edge_length(ek).unwrap())
            .collect();
        lengths.sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(lengths[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[1], 4.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[2], 5.0, epsilon = 1e-12);
    }
}
