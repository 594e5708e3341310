// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures
//!
//! A [`Mesh`] is an immutable-by-convention snapshot of one part's surface in
//! world coordinates: an ordered list of polygonal faces. Vertex order inside
//! a face defines its outward normal (right-hand rule), which in turn decides
//! the sign of the enclosed volume.

use hullmass_core::ObjDocument;
use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::triangulation::fan_triangulate;

/// A planar (or near-planar) polygon with 3+ vertices in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    vertices: Vec<Point3<f64>>,
}

impl Face {
    /// Create a face, rejecting polygons with fewer than 3 vertices
    pub fn new(vertices: Vec<Point3<f64>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::DegenerateFace {
                count: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Create a face from coordinate triples
    pub fn from_coords(coords: &[[f64; 3]]) -> Result<Self> {
        Self::new(coords.iter().map(|c| Point3::new(c[0], c[1], c[2])).collect())
    }

    /// Create a triangle
    #[inline]
    pub fn triangle(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self {
            vertices: vec![a, b, c],
        }
    }

    /// Vertex positions in winding order
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Fan triangles pivoting on vertex 0, winding preserved
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        fan_triangulate(self.vertices.len())
            .map(move |[a, b, c]| [self.vertices[a], self.vertices[b], self.vertices[c]])
    }

    /// Geometric area: sum of the fan triangle areas
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| (b - a).cross(&(c - a)).norm() * 0.5)
            .sum()
    }

    /// Unit normal following the winding order, `None` for zero-area faces
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let sum: Vector3<f64> = self
            .triangles()
            .map(|[a, b, c]| (b - a).cross(&(c - a)))
            .sum();
        let len = sum.norm();
        if len < 1e-15 {
            return None;
        }
        Some(sum / len)
    }

    /// Vertex average
    pub fn centroid(&self) -> Point3<f64> {
        let sum: Vector3<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Same polygon with reversed winding (inverted normal)
    pub fn flipped(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Apply `f` to every vertex
    pub fn map_vertices(&self, f: impl Fn(&Point3<f64>) -> Point3<f64>) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
        }
    }
}

/// Polygon mesh of one part, vertices already in world coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            faces: Vec::with_capacity(face_count),
        }
    }

    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Build from polygon coordinate lists
    pub fn from_polygons(polygons: &[Vec<[f64; 3]>]) -> Result<Self> {
        let faces = polygons
            .iter()
            .map(|p| Face::from_coords(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { faces })
    }

    /// Build from an indexed vertex list
    pub fn from_indexed(positions: &[[f64; 3]], faces: &[Vec<usize>]) -> Result<Self> {
        let mut mesh = Self::with_capacity(faces.len());
        for (face_index, indices) in faces.iter().enumerate() {
            let coords = indices
                .iter()
                .map(|&i| {
                    positions.get(i).copied().ok_or_else(|| {
                        Error::InvalidInput(format!(
                            "face {} references vertex {} of {}",
                            face_index,
                            i,
                            positions.len()
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            mesh.add_face(Face::from_coords(&coords)?);
        }
        Ok(mesh)
    }

    /// Build from one object of a parsed OBJ document
    pub fn from_obj_object(doc: &ObjDocument, index: usize) -> Result<Self> {
        let polygons = doc.object_polygons(index).ok_or_else(|| {
            Error::InvalidInput(format!("OBJ document has no object #{}", index))
        })?;
        Self::from_polygons(&polygons)
    }

    /// Add a face
    #[inline]
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Merge another mesh into this one
    pub fn merge(&mut self, other: &Mesh) {
        self.faces.extend_from_slice(&other.faces);
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of triangles after fan triangulation
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.vertex_count() - 2).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// All fan triangles of all faces, in face order
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.faces.iter().flat_map(Face::triangles)
    }

    /// Copy of this mesh with every N-gon fan-triangulated
    pub fn triangulated(&self) -> Mesh {
        let faces = self
            .triangles()
            .map(|[a, b, c]| Face::triangle(a, b, c))
            .collect();
        Mesh { faces }
    }

    /// Copy of this mesh with every face's winding reversed
    pub fn flipped(&self) -> Mesh {
        Mesh {
            faces: self.faces.iter().map(Face::flipped).collect(),
        }
    }

    /// Uniformly scaled copy (about the world origin)
    pub fn scaled(&self, factor: f64) -> Mesh {
        self.map_vertices(|p| Point3::from(p.coords * factor))
    }

    /// Apply `f` to every vertex of every face
    pub fn map_vertices(&self, f: impl Fn(&Point3<f64>) -> Point3<f64>) -> Mesh {
        Mesh {
            faces: self.faces.iter().map(|face| face.map_vertices(&f)).collect(),
        }
    }

    /// Axis-aligned bounds (min, max), `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let mut points = self.faces.iter().flat_map(|f| f.vertices().iter());
        let first = *points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min = min.inf(p);
            max = max.sup(p);
        }
        Some((min, max))
    }
}

/// Unit cube `[0,1]^3` with outward-facing quads
///
/// Handy reference solid: volume 1, area 6, centroid (0.5, 0.5, 0.5).
pub fn unit_cube() -> Mesh {
    let p = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
    let quad = |a, b, c, d| Face {
        vertices: vec![a, b, c, d],
    };
    Mesh::from_faces(vec![
        // -Z
        quad(p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.), p(1., 0., 0.)),
        // +Z
        quad(p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)),
        // -Y
        quad(p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)),
        // +Y
        quad(p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.), p(1., 1., 0.)),
        // -X
        quad(p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.), p(0., 1., 0.)),
        // +X
        quad(p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_face_requires_three_vertices() {
        let err = Face::from_coords(&[[0.0; 3], [1.0, 0.0, 0.0]]).unwrap_err();
        assert_eq!(err, Error::DegenerateFace { count: 2 });
    }

    #[test]
    fn test_quad_area_and_normal() {
        let quad = Face::from_coords(&[
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 3.0, 0.0],
            [0.0, 3.0, 0.0],
        ])
        .unwrap();
        assert_relative_eq!(quad.area(), 6.0);
        let n = quad.normal().unwrap();
        assert_relative_eq!(n, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(quad.flipped().normal().unwrap(), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_face_has_no_normal() {
        let sliver =
            Face::from_coords(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]).unwrap();
        assert!(sliver.normal().is_none());
        assert_eq!(sliver.area(), 0.0);
    }

    #[test]
    fn test_triangulated_cube() {
        let cube = unit_cube();
        assert_eq!(cube.face_count(), 6);
        assert_eq!(cube.triangle_count(), 12);
        let tris = cube.triangulated();
        assert_eq!(tris.face_count(), 12);
        assert!(tris.faces().iter().all(|f| f.vertex_count() == 3));
    }

    #[test]
    fn test_from_indexed_rejects_dangling_index() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        assert!(Mesh::from_indexed(&positions, &[vec![0, 1, 2]]).is_ok());
        assert!(matches!(
            Mesh::from_indexed(&positions, &[vec![0, 1, 3]]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_obj_object() {
        let doc = hullmass_core::parse_obj("o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        let mesh = Mesh::from_obj_object(&doc, 0).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert!(Mesh::from_obj_object(&doc, 1).is_err());
    }

    #[test]
    fn test_bounds_and_scale() {
        let cube = unit_cube().scaled(2.0);
        let (min, max) = cube.bounds().unwrap();
        assert_eq!(min, Point3::origin());
        assert_eq!(max, Point3::new(2.0, 2.0, 2.0));
        assert!(Mesh::new().bounds().is_none());
    }
}
