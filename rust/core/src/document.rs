// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory representation of an OBJ file.

use smallvec::SmallVec;

/// Vertex indices of one polygon, zero-based into [`ObjDocument::vertices`].
pub type FaceIndices = SmallVec<[usize; 4]>;

/// A named object (one hull part) inside an OBJ document.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjObject {
    /// Object name from the `o` directive.
    pub name: String,
    /// Polygons in file order. Winding order is preserved.
    pub faces: Vec<FaceIndices>,
}

impl ObjObject {
    /// Create an empty object.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }

    /// Number of polygons in this object.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Vertex pool shared by all objects, plus the objects themselves.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjDocument {
    pub vertices: Vec<[f64; 3]>,
    pub objects: Vec<ObjObject>,
}

impl ObjDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total number of polygons across all objects.
    pub fn face_count(&self) -> usize {
        self.objects.iter().map(ObjObject::face_count).sum()
    }

    /// Look up an object by name.
    pub fn find_object(&self, name: &str) -> Option<&ObjObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Coordinate lists for every polygon of the object at `index`.
    ///
    /// Returns `None` if there is no such object. Indices were validated when
    /// the document was parsed; hand-built documents with dangling indices
    /// also yield `None`.
    pub fn object_polygons(&self, index: usize) -> Option<Vec<Vec<[f64; 3]>>> {
        let object = self.objects.get(index)?;
        object
            .faces
            .iter()
            .map(|face| {
                face.iter()
                    .map(|&i| self.vertices.get(i).copied())
                    .collect::<Option<Vec<_>>>()
            })
            .collect()
    }

    /// Multiply every vertex coordinate by `factor` (uniform scale about the origin).
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.vertices {
            v[0] *= factor;
            v[1] *= factor;
            v[2] *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn triangle_doc() -> ObjDocument {
        ObjDocument {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            objects: vec![ObjObject {
                name: "plate".into(),
                faces: vec![smallvec![0, 1, 2]],
            }],
        }
    }

    #[test]
    fn polygons_resolve_coordinates() {
        let doc = triangle_doc();
        let polys = doc.object_polygons(0).unwrap();
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0][1], [1.0, 0.0, 0.0]);
        assert!(doc.object_polygons(1).is_none());
    }

    #[test]
    fn dangling_index_yields_none() {
        let mut doc = triangle_doc();
        doc.objects[0].faces[0][2] = 7;
        assert!(doc.object_polygons(0).is_none());
    }

    #[test]
    fn scale_multiplies_all_vertices() {
        let mut doc = triangle_doc();
        doc.scale(2.5);
        assert_eq!(doc.vertices[1], [2.5, 0.0, 0.0]);
        assert_eq!(doc.vertices[2], [0.0, 2.5, 0.0]);
    }

    #[test]
    fn find_object_by_name() {
        let doc = triangle_doc();
        assert!(doc.find_object("plate").is_some());
        assert!(doc.find_object("keel").is_none());
        assert_eq!(doc.face_count(), 1);
    }
}
