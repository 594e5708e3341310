// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ serialization.

use std::fmt::Write;

use crate::document::ObjDocument;

/// Serialize a document to OBJ text.
///
/// All vertices are written first, followed by each object's `o` line and
/// its faces with 1-based indices.
pub fn write_obj(doc: &ObjDocument) -> String {
    let mut out = String::with_capacity(doc.vertices.len() * 32 + doc.face_count() * 16);

    // Writing into a String cannot fail
    for v in &doc.vertices {
        let _ = writeln!(out, "v {} {} {}", v[0], v[1], v[2]);
    }

    for object in &doc.objects {
        let _ = writeln!(out, "o {}", object.name);
        for face in &object.faces {
            out.push('f');
            for &i in face {
                let _ = write!(out, " {}", i + 1);
            }
            out.push('\n');
        }
    }

    out
}
