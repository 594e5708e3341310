// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # HullMass Core
//!
//! Mesh file reading for the HullMass workspace, built with
//! [nom](https://docs.rs/nom).
//!
//! Hull parts are exchanged as Wavefront OBJ files: every `o` object is one
//! part, faces keep their polygon shape and winding order (both matter for
//! signed volume and boundary analysis downstream).
//!
//! ## Quick Start
//!
//! ```rust
//! use hullmass_core::{parse_obj, write_obj};
//!
//! let doc = parse_obj("o plate\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
//! assert_eq!(doc.face_count(), 1);
//!
//! let polygons = doc.object_polygons(0).unwrap();
//! assert_eq!(polygons[0].len(), 4);
//!
//! let text = write_obj(&doc);
//! assert!(text.starts_with("v 0 0 0"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for parsed documents

pub mod document;
pub mod error;
pub mod parser;
pub mod writer;

pub use document::{FaceIndices, ObjDocument, ObjObject};
pub use error::{Error, Result};
pub use parser::{parse_directive, parse_obj, Directive, DEFAULT_OBJECT_NAME};
pub use writer::write_obj;
