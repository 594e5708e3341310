// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loading parts from OBJ files and directories.
//!
//! Every OBJ object becomes one part named `<file stem>/<object name>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hullmass_core::{parse_obj, ObjDocument};
use hullmass_geometry::{Mesh, PartProperties};
use hullmass_processing::{MaterialOverrides, Part, PartHandle};

use crate::error::CliError;

/// Expands directories into their `.obj` files, sorted by path.
pub fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("cannot read directory {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_obj(p))
                .collect();
            if found.is_empty() {
                return Err(CliError::NoMeshFiles(path.clone()).into());
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_obj(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("obj"))
}

/// Reads and parses one OBJ file.
pub fn load_document(path: &Path) -> Result<ObjDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    parse_obj(&text).map_err(|source| {
        CliError::Obj {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".into())
}

/// Loads every object of every file as a part.
///
/// Properties start from `base`, then `overrides` is applied per handle.
pub fn load_parts(
    paths: &[PathBuf],
    base: PartProperties,
    overrides: Option<&MaterialOverrides>,
) -> Result<Vec<Part>> {
    let mut parts = Vec::new();
    for file in expand_paths(paths)? {
        let doc = load_document(&file)?;
        let stem = file_stem(&file);
        tracing::debug!(
            file = %file.display(),
            objects = doc.object_count(),
            faces = doc.face_count(),
            "Loaded OBJ"
        );

        for (index, object) in doc.objects.iter().enumerate() {
            let handle = PartHandle::new(format!("{}/{}", stem, object.name));
            let mesh = Mesh::from_obj_object(&doc, index)
                .with_context(|| format!("building mesh for {}", handle))?;
            let properties = match overrides {
                Some(overrides) => overrides.resolve(&handle, base)?,
                None => base,
            };
            parts.push(Part::new(handle, mesh, properties));
        }
    }
    Ok(parts)
}

/// Reads a JSON overrides file.
pub fn load_overrides(path: &Path) -> Result<MaterialOverrides> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    MaterialOverrides::from_json(&text).with_context(|| format!("in {}", path.display()))
}
