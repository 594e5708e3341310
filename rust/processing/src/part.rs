// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parts: one world-space mesh snapshot per scene object.

use std::fmt;

use serde::{Deserialize, Serialize};

use hullmass_geometry::{Mesh, PartProperties};

/// Opaque caller-supplied name for a part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartHandle(String);

impl PartHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartHandle {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PartHandle {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A mesh snapshot with its physical parameters.
#[derive(Debug, Clone)]
pub struct Part {
    pub handle: PartHandle,
    /// Already in world space.
    pub mesh: Mesh,
    pub properties: PartProperties,
    /// Per-face selection; when present only selected faces count toward
    /// surface area and weight.
    pub selection: Option<Vec<bool>>,
}

impl Part {
    pub fn new(handle: impl Into<PartHandle>, mesh: Mesh, properties: PartProperties) -> Self {
        Self {
            handle: handle.into(),
            mesh,
            properties,
            selection: None,
        }
    }

    pub fn with_selection(mut self, selection: Vec<bool>) -> Self {
        self.selection = Some(selection);
        self
    }
}
