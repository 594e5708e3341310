// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-part material overrides, loaded from JSON.
//!
//! ```json
//! {
//!   "density": 2653.0,
//!   "thickness": 0.004,
//!   "parts": {
//!     "hull/keel": { "thickness": 0.008 },
//!     "hull/deck": { "material": "hdpe" }
//!   }
//! }
//! ```
//!
//! Resolution order for each field: part entry, then the file's defaults,
//! then the caller's base properties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hullmass_geometry::{Error as GeometryError, Material, PartProperties};

use crate::error::Result;
use crate::part::PartHandle;

/// Density and thickness settings; any field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOverride {
    /// Preset name (`aluminum-5083`, `hdpe`). An explicit `density` wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// kg/m³
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

impl MaterialOverride {
    fn apply(&self, base: PartProperties) -> Result<PartProperties> {
        let preset = match &self.material {
            Some(name) => Some(Material::from_name(name).ok_or_else(|| {
                GeometryError::InvalidInput(format!("unknown material '{}'", name))
            })?),
            None => None,
        };
        let density = self
            .density
            .or(preset.map(|m| m.density()))
            .unwrap_or(base.density);
        let thickness = self.thickness.unwrap_or(base.thickness);
        Ok(PartProperties::new(density, thickness)?)
    }
}

/// Defaults plus per-handle overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOverrides {
    #[serde(flatten)]
    pub defaults: MaterialOverride,
    pub parts: BTreeMap<String, MaterialOverride>,
}

impl MaterialOverrides {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Properties for `handle`, starting from `base`.
    pub fn resolve(&self, handle: &PartHandle, base: PartProperties) -> Result<PartProperties> {
        let with_defaults = self.defaults.apply(base)?;
        match self.parts.get(handle.as_str()) {
            Some(part) => part
                .apply(with_defaults)
                .map_err(|e| e.in_part(handle)),
            None => Ok(with_defaults),
        }
    }
}
