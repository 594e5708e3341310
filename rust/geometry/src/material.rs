// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plate materials and per-part physical parameters

use crate::error::{Error, Result};

/// Default plate thickness: 3 mm
pub const DEFAULT_THICKNESS: f64 = 0.003;

/// Common hull plate materials
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// 5083 marine aluminium, 2653 kg/m³
    Aluminum5083,
    /// High-density polyethylene, 970 kg/m³
    Hdpe,
    /// Any other material, density in kg/m³
    Custom(f64),
}

impl Material {
    /// Density in kg/m³
    pub fn density(&self) -> f64 {
        match self {
            Material::Aluminum5083 => 2653.0,
            Material::Hdpe => 970.0,
            Material::Custom(d) => *d,
        }
    }

    /// Look up a preset by name (`aluminum-5083`, `5083`, `hdpe`), case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "aluminum-5083" | "aluminium-5083" | "aluminum" | "aluminium" | "5083" => {
                Some(Material::Aluminum5083)
            }
            "hdpe" => Some(Material::Hdpe),
            _ => None,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Aluminum5083
    }
}

/// Physical parameters of one part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartProperties {
    /// kg/m³
    pub density: f64,
    /// m
    pub thickness: f64,
}

impl PartProperties {
    /// Validated constructor: both values must be finite and positive.
    pub fn new(density: f64, thickness: f64) -> Result<Self> {
        if !(density.is_finite() && density > 0.0) {
            return Err(Error::InvalidInput(format!(
                "density must be positive, got {}",
                density
            )));
        }
        if !(thickness.is_finite() && thickness > 0.0) {
            return Err(Error::InvalidInput(format!(
                "thickness must be positive, got {}",
                thickness
            )));
        }
        Ok(Self { density, thickness })
    }

    /// Plate of `material` with the given thickness
    pub fn of_material(material: Material, thickness: f64) -> Result<Self> {
        Self::new(material.density(), thickness)
    }

    /// Areal density (kg/m²)
    #[inline]
    pub fn areal_density(&self) -> f64 {
        self.density * self.thickness
    }
}

impl Default for PartProperties {
    /// 3 mm 5083 aluminium plate
    fn default() -> Self {
        Self {
            density: Material::Aluminum5083.density(),
            thickness: DEFAULT_THICKNESS,
        }
    }
}
