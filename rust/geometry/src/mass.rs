// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mass-property engine
//!
//! Enclosed volume and centroid come from the divergence theorem: every fan
//! triangle `(a, b, c)` closes a tetrahedron with the world origin whose
//! signed volume is `a · (b × c) / 6`. Summed over a closed, consistently
//! oriented surface the contributions outside the solid cancel, so the
//! result is exact for convex and concave hulls alike. The sign of the sum
//! tells the orientation: negative means the faces point inward.
//!
//! Hull parts are modelled as plate (shell) structures, so weight is
//! `thickness × density × surface area`, not `density × volume`. An open
//! plate encloses nothing, so its weight acts at the area centroid of the
//! counted faces instead of the volume centroid.

use nalgebra::{Point3, Vector3};

use crate::material::PartProperties;
use crate::mesh::{Face, Mesh};

/// Signed volume below which a part is treated as enclosing nothing
pub const VOLUME_EPSILON: f64 = 1e-12;

/// Volume integration result for one mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeAndCentroid {
    /// Raw signed volume (m³); negative for inward-facing meshes
    pub signed_volume: f64,
    /// Volume centroid in world space; the origin when `degenerate`
    pub centroid: Point3<f64>,
    /// Enclosed volume was zero, `centroid` must not be trusted
    pub degenerate: bool,
}

impl VolumeAndCentroid {
    /// Enclosed volume (m³), independent of orientation
    #[inline]
    pub fn volume(&self) -> f64 {
        self.signed_volume.abs()
    }

    /// Faces are wound inward (normals inverted)
    #[inline]
    pub fn is_inverted(&self) -> bool {
        !self.degenerate && self.signed_volume < 0.0
    }
}

/// Compute enclosed volume and volume centroid with the signed-tetrahedron method.
///
/// Polygons are fan-triangulated on vertex 0. A mesh enclosing no volume
/// (open sheet, empty mesh, flat panel) reports `degenerate = true` and a
/// centroid at the origin instead of dividing by zero.
pub fn compute_volume_and_centroid(mesh: &Mesh) -> VolumeAndCentroid {
    let mut volume = 0.0_f64;
    let mut moment = Vector3::<f64>::zeros();

    for [a, b, c] in mesh.triangles() {
        let v = a.coords.dot(&b.coords.cross(&c.coords)) / 6.0;
        volume += v;
        moment += (a.coords + b.coords + c.coords) * (v / 4.0);
    }

    if volume.abs() <= VOLUME_EPSILON {
        return VolumeAndCentroid {
            signed_volume: 0.0,
            centroid: Point3::origin(),
            degenerate: true,
        };
    }

    VolumeAndCentroid {
        signed_volume: volume,
        centroid: Point3::from(moment / volume),
        degenerate: false,
    }
}

/// Face count, summed area and area moment of the faces accepted by a filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceAreaSummary {
    pub face_count: usize,
    /// m²
    pub area: f64,
    /// Σ triangle area × triangle centroid
    pub moment: Vector3<f64>,
}

impl Default for FaceAreaSummary {
    fn default() -> Self {
        Self {
            face_count: 0,
            area: 0.0,
            moment: Vector3::zeros(),
        }
    }
}

impl FaceAreaSummary {
    /// Area-weighted centroid of the counted faces, `None` when they have no area
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.area > 0.0 && self.area.is_finite() {
            Some(Point3::from(self.moment / self.area))
        } else {
            None
        }
    }
}

/// Sum the area of faces for which `filter(index, face)` is true.
pub fn measure_faces<F>(mesh: &Mesh, filter: F) -> FaceAreaSummary
where
    F: Fn(usize, &Face) -> bool,
{
    let mut summary = FaceAreaSummary::default();
    for (_, face) in mesh
        .faces()
        .iter()
        .enumerate()
        .filter(|(i, face)| filter(*i, *face))
    {
        summary.face_count += 1;
        for [a, b, c] in face.triangles() {
            let area = (b - a).cross(&(c - a)).norm() * 0.5;
            summary.area += area;
            summary.moment += (a.coords + b.coords + c.coords) * (area / 3.0);
        }
    }
    summary
}

/// Surface area (m²) of the faces accepted by `filter`.
pub fn compute_surface_area<F>(mesh: &Mesh, filter: F) -> f64
where
    F: Fn(usize, &Face) -> bool,
{
    measure_faces(mesh, filter).area
}

/// Face filter accepting every face
#[inline]
pub fn all_faces(_index: usize, _face: &Face) -> bool {
    true
}

/// Face filter backed by a host selection mask.
///
/// Faces beyond the end of the mask count as unselected.
pub fn selected(mask: &[bool]) -> impl Fn(usize, &Face) -> bool + '_ {
    move |index, _| mask.get(index).copied().unwrap_or(false)
}

/// Plate weight (kg): `thickness × density × area`
#[inline]
pub fn compute_part_weight(area: f64, thickness: f64, density: f64) -> f64 {
    thickness * density * area
}

/// Everything measured for one part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// Enclosed volume (m³, absolute)
    pub volume: f64,
    /// Raw signed volume (m³)
    pub signed_volume: f64,
    /// Area of the counted faces (m²)
    pub surface_area: f64,
    /// Number of faces that contributed to `surface_area`
    pub face_count: usize,
    /// kg
    pub weight: f64,
    /// Volume centroid; the origin when `degenerate_volume`
    pub centroid: Point3<f64>,
    /// Area centroid of the counted faces; the origin when they have no area
    pub surface_centroid: Point3<f64>,
    pub degenerate_volume: bool,
}

impl MeasurementResult {
    /// Faces are wound inward
    #[inline]
    pub fn is_inverted(&self) -> bool {
        !self.degenerate_volume && self.signed_volume < 0.0
    }

    /// Point the part's weight acts at in the assembly CG.
    ///
    /// The volume centroid for closed parts, the surface centroid when the
    /// enclosed volume is zero.
    pub fn weight_center(&self) -> Point3<f64> {
        if self.degenerate_volume {
            self.surface_centroid
        } else {
            self.centroid
        }
    }

    /// Contributes weight at the surface centroid fallback
    #[inline]
    pub fn uses_surface_centroid(&self) -> bool {
        self.degenerate_volume && self.weight > 0.0
    }
}

/// Measure one part: volume, centroid, (filtered) area and plate weight.
pub fn measure_part<F>(mesh: &Mesh, properties: &PartProperties, filter: F) -> MeasurementResult
where
    F: Fn(usize, &Face) -> bool,
{
    let vc = compute_volume_and_centroid(mesh);
    let faces = measure_faces(mesh, filter);
    MeasurementResult {
        volume: vc.volume(),
        signed_volume: vc.signed_volume,
        surface_area: faces.area,
        face_count: faces.face_count,
        weight: compute_part_weight(faces.area, properties.thickness, properties.density),
        centroid: vc.centroid,
        surface_centroid: faces.centroid().unwrap_or_else(Point3::origin),
        degenerate_volume: vc.degenerate,
    }
}

/// Total weight and center of gravity of an assembly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    /// kg
    pub total_weight: f64,
    /// The origin when `degenerate`
    pub center_of_gravity: Point3<f64>,
    /// Total weight was not a positive finite number; `center_of_gravity` is meaningless
    pub degenerate: bool,
}

/// Weighted-moment reduction over `(weight, centroid)` pairs.
///
/// The reduction runs in iteration order, so a fixed input order gives
/// bit-for-bit reproducible results.
pub fn aggregate_center_of_gravity<I>(parts: I) -> AggregateResult
where
    I: IntoIterator<Item = (f64, Point3<f64>)>,
{
    let (total_weight, moment) = parts.into_iter().fold(
        (0.0, Vector3::zeros()),
        |(weight, moment): (f64, Vector3<f64>), (w, c)| (weight + w, moment + c.coords * w),
    );

    if !(total_weight > 0.0 && total_weight.is_finite()) {
        return AggregateResult {
            total_weight: 0.0,
            center_of_gravity: Point3::origin(),
            degenerate: true,
        };
    }

    AggregateResult {
        total_weight,
        center_of_gravity: Point3::from(moment / total_weight),
        degenerate: false,
    }
}
