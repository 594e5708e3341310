// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rescaling an assembly to a known reference length.

use hullmass_geometry::{distance_between_points, scale_factor, Point3};

use crate::error::Result;
use crate::part::Part;

/// Scales every part about the world origin so that the distance from `p1`
/// to `p2` becomes `target`. Returns the applied factor.
///
/// Nothing is modified when the factor cannot be derived.
pub fn scale_to_reference(
    parts: &mut [Part],
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    target: f64,
) -> Result<f64> {
    let measured = distance_between_points(p1, p2);
    let factor = scale_factor(measured, target)?;

    for part in parts.iter_mut() {
        part.mesh = part.mesh.scaled(factor);
    }
    tracing::info!(measured, target, factor, parts = parts.len(), "Scaled assembly");
    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hullmass_geometry::{compute_volume_and_centroid, unit_cube, PartProperties};

    #[test]
    fn doubles_reference_length() {
        let mut parts = vec![Part::new("cube", unit_cube(), PartProperties::default())];
        let factor = scale_to_reference(
            &mut parts,
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            2.0,
        )
        .unwrap();

        assert_relative_eq!(factor, 2.0);
        let vc = compute_volume_and_centroid(&parts[0].mesh);
        assert_relative_eq!(vc.signed_volume, 8.0, epsilon = 1e-12);
        assert_relative_eq!(vc.centroid, Point3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_reference_leaves_parts_untouched() {
        let mut parts = vec![Part::new("cube", unit_cube(), PartProperties::default())];
        let p = Point3::new(0.3, 0.3, 0.3);
        let err = scale_to_reference(&mut parts, &p, &p, 2.0).unwrap_err();

        assert!(err.is_invalid_scale());
        assert_eq!(parts[0].mesh, unit_cube());
    }
}
