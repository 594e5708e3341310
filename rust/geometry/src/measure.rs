// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference-distance measurement and scale derivation
//!
//! Used to rescale a whole assembly so that a measured distance between two
//! picked vertices matches a known real-world length.

use nalgebra::Point3;

use crate::error::{Error, Result};

/// Euclidean distance between two points
#[inline]
pub fn distance_between_points(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    nalgebra::distance(p1, p2)
}

/// Distance between the two points of a vertex selection.
///
/// Anything other than exactly two points is an invalid selection.
pub fn distance_between_selected(points: &[Point3<f64>]) -> Result<f64> {
    match points {
        [a, b] => Ok(distance_between_points(a, b)),
        _ => Err(Error::InvalidSelection {
            count: points.len(),
        }),
    }
}

/// Uniform scale factor that turns `measured` into `target`.
///
/// A zero (or non-finite) measured distance has no meaningful factor and is
/// reported as [`Error::ZeroDistance`] rather than producing infinity.
pub fn scale_factor(measured: f64, target: f64) -> Result<f64> {
    if !measured.is_finite() || measured == 0.0 {
        return Err(Error::ZeroDistance);
    }
    if !(target.is_finite() && target > 0.0) {
        return Err(Error::InvalidInput(format!(
            "target length must be positive, got {}",
            target
        )));
    }
    Ok(target / measured.abs())
}
