// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch perimeter measurement (trim length of plate outlines).

use hullmass_topology::{MeshTopology, DEFAULT_WELD_TOLERANCE};

use crate::error::Result;
use crate::part::Part;
use crate::report::{PartPerimeter, PerimeterReport};

/// Perimeter of every part plus the total.
///
/// Stops at the first part with a malformed boundary; no partial total is
/// returned.
pub fn measure_perimeters(parts: &[Part]) -> Result<PerimeterReport> {
    measure_perimeters_with_tolerance(parts, DEFAULT_WELD_TOLERANCE)
}

/// [`measure_perimeters`], welding corners closer than `tolerance`.
pub fn measure_perimeters_with_tolerance(
    parts: &[Part],
    tolerance: f64,
) -> Result<PerimeterReport> {
    let mut report = PerimeterReport {
        parts: Vec::with_capacity(parts.len()),
        total: 0.0,
    };

    for part in parts {
        let perimeter = MeshTopology::from_mesh(&part.mesh, tolerance)
            .and_then(|topo| topo.perimeter_length())
            .map_err(|e| {
                tracing::warn!(part = %part.handle, error = %e, "Perimeter rejected");
                crate::error::Error::from(e).in_part(&part.handle)
            })?;
        tracing::info!(part = %part.handle, perimeter, "Measured perimeter");
        report.total += perimeter;
        report.parts.push(PartPerimeter {
            handle: part.handle.clone(),
            perimeter,
        });
    }

    Ok(report)
}
