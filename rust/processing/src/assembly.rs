// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly measurement with parallel per-part extraction.
//!
//! Parts are independent, so their volume, area and weight are measured on
//! the rayon pool. The weighted CG reduction then runs sequentially in input
//! order, which keeps the floating-point result identical from run to run.

use rayon::prelude::*;

use hullmass_geometry::{
    aggregate_center_of_gravity, all_faces, measure_part, selected, MeasurementResult,
};

use crate::part::{Part, PartHandle};
use crate::report::{AggregateReport, AssemblyReport, PartReport};
use crate::sink::{WeightSink, CG_HANDLE};

fn measure(part: &Part) -> MeasurementResult {
    match &part.selection {
        Some(mask) => measure_part(&part.mesh, &part.properties, selected(mask)),
        None => measure_part(&part.mesh, &part.properties, all_faces),
    }
}

/// Measures every part and the assembly center of gravity.
pub fn measure_assembly(parts: &[Part]) -> AssemblyReport {
    let start = std::time::Instant::now();
    tracing::debug!(parts = parts.len(), "Measuring parts");

    let measurements: Vec<MeasurementResult> = parts.par_iter().map(measure).collect();

    let reports: Vec<PartReport> = parts
        .iter()
        .zip(&measurements)
        .map(|(part, m)| {
            if m.uses_surface_centroid() {
                tracing::warn!(
                    part = %part.handle,
                    "Enclosed volume is zero, using the surface centroid"
                );
            } else if m.degenerate_volume {
                tracing::warn!(
                    part = %part.handle,
                    "Enclosed volume is zero, centroid is not reliable"
                );
            } else if m.is_inverted() {
                tracing::warn!(
                    part = %part.handle,
                    signed_volume = m.signed_volume,
                    "Faces are wound inward"
                );
            }
            tracing::info!(
                part = %part.handle,
                volume = m.volume,
                area = m.surface_area,
                weight = m.weight,
                "Measured part"
            );
            PartReport::new(part.handle.clone(), m, &part.properties)
        })
        .collect();

    let aggregate =
        aggregate_center_of_gravity(measurements.iter().map(|m| (m.weight, m.weight_center())));
    let unreliable_parts = measurements
        .iter()
        .filter(|m| m.uses_surface_centroid())
        .count();

    if aggregate.degenerate {
        tracing::warn!(parts = parts.len(), "Total weight is zero, no center of gravity");
    } else {
        let cg = aggregate.center_of_gravity;
        tracing::info!(
            total_weight = aggregate.total_weight,
            cg_x = cg.x,
            cg_y = cg.y,
            cg_z = cg.z,
            unreliable_parts,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Assembly measured"
        );
    }

    AssemblyReport {
        parts: reports,
        aggregate: AggregateReport {
            unreliable_parts,
            ..AggregateReport::from(&aggregate)
        },
    }
}

/// Like [`measure_assembly`], also handing each weight to `sink`.
///
/// The sink sees every part in input order, then the assembly total under
/// [`CG_HANDLE`].
pub fn measure_assembly_with_sink<S>(parts: &[Part], sink: &mut S) -> AssemblyReport
where
    S: WeightSink + ?Sized,
{
    let report = measure_assembly(parts);
    for part in &report.parts {
        sink.annotate(&part.handle, part.weight);
    }
    sink.annotate(&PartHandle::new(CG_HANDLE), report.aggregate.total_weight);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::WeightAnnotations;
    use approx::assert_relative_eq;
    use hullmass_geometry::{translation, unit_cube, Mesh, PartProperties};

    fn cube_at(name: &str, x: f64) -> Part {
        Part::new(
            name,
            unit_cube().transformed(&translation(x, 0.0, 0.0)),
            PartProperties::default(),
        )
    }

    #[test]
    fn two_equal_parts_balance_between_them() {
        let parts = vec![cube_at("a", 0.0), cube_at("b", 2.0)];
        let report = measure_assembly(&parts);

        assert_eq!(report.parts.len(), 2);
        assert!(!report.is_degenerate());
        let single = 6.0 * 0.003 * 2653.0;
        assert_relative_eq!(report.aggregate.total_weight, 2.0 * single, epsilon = 1e-9);
        let cg = report.aggregate.center_of_gravity;
        assert_relative_eq!(cg[0], 1.5, epsilon = 1e-9);
        assert_relative_eq!(cg[1], 0.5, epsilon = 1e-9);
        assert_relative_eq!(cg[2], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn selection_limits_area_and_weight() {
        let mut mask = vec![false; 6];
        mask[0] = true;
        mask[1] = true;
        let parts = vec![cube_at("plate", 0.0).with_selection(mask)];
        let report = measure_assembly(&parts);

        let part = report.part("plate").unwrap();
        assert_eq!(part.face_count, 2);
        assert_relative_eq!(part.surface_area, 2.0, epsilon = 1e-12);
        // Volume still covers the whole closed mesh
        assert_relative_eq!(part.volume, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_assembly_is_degenerate() {
        let report = measure_assembly(&[]);
        assert!(report.is_degenerate());
        assert_eq!(report.aggregate.center_of_gravity, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_mesh_part_is_flagged() {
        let parts = vec![Part::new("ghost", Mesh::new(), PartProperties::default())];
        let report = measure_assembly(&parts);
        assert!(report.parts[0].degenerate_volume);
        assert_eq!(report.degenerate_parts().count(), 1);
        assert!(report.is_degenerate());
    }

    fn plate_at(name: &str, x: f64) -> Part {
        let plate = Mesh::from_polygons(&[vec![
            [x, 0.0, 0.0],
            [x + 1.0, 0.0, 0.0],
            [x + 1.0, 1.0, 0.0],
            [x, 1.0, 0.0],
        ]])
        .unwrap();
        Part::new(name, plate, PartProperties::default())
    }

    #[test]
    fn open_plates_balance_at_their_surface_centroids() {
        let parts = vec![plate_at("port", 10.0), plate_at("starboard", 12.0)];
        let report = measure_assembly(&parts);

        assert!(report.parts.iter().all(|p| p.degenerate_volume));
        assert!(!report.is_degenerate());
        assert_eq!(report.aggregate.unreliable_parts, 2);
        let cg = report.aggregate.center_of_gravity;
        assert_relative_eq!(cg[0], 11.5, epsilon = 1e-9);
        assert_relative_eq!(cg[1], 0.5, epsilon = 1e-9);
        assert_relative_eq!(cg[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(report.parts[0].surface_centroid[0], 10.5, epsilon = 1e-12);
    }

    #[test]
    fn closed_parts_are_not_unreliable() {
        let report = measure_assembly(&[cube_at("a", 0.0), plate_at("deck", 4.0)]);
        assert_eq!(report.aggregate.unreliable_parts, 1);

        let closed = measure_assembly(&[cube_at("a", 0.0)]);
        assert_eq!(closed.aggregate.unreliable_parts, 0);
    }

    #[test]
    fn sink_receives_parts_then_cg() {
        let parts = vec![cube_at("a", 0.0), cube_at("b", 2.0)];
        let mut sink = WeightAnnotations::new();
        let report = measure_assembly_with_sink(&parts, &mut sink);

        let handles: Vec<&str> = sink.entries().iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(handles, vec!["a", "b", CG_HANDLE]);
        assert_eq!(sink.get(CG_HANDLE), Some(report.aggregate.total_weight));
        assert_eq!(sink.get("a"), Some(report.parts[0].weight));
    }

    #[test]
    fn inverted_part_reports_negative_signed_volume() {
        let parts = vec![Part::new(
            "inside-out",
            unit_cube().flipped(),
            PartProperties::default(),
        )];
        let report = measure_assembly(&parts);
        let part = &report.parts[0];
        assert!(part.inverted);
        assert_relative_eq!(part.signed_volume, -1.0, epsilon = 1e-12);
        assert_relative_eq!(part.volume, 1.0, epsilon = 1e-12);
    }
}
