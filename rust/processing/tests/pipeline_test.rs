// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Full pipeline: overrides, parallel measurement, sink, JSON report
use approx::assert_relative_eq;
use hullmass_geometry::{translation, unit_cube, PartProperties, Point3};
use hullmass_processing::{
    measure_assembly_with_sink, scale_to_reference, AssemblyReport, MaterialOverrides, Part,
    PartHandle, WeightAnnotations, CG_HANDLE,
};

fn assembly(overrides: &MaterialOverrides) -> Vec<Part> {
    (0..4)
        .map(|i| {
            let handle = PartHandle::new(format!("hull/frame{}", i));
            let props = overrides
                .resolve(&handle, PartProperties::default())
                .unwrap();
            let mesh = unit_cube().transformed(&translation(2.0 * i as f64, 0.0, 0.0));
            Part {
                handle,
                mesh,
                properties: props,
                selection: None,
            }
        })
        .collect()
}

#[test]
fn heavier_frame_pulls_the_cg() {
    let overrides = MaterialOverrides::from_json(
        r#"{ "parts": { "hull/frame3": { "thickness": 0.006 } } }"#,
    )
    .unwrap();
    let parts = assembly(&overrides);

    let mut sink = WeightAnnotations::new();
    let report = measure_assembly_with_sink(&parts, &mut sink);

    let light = 6.0 * 0.003 * 2653.0;
    let heavy = 2.0 * light;
    assert_relative_eq!(report.parts[3].weight, heavy, epsilon = 1e-9);
    assert_relative_eq!(report.aggregate.total_weight, 3.0 * light + heavy, epsilon = 1e-9);

    // Centroids at x = 0.5, 2.5, 4.5, 6.5
    let expected_x = (light * (0.5 + 2.5 + 4.5) + heavy * 6.5) / (3.0 * light + heavy);
    assert_relative_eq!(report.aggregate.center_of_gravity[0], expected_x, epsilon = 1e-9);
    assert_eq!(sink.len(), 5);
    assert_eq!(sink.get(CG_HANDLE), Some(report.aggregate.total_weight));
}

#[test]
fn parallel_measurement_is_reproducible() {
    let parts = assembly(&MaterialOverrides::default());
    let first = hullmass_processing::measure_assembly(&parts);
    for _ in 0..5 {
        assert_eq!(hullmass_processing::measure_assembly(&parts), first);
    }
}

#[test]
fn report_serializes_to_json() {
    let parts = assembly(&MaterialOverrides::default());
    let report = hullmass_processing::measure_assembly(&parts);
    let json = serde_json::to_string(&report).unwrap();
    let back: AssemblyReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.parts.len(), 4);
    assert_eq!(back.parts[0].handle.as_str(), "hull/frame0");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["parts"][0]["handle"], "hull/frame0");
    assert_eq!(value["aggregate"]["degenerate"], false);
}

#[test]
fn scaling_then_measuring() {
    let mut parts = assembly(&MaterialOverrides::default());
    let factor = scale_to_reference(
        &mut parts,
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(2.0, 0.0, 0.0),
        1.0,
    )
    .unwrap();
    assert_relative_eq!(factor, 0.5);

    let report = hullmass_processing::measure_assembly(&parts);
    // Each cube is now 0.5 m on a side
    assert_relative_eq!(report.parts[0].volume, 0.125, epsilon = 1e-12);
    assert_relative_eq!(report.parts[0].surface_area, 1.5, epsilon = 1e-12);
}
