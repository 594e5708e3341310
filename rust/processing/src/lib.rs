// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly processing pipeline shared by the CLI and host integrations.
//!
//! A caller hands over world-space mesh snapshots as [`Part`]s. The pipeline
//! measures them in parallel, reduces the center of gravity in a fixed
//! order, and returns serializable reports. Host side effects go through
//! narrow seams: [`WeightSink`] for weight metadata and [`DxfExporter`] for
//! drawing export.

pub mod assembly;
pub mod error;
pub mod export;
pub mod overrides;
pub mod part;
pub mod perimeter;
pub mod report;
pub mod scale;
pub mod sink;

pub use assembly::{measure_assembly, measure_assembly_with_sink};
pub use error::{Error, Result};
pub use export::{export_dxf, DxfExporter};
pub use overrides::{MaterialOverride, MaterialOverrides};
pub use part::{Part, PartHandle};
pub use perimeter::{measure_perimeters, measure_perimeters_with_tolerance};
pub use report::{AggregateReport, AssemblyReport, PartPerimeter, PartReport, PerimeterReport};
pub use scale::scale_to_reference;
pub use sink::{WeightAnnotations, WeightSink, CG_HANDLE};
