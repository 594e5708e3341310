// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-off to an external DXF exporter.
//!
//! DXF writing belongs to a separate tool. The pipeline passes it the parts
//! and reports success or failure; a missing or failing exporter is never
//! fatal.

use std::path::Path;

use crate::error::{Error, Result};
use crate::part::Part;

/// An external tool able to write parts to a DXF file.
pub trait DxfExporter {
    fn export(&self, parts: &[Part], path: &Path) -> Result<()>;
}

/// Runs `exporter` if one is available. Returns whether a file was written.
pub fn export_dxf(exporter: Option<&dyn DxfExporter>, parts: &[Part], path: &Path) -> bool {
    let result = match exporter {
        Some(exporter) => exporter.export(parts, path),
        None => Err(Error::UnsupportedExport("no DXF exporter configured".into())),
    };

    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), parts = parts.len(), "Exported DXF");
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "DXF export failed");
            false
        }
    }
}
