// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::part::PartHandle;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] hullmass_geometry::Error),

    #[error(transparent)]
    Topology(#[from] hullmass_topology::Error),

    #[error("part {handle}: {source}")]
    Part {
        handle: PartHandle,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid material overrides: {0}")]
    Overrides(#[from] serde_json::Error),

    #[error("DXF export unavailable: {0}")]
    UnsupportedExport(String),
}

impl Error {
    /// Attaches the part the error came from.
    pub fn in_part(self, handle: &PartHandle) -> Self {
        Error::Part {
            handle: handle.clone(),
            source: Box::new(self),
        }
    }

    /// True when the root cause is an ambiguous open boundary.
    pub fn is_malformed_boundary(&self) -> bool {
        match self {
            Error::Topology(hullmass_topology::Error::MalformedBoundary { .. }) => true,
            Error::Part { source, .. } => source.is_malformed_boundary(),
            _ => false,
        }
    }

    /// True when the root cause is a zero or unusable reference distance.
    pub fn is_invalid_scale(&self) -> bool {
        match self {
            Error::Geometry(
                hullmass_geometry::Error::ZeroDistance | hullmass_geometry::Error::InvalidInput(_),
            ) => true,
            Error::Part { source, .. } => source.is_invalid_scale(),
            _ => false,
        }
    }
}
