// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and exit codes for the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Failures with a dedicated exit code or message.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("total weight is zero; center of gravity is undefined")]
    DegenerateAssembly,

    #[error(transparent)]
    MalformedBoundary(hullmass_processing::Error),

    #[error("invalid scale factor: {0}")]
    InvalidScale(hullmass_geometry::Error),

    #[error("no .obj files found in {}", .0.display())]
    NoMeshFiles(PathBuf),

    #[error("no part named '{0}'")]
    UnknownPart(String),

    #[error("{}: {source}", .path.display())]
    Obj {
        path: PathBuf,
        #[source]
        source: hullmass_core::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::DegenerateAssembly | CliError::InvalidScale(_) => 2,
            CliError::MalformedBoundary(_) => 3,
            _ => 1,
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}
