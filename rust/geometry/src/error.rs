// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during geometry processing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Degenerate face: {count} vertices, at least 3 are required")]
    DegenerateFace { count: usize },

    #[error("Invalid selection: expected exactly 2 points, got {count}")]
    InvalidSelection { count: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Measured reference distance is zero, cannot derive a scale factor")]
    ZeroDistance,
}
