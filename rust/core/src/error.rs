// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh file reading.

use thiserror::Error;

/// Result type alias for OBJ reading.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading an OBJ document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A directive could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A face references a vertex that does not exist (yet).
    #[error("line {line}: vertex index {index} is out of range")]
    IndexOutOfRange { line: usize, index: i64 },

    /// A face has fewer than three vertices.
    #[error("line {line}: face has {count} vertices, at least 3 are required")]
    DegenerateFace { line: usize, count: usize },
}

impl Error {
    /// Returns the 1-based line number the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            Error::Parse { line, .. }
            | Error::IndexOutOfRange { line, .. }
            | Error::DegenerateFace { line, .. } => *line,
        }
    }
}
