// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology operations.

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during topology operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The edge set is not a set of stand-alone loops or isolated faces:
    /// open boundary edges coexist with edges joining faces, or some edge
    /// joins more than two faces. A perimeter would be ambiguous.
    #[error(
        "malformed boundary: {boundary_edges} boundary edges, {shared_edges} edges joining \
         2 faces, {non_manifold_edges} edges joining more than 2 faces; only stand-alone \
         loops or single unconnected faces are supported"
    )]
    MalformedBoundary {
        boundary_edges: usize,
        shared_edges: usize,
        non_manifold_edges: usize,
    },

    /// Welding tolerance must be finite and non-negative.
    #[error("invalid weld tolerance: {0}")]
    InvalidTolerance(f64),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
