// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation utilities
//!
//! Faces coming out of a modelling host are planar and, for hull plating,
//! convex in practice, so a fan from vertex 0 is enough. The fan keeps the
//! polygon's winding in every triangle, which the signed-volume integration
//! relies on.

/// Fan triangulation index triples for an `n`-gon, pivoting on vertex 0
///
/// Yields `n - 2` triangles; nothing for `n < 3`.
#[inline]
pub fn fan_triangulate(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (1..n.saturating_sub(1)).map(|i| [0, i, i + 1])
}
