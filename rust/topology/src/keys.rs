// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology key types for arena-based storage.
//!
//! Each topology entity gets a unique, type-safe key for O(1) lookup in the
//! arena. Keys are created by `slotmap::SlotMap` (generational indices).

use slotmap::new_key_type;

new_key_type! {
    /// Key for a welded vertex (point in 3D space).
    pub struct VertexKey;

    /// Key for an undirected edge between two welded vertices.
    pub struct EdgeKey;

    /// Key for a face (polygon bounded by edges).
    pub struct FaceKey;
}
