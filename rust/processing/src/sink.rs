// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weight annotation sink.
//!
//! The host stores computed weights as object metadata. The pipeline only
//! hands over `(handle, weight)` pairs and never owns the objects.

use rustc_hash::FxHashMap;

use crate::part::PartHandle;

/// Handle under which the assembly total is annotated.
pub const CG_HANDLE: &str = "CG";

/// Receives one weight (kg) per part and one for the assembly.
pub trait WeightSink {
    fn annotate(&mut self, handle: &PartHandle, weight: f64);
}

/// Closures work as sinks.
impl<F> WeightSink for F
where
    F: FnMut(&PartHandle, f64),
{
    fn annotate(&mut self, handle: &PartHandle, weight: f64) {
        self(handle, weight)
    }
}

/// Sink that records every annotation, in call order.
#[derive(Debug, Clone, Default)]
pub struct WeightAnnotations {
    entries: Vec<(PartHandle, f64)>,
    index: FxHashMap<PartHandle, usize>,
}

impl WeightAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest weight recorded for a handle.
    pub fn get(&self, handle: &str) -> Option<f64> {
        self.index
            .get(&PartHandle::new(handle))
            .map(|&i| self.entries[i].1)
    }

    pub fn entries(&self) -> &[(PartHandle, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WeightSink for WeightAnnotations {
    fn annotate(&mut self, handle: &PartHandle, weight: f64) {
        self.index.insert(handle.clone(), self.entries.len());
        self.entries.push((handle.clone(), weight));
    }
}
