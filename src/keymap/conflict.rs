// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keymap conflict detection
//!
//! Bindings are indexed by canonical combo string, so declarations that
//! differ only in spelling (`cmd+a` vs `a+meta`) land in the same bucket.
//!
//! # Performance
//! - Add binding: O(1) average case
//! - Check conflict: O(1) average case
//! - List all conflicts: O(n log n) where n = number of unique combos

use std::collections::HashMap;

use crate::core::normalizer::stringify_key;
use crate::keymap::Binding;

/// Detects bindings that share a combo.
///
/// A conflict exists when a combo has two or more bindings.
#[derive(Debug, Default)]
pub struct ConflictDetector {
    /// Maps a canonical combo to all bindings using it.
    bindings: HashMap<String, Vec<Binding>>,
}

/// A combo declared by more than one binding.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The canonical combo string
    pub combo: String,

    /// All bindings using this combo (always 2 or more), in insertion order
    pub conflicting_bindings: Vec<Binding>,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding to the detector.
    pub fn add_binding(&mut self, binding: Binding) {
        self.bindings
            .entry(stringify_key(binding.keys()))
            .or_default()
            .push(binding);
    }

    /// Finds all conflicts, sorted by combo.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, bindings)| bindings.len() > 1)
            .map(|(combo, bindings)| Conflict {
                combo: combo.clone(),
                conflicting_bindings: bindings.clone(),
            })
            .collect();

        conflicts.sort_by(|a, b| a.combo.cmp(&b.combo));
        conflicts
    }

    /// Returns true if this combo has 2 or more bindings.
    pub fn has_conflict(&self, combo: &str) -> bool {
        self.bindings
            .get(combo)
            .map(|bindings| bindings.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of bindings tracked.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum()
    }
}
