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

//! src/core/mod.rs
//!
//! Core keyboard logic
//!
//! This module contains the fundamental data structures and algorithms
//! for keyboard dispatch, including:
//! - Type definitions for events, signals and listeners
//! - Key and combo normalisation
//! - Declaration validation with a key whitelist
//! - The last-in-first-out listener chain
//! - Shortcut tables and the input guard
//!
//! Nothing here touches a window system or the file system, so every piece
//! is unit-testable on its own.

pub mod chain;
pub mod filter;
pub mod normalizer;
pub mod shortcuts;
pub mod types;
pub mod validator;

pub use chain::Keyboard;
pub use filter::{filter_input_event, is_input_event};
pub use normalizer::{combo_from_event, normalize_key, stringify_key, KEY_MAP};
pub use shortcuts::{create_shortcuts, Shortcuts};
pub use types::*;
pub use validator::{validate_key, validated_combo, ValidationError};

#[cfg(test)]
mod tests;
