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

//! Keyboard Manager
//!
//! Normalises raw key-press events into canonical combo strings and routes
//! them through a last-in-first-out chain of listeners.
//!
//! # Features
//!
//! - **Canonical combos:** `Cmd+A`, `a+meta` and a live ⌘A event all become `"a meta"`
//! - **LIFO dispatch:** The newest listener gets first refusal on every event
//! - **Stop propagation:** Any listener can consume an event with `Signal::Handled`
//! - **Nested scopes:** A whole chain can be registered as a listener on another
//! - **Shortcut tables:** Declare shortcuts as data, validated at build time
//! - **Input guard:** Skip shortcuts while the user types into a text field
//! - **Keymap files:** Load shortcut tables from disk with conflict detection
//!
//! # Architecture
//!
//! - **`core`:** Events, normalisation, validation, the listener chain
//! - **`keymap`:** Keymap file parsing, loading and conflict detection
//!
//! The core is single-threaded and synchronous. Listeners are `Rc`-based and
//! may add or remove listeners from inside a dispatch.
//!
//! # Examples
//!
//! ## Registering shortcuts
//!
//! ```
//! use keyboard_manager::{KeyEvent, Keyboard, Shortcuts, Signal};
//!
//! let keyboard = Keyboard::new();
//!
//! let mut shortcuts = Shortcuts::new();
//! shortcuts.bind(["cmd", "a"], |_, _| Signal::Handled)?;
//! keyboard.add_listener(&shortcuts.into_handler(Signal::Propagate));
//!
//! assert_eq!(keyboard.dispatch(&KeyEvent::new("a").with_meta()), Signal::Handled);
//! assert_eq!(keyboard.dispatch(&KeyEvent::new("a")), Signal::Propagate);
//! # Ok::<(), keyboard_manager::ValidationError>(())
//! ```
//!
//! ## Normalising keys
//!
//! ```
//! use keyboard_manager::{normalize_key, stringify_key};
//!
//! assert_eq!(normalize_key("Cmd"), "meta");
//! assert_eq!(stringify_key(["shift", "ctrl", "Z"]), "control shift z");
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod core;
pub mod keymap;

// Re-export commonly used types for convenience
pub use crate::core::{
    combo_from_event, create_shortcuts, filter_input_event, is_input_event, normalize_key,
    stringify_key, validated_combo, EventTarget, KeyEvent, KeyHandler, Keyboard, Shortcuts,
    Signal, ValidationError,
};
