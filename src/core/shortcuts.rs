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

//! Declarative shortcut tables
//!
//! Applications describe shortcuts as data (combo → handler) and turn the
//! table into one listener for the `Keyboard` chain.
//!
//! - `create_shortcuts` wraps a ready-made map, keys used verbatim
//! - `Shortcuts` builds a map from raw key lists, validating and
//!   normalising each declaration and rejecting duplicates up front

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::core::types::{KeyEvent, KeyHandler, Signal};
use crate::core::validator::{validated_combo, ValidationError};

/// Create a listener from a combo → handler map.
///
/// The listener looks the combo up by exact string match. On a hit it
/// returns whatever the bound handler returns; on a miss it returns
/// `fallback`.
pub fn create_shortcuts(shortcuts: HashMap<String, KeyHandler>, fallback: Signal) -> KeyHandler {
    KeyHandler::new(move |event, combo| match shortcuts.get(combo) {
        Some(handler) => {
            trace!(combo, "shortcut matched");
            handler.call(event, combo)
        }
        None => fallback,
    })
}

/// Builder for validated shortcut tables
///
/// # Example
/// ```
/// use keyboard_manager::{KeyEvent, Keyboard, Shortcuts, Signal};
///
/// let mut shortcuts = Shortcuts::new();
/// shortcuts.bind(["cmd", "s"], |_, _| Signal::Handled)?;
///
/// let keyboard = Keyboard::new();
/// keyboard.add_listener(&shortcuts.into_handler(Signal::Propagate));
///
/// assert_eq!(keyboard.dispatch(&KeyEvent::new("s").with_meta()), Signal::Handled);
/// # Ok::<(), keyboard_manager::core::ValidationError>(())
/// ```
#[derive(Debug, Default)]
pub struct Shortcuts {
    bindings: HashMap<String, KeyHandler>,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a handler to the combo described by `keys`.
    ///
    /// Returns the canonical combo the handler was bound under.
    ///
    /// # Errors
    /// - Any `ValidationError` from `validated_combo` for malformed key names
    /// - `ValidationError::DuplicateCombo` if the combo is already bound
    pub fn bind<I, S, F>(&mut self, keys: I, handler: F) -> Result<String, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&KeyEvent, &str) -> Signal + 'static,
    {
        self.bind_handler(keys, KeyHandler::new(handler))
    }

    /// Same as `bind`, for an existing `KeyHandler`
    pub fn bind_handler<I, S>(&mut self, keys: I, handler: KeyHandler) -> Result<String, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let combo = validated_combo(keys)?;

        if self.bindings.contains_key(&combo) {
            return Err(ValidationError::DuplicateCombo(combo));
        }

        debug!(combo = %combo, "shortcut bound");
        self.bindings.insert(combo.clone(), handler);
        Ok(combo)
    }

    /// Handler bound to an exact combo string
    pub fn get(&self, combo: &str) -> Option<&KeyHandler> {
        self.bindings.get(combo)
    }

    pub fn contains(&self, combo: &str) -> bool {
        self.bindings.contains_key(combo)
    }

    /// Bound combos in sorted order
    pub fn combos(&self) -> Vec<&str> {
        let mut combos: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        combos.sort_unstable();
        combos
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Freezes the table into a single listener (see `create_shortcuts`).
    pub fn into_handler(self, fallback: Signal) -> KeyHandler {
        create_shortcuts(self.bindings, fallback)
    }
}

impl From<Shortcuts> for HashMap<String, KeyHandler> {
    fn from(shortcuts: Shortcuts) -> Self {
        shortcuts.bindings
    }
}
