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

//! Keymap files: shortcut tables declared as data.
//!
//! A keymap maps key combinations to named actions:
//!
//! ```text
//! # Editor shortcuts
//! $mod = cmd
//! bind = $mod, s, save
//! bind = $mod shift, p, command-palette
//! bind = , escape, close
//! ```
//!
//! Loading a keymap parses it, then validates every binding the same way
//! `Shortcuts::bind` would, so a typo in a key name is reported with its
//! line number instead of producing a shortcut that never fires.
//!
//! # Example
//!
//! ```
//! use keyboard_manager::keymap::Keymap;
//! use keyboard_manager::{KeyHandler, Keyboard, KeyEvent, Signal};
//!
//! let keymap = Keymap::parse("bind = cmd, s, save")?;
//! let shortcuts = keymap.to_shortcuts(|action| match action {
//!     "save" => Some(KeyHandler::new(|_, _| Signal::Handled)),
//!     _ => None,
//! })?;
//!
//! let keyboard = Keyboard::new();
//! keyboard.add_listener(&shortcuts.into_handler(Signal::Propagate));
//! assert_eq!(keyboard.dispatch(&KeyEvent::new("s").with_meta()), Signal::Handled);
//! # Ok::<(), keyboard_manager::keymap::KeymapError>(())
//! ```

pub mod conflict;
pub mod error;
pub mod parser;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::shortcuts::Shortcuts;
use crate::core::types::KeyHandler;
use crate::core::validator::validated_combo;

pub use conflict::{Conflict, ConflictDetector};
pub use error::KeymapError;

/// Default keymap location used by the CLI
pub const DEFAULT_KEYMAP_PATH: &str = "~/.config/keyboard-manager/keymap.conf";

/// One `bind = MODIFIERS, KEY, ACTION` line, exactly as written
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    /// Modifier key names (e.g., ["cmd", "shift"])
    pub modifiers: Vec<String>,

    /// Primary key name (e.g., "s", "Escape")
    pub key: String,

    /// Action name the combo triggers
    pub action: String,

    /// 1-based line number in the source file
    pub line: usize,
}

impl Binding {
    /// All declared key names: modifiers followed by the key
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.modifiers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.key.as_str()))
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.key == "," { parser::COMMA_KEY_NAME } else { self.key.as_str() };
        write!(f, "bind = {}, {}, {}", self.modifiers.join(" "), key, self.action)
    }
}

/// A parsed and validated keymap
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    /// Source file, if loaded from disk
    path: Option<PathBuf>,
    /// Bindings in file order, paired with their canonical combo
    entries: Vec<(String, Binding)>,
}

impl Keymap {
    /// Parses and validates keymap text.
    ///
    /// # Errors
    /// - `KeymapError::Parse` for syntax errors
    /// - `KeymapError::InvalidBinding` for malformed key names
    pub fn parse(content: &str) -> Result<Self, KeymapError> {
        let bindings = parser::parse_keymap(content)?;
        let mut entries = Vec::with_capacity(bindings.len());

        for binding in bindings {
            let combo = validated_combo(binding.keys()).map_err(|source| {
                KeymapError::InvalidBinding {
                    line: binding.line,
                    source,
                }
            })?;
            entries.push((combo, binding));
        }

        debug!(bindings = entries.len(), "keymap parsed");
        Ok(Self {
            path: None,
            entries,
        })
    }

    /// Loads a keymap file, expanding a leading `~`.
    pub fn load(path: &Path) -> Result<Self, KeymapError> {
        let expanded = expand_path(path)?;

        if !expanded.exists() {
            return Err(KeymapError::NotFound(expanded));
        }

        let content = fs::read_to_string(&expanded)?;
        let mut keymap = Self::parse(&content)?;

        info!(
            path = %expanded.display(),
            bindings = keymap.entries.len(),
            "keymap loaded"
        );

        keymap.path = Some(expanded);
        Ok(keymap)
    }

    /// Source file path, if loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Bindings in file order
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter().map(|(_, binding)| binding)
    }

    /// (canonical combo, binding) pairs in file order
    pub fn entries(&self) -> &[(String, Binding)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings whose combos collide, sorted by combo
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut detector = ConflictDetector::new();
        for binding in self.bindings() {
            detector.add_binding(binding.clone());
        }
        detector.find_conflicts()
    }

    /// Builds a shortcut table, resolving each action name to a handler.
    ///
    /// # Errors
    /// - `KeymapError::UnknownAction` when `resolve` returns `None`
    /// - `KeymapError::InvalidBinding` when two bindings share a combo
    pub fn to_shortcuts<F>(&self, mut resolve: F) -> Result<Shortcuts, KeymapError>
    where
        F: FnMut(&str) -> Option<KeyHandler>,
    {
        let mut shortcuts = Shortcuts::new();

        for binding in self.bindings() {
            let handler = resolve(&binding.action).ok_or_else(|| KeymapError::UnknownAction {
                action: binding.action.clone(),
                line: binding.line,
            })?;

            shortcuts
                .bind_handler(binding.keys(), handler)
                .map_err(|source| KeymapError::InvalidBinding {
                    line: binding.line,
                    source,
                })?;
        }

        Ok(shortcuts)
    }
}

/// Loads a keymap file (see `Keymap::load`).
pub fn load_keymap(path: &Path) -> Result<Keymap, KeymapError> {
    Keymap::load(path)
}

/// Expand a leading `~` in a path
fn expand_path(path: &Path) -> Result<PathBuf, KeymapError> {
    let raw = path
        .to_str()
        .ok_or_else(|| KeymapError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

#[cfg(test)]
mod tests;
