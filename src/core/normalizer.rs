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

//! src/core/normalizer.rs
//!
//! Key and combo canonicalisation
//!
//! Every key name, whether it comes from a live event or from a declared
//! shortcut, goes through the same pipeline:
//! 1. Lower-case it
//! 2. Replace well-known aliases (`cmd` → `meta`, `esc` → `escape`, ...)
//! 3. Collect the tokens into a set, sort, and join with a single space
//!
//! Because both sides share the pipeline, a combo computed from an event and
//! a combo computed from a shortcut declaration compare by plain string
//! equality.
//!
//! # Example
//! ```
//! use keyboard_manager::core::normalizer::{combo_from_event, stringify_key};
//! use keyboard_manager::KeyEvent;
//!
//! let event = KeyEvent::new("A").with_meta();
//! assert_eq!(combo_from_event(&event), "a meta");
//! assert_eq!(stringify_key(["cmd", "a"]), "a meta");
//! ```

use std::collections::BTreeSet;

use crate::core::types::KeyEvent;

/// Key name aliases
///
/// Source: https://github.com/madrobby/keymaster (keymaster.js `_MAP`/`_MODIFIERS`),
/// rewritten to DOM `KeyboardEvent.key` values.
pub const KEY_MAP: &[(&str, &str)] = &[
    ("option", "alt"),
    ("ctrl", "control"),
    ("os", "meta"),
    ("cmd", "meta"),
    ("command", "meta"),
    ("caps", "capslock"),
    ("return", "enter"),
    ("esc", "escape"),
    ("space", " "),
    ("spacebar", " "),
    ("left", "arrowleft"),
    ("up", "arrowup"),
    ("right", "arrowright"),
    ("down", "arrowdown"),
    ("scroll", "scrolllock"),
    ("del", "delete"),
    ("apps", "contextmenu"),
];

/// Separator between tokens in a combo string
pub const COMBO_SEPARATOR: &str = " ";

/// Look up an alias for an already lower-cased key name
pub fn alias(lowercase: &str) -> Option<&'static str> {
    KEY_MAP
        .iter()
        .find(|(from, _)| *from == lowercase)
        .map(|(_, to)| *to)
}

/// Normalise a single key name
///
/// Total over all inputs: unknown names come back lower-cased.
pub fn normalize_key(key: &str) -> String {
    let value = key.to_lowercase();

    match alias(&value) {
        Some(mapped) => mapped.to_string(),
        None => value,
    }
}

/// Build the canonical combo string for an event
///
/// The token set holds the normalised key plus `shift`, `control`, `alt`
/// and `meta` for each held modifier. A key that is itself a modifier
/// collapses with its flag (`Shift` + shiftKey → `"shift"`). Events without
/// a key contribute only their modifiers.
pub fn combo_from_event(event: &KeyEvent) -> String {
    let mut keys: Vec<&str> = Vec::with_capacity(5);

    if let Some(key) = event.key.as_deref() {
        keys.push(key);
    }
    if event.shift_key {
        keys.push("shift");
    }
    if event.ctrl_key {
        keys.push("control");
    }
    if event.alt_key {
        keys.push("alt");
    }
    if event.meta_key {
        keys.push("meta");
    }

    stringify_key(keys)
}

/// Map a list of raw key names to a combo string
///
/// Order and duplicates in the input do not matter:
/// `["meta", "a"]`, `["a", "cmd"]` and `["A", "meta", "meta"]` all produce
/// `"a meta"`.
pub fn stringify_key<I, S>(keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: BTreeSet<String> = keys
        .into_iter()
        .map(|key| normalize_key(key.as_ref()))
        .collect();

    join_tokens(&tokens)
}

/// Join an already-sorted token set
pub(crate) fn join_tokens(tokens: &BTreeSet<String>) -> String {
    tokens
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(COMBO_SEPARATOR)
}
