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

//! Shortcut declaration validation
//!
//! Normalisation never fails: an unknown key simply never matches. That is
//! the right behaviour for live events but the wrong one for declarations,
//! where `"ctlr"` is a typo that would silently produce a dead shortcut.
//! This module checks declared key names against a WHITELIST so such
//! mistakes are rejected when the shortcut table is built, not discovered
//! later as a shortcut that never fires.
//!
//! A declared key is accepted when, after normalisation, it is:
//! - a single character as declared (`"a"`, `"/"`, `" "`), or
//! - an alias from `KEY_MAP`, or
//! - a named DOM key value (`"enter"`, `"arrowleft"`, `"f5"`, ...)

use std::collections::BTreeSet;
use thiserror::Error;

use crate::core::normalizer::{alias, join_tokens, normalize_key};

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Key name is empty or whitespace
    #[error("Empty key name")]
    EmptyKey,

    /// Multi-character key name with no alias and no named key match
    #[error("Unknown key name '{0}'")]
    UnknownKey(String),

    /// Shortcut declared with no keys at all
    #[error("Shortcut declares no keys")]
    EmptyCombo,

    /// Two declarations normalise to the same combo
    #[error("Combo '{0}' is already bound")]
    DuplicateCombo(String),
}

/// Named key values (lower-cased)
///
/// Source: https://developer.mozilla.org/en-US/docs/Web/API/UI_Events/Keyboard_event_key_values
/// Function keys are matched separately by `is_function_key`.
const NAMED_KEYS: &[&str] = &[
    // Modifiers
    "alt",
    "altgraph",
    "capslock",
    "control",
    "fn",
    "fnlock",
    "hyper",
    "meta",
    "numlock",
    "scrolllock",
    "shift",
    "super",
    "symbol",
    "symbollock",
    // Whitespace
    "enter",
    "tab",
    // Navigation
    "arrowdown",
    "arrowleft",
    "arrowright",
    "arrowup",
    "end",
    "home",
    "pagedown",
    "pageup",
    // Editing
    "backspace",
    "clear",
    "copy",
    "cut",
    "delete",
    "insert",
    "paste",
    "redo",
    "undo",
    // UI
    "contextmenu",
    "escape",
    "find",
    "help",
    "pause",
    "printscreen",
    // Media
    "mediaplaypause",
    "mediastop",
    "mediatracknext",
    "mediatrackprevious",
    "audiovolumedown",
    "audiovolumeup",
    "audiovolumemute",
    // Misc
    "dead",
    "unidentified",
];

/// Function keys F1-F24
fn is_function_key(token: &str) -> bool {
    let Some(digits) = token.strip_prefix('f') else {
        return false;
    };

    // Plain decimal only: no sign, no leading zero
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
        return false;
    }

    digits
        .parse::<u8>()
        .map(|n| (1..=24).contains(&n))
        .unwrap_or(false)
}

/// Whether a normalised token names a real key
pub fn is_known_key(token: &str) -> bool {
    token.chars().count() == 1 || NAMED_KEYS.contains(&token) || is_function_key(token)
}

/// Validate and normalise a single declared key name
///
/// Returns the canonical token on success.
pub fn validate_key(key: &str) -> Result<String, ValidationError> {
    // A lone space is the space bar, not an empty name
    if key.is_empty() || (key.trim().is_empty() && key != " ") {
        return Err(ValidationError::EmptyKey);
    }

    // Judged before lower-casing, which can lengthen a character ('İ' → "i̇")
    if key.chars().count() == 1 {
        return Ok(normalize_key(key));
    }

    let lowercase = key.to_lowercase();
    if alias(&lowercase).is_some() {
        return Ok(normalize_key(key));
    }

    let token = normalize_key(key);
    if is_known_key(&token) {
        Ok(token)
    } else {
        Err(ValidationError::UnknownKey(key.to_string()))
    }
}

/// Validated counterpart of `stringify_key`
///
/// Produces exactly the same string as `stringify_key` for valid input,
/// and fails fast on the first malformed key name.
pub fn validated_combo<I, S>(keys: I) -> Result<String, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = BTreeSet::new();

    for key in keys {
        tokens.insert(validate_key(key.as_ref())?);
    }

    if tokens.is_empty() {
        return Err(ValidationError::EmptyCombo);
    }

    Ok(join_tokens(&tokens))
}
