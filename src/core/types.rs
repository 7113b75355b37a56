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

//! src/core/types.rs
//!
//! Core type definitions for keyboard dispatch
//!
//! This module defines the fundamental types used throughout the crate:
//! - `KeyEvent`: A raw key-press record (key name plus modifier flags)
//! - `EventTarget`: The element an event was dispatched to
//! - `Signal`: Whether dispatch continues to older listeners
//! - `KeyHandler`: A shared listener function with reference identity
//!
//! `KeyEvent` and `EventTarget` deserialise from DOM field names so records
//! captured from a browser (`{"key": "a", "metaKey": true}`) load unchanged.

use serde::Deserialize;
use std::fmt;
use std::rc::Rc;

/// The element a keyboard event was dispatched to
///
/// Only the two properties the input guard reads are carried.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventTarget {
    /// Element tag name (e.g., "INPUT", "DIV")
    #[serde(default)]
    pub tag_name: String,

    /// Whether the element is a content-editable region
    #[serde(default, rename = "isContentEditable")]
    pub content_editable: bool,
}

impl EventTarget {
    /// Create a target for a plain element with the given tag name
    pub fn element(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            content_editable: false,
        }
    }

    /// Create a content-editable target
    pub fn editable(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            content_editable: true,
        }
    }
}

/// A single key-press event
///
/// Every field is optional in the JSON form; missing modifiers
/// default to `false`. The dispatch layer only ever borrows events.
///
/// # Example
/// ```
/// use keyboard_manager::KeyEvent;
///
/// let event = KeyEvent::new("a").with_meta();
/// assert_eq!(event.key.as_deref(), Some("a"));
/// assert!(event.meta_key);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// Raw key identifier as reported by the platform (e.g., "a", "Escape")
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub shift_key: bool,

    #[serde(default)]
    pub ctrl_key: bool,

    #[serde(default)]
    pub alt_key: bool,

    #[serde(default)]
    pub meta_key: bool,

    /// Element the event was dispatched to, if known
    #[serde(default)]
    pub target: Option<EventTarget>,
}

impl KeyEvent {
    /// Create an event for `key` with no modifiers held
    pub fn new(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = Some(target);
        self
    }
}

/// Result of running a listener
///
/// `Propagate` hands the event on to older listeners; `Handled` stops
/// dispatch immediately.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Signal {
    /// Continue with the next (older) listener
    #[default]
    Propagate,
    /// The event was consumed
    Handled,
}

impl Signal {
    pub fn is_propagate(self) -> bool {
        self == Signal::Propagate
    }
}

impl From<bool> for Signal {
    /// `true` means "keep propagating", matching the browser listener convention.
    fn from(propagate: bool) -> Self {
        if propagate {
            Signal::Propagate
        } else {
            Signal::Handled
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Propagate => write!(f, "propagate"),
            Signal::Handled => write!(f, "handled"),
        }
    }
}

/// A keyboard listener: called with the event and its combo string
///
/// Handlers are compared by reference identity. Cloning a `KeyHandler`
/// yields the same handler (so it can be removed later), while wrapping
/// the same closure twice with [`KeyHandler::new`] yields two distinct
/// handlers.
#[derive(Clone)]
pub struct KeyHandler(Rc<dyn Fn(&KeyEvent, &str) -> Signal>);

impl KeyHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&KeyEvent, &str) -> Signal + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the handler
    pub fn call(&self, event: &KeyEvent, combo: &str) -> Signal {
        (self.0)(event, combo)
    }

    /// Reference identity comparison
    pub fn ptr_eq(&self, other: &KeyHandler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for KeyHandler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for KeyHandler {}

impl fmt::Debug for KeyHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyHandler({:p})", Rc::as_ptr(&self.0))
    }
}
