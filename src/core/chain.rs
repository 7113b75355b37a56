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

//! src/core/chain.rs
//!
//! Last-in-first-out listener chain
//!
//! A `Keyboard` holds an ordered, duplicate-free set of listeners. Dispatch
//! walks them from the most recently added to the oldest, stopping at the
//! first one that returns anything other than `Signal::Propagate`.
//!
//! The newest listener is usually the most local one (a focused widget
//! registered after the page-wide shortcuts), so it gets first refusal.
//! Returning `Propagate` delegates to the older, broader listeners.
//!
//! # Re-entrancy
//! Dispatch copies the listener order before running anything and holds no
//! borrow while a listener runs. Listeners may therefore add or remove
//! listeners (or dispatch again) from inside a callback; changes apply to
//! the next dispatch, never the one in progress.
//!
//! # Nesting
//! `Keyboard::listener` turns a whole chain into a single `KeyHandler`, so a
//! scoped chain can be registered on a global one.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

use crate::core::normalizer::combo_from_event;
use crate::core::types::{KeyEvent, KeyHandler, Signal};

/// Keyboard manager: an ordered set of listeners with LIFO dispatch
///
/// `Keyboard` is a handle; clones share the same listener set.
///
/// # Example
/// ```
/// use keyboard_manager::{KeyEvent, KeyHandler, Keyboard, Signal};
///
/// let keyboard = Keyboard::new();
/// keyboard.add_listener(&KeyHandler::new(|_, combo| {
///     if combo == "a meta" { Signal::Handled } else { Signal::Propagate }
/// }));
///
/// assert_eq!(keyboard.dispatch(&KeyEvent::new("a").with_meta()), Signal::Handled);
/// assert_eq!(keyboard.dispatch(&KeyEvent::new("a")), Signal::Propagate);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Keyboard {
    /// Listeners in registration order (oldest first)
    listeners: Rc<RefCell<Vec<KeyHandler>>>,
}

impl Keyboard {
    /// Creates a keyboard with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    ///
    /// Adding a listener that is already registered is a no-op; it keeps
    /// its original position. Returns whether the listener was inserted.
    pub fn add_listener(&self, listener: &KeyHandler) -> bool {
        let mut listeners = self.listeners.borrow_mut();

        if listeners.iter().any(|l| l.ptr_eq(listener)) {
            trace!(?listener, "listener already registered");
            return false;
        }

        listeners.push(listener.clone());
        debug!(?listener, total = listeners.len(), "listener added");
        true
    }

    /// Unregisters a listener by identity.
    ///
    /// Removing an unknown listener is a no-op. Returns whether a listener
    /// was removed.
    pub fn remove_listener(&self, listener: &KeyHandler) -> bool {
        let mut listeners = self.listeners.borrow_mut();

        match listeners.iter().position(|l| l.ptr_eq(listener)) {
            Some(index) => {
                listeners.remove(index);
                debug!(?listener, total = listeners.len(), "listener removed");
                true
            }
            None => {
                trace!(?listener, "listener not registered");
                false
            }
        }
    }

    /// Whether `listener` is currently registered
    pub fn contains(&self, listener: &KeyHandler) -> bool {
        self.listeners.borrow().iter().any(|l| l.ptr_eq(listener))
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Computes the event's combo and runs the chain.
    ///
    /// Returns `Signal::Handled` when a listener stopped the event and
    /// `Signal::Propagate` when every listener (if any) let it through.
    pub fn dispatch(&self, event: &KeyEvent) -> Signal {
        let combo = combo_from_event(event);
        self.listen(event, &combo, Signal::Propagate)
    }

    /// Runs the chain for an already-computed combo.
    ///
    /// `fallback` is returned when no listener stopped the event.
    pub fn listen(&self, event: &KeyEvent, combo: &str, fallback: Signal) -> Signal {
        // Snapshot so listeners can mutate the chain mid-dispatch
        let snapshot: Vec<KeyHandler> = self.listeners.borrow().clone();

        trace!(combo, listeners = snapshot.len(), "dispatching");

        for (index, listener) in snapshot.iter().enumerate().rev() {
            let signal = listener.call(event, combo);

            if !signal.is_propagate() {
                debug!(combo, index, "dispatch stopped");
                return Signal::Handled;
            }
        }

        fallback
    }

    /// Exposes the whole chain as a single listener.
    ///
    /// The returned handler reports `Signal::Handled` if any listener in
    /// this chain stopped the event, and `fallback` otherwise. Register it
    /// on another keyboard to nest scopes.
    ///
    /// # Panics
    /// The handler dispatches into this chain. Registering it on this same
    /// keyboard (directly or through a cycle of nested keyboards) makes
    /// dispatch recurse until the stack overflows.
    pub fn listener(&self, fallback: Signal) -> KeyHandler {
        let keyboard = self.clone();
        KeyHandler::new(move |event, combo| keyboard.listen(event, combo, fallback))
    }

    /// Entry point for an event loop.
    ///
    /// The returned closure computes the combo and dispatches; the signal is
    /// discarded since the event source has nothing to propagate to.
    pub fn handler(&self) -> impl Fn(&KeyEvent) + 'static {
        let keyboard = self.clone();
        move |event: &KeyEvent| {
            keyboard.dispatch(event);
        }
    }
}
