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

//! Input guard: keeps shortcuts quiet while the user is typing

use tracing::trace;

use crate::core::types::{KeyEvent, KeyHandler, Signal};

/// Tag names of text-entry controls
const INPUT_TAGS: &[&str] = &["INPUT", "SELECT", "TEXTAREA"];

/// Checks if a keyboard event originated from a text-entry control.
pub fn is_input_event(event: &KeyEvent) -> bool {
    event.target.as_ref().is_some_and(|target| {
        target.content_editable
            || INPUT_TAGS
                .iter()
                .any(|tag| target.tag_name.eq_ignore_ascii_case(tag))
    })
}

/// Wraps a listener so it is skipped for input events.
///
/// Skipped events return `Signal::Propagate`, so older listeners still see
/// them.
pub fn filter_input_event(listener: KeyHandler) -> KeyHandler {
    KeyHandler::new(move |event, combo| {
        if is_input_event(event) {
            trace!(combo, "skipping listener for input event");
            Signal::Propagate
        } else {
            listener.call(event, combo)
        }
    })
}
