use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::shortcuts::{create_shortcuts, Shortcuts};
use crate::core::types::{KeyEvent, KeyHandler, Signal};
use crate::core::validator::ValidationError;

fn counting(signal: Signal) -> (KeyHandler, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let handler = KeyHandler::new(move |_, _| {
        counter.set(counter.get() + 1);
        signal
    });
    (handler, calls)
}

#[test]
fn test_create_shortcuts_exact_match() {
    let (cb, calls) = counting(Signal::Handled);
    let mut map = HashMap::new();
    map.insert("meta a".to_string(), cb);

    let handler = create_shortcuts(map, Signal::Propagate);
    let event = KeyEvent::new("a").with_meta();

    assert_eq!(handler.call(&event, "meta a"), Signal::Handled);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_create_shortcuts_miss_returns_fallback() {
    let (cb, calls) = counting(Signal::Handled);
    let mut map = HashMap::new();
    map.insert("meta a".to_string(), cb);

    let handler = create_shortcuts(map, Signal::Propagate);
    let event = KeyEvent::new("a");

    assert_eq!(handler.call(&event, "a"), Signal::Propagate);
    // No normalisation on lookup: only the exact key matches
    assert_eq!(handler.call(&event, "a meta"), Signal::Propagate);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_create_shortcuts_custom_fallback() {
    let handler = create_shortcuts(HashMap::new(), Signal::Handled);
    assert_eq!(handler.call(&KeyEvent::new("x"), "x"), Signal::Handled);
}

#[test]
fn test_create_shortcuts_passes_through_callback_result() {
    let (cb, calls) = counting(Signal::Propagate);
    let mut map = HashMap::new();
    map.insert("x".to_string(), cb);

    let handler = create_shortcuts(map, Signal::Handled);

    // Callback's own Propagate wins over the fallback
    assert_eq!(handler.call(&KeyEvent::new("x"), "x"), Signal::Propagate);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_bind_normalises_declaration() {
    let mut shortcuts = Shortcuts::new();
    let combo = shortcuts.bind(["Cmd", "S"], |_, _| Signal::Handled).unwrap();

    assert_eq!(combo, "meta s");
    assert!(shortcuts.contains("meta s"));
    assert!(shortcuts.get("s meta").is_none());
}

#[test]
fn test_bind_rejects_unknown_key() {
    let mut shortcuts = Shortcuts::new();
    let result = shortcuts.bind(["ctlr", "s"], |_, _| Signal::Handled);

    assert_eq!(result, Err(ValidationError::UnknownKey("ctlr".to_string())));
    assert!(shortcuts.is_empty());
}

#[test]
fn test_bind_rejects_duplicate_combo() {
    let mut shortcuts = Shortcuts::new();
    shortcuts.bind(["cmd", "a"], |_, _| Signal::Handled).unwrap();

    let result = shortcuts.bind(["a", "meta"], |_, _| Signal::Handled);
    assert_eq!(result, Err(ValidationError::DuplicateCombo("a meta".to_string())));
    assert_eq!(shortcuts.len(), 1);
}

#[test]
fn test_combos_sorted() {
    let mut shortcuts = Shortcuts::new();
    shortcuts.bind(["z"], |_, _| Signal::Handled).unwrap();
    shortcuts.bind(["ctrl", "a"], |_, _| Signal::Handled).unwrap();
    shortcuts.bind(["escape"], |_, _| Signal::Handled).unwrap();

    assert_eq!(shortcuts.combos(), vec!["a control", "escape", "z"]);
}

#[test]
fn test_into_handler_matches_live_events() {
    let (cb, calls) = counting(Signal::Handled);
    let mut shortcuts = Shortcuts::new();
    shortcuts.bind_handler(["option", "left"], cb).unwrap();

    let handler = shortcuts.into_handler(Signal::Propagate);
    let event = KeyEvent::new("ArrowLeft").with_alt();
    let combo = crate::core::combo_from_event(&event);

    assert_eq!(handler.call(&event, &combo), Signal::Handled);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_into_map() {
    let mut shortcuts = Shortcuts::new();
    shortcuts.bind(["enter"], |_, _| Signal::Handled).unwrap();

    let map: HashMap<String, KeyHandler> = shortcuts.into();
    assert!(map.contains_key("enter"));
}
