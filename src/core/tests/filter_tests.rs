use std::cell::Cell;
use std::rc::Rc;

use crate::core::chain::Keyboard;
use crate::core::filter::{filter_input_event, is_input_event};
use crate::core::types::{EventTarget, KeyEvent, KeyHandler, Signal};

#[test]
fn test_no_target_is_not_input() {
    assert!(!is_input_event(&KeyEvent::new("a")));
}

#[test]
fn test_text_controls_are_input() {
    for tag in ["INPUT", "SELECT", "TEXTAREA"] {
        let event = KeyEvent::new("a").with_target(EventTarget::element(tag));
        assert!(is_input_event(&event), "{tag} should count as input");
    }
}

#[test]
fn test_tag_match_is_case_insensitive() {
    let event = KeyEvent::new("a").with_target(EventTarget::element("textarea"));
    assert!(is_input_event(&event));
}

#[test]
fn test_content_editable_is_input() {
    let event = KeyEvent::new("a").with_target(EventTarget::editable("DIV"));
    assert!(is_input_event(&event));
}

#[test]
fn test_other_elements_are_not_input() {
    let event = KeyEvent::new("a").with_target(EventTarget::element("BUTTON"));
    assert!(!is_input_event(&event));

    let event = KeyEvent::new("a").with_target(EventTarget::element("INPUTS"));
    assert!(!is_input_event(&event));
}

#[test]
fn test_filter_skips_input_events() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let guarded = filter_input_event(KeyHandler::new(move |_, _| {
        counter.set(counter.get() + 1);
        Signal::Handled
    }));

    let typing = KeyEvent::new("a").with_target(EventTarget::element("INPUT"));
    assert_eq!(guarded.call(&typing, "a"), Signal::Propagate);
    assert_eq!(calls.get(), 0);

    let page = KeyEvent::new("a").with_target(EventTarget::element("BODY"));
    assert_eq!(guarded.call(&page, "a"), Signal::Handled);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_filtered_listener_lets_older_listeners_run() {
    let keyboard = Keyboard::new();
    let older_calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&older_calls);

    keyboard.add_listener(&KeyHandler::new(move |_, _| {
        counter.set(counter.get() + 1);
        Signal::Handled
    }));
    keyboard.add_listener(&filter_input_event(KeyHandler::new(|_, _| Signal::Handled)));

    let typing = KeyEvent::new("a").with_target(EventTarget::editable("DIV"));
    assert_eq!(keyboard.dispatch(&typing), Signal::Handled);
    assert_eq!(older_calls.get(), 1);

    keyboard.dispatch(&KeyEvent::new("a"));
    assert_eq!(older_calls.get(), 1);
}
