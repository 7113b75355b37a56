use crate::core::normalizer::*;
use crate::core::types::KeyEvent;

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize_key("A"), "a");
    assert_eq!(normalize_key("Escape"), "escape");
    assert_eq!(normalize_key("ArrowLeft"), "arrowleft");
}

#[test]
fn test_alias_equivalence() {
    assert_eq!(normalize_key("cmd"), "meta");
    assert_eq!(normalize_key("meta"), "meta");
    assert_eq!(normalize_key("cmd"), normalize_key("meta"));
    assert_eq!(normalize_key("Command"), "meta");
    assert_eq!(normalize_key("OS"), "meta");
}

#[test]
fn test_all_aliases_resolve() {
    for (from, to) in KEY_MAP {
        assert_eq!(normalize_key(from), *to);
        assert_eq!(normalize_key(&from.to_uppercase()), *to);
    }
}

#[test]
fn test_space_aliases() {
    assert_eq!(normalize_key("space"), " ");
    assert_eq!(normalize_key("Spacebar"), " ");
    assert_eq!(normalize_key(" "), " ");
}

#[test]
fn test_unknown_keys_pass_through() {
    assert_eq!(normalize_key("ß"), "ß");
    assert_eq!(normalize_key("NotARealKey"), "notarealkey");
    assert_eq!(normalize_key(""), "");
}

#[test]
fn test_combo_from_plain_key() {
    assert_eq!(combo_from_event(&KeyEvent::new("a")), "a");
}

#[test]
fn test_combo_sorts_tokens() {
    let event = KeyEvent::new("a").with_meta();
    assert_eq!(combo_from_event(&event), "a meta");

    let event = KeyEvent::new("K").with_shift().with_ctrl();
    assert_eq!(combo_from_event(&event), "control k shift");
}

#[test]
fn test_combo_all_modifiers() {
    let event = KeyEvent::new("z").with_shift().with_ctrl().with_alt().with_meta();
    assert_eq!(combo_from_event(&event), "alt control meta shift z");
}

#[test]
fn test_modifier_key_collapses_with_flag() {
    // Pressing Shift reports key "Shift" with shiftKey set
    let event = KeyEvent::new("Shift").with_shift();
    assert_eq!(combo_from_event(&event), "shift");

    let event = KeyEvent::new("Meta").with_meta().with_shift();
    assert_eq!(combo_from_event(&event), "meta shift");
}

#[test]
fn test_combo_without_key() {
    let event = KeyEvent {
        ctrl_key: true,
        ..KeyEvent::default()
    };
    assert_eq!(combo_from_event(&event), "control");
    assert_eq!(combo_from_event(&KeyEvent::default()), "");
}

#[test]
fn test_combo_determinism() {
    let event1 = KeyEvent::new("Enter").with_alt();
    let event2 = KeyEvent::new("Enter").with_alt();

    assert_eq!(combo_from_event(&event1), combo_from_event(&event2));
    // Repeated calls on the same event are stable too
    assert_eq!(combo_from_event(&event1), combo_from_event(&event1));
}

#[test]
fn test_combo_ignores_target() {
    use crate::core::types::EventTarget;

    let plain = KeyEvent::new("a").with_meta();
    let targeted = plain.clone().with_target(EventTarget::element("INPUT"));
    assert_eq!(combo_from_event(&plain), combo_from_event(&targeted));
}

#[test]
fn test_stringify_order_independence() {
    assert_eq!(stringify_key(["meta", "a"]), stringify_key(["a", "meta"]));
    assert_eq!(stringify_key(["shift", "ctrl", "x"]), "control shift x");
}

#[test]
fn test_stringify_matches_event_combo() {
    let event = KeyEvent::new("a").with_meta();
    assert_eq!(stringify_key(["cmd", "a"]), combo_from_event(&event));

    let event = KeyEvent::new("ArrowUp").with_alt();
    assert_eq!(stringify_key(["option", "up"]), combo_from_event(&event));
}

#[test]
fn test_stringify_collapses_duplicates() {
    assert_eq!(stringify_key(["cmd", "meta", "a"]), "a meta");
    assert_eq!(stringify_key(["a", "A"]), "a");
}

#[test]
fn test_stringify_accepts_owned_strings() {
    let keys = vec!["Ctrl".to_string(), "Enter".to_string()];
    assert_eq!(stringify_key(&keys), "control enter");
}
