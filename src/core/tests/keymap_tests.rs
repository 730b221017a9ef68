use crate::core::{
    keymap::Keymap,
    matcher::ComboMatcher,
    types::InputEvent,
    validator::ValidationError,
};

fn editor_keymap() -> Keymap {
    let mut keymap = Keymap::new(ComboMatcher::new());
    keymap.bind("ctrl+s", "save").unwrap();
    keymap.bind("cmd+s", "save").unwrap();
    keymap.bind("ctrl+shift+s", "save-as").unwrap();
    keymap.bind("esc", "close").unwrap();
    keymap
}

#[test]
fn test_dispatch_returns_all_matches_in_order() {
    let keymap = editor_keymap();
    let event = InputEvent::new("s").with_ctrl().with_shift();

    let actions: Vec<&str> = keymap
        .dispatch(&event)
        .into_iter()
        .map(|b| b.action.as_str())
        .collect();

    // At-least modifier semantics: ctrl+s also fires while shift is held
    assert_eq!(actions, vec!["save", "save-as"]);
}

#[test]
fn test_dispatch_meta_binding() {
    let keymap = editor_keymap();
    let fired = keymap.dispatch(&InputEvent::new("s").with_meta());
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].request.to_string(), "cmd+s");
}

#[test]
fn test_first_match() {
    let keymap = editor_keymap();
    let binding = keymap.first_match(&InputEvent::new("Escape")).unwrap();
    assert_eq!(binding.action, "close");
    assert!(keymap.first_match(&InputEvent::new("q")).is_none());
}

#[test]
fn test_keymap_without_conflicts() {
    assert!(editor_keymap().conflicts().is_empty());
}

#[test]
fn test_keymap_reports_conflicts() {
    let mut keymap = editor_keymap();
    keymap.bind("shift+ctrl+S", "share").unwrap();

    let conflicts = keymap.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflicting_bindings[1].action, "share");
}

#[test]
fn test_strict_keymap_refuses_multiple_literals() {
    let mut keymap = Keymap::new(ComboMatcher::new().strict(true));
    assert!(matches!(
        keymap.bind("ctrl+k+j", "chord"),
        Err(ValidationError::MultipleLiteralKeys(_))
    ));
    assert!(keymap.is_empty());

    let binding = keymap.bind("ctrl+k", "search").unwrap();
    assert_eq!(binding.action, "search");
    assert_eq!(keymap.len(), 1);
}

#[test]
fn test_strict_keymap_refuses_bindings_that_never_fire() {
    let mut keymap = Keymap::new(ComboMatcher::new().strict(true));
    assert!(matches!(
        keymap.bind("k+k", "twice"),
        Err(ValidationError::MissingModifier(_))
    ));
    assert!(matches!(
        keymap.bind("ctrl+shift", "chord"),
        Err(ValidationError::MissingKey(_))
    ));
    assert!(keymap.is_empty());

    // A lone modifier name is a key of its own
    keymap.bind("shift", "shift-pressed").unwrap();
    assert_eq!(keymap.dispatch(&InputEvent::new("Shift").with_shift()).len(), 1);
}

#[test]
fn test_never_firing_bindings_are_not_conflicts() {
    let mut keymap = Keymap::new(ComboMatcher::new());
    keymap.bind("cmd", "meta-key").unwrap();
    keymap.bind("super", "super-key").unwrap();
    keymap.bind("k", "k-key").unwrap();
    keymap.bind("k+k", "k-twice").unwrap();

    let meta = InputEvent::new("Meta").with_meta();
    assert_eq!(keymap.dispatch(&meta)[0].action, "meta-key");
    assert_eq!(keymap.dispatch(&meta).len(), 1);
    assert_eq!(keymap.dispatch(&InputEvent::new("k")).len(), 1);

    assert!(keymap.conflicts().is_empty());
    let never: Vec<&str> = keymap
        .never_firing()
        .into_iter()
        .map(|b| b.action.as_str())
        .collect();
    assert_eq!(never, vec!["k-twice"]);
}
