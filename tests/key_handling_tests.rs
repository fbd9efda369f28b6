//! Keyboard event handling tests
//!
//! Tests for the mapping from terminal events to picker transitions,
//! including quit keys, navigation keys and resize notifications.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use picker::recipe::{Catalog, Recipe};
use picker::ui::{Outcome, Picker};

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Helper to create a test picker with two categories
fn create_test_picker() -> Picker {
    let recipe = |name: &str| Recipe {
        name: name.to_string(),
        description: format!("Description of {name}"),
    };
    let catalog = Catalog::from_parsed(vec![
        (
            "Apps".to_string(),
            vec![recipe("install-app"), recipe("remove-app"), recipe("list-apps")],
        ),
        ("System".to_string(), vec![recipe("update"), recipe("reboot")]),
    ]);
    Picker::new(catalog, 80, 24)
}

#[test]
fn test_quit_keys_cancel() {
    for code in [KeyCode::Esc, KeyCode::Char('q')] {
        let mut picker = create_test_picker();
        assert_eq!(picker.handle_event(&key_event(code)), Some(Outcome::Cancelled));
    }

    let mut picker = create_test_picker();
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(picker.handle_event(&ctrl_c), Some(Outcome::Cancelled));
}

#[test]
fn test_arrow_and_vim_keys_are_equivalent() {
    let mut arrows = create_test_picker();
    let mut vim = create_test_picker();

    for (arrow, letter) in [
        (KeyCode::Down, 'j'),
        (KeyCode::Down, 'j'),
        (KeyCode::Up, 'k'),
        (KeyCode::Right, 'l'),
        (KeyCode::Down, 'j'),
        (KeyCode::Left, 'h'),
    ] {
        assert_eq!(arrows.handle_event(&key_event(arrow)), None);
        assert_eq!(vim.handle_event(&key_event(KeyCode::Char(letter))), None);
        assert_eq!(arrows.category_index(), vim.category_index());
        assert_eq!(arrows.recipe_index(), vim.recipe_index());
    }
}

#[test]
fn test_enter_returns_selected_name() {
    let mut picker = create_test_picker();
    picker.handle_event(&key_event(KeyCode::Right));
    picker.handle_event(&key_event(KeyCode::Down));

    assert_eq!(
        picker.handle_event(&key_event(KeyCode::Enter)),
        Some(Outcome::Selected("reboot".to_string()))
    );
}

#[test]
fn test_enter_with_empty_catalog_is_ignored() {
    let mut picker = Picker::new(Catalog::default(), 80, 24);
    assert_eq!(picker.handle_event(&key_event(KeyCode::Enter)), None);
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut picker = create_test_picker();
    for code in [KeyCode::Tab, KeyCode::Char('x'), KeyCode::Backspace, KeyCode::F(1)] {
        assert_eq!(picker.handle_event(&key_event(code)), None);
    }
    assert_eq!(picker.category_index(), 0);
    assert_eq!(picker.recipe_index(), 0);
}

#[test]
fn test_key_release_is_ignored() {
    let mut picker = create_test_picker();
    let mut release = KeyEvent::new(KeyCode::Down, KeyModifiers::empty());
    release.kind = KeyEventKind::Release;

    assert_eq!(picker.handle_event(&Event::Key(release)), None);
    assert_eq!(picker.recipe_index(), 0);
}

#[test]
fn test_resize_event() {
    let mut picker = create_test_picker();

    assert_eq!(picker.handle_event(&Event::Resize(40, 12)), None);
    assert_eq!(picker.width(), 60);
    assert_eq!(picker.height(), 12);

    picker.handle_event(&Event::Resize(85, 60));
    assert_eq!(picker.width(), 85);
    assert_eq!(picker.height(), 60);
}

#[test]
fn test_focus_events_are_ignored() {
    let mut picker = create_test_picker();
    assert_eq!(picker.handle_event(&Event::FocusGained), None);
    assert_eq!(picker.handle_event(&Event::FocusLost), None);
}
