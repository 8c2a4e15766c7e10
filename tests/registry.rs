mod common;

use common::{call_log, entries, named_dialog, HIDDEN};
use modal_dialog::{
    CloseOutcome, DialogElement, DialogError, DialogManager, OpenOutcome,
};
use serde_json::json;

#[test]
fn open_by_name_delegates_to_open() {
    let log = call_log();
    let mut manager = DialogManager::new();
    let dialog = named_dialog(&mut manager, "file-explorer", &log);

    let outcome = manager.open_by_name("file-explorer", Some(json!({ "mode": "image" })));

    assert_eq!(outcome, Ok(OpenOutcome::Opened { replaced: None }));
    assert_eq!(manager.active(), Some(dialog.id));
    assert_eq!(*dialog.last_args.lock(), Some(json!({ "mode": "image" })));
}

#[test]
fn open_by_name_missing_reports_error_without_changes() {
    let log = call_log();
    let mut manager = DialogManager::new();
    let dialog = named_dialog(&mut manager, "settings", &log);
    manager.open(dialog.id, None).unwrap();

    let outcome = manager.open_by_name("missing", None);

    assert_eq!(
        outcome,
        Err(DialogError::UnknownDialog {
            name: "missing".to_string()
        })
    );
    assert_eq!(manager.active(), Some(dialog.id));
    assert_eq!(manager.is_open(dialog.id), Ok(true));
    assert_eq!(entries(&log), vec!["open:settings"]);
}

#[test]
fn last_registration_wins() {
    let log = call_log();
    let mut manager = DialogManager::new();
    let first = named_dialog(&mut manager, "dup", &log);
    let second = named_dialog(&mut manager, "dup", &log);

    assert_eq!(manager.lookup("dup"), Some(second.id));
    manager.open_by_name("dup", None).unwrap();

    assert_eq!(manager.is_open(second.id), Ok(true));
    assert_eq!(manager.is_open(first.id), Ok(false));
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.names(), vec!["dup"]);
}

#[test]
fn close_current_closes_active_dialog() {
    let log = call_log();
    let mut manager = DialogManager::new();
    let dialog = named_dialog(&mut manager, "about", &log);
    manager.open_by_name("about", None).unwrap();

    assert_eq!(manager.close_current(), Ok(CloseOutcome::Closed));
    assert_eq!(manager.active(), None);
    assert!(dialog.element.has_class(HIDDEN));
    assert_eq!(entries(&log), vec!["open:about", "close:about"]);
}

#[test]
fn close_current_without_open_dialog_is_an_error() {
    let log = call_log();
    let mut manager = DialogManager::new();
    let dialog = named_dialog(&mut manager, "about", &log);
    let classes = dialog.element.classes();

    assert_eq!(manager.close_current(), Err(DialogError::NoActiveDialog));
    assert_eq!(dialog.element.classes(), classes);
    assert!(entries(&log).is_empty());
}

#[test]
fn close_current_after_switching_closes_latest() {
    let log = call_log();
    let mut manager = DialogManager::new();
    let a = named_dialog(&mut manager, "a", &log);
    let b = named_dialog(&mut manager, "b", &log);
    manager.open_by_name("a", None).unwrap();
    manager.open_by_name("b", None).unwrap();

    manager.close_current().unwrap();

    assert_eq!(manager.is_open(a.id), Ok(false));
    assert_eq!(manager.is_open(b.id), Ok(false));
    assert_eq!(
        entries(&log),
        vec!["open:a", "close:a", "open:b", "close:b"]
    );
    assert_eq!(manager.close_current(), Err(DialogError::NoActiveDialog));
}

#[test]
fn managers_are_isolated() {
    let log = call_log();
    let mut left = DialogManager::new();
    let mut right = DialogManager::new();
    named_dialog(&mut left, "shared", &log);
    let other = named_dialog(&mut right, "shared", &log);

    left.open_by_name("shared", None).unwrap();

    assert_eq!(right.active(), None);
    assert_eq!(right.is_open(other.id), Ok(false));
    assert!(matches!(
        left.close(other.id),
        Err(DialogError::UnknownId { .. })
    ));
}
