//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use modal_dialog::{
    DialogHandler, DialogId, DialogManager, DialogOptions, MemoryElement, OpenArgs,
};
use parking_lot::Mutex;
use std::sync::Arc;

pub const MODAL: &str = "silex-modal-dialog";
pub const HIDDEN: &str = "silex-hide-dialog";

/// Ordered log of callback invocations shared between handlers.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Handler that appends `open:<label>` / `close:<label>` to a shared log
/// and keeps the last open arguments.
pub struct Recorder {
    label: String,
    log: CallLog,
    last_args: Arc<Mutex<Option<OpenArgs>>>,
}

impl Recorder {
    pub fn new(label: &str, log: &CallLog) -> Self {
        Self {
            label: label.to_string(),
            log: Arc::clone(log),
            last_args: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_args(&self) -> Arc<Mutex<Option<OpenArgs>>> {
        Arc::clone(&self.last_args)
    }
}

impl DialogHandler for Recorder {
    fn on_open(&mut self, args: Option<OpenArgs>) {
        self.log.lock().push(format!("open:{}", self.label));
        *self.last_args.lock() = args;
    }

    fn on_close(&mut self) {
        self.log.lock().push(format!("close:{}", self.label));
    }
}

/// A registered dialog plus the handles a test needs to inspect it.
pub struct Fixture {
    pub id: DialogId,
    pub element: MemoryElement,
    pub last_args: Arc<Mutex<Option<OpenArgs>>>,
}

/// Register a named dialog backed by a fresh `MemoryElement`.
pub fn named_dialog(manager: &mut DialogManager, name: &str, log: &CallLog) -> Fixture {
    dialog_with_element(manager, name, MemoryElement::new("div"), log)
}

pub fn dialog_with_element(
    manager: &mut DialogManager,
    name: &str,
    element: MemoryElement,
    log: &CallLog,
) -> Fixture {
    let recorder = Recorder::new(name, log);
    let last_args = recorder.last_args();
    let id = DialogOptions::new()
        .name(name)
        .element(element.clone())
        .handler(recorder)
        .register(manager)
        .expect("dialog registration failed");
    Fixture {
        id,
        element,
        last_args,
    }
}

pub fn entries(log: &CallLog) -> Vec<String> {
    log.lock().clone()
}

pub fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

pub fn escape() -> KeyEvent {
    key(KeyCode::Esc, KeyEventKind::Press)
}
