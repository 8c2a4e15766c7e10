use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::DialogId;

/// What the host should do with a key event after the manager saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not handled; deliver the event as usual.
    Ignored,
    /// Handled; prevent the default action and stop propagation.
    Consumed,
}

impl KeyDisposition {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Result of activating a dialog's close trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The trigger was bound and the dialog was closed.
    Closed,
    /// The trigger was bound but the dialog was already closed.
    AlreadyClosed,
    /// The element had no close trigger at registration.
    Unbound,
}

/// Input routed to a [`DialogManager`](super::DialogManager).
#[derive(Debug, Clone)]
pub enum DialogEvent {
    Key(KeyEvent),
    /// The close-trigger child of a dialog was activated.
    CloseTrigger(DialogId),
}

/// Result of [`DialogManager::dispatch`](super::DialogManager::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Key(KeyDisposition),
    Trigger(TriggerOutcome),
}

/// True for an Escape press. Repeats and releases do not count.
pub fn is_escape_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Esc)
}
