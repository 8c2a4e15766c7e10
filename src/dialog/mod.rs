mod element;
mod error;
mod handler;
mod input;
mod manager;
mod options;
mod state;

pub use element::{DialogElement, MemoryElement};
pub use error::DialogError;
pub use handler::{DialogHandler, FnHandler};
pub use input::{is_escape_press, DialogEvent, EventDisposition, KeyDisposition, TriggerOutcome};
pub use manager::{CloseOutcome, DialogManager, OpenOutcome};
pub use options::DialogOptions;
pub use state::{Visibility, VisibilityIntent};

/// Arguments forwarded to [`DialogHandler::on_open`].
pub type OpenArgs = serde_json::Value;

/// Handle to a dialog registered with a [`DialogManager`].
///
/// Only meaningful for the manager that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId {
    manager: u64,
    index: usize,
}

impl std::fmt::Display for DialogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.manager, self.index)
    }
}
