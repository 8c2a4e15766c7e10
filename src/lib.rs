//! Modal dialog visibility controller.
//!
//! A [`DialogManager`] owns every registered dialog, a name registry and the
//! single active-dialog slot. Opening a dialog closes whichever one was open
//! before it, and Escape closes the open dialog.

pub mod config;
pub mod dialog;
pub mod logging;

pub use config::{ConfigError, DialogConfig};
pub use dialog::{
    CloseOutcome, DialogElement, DialogError, DialogEvent, DialogHandler, DialogId,
    DialogManager, DialogOptions, EventDisposition, KeyDisposition, MemoryElement, OpenArgs,
    OpenOutcome, TriggerOutcome,
};
