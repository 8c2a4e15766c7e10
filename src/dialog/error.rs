use thiserror::Error;

use super::DialogId;

/// Errors returned by dialog registration and lookups.
///
/// Redundant open/close calls are not errors; they report an
/// [`OpenOutcome::AlreadyOpen`](super::OpenOutcome) or
/// [`CloseOutcome::AlreadyClosed`](super::CloseOutcome) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("Modal dialog options missing an element")]
    MissingElement,

    #[error("Modal dialog options missing an on_open handler")]
    MissingOnOpen,

    #[error("Modal dialog options missing an on_close handler")]
    MissingOnClose,

    #[error("Could not open dialog '{name}': no dialog registered under that name")]
    UnknownDialog { name: String },

    #[error("Could not close dialog: there is no dialog opened")]
    NoActiveDialog,

    #[error("Dialog {id} is not managed by this dialog manager")]
    UnknownId { id: DialogId },
}

impl DialogError {
    /// True for errors raised while building a dialog.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingElement | Self::MissingOnOpen | Self::MissingOnClose
        )
    }
}
