//! Lifecycle callbacks run when a dialog opens or closes.

use super::OpenArgs;

/// Behaviour attached to a dialog.
///
/// Handlers get no access to the manager, so they cannot open or close
/// dialogs while a transition is in progress.
pub trait DialogHandler {
    /// Called after the dialog became visible, with the arguments passed to `open`.
    fn on_open(&mut self, args: Option<OpenArgs>);

    /// Called after the dialog was hidden.
    fn on_close(&mut self);
}

/// Handler built from a pair of closures.
pub struct FnHandler {
    on_open: Box<dyn FnMut(Option<OpenArgs>)>,
    on_close: Box<dyn FnMut()>,
}

impl FnHandler {
    pub fn new(
        on_open: impl FnMut(Option<OpenArgs>) + 'static,
        on_close: impl FnMut() + 'static,
    ) -> Self {
        Self {
            on_open: Box::new(on_open),
            on_close: Box::new(on_close),
        }
    }

    pub(crate) fn from_boxed(
        on_open: Box<dyn FnMut(Option<OpenArgs>)>,
        on_close: Box<dyn FnMut()>,
    ) -> Self {
        Self { on_open, on_close }
    }
}

impl DialogHandler for FnHandler {
    fn on_open(&mut self, args: Option<OpenArgs>) {
        (self.on_open)(args)
    }

    fn on_close(&mut self) {
        (self.on_close)()
    }
}

impl std::fmt::Debug for FnHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}
