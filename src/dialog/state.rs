//! Open/closed state of a single dialog.

/// Visibility of a dialog. Dialogs start `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Requested visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityIntent {
    Open,
    Close,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Next state for `intent`, or `None` when the dialog is already there.
    pub fn reduce(self, intent: VisibilityIntent) -> Option<Self> {
        match (self, intent) {
            (Self::Hidden, VisibilityIntent::Open) => Some(Self::Visible),
            (Self::Visible, VisibilityIntent::Close) => Some(Self::Hidden),
            _ => None,
        }
    }
}
