use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DialogConfig {
    #[serde(default)]
    pub classes: ClassNames,
    #[serde(default)]
    pub close_trigger: CloseTriggerConfig,
    #[serde(default)]
    pub escape: EscapeConfig,
}

/// Presentation marker classes toggled on dialog elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    /// Added to every registered dialog and never removed.
    #[serde(default = "default_modal_class")]
    pub modal: String,
    /// Present exactly while the dialog is closed.
    #[serde(default = "default_hidden_class")]
    pub hidden: String,
}

/// Child element that closes its dialog when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseTriggerConfig {
    /// Selector looked up inside the dialog element (e.g. ".close-btn").
    #[serde(default = "default_close_selector")]
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeConfig {
    /// Close the open dialog on Escape (default: true).
    #[serde(default = "default_escape_enabled")]
    pub enabled: bool,
}

fn default_modal_class() -> String {
    "silex-modal-dialog".to_string()
}

fn default_hidden_class() -> String {
    "silex-hide-dialog".to_string()
}

fn default_close_selector() -> String {
    ".close-btn".to_string()
}

fn default_escape_enabled() -> bool {
    true
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            modal: default_modal_class(),
            hidden: default_hidden_class(),
        }
    }
}

impl Default for CloseTriggerConfig {
    fn default() -> Self {
        Self {
            selector: default_close_selector(),
        }
    }
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            enabled: default_escape_enabled(),
        }
    }
}
