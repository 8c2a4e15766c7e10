mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClassNames, CloseTriggerConfig, DialogConfig, EscapeConfig};
