use super::element::DialogElement;
use super::handler::{DialogHandler, FnHandler};
use super::{DialogError, DialogId, DialogManager, OpenArgs};

/// Builder for a dialog registration.
///
/// An element is required, plus either a [`DialogHandler`] or both the
/// `on_open` and `on_close` closures.
#[derive(Default)]
pub struct DialogOptions {
    name: Option<String>,
    element: Option<Box<dyn DialogElement>>,
    handler: Option<Box<dyn DialogHandler>>,
    on_open: Option<Box<dyn FnMut(Option<OpenArgs>)>>,
    on_close: Option<Box<dyn FnMut()>>,
}

/// Validated parts of a [`DialogOptions`].
pub(crate) struct DialogParts {
    pub name: Option<String>,
    pub element: Box<dyn DialogElement>,
    pub handler: Box<dyn DialogHandler>,
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the dialog under `name` so it can be opened by name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn element(mut self, element: impl DialogElement + 'static) -> Self {
        self.element = Some(Box::new(element));
        self
    }

    /// Use `handler` for both callbacks. Takes precedence over closures.
    pub fn handler(mut self, handler: impl DialogHandler + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn on_open(mut self, f: impl FnMut(Option<OpenArgs>) + 'static) -> Self {
        self.on_open = Some(Box::new(f));
        self
    }

    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Shorthand for [`DialogManager::register`].
    pub fn register(self, manager: &mut DialogManager) -> Result<DialogId, DialogError> {
        manager.register(self)
    }

    pub(crate) fn into_parts(self) -> Result<DialogParts, DialogError> {
        let element = self.element.ok_or(DialogError::MissingElement)?;
        let handler = match self.handler {
            Some(handler) => handler,
            None => {
                let on_open = self.on_open.ok_or(DialogError::MissingOnOpen)?;
                let on_close = self.on_close.ok_or(DialogError::MissingOnClose)?;
                Box::new(FnHandler::from_boxed(on_open, on_close))
            }
        };
        Ok(DialogParts {
            name: self.name,
            element,
            handler,
        })
    }
}

impl std::fmt::Debug for DialogOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogOptions")
            .field("name", &self.name)
            .field("element", &self.element.is_some())
            .field("handler", &self.handler.is_some())
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
