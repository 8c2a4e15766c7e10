//! Dialog registry and mutual-exclusion controller.
//!
//! The manager owns every registered dialog and holds a non-owning
//! reference (a [`DialogId`]) to the one that is currently open. Opening a
//! dialog runs the full close cycle of the previous one before the new
//! dialog's open cycle starts, so callbacks never interleave.

use crossterm::event::KeyEvent;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::DialogConfig;

use super::element::DialogElement;
use super::handler::DialogHandler;
use super::input::{
    is_escape_press, DialogEvent, EventDisposition, KeyDisposition, TriggerOutcome,
};
use super::options::{DialogOptions, DialogParts};
use super::state::{Visibility, VisibilityIntent};
use super::{DialogError, DialogId, OpenArgs};

static NEXT_MANAGER_TAG: AtomicU64 = AtomicU64::new(1);

/// Result of [`DialogManager::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The dialog opened. `replaced` is the dialog that was closed to make room.
    Opened { replaced: Option<DialogId> },
    /// The dialog was already open; nothing changed.
    AlreadyOpen,
}

/// Result of [`DialogManager::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// The dialog was already closed; nothing changed.
    AlreadyClosed,
}

struct DialogEntry {
    name: Option<String>,
    element: Box<dyn DialogElement>,
    handler: Box<dyn DialogHandler>,
    visibility: Visibility,
    close_trigger_bound: bool,
}

impl DialogEntry {
    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

pub struct DialogManager {
    tag: u64,
    config: DialogConfig,
    dialogs: Vec<DialogEntry>,
    registry: HashMap<String, DialogId>,
    active: Option<DialogId>,
}

impl DialogManager {
    /// Manager using the default marker classes and Escape binding.
    pub fn new() -> Self {
        Self::with_config(DialogConfig::default())
    }

    pub fn with_config(config: DialogConfig) -> Self {
        Self {
            tag: NEXT_MANAGER_TAG.fetch_add(1, Ordering::Relaxed),
            config,
            dialogs: Vec::new(),
            registry: HashMap::new(),
            active: None,
        }
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Register a dialog and hide its element.
    ///
    /// Adds the modal and hidden marker classes, binds the close trigger if
    /// the element has one, and records the name (a later registration under
    /// the same name replaces the earlier one).
    ///
    /// # Errors
    /// Returns a configuration error if the element or a callback is missing.
    /// Nothing is registered in that case.
    pub fn register(&mut self, options: DialogOptions) -> Result<DialogId, DialogError> {
        let DialogParts {
            name,
            mut element,
            handler,
        } = options.into_parts()?;

        element.add_class(&self.config.classes.modal);
        element.add_class(&self.config.classes.hidden);
        let close_trigger_bound = element.query(&self.config.close_trigger.selector);

        let id = DialogId {
            manager: self.tag,
            index: self.dialogs.len(),
        };
        if let Some(name) = &name {
            self.registry.insert(name.clone(), id);
        }
        tracing::debug!(
            dialog = name.as_deref().unwrap_or(""),
            %id,
            close_trigger = close_trigger_bound,
            "Registered dialog"
        );
        self.dialogs.push(DialogEntry {
            name,
            element,
            handler,
            visibility: Visibility::default(),
            close_trigger_bound,
        });
        Ok(id)
    }

    /// Open a dialog, closing the currently open one first.
    pub fn open(&mut self, id: DialogId, args: Option<OpenArgs>) -> Result<OpenOutcome, DialogError> {
        let index = self.index_of(id)?;
        let entry = &mut self.dialogs[index];
        let Some(next) = entry.visibility.reduce(VisibilityIntent::Open) else {
            tracing::warn!(dialog = entry.label(), "This dialog is already opened");
            return Ok(OpenOutcome::AlreadyOpen);
        };
        entry.visibility = next;

        let replaced = match self.active {
            Some(current) if current != id => match self.close(current)? {
                CloseOutcome::Closed => Some(current),
                CloseOutcome::AlreadyClosed => None,
            },
            _ => None,
        };
        self.active = Some(id);

        let entry = &mut self.dialogs[index];
        entry.element.remove_class(&self.config.classes.hidden);
        tracing::debug!(dialog = entry.label(), %id, "Dialog opened");
        entry.handler.on_open(args);

        Ok(OpenOutcome::Opened { replaced })
    }

    /// Close a dialog.
    pub fn close(&mut self, id: DialogId) -> Result<CloseOutcome, DialogError> {
        let index = self.index_of(id)?;
        let entry = &mut self.dialogs[index];
        let Some(next) = entry.visibility.reduce(VisibilityIntent::Close) else {
            tracing::warn!(dialog = entry.label(), "Dialog is already closed");
            return Ok(CloseOutcome::AlreadyClosed);
        };
        entry.visibility = next;

        self.release_active(id);

        let entry = &mut self.dialogs[index];
        entry.element.add_class(&self.config.classes.hidden);
        tracing::debug!(dialog = entry.label(), %id, "Dialog closed");
        entry.handler.on_close();

        Ok(CloseOutcome::Closed)
    }

    /// Open the dialog registered under `name`.
    ///
    /// # Errors
    /// [`DialogError::UnknownDialog`] if no dialog has that name.
    pub fn open_by_name(
        &mut self,
        name: &str,
        args: Option<OpenArgs>,
    ) -> Result<OpenOutcome, DialogError> {
        let Some(id) = self.lookup(name) else {
            tracing::error!(
                dialog = name,
                registered = ?self.names(),
                "Could not open dialog"
            );
            return Err(DialogError::UnknownDialog {
                name: name.to_string(),
            });
        };
        self.open(id, args)
    }

    /// Close whichever dialog is open.
    ///
    /// # Errors
    /// [`DialogError::NoActiveDialog`] if nothing is open.
    pub fn close_current(&mut self) -> Result<CloseOutcome, DialogError> {
        let Some(id) = self.active else {
            tracing::error!("Could not close dialog, there is no dialog opened");
            return Err(DialogError::NoActiveDialog);
        };
        self.close(id)
    }

    /// Close open dialogs on an Escape press.
    ///
    /// Returns [`KeyDisposition::Consumed`] when a dialog was closed; the host
    /// should then stop delivering the event.
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyDisposition {
        if !self.config.escape.enabled || !is_escape_press(key) {
            return KeyDisposition::Ignored;
        }

        let open: Vec<DialogId> = self
            .dialogs
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.visibility.is_visible())
            .map(|(index, _)| DialogId {
                manager: self.tag,
                index,
            })
            .collect();

        let mut disposition = KeyDisposition::Ignored;
        for id in open {
            if let Ok(CloseOutcome::Closed) = self.close(id) {
                disposition = KeyDisposition::Consumed;
            }
        }
        disposition
    }

    /// Handle activation of a dialog's close-trigger child.
    pub fn activate_close_trigger(&mut self, id: DialogId) -> Result<TriggerOutcome, DialogError> {
        let index = self.index_of(id)?;
        if !self.dialogs[index].close_trigger_bound {
            return Ok(TriggerOutcome::Unbound);
        }
        Ok(match self.close(id)? {
            CloseOutcome::Closed => TriggerOutcome::Closed,
            CloseOutcome::AlreadyClosed => TriggerOutcome::AlreadyClosed,
        })
    }

    /// Route a host input event.
    pub fn dispatch(&mut self, event: DialogEvent) -> Result<EventDisposition, DialogError> {
        match event {
            DialogEvent::Key(key) => Ok(EventDisposition::Key(self.handle_key(&key))),
            DialogEvent::CloseTrigger(id) => {
                self.activate_close_trigger(id).map(EventDisposition::Trigger)
            }
        }
    }

    /// The currently open dialog, if any.
    pub fn active(&self) -> Option<DialogId> {
        self.active
    }

    pub fn lookup(&self, name: &str) -> Option<DialogId> {
        self.registry.get(name).copied()
    }

    pub fn is_open(&self, id: DialogId) -> Result<bool, DialogError> {
        let index = self.index_of(id)?;
        Ok(self.dialogs[index].visibility.is_visible())
    }

    pub fn name(&self, id: DialogId) -> Result<Option<&str>, DialogError> {
        let index = self.index_of(id)?;
        Ok(self.dialogs[index].name.as_deref())
    }

    /// Whether a close-trigger child was found when the dialog was registered.
    pub fn has_close_trigger(&self, id: DialogId) -> Result<bool, DialogError> {
        let index = self.index_of(id)?;
        Ok(self.dialogs[index].close_trigger_bound)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Clear the active slot if it refers to `id`.
    fn release_active(&mut self, id: DialogId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    fn index_of(&self, id: DialogId) -> Result<usize, DialogError> {
        if id.manager == self.tag && id.index < self.dialogs.len() {
            Ok(id.index)
        } else {
            Err(DialogError::UnknownId { id })
        }
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DialogManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogManager")
            .field("dialogs", &self.dialogs.len())
            .field("names", &self.names())
            .field("active", &self.active)
            .finish()
    }
}
