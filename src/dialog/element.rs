//! Host element collaborator.
//!
//! The manager never owns the element's lifecycle; it only toggles marker
//! classes and checks once, at registration, for a close-trigger child.

use parking_lot::Mutex;
use std::sync::Arc;

/// A host UI element whose visibility is driven by marker classes.
pub trait DialogElement {
    /// Add `class` to the element's class list. Adding a present class is a no-op.
    fn add_class(&mut self, class: &str);

    /// Remove `class` from the element's class list if present.
    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Whether a descendant matches `selector`.
    fn query(&self, selector: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryChild {
    tag: String,
    classes: Vec<String>,
}

impl MemoryChild {
    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.classes.iter().any(|c| c == class),
            None => self.tag.eq_ignore_ascii_case(selector),
        }
    }
}

#[derive(Debug, Default)]
struct ElementState {
    tag: String,
    classes: Vec<String>,
    children: Vec<MemoryChild>,
}

/// In-memory element with a shared class list.
///
/// Clones share state, so a host can hand one clone to the manager and keep
/// another to read the classes back. Selectors support `.class` and bare tag
/// names only.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    inner: Arc<Mutex<ElementState>>,
}

impl MemoryElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ElementState {
                tag: tag.into(),
                ..ElementState::default()
            })),
        }
    }

    /// Append a child element with the given tag and classes.
    pub fn with_child(self, tag: &str, classes: &[&str]) -> Self {
        self.inner.lock().children.push(MemoryChild {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn tag(&self) -> String {
        self.inner.lock().tag.clone()
    }

    /// Snapshot of the class list in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.lock().classes.clone()
    }
}

impl DialogElement for MemoryElement {
    fn add_class(&mut self, class: &str) {
        let mut state = self.inner.lock();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.inner.lock().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.lock().classes.iter().any(|c| c == class)
    }

    fn query(&self, selector: &str) -> bool {
        self.inner
            .lock()
            .children
            .iter()
            .any(|child| child.matches(selector))
    }
}
