//! Rendering collaborators: the bound input field and the list mount point
//!
//! The controller only talks to these traits. `SharedInput` and
//! `MemoryList` are headless implementations backed by shared state, for
//! terminal front ends and tests.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One rendered row as handed to the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub index: usize,
    pub label: String,
    pub permalink: String,
    pub markup: String,
}

/// The text field the controller is bound to
pub trait InputField: Send {
    /// Current text of the field
    fn value(&self) -> String;

    /// Replace the text of the field
    fn set_value(&mut self, value: &str);

    /// Turn off any built-in completion so it does not fight the dropdown
    fn disable_native_autocomplete(&mut self) {}
}

/// The mount point the dropdown rows are rendered into
pub trait ListView: Send {
    /// Attach the (empty) list to its wrapper
    fn mount(&mut self) {}

    /// Remove every row
    fn clear(&mut self);

    /// Add a row after the existing ones
    fn append(&mut self, row: RenderedRow);

    /// Highlight a row, or none
    fn set_active(&mut self, index: Option<usize>);

    fn set_visible(&mut self, visible: bool);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct InputState {
    value: String,
    native_autocomplete: bool,
}

/// Input field whose text is shared with whoever feeds keystrokes into it
#[derive(Debug, Clone)]
pub struct SharedInput {
    state: Arc<Mutex<InputState>>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InputState {
                value: String::new(),
                native_autocomplete: true,
            })),
        }
    }

    /// Replace the text as the user would by typing
    pub fn type_text(&self, text: &str) {
        lock(&self.state).value = text.to_string();
    }

    pub fn text(&self) -> String {
        lock(&self.state).value.clone()
    }

    pub fn native_autocomplete(&self) -> bool {
        lock(&self.state).native_autocomplete
    }
}

impl Default for SharedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField for SharedInput {
    fn value(&self) -> String {
        self.text()
    }

    fn set_value(&mut self, value: &str) {
        self.type_text(value);
    }

    fn disable_native_autocomplete(&mut self) {
        lock(&self.state).native_autocomplete = false;
    }
}

/// What a `MemoryList` currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub mounted: bool,
    pub visible: bool,
    pub rows: Vec<RenderedRow>,
    pub active: Option<usize>,
}

impl ListState {
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }
}

/// List view that keeps its rows in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryList {
    state: Arc<Mutex<ListState>>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of what is currently displayed
    pub fn state(&self) -> ListState {
        lock(&self.state).clone()
    }
}

impl ListView for MemoryList {
    fn mount(&mut self) {
        lock(&self.state).mounted = true;
    }

    fn clear(&mut self) {
        let mut state = lock(&self.state);
        state.rows.clear();
        state.active = None;
    }

    fn append(&mut self, row: RenderedRow) {
        lock(&self.state).rows.push(row);
    }

    fn set_active(&mut self, index: Option<usize>) {
        lock(&self.state).active = index;
    }

    fn set_visible(&mut self, visible: bool) {
        lock(&self.state).visible = visible;
    }
}
