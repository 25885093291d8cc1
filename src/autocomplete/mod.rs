//! Search-as-you-type controller
//!
//! Binds an input field to a result list: keystrokes are debounced into
//! queries, responses are rendered as rows, and arrow keys, Enter, Escape
//! and clicks drive selection.

mod controller;
mod debounce;
mod keys;
mod navigation;
mod presenter;
mod templates;
mod view;

pub use controller::{
    AutocompleteBuilder, AutocompleteController, AutocompleteHandle, ControllerState, OnSelect,
    Snapshot,
};
pub use debounce::Debouncer;
pub use keys::Key;
pub use navigation::NavigationState;
pub use presenter::{RowPresenter, RowSelected};
pub use templates::Templates;
pub use view::{InputField, ListState, ListView, MemoryList, RenderedRow, SharedInput};
