//! Application Context
//!
//! Shared state provided via Leptos Context API: the active view, the todo
//! filter and the search text. The three are independent; switching views
//! resets neither of the others.

use leptos::prelude::*;

use crate::models::{TodoFilter, ViewMode};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which list the main area shows - read
    pub view: ReadSignal<ViewMode>,
    /// Which list the main area shows - write
    set_view: WriteSignal<ViewMode>,
    /// Active todo filter - read
    pub filter: ReadSignal<TodoFilter>,
    /// Active todo filter - write
    set_filter: WriteSignal<TodoFilter>,
    /// Search text shared by both views - read
    pub search: ReadSignal<String>,
    /// Search text shared by both views - write
    set_search: WriteSignal<String>,
}

impl AppContext {
    pub fn new(
        view: (ReadSignal<ViewMode>, WriteSignal<ViewMode>),
        filter: (ReadSignal<TodoFilter>, WriteSignal<TodoFilter>),
        search: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            filter: filter.0,
            set_filter: filter.1,
            search: search.0,
            set_search: search.1,
        }
    }

    /// Switch the active view; filter and search keep their values
    pub fn set_view(&self, view: ViewMode) {
        self.set_view.set(view);
    }

    /// Select the todo filter
    pub fn set_filter(&self, filter: TodoFilter) {
        self.set_filter.set(filter);
    }

    /// Update the shared search text
    pub fn set_search(&self, text: String) {
        self.set_search.set(text);
    }
}
