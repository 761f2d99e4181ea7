//! Application Models
//!
//! Todos, notes and their attachments, plus the view-level enums.

use serde::{Deserialize, Serialize};

/// A single todo entry. Text is fixed at creation; only `completed` mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    /// Raw `<input type="date">` value, empty when unset
    pub due_date: String,
    /// Raw `<input type="time">` value, empty when unset
    pub due_time: String,
}

/// A saved note. Attachments are fixed at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub created_at: String,
    pub attachments: Vec<Attachment>,
}

/// Media attached to a note, addressed through an ephemeral object URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Voice,
    Document,
}

/// The in-progress note composition, including its own attachment pool.
/// `Default` is the cleared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

/// Todo list filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

/// Which list the main content area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Todos,
    Notes,
}
