//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod header;
mod note_composer;
mod note_list;
mod search_bar;
mod todo_form;
mod todo_list;
mod view_switcher;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use note_composer::NoteComposer;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use view_switcher::ViewSwitcher;
