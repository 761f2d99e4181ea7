//! Jotter App
//!
//! Root component: owns the todo and note collections plus the view-level
//! signals, and lays out the header, toolbar and the two list panes. Both
//! panes stay mounted; switching views toggles visibility so the draft
//! (and an in-flight recording) survives a tab switch.

use leptos::prelude::*;

use crate::components::{
    Header, NoteComposer, NoteList, SearchBar, TodoForm, TodoList, ViewSwitcher,
};
use crate::context::AppContext;
use crate::models::{Note, Todo, TodoFilter, ViewMode};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Restore the persisted theme before first paint
    let initial_dark = theme::load();
    theme::apply(initial_dark);

    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (view, set_view) = signal(ViewMode::Todos);
    let (filter, set_filter) = signal(TodoFilter::All);
    let (search, set_search) = signal(String::new());
    let (dark_mode, set_dark_mode) = signal(initial_dark);

    // Provide context to all children
    provide_context(AppContext::new(
        (view, set_view),
        (filter, set_filter),
        (search, set_search),
    ));

    let pane_class = move |mode: ViewMode| {
        if view.get() == mode {
            "view-pane"
        } else {
            "view-pane hidden"
        }
    };

    view! {
        <div class="app-layout">
            <Header dark_mode=dark_mode set_dark_mode=set_dark_mode />

            <main class="main-content">
                <div class="toolbar">
                    <ViewSwitcher />
                    <SearchBar />
                </div>

                <section class=move || pane_class(ViewMode::Todos)>
                    <TodoForm set_todos=set_todos />
                    <TodoList todos=todos set_todos=set_todos />
                </section>

                <section class=move || pane_class(ViewMode::Notes)>
                    <NoteComposer set_notes=set_notes />
                    <NoteList notes=notes set_notes=set_notes />
                </section>

                <p class="item-count">
                    {move || format!("{} todos, {} notes", todos.get().len(), notes.get().len())}
                </p>
            </main>
        </div>
    }
}
