//! Todo List Component
//!
//! Filter tabs plus the filtered, searched todo list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Todo, TodoFilter};
use crate::store;

/// Filter tab options
const FILTERS: &[(TodoFilter, &str)] = &[
    (TodoFilter::All, "All"),
    (TodoFilter::Active, "Active"),
    (TodoFilter::Completed, "Completed"),
];

#[component]
pub fn TodoList(todos: ReadSignal<Vec<Todo>>, set_todos: WriteSignal<Vec<Todo>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let visible = move || store::filter_todos(&todos.get(), ctx.filter.get(), &ctx.search.get());

    view! {
        <div class="todo-view">
            <div class="filter-tabs">
                {FILTERS
                    .iter()
                    .map(|(filter, label)| {
                        let filter = *filter;
                        let tab_class = move || {
                            if ctx.filter.get() == filter { "filter-tab active" } else { "filter-tab" }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| ctx.set_filter(filter)>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="todo-list">
                <For
                    each=visible
                    // Key on the mutable field too so a toggle re-renders the row
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| {
                        let id = todo.id;
                        let due = match (todo.due_date.is_empty(), todo.due_time.is_empty()) {
                            (false, false) => Some(format!("{} {}", todo.due_date, todo.due_time)),
                            (false, true) => Some(todo.due_date.clone()),
                            (true, false) => Some(todo.due_time.clone()),
                            (true, true) => None,
                        };
                        view! {
                            <li class=if todo.completed { "todo-item completed" } else { "todo-item" }>
                                <input
                                    type="checkbox"
                                    checked=todo.completed
                                    on:change=move |_| set_todos.update(|todos| store::toggle_todo(todos, id))
                                />
                                <span class="todo-text">{todo.text.clone()}</span>
                                {due.map(|d| view! { <span class="todo-due">{d}</span> })}
                                <button
                                    class="delete-btn"
                                    on:click=move |_| set_todos.update(|todos| store::remove_todo(todos, id))
                                >
                                    "\u{00d7}"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            {move || visible().is_empty().then(|| view! { <p class="empty-state">"No todos here"</p> })}
        </div>
    }
}
