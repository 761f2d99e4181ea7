//! Todo Form Component
//!
//! Text plus optional due date and time. An empty (or whitespace-only)
//! text silently refuses to add and keeps the entered values.

use leptos::prelude::*;

use crate::clock;
use crate::models::Todo;
use crate::store;

#[component]
pub fn TodoForm(set_todos: WriteSignal<Vec<Todo>>) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (due_time, set_due_time) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut added = false;
        set_todos.update(|todos| {
            added = store::add_todo(
                todos,
                clock::next_id(),
                &text.get(),
                due_date.get(),
                due_time.get(),
            );
        });
        if added {
            set_text.set(String::new());
            set_due_date.set(String::new());
            set_due_time.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a todo..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            <input
                type="time"
                prop:value=move || due_time.get()
                on:input=move |ev| set_due_time.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
