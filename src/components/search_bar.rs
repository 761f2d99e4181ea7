//! Search Bar
//!
//! One search box shared by both views; each list applies its own
//! matching rule to the same text.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ViewMode;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <input
            class="search-input"
            type="text"
            placeholder=move || match ctx.view.get() {
                ViewMode::Todos => "Search todos...",
                ViewMode::Notes => "Search notes...",
            }
            prop:value=move || ctx.search.get()
            on:input=move |ev| ctx.set_search(event_target_value(&ev))
        />
    }
}
