//! App Header
//!
//! Title row with the dark mode toggle.

use leptos::prelude::*;

use crate::theme;

/// Header component. Toggling persists the flag and restyles the page in
/// the same click.
#[component]
pub fn Header(dark_mode: ReadSignal<bool>, set_dark_mode: WriteSignal<bool>) -> impl IntoView {
    let toggle = move |_| {
        let next = !dark_mode.get();
        theme::store(next);
        set_dark_mode.set(next);
    };

    view! {
        <header class="app-header">
            <h1>"Jotter"</h1>
            <button class="theme-toggle" on:click=toggle>
                {move || if dark_mode.get() { "Light mode" } else { "Dark mode" }}
            </button>
        </header>
    }
}
