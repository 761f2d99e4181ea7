//! View Switcher
//!
//! Tab bar toggling between the todo and note lists.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ViewMode;

const VIEWS: &[(ViewMode, &str)] = &[(ViewMode::Todos, "Todos"), (ViewMode::Notes, "Notes")];

#[component]
pub fn ViewSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="view-switcher">
            {VIEWS
                .iter()
                .map(|(mode, label)| {
                    let mode = *mode;
                    let tab_class = move || {
                        if ctx.view.get() == mode { "view-tab active" } else { "view-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| ctx.set_view(mode)>
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
