//! Jotter Entry Point

mod app;
mod clock;
mod components;
mod context;
mod media;
mod models;
mod recorder;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
