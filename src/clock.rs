//! Ids and Timestamps
//!
//! Ids are epoch millis with a strictly-increasing fallback so two entries
//! created in the same millisecond stay unique.

use std::cell::Cell;

use wasm_bindgen::JsValue;

thread_local! {
    static LAST_ID: Cell<u64> = const { Cell::new(0) };
}

/// Unique, monotonically increasing id
pub fn next_id() -> u64 {
    let now = js_sys::Date::now() as u64;
    LAST_ID.with(|last| {
        let id = now.max(last.get() + 1);
        last.set(id);
        id
    })
}

/// Creation timestamp for a saved note, e.g. "1/15/2026, 2:03:11 PM"
pub fn timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

/// Display name for a finished voice recording
pub fn recording_name() -> String {
    let time: String = js_sys::Date::new_0().to_locale_time_string("en-US").into();
    format!("Recording {}", time)
}
