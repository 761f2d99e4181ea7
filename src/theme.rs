//! Dark Mode Store
//!
//! One JSON-encoded boolean under a fixed localStorage key, mirrored onto
//! the document root's `dark` class. Storage failures degrade to
//! in-memory-only for the session; they never surface to the UI.

use web_sys::console;

const STORAGE_KEY: &str = "darkMode";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Decode a stored flag. Absent or unparseable values mean light mode.
fn decode(raw: Option<&str>) -> bool {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or(false)
}

/// JSON encoding of the flag as written to storage.
fn encode(dark: bool) -> String {
    serde_json::to_string(&dark).unwrap_or_else(|_| "false".to_string())
}

/// Read the persisted flag. Absent storage, absent key or an unparseable
/// value all mean light mode.
pub fn load() -> bool {
    let raw = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    decode(raw.as_deref())
}

/// Persist the flag and apply it to the page in the same call.
pub fn store(dark: bool) {
    if let Some(storage) = local_storage() {
        if storage.set_item(STORAGE_KEY, &encode(dark)).is_err() {
            console::warn_1(&"theme: persisting dark mode flag failed".into());
        }
    }
    apply(dark);
}

/// Reflect the flag onto the document root without touching storage.
pub fn apply(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else { return };

    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(err) = result {
        console::error_1(&err);
    }
}
