//! Object URL Helpers
//!
//! Attachments address their bytes through ephemeral object URLs. Every
//! URL handed out here must eventually come back through
//! `revoke_object_url`, or the backing blob stays alive for the session.

use web_sys::{console, Blob, Url};

/// Derive an object URL for a blob (or file, which derefs to blob).
/// Failures are logged and yield None; the attachment is simply not added.
pub fn object_url(blob: &Blob) -> Option<String> {
    match Url::create_object_url_with_blob(blob) {
        Ok(url) => Some(url),
        Err(err) => {
            console::error_1(&err);
            None
        }
    }
}

/// Release one object URL.
pub fn revoke_object_url(url: &str) {
    if let Err(err) = Url::revoke_object_url(url) {
        console::error_1(&err);
    }
}

/// Release every URL in a retirement list returned by the store.
pub fn revoke_all(urls: &[String]) {
    for url in urls {
        revoke_object_url(url);
    }
}
