//! Voice Recorder
//!
//! Two-state capture flow around MediaRecorder: Idle until microphone
//! access is granted, Recording until an explicit stop. Audio chunks
//! accumulate as the device delivers them; stop halts the stream tracks,
//! assembles the chunks into one blob and hands the finished attachment
//! to the completion callback.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    console, Blob, BlobEvent, BlobPropertyBag, MediaRecorder, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::clock;
use crate::media;
use crate::models::{Attachment, AttachmentKind};

/// Capture flow state. `Requesting` covers the window between the start
/// click and the permission grant; without it a second click while the
/// prompt is up would spawn a second recorder and orphan the first one's
/// live stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Requesting,
    Recording,
}

/// What a record-button click should do in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureClick {
    Start,
    Stop,
}

/// Transition for a record-button click; `None` means the click is
/// ignored because a permission request is already in flight.
pub fn on_record_click(state: CaptureState) -> Option<CaptureClick> {
    match state {
        CaptureState::Idle => Some(CaptureClick::Start),
        CaptureState::Requesting => None,
        CaptureState::Recording => Some(CaptureClick::Stop),
    }
}

/// Event closures, kept alive until the `stop` event has fired even if the
/// `VoiceRecorder` handle is dropped right after `stop()`.
struct Handlers {
    _on_data: Closure<dyn FnMut(BlobEvent)>,
    _on_stop: Closure<dyn FnMut()>,
}

/// A recording in progress. Dropping the handle does not interrupt the
/// capture; call `stop()` to finalize.
pub struct VoiceRecorder {
    inner: MediaRecorder,
    // Shared with the stop handler, which releases the closures once it
    // has run (on a queued microtask, so it never drops itself mid-call).
    _handlers: Rc<RefCell<Option<Handlers>>>,
}

impl VoiceRecorder {
    /// Request microphone access and begin capturing. `on_finish` runs
    /// after `stop()` with the assembled recording. Permission denial or a
    /// missing device surfaces as the returned error; the caller logs it
    /// and stays in the Idle state.
    pub async fn start(on_finish: impl Fn(Attachment) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let stream: MediaStream =
            JsFuture::from(devices.get_user_media_with_constraints(&constraints)?)
                .await?
                .unchecked_into();

        let inner = MediaRecorder::new_with_media_stream(&stream)?;
        let chunks = Rc::new(RefCell::new(js_sys::Array::new()));
        let handlers: Rc<RefCell<Option<Handlers>>> = Rc::new(RefCell::new(None));

        let on_data: Closure<dyn FnMut(BlobEvent)> = {
            let chunks = Rc::clone(&chunks);
            Closure::new(move |ev: BlobEvent| {
                if let Some(data) = ev.data() {
                    chunks.borrow().push(data.as_ref());
                }
            })
        };
        inner.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));

        let on_stop: Closure<dyn FnMut()> = {
            let chunks = Rc::clone(&chunks);
            let handlers = Rc::clone(&handlers);
            let stream = stream.clone();
            Closure::new(move || {
                for track in stream.get_tracks().iter() {
                    track.unchecked_into::<MediaStreamTrack>().stop();
                }
                let parts =
                    std::mem::replace(&mut *chunks.borrow_mut(), js_sys::Array::new());
                if let Some(attachment) = assemble(&parts) {
                    on_finish(attachment);
                }
                // This closure is still executing; release it a tick later.
                let handlers = Rc::clone(&handlers);
                spawn_local(async move {
                    handlers.borrow_mut().take();
                });
            })
        };
        inner.set_onstop(Some(on_stop.as_ref().unchecked_ref()));

        inner.start()?;
        *handlers.borrow_mut() = Some(Handlers {
            _on_data: on_data,
            _on_stop: on_stop,
        });
        Ok(Self {
            inner,
            _handlers: handlers,
        })
    }

    /// Signal the device to stop. Finalization happens in the `stop` event
    /// handler once the last chunk has arrived.
    pub fn stop(&self) {
        if let Err(err) = self.inner.stop() {
            console::error_1(&err);
        }
    }
}

/// Fold the accumulated chunks into one voice attachment.
fn assemble(parts: &js_sys::Array) -> Option<Attachment> {
    let options = BlobPropertyBag::new();
    options.set_type("audio/webm");
    let blob = match Blob::new_with_blob_sequence_and_options(parts, &options) {
        Ok(blob) => blob,
        Err(err) => {
            console::error_1(&err);
            return None;
        }
    };
    let url = media::object_url(&blob)?;
    Some(Attachment {
        kind: AttachmentKind::Voice,
        url,
        name: clock::recording_name(),
    })
}
