//! Note Composer
//!
//! The "add note" panel: title/subtitle/content fields plus the draft
//! attachment pool fed by the image and document pickers and the voice
//! recorder. Saving moves the pool into the committed note; cancelling
//! revokes every recording URL still in the draft.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::console;

use crate::clock;
use crate::media;
use crate::models::{Attachment, AttachmentKind, Note, NoteDraft};
use crate::recorder::{self, CaptureClick, CaptureState, VoiceRecorder};
use crate::store;

#[component]
pub fn NoteComposer(set_notes: WriteSignal<Vec<Note>>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(NoteDraft::default());
    let (capture, set_capture) = signal(CaptureState::Idle);
    // The recorder holds JS closures and never crosses threads
    let recorder = StoredValue::new_local(None::<VoiceRecorder>);

    // Signal any active recording to finalize; its attachment is routed by
    // `absorb_recording` once the stop event fires.
    let stop_recorder = move || {
        recorder.update_value(|slot| {
            if let Some(rec) = slot.take() {
                rec.stop();
            }
        });
        set_capture.set(CaptureState::Idle);
    };

    let begin_draft = move |_| {
        set_draft.update(|d| media::revoke_all(&store::discard_draft(d)));
        set_open.set(true);
    };

    let cancel_draft = move |_| {
        stop_recorder();
        set_draft.update(|d| media::revoke_all(&store::discard_draft(d)));
        set_open.set(false);
    };

    let save_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut committed = false;
        set_notes.update(|notes| {
            set_draft.update(|d| {
                committed = store::commit_draft(notes, d, clock::next_id(), clock::timestamp());
            });
        });
        // Missing title or content: keep the panel open, keep the values
        if committed {
            stop_recorder();
            set_open.set(false);
        }
    };

    // Shared handler for the image and document pickers
    let attach_file = move |ev: web_sys::Event, kind: AttachmentKind| {
        let target = ev.target().unwrap();
        let input = target
            .dyn_ref::<web_sys::HtmlInputElement>()
            .unwrap()
            .clone();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            if let Some(url) = media::object_url(&file) {
                set_draft.update(|d| {
                    d.attachments.push(Attachment {
                        kind,
                        url,
                        name: file.name(),
                    })
                });
            }
        }
        // Allow re-picking the same file
        input.set_value("");
    };

    let toggle_recording = move |_| match recorder::on_record_click(capture.get()) {
        // Permission request already in flight
        None => {}
        Some(CaptureClick::Stop) => stop_recorder(),
        Some(CaptureClick::Start) => {
            set_capture.set(CaptureState::Requesting);
            spawn_local(async move {
                let started = VoiceRecorder::start(move |attachment| {
                    set_draft.update(|d| {
                        if let Some(url) =
                            store::absorb_recording(d, attachment, open.get_untracked())
                        {
                            media::revoke_object_url(&url);
                        }
                    });
                })
                .await;
                match started {
                    Ok(rec) => {
                        if capture.get_untracked() == CaptureState::Requesting {
                            recorder.set_value(Some(rec));
                            set_capture.set(CaptureState::Recording);
                        } else {
                            // The draft went away while the prompt was up;
                            // finalize immediately so the stream is released
                            rec.stop();
                        }
                    }
                    Err(err) => {
                        // Back to Idle; nothing surfaces to the UI
                        console::error_2(&"microphone unavailable:".into(), &err);
                        set_capture.set(CaptureState::Idle);
                    }
                }
            });
        }
    };

    view! {
        <div class="note-composer">
            <Show when=move || !open.get()>
                <button class="new-note-btn" on:click=begin_draft>
                    "New note"
                </button>
            </Show>

            <Show when=move || open.get()>
                <form class="note-form" on:submit=save_note>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || draft.get().title
                        on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Subtitle (optional)"
                        prop:value=move || draft.get().subtitle
                        on:input=move |ev| set_draft.update(|d| d.subtitle = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Write your note..."
                        prop:value=move || draft.get().content
                        on:input=move |ev| set_draft.update(|d| d.content = event_target_value(&ev))
                    ></textarea>

                    <div class="attach-row">
                        <label class="attach-btn">
                            "Image"
                            <input
                                type="file"
                                accept="image/*"
                                on:change=move |ev| attach_file(ev, AttachmentKind::Image)
                            />
                        </label>
                        <label class="attach-btn">
                            "Document"
                            <input
                                type="file"
                                accept=".pdf,.doc,.docx,.txt"
                                on:change=move |ev| attach_file(ev, AttachmentKind::Document)
                            />
                        </label>
                        <button
                            type="button"
                            class=move || match capture.get() {
                                CaptureState::Recording => "record-btn recording",
                                _ => "record-btn",
                            }
                            on:click=toggle_recording
                        >
                            {move || match capture.get() {
                                CaptureState::Idle => "Record",
                                CaptureState::Requesting => "Waiting...",
                                CaptureState::Recording => "Stop",
                            }}
                        </button>
                    </div>

                    <ul class="draft-attachments">
                        {move || {
                            draft
                                .get()
                                .attachments
                                .iter()
                                .enumerate()
                                .map(|(index, attachment)| {
                                    let label = match attachment.kind {
                                        AttachmentKind::Image => "img",
                                        AttachmentKind::Voice => "rec",
                                        AttachmentKind::Document => "doc",
                                    };
                                    view! {
                                        <li class="draft-attachment">
                                            <span class="attachment-kind">{label}</span>
                                            <span class="attachment-name">{attachment.name.clone()}</span>
                                            <button
                                                type="button"
                                                class="remove-attachment-btn"
                                                on:click=move |_| {
                                                    set_draft.update(|d| {
                                                        if let Some(url) = store::remove_draft_attachment(d, index) {
                                                            media::revoke_object_url(&url);
                                                        }
                                                    })
                                                }
                                            >
                                                "\u{00d7}"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>

                    <div class="composer-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=cancel_draft>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
