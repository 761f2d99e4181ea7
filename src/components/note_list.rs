//! Note List Component
//!
//! Saved note cards with their attachments rendered per kind: inline
//! images, audio players for recordings, download links for documents.
//! Deleting a card revokes the object URLs of its voice attachments.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::media;
use crate::models::{Attachment, AttachmentKind, Note};
use crate::store;

#[component]
pub fn NoteList(notes: ReadSignal<Vec<Note>>, set_notes: WriteSignal<Vec<Note>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let visible = move || store::filter_notes(&notes.get(), &ctx.search.get());

    view! {
        <div class="note-list">
            <For
                each=visible
                key=|note| note.id
                children=move |note| {
                    let id = note.id;
                    view! {
                        <article class="note-card">
                            <div class="note-card-header">
                                <h2>{note.title.clone()}</h2>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move |_| {
                                        set_notes.update(|notes| {
                                            media::revoke_all(&store::remove_note(notes, id));
                                        })
                                    }
                                />
                            </div>
                            {(!note.subtitle.is_empty())
                                .then(|| view! { <h3 class="note-subtitle">{note.subtitle.clone()}</h3> })}
                            <time class="note-created">{note.created_at.clone()}</time>
                            <p class="note-content">{note.content.clone()}</p>
                            <div class="note-attachments">
                                {note.attachments.iter().map(attachment_view).collect_view()}
                            </div>
                        </article>
                    }
                }
            />

            {move || visible().is_empty().then(|| view! { <p class="empty-state">"No notes yet"</p> })}
        </div>
    }
}

fn attachment_view(attachment: &Attachment) -> AnyView {
    match attachment.kind {
        AttachmentKind::Image => view! {
            <img class="attachment-image" src=attachment.url.clone() alt=attachment.name.clone() />
        }
        .into_any(),
        AttachmentKind::Voice => view! {
            <figure class="attachment-voice">
                <figcaption>{attachment.name.clone()}</figcaption>
                <audio controls=true src=attachment.url.clone()></audio>
            </figure>
        }
        .into_any(),
        AttachmentKind::Document => view! {
            <a
                class="attachment-document"
                href=attachment.url.clone()
                download=attachment.name.clone()
            >
                {attachment.name.clone()}
            </a>
        }
        .into_any(),
    }
}
