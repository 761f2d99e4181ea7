//! Todo and Note Store Operations
//!
//! Pure state transitions over the model collections. Components own the
//! reactive signals; these functions own the semantics, which keeps them
//! testable outside the browser. Functions that retire attachments return
//! the object URLs the caller must revoke.

use crate::models::{Attachment, AttachmentKind, Note, NoteDraft, Todo, TodoFilter};

// ========================
// Todos
// ========================

/// Append a new todo. Text is trimmed before storing; a whitespace-only
/// text is a no-op returning false.
pub fn add_todo(
    todos: &mut Vec<Todo>,
    id: u64,
    text: &str,
    due_date: String,
    due_time: String,
) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    todos.push(Todo {
        id,
        text: trimmed.to_string(),
        completed: false,
        due_date,
        due_time,
    });
    true
}

/// Flip `completed` for the matching todo; unknown id is a no-op.
pub fn toggle_todo(todos: &mut [Todo], id: u64) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
}

/// Remove the matching todo; unknown id is a no-op.
pub fn remove_todo(todos: &mut Vec<Todo>, id: u64) {
    todos.retain(|t| t.id != id);
}

/// Filtered view of the todo list: filter condition AND case-insensitive
/// text match. Insertion order is preserved.
pub fn filter_todos(todos: &[Todo], filter: TodoFilter, search: &str) -> Vec<Todo> {
    let needle = search.to_lowercase();
    todos
        .iter()
        .filter(|t| filter.matches(t))
        .filter(|t| needle.is_empty() || t.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// ========================
// Notes
// ========================

/// Notes whose title, subtitle or content contains the search text,
/// case-insensitively. Empty search matches all.
pub fn filter_notes(notes: &[Note], search: &str) -> Vec<Note> {
    let needle = search.to_lowercase();
    notes
        .iter()
        .filter(|n| {
            needle.is_empty()
                || n.title.to_lowercase().contains(&needle)
                || n.subtitle.to_lowercase().contains(&needle)
                || n.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Commit the draft as a new note. Requires non-empty title and content
/// after trimming; otherwise leaves both the draft and the note list
/// untouched and returns false. Fields are stored as typed (the trim is
/// only the emptiness check) and the attachment pool moves into the note.
pub fn commit_draft(
    notes: &mut Vec<Note>,
    draft: &mut NoteDraft,
    id: u64,
    created_at: String,
) -> bool {
    if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
        return false;
    }
    let taken = std::mem::take(draft);
    notes.push(Note {
        id,
        title: taken.title,
        subtitle: taken.subtitle,
        content: taken.content,
        created_at,
        attachments: taken.attachments,
    });
    true
}

/// Remove a note, returning the object URLs of its voice attachments so
/// the caller can revoke them. Unknown id is a no-op returning no URLs.
pub fn remove_note(notes: &mut Vec<Note>, id: u64) -> Vec<String> {
    let Some(pos) = notes.iter().position(|n| n.id == id) else {
        return Vec::new();
    };
    let note = notes.remove(pos);
    voice_urls(note.attachments.into_iter())
}

/// Reset the draft to its cleared state, returning voice URLs to revoke.
pub fn discard_draft(draft: &mut NoteDraft) -> Vec<String> {
    let taken = std::mem::take(draft);
    voice_urls(taken.attachments.into_iter())
}

/// Fold a finished recording into the draft pool. When the composer is no
/// longer open (the draft was cancelled or committed while the recording
/// finalized) the attachment has no owner; its URL comes back for
/// immediate revocation instead of lingering in the pool.
pub fn absorb_recording(
    draft: &mut NoteDraft,
    attachment: Attachment,
    panel_open: bool,
) -> Option<String> {
    if panel_open {
        draft.attachments.push(attachment);
        None
    } else {
        Some(attachment.url)
    }
}

/// Remove one draft attachment by position; later attachments shift down.
/// Returns the URL to revoke when the removed attachment was a recording.
/// Out-of-range index is a no-op.
pub fn remove_draft_attachment(draft: &mut NoteDraft, index: usize) -> Option<String> {
    if index >= draft.attachments.len() {
        return None;
    }
    let removed = draft.attachments.remove(index);
    (removed.kind == AttachmentKind::Voice).then_some(removed.url)
}

fn voice_urls(attachments: impl Iterator<Item = Attachment>) -> Vec<String> {
    attachments
        .filter(|a| a.kind == AttachmentKind::Voice)
        .map(|a| a.url)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;

    fn make_attachment(kind: AttachmentKind, url: &str) -> Attachment {
        Attachment {
            kind,
            url: url.to_string(),
            name: format!("att-{}", url),
        }
    }

    fn make_note(id: u64, title: &str, attachments: Vec<Attachment>) -> Note {
        Note {
            id,
            title: title.to_string(),
            subtitle: String::new(),
            content: "content".to_string(),
            created_at: "1/1/2026, 12:00:00 PM".to_string(),
            attachments,
        }
    }

    fn add(todos: &mut Vec<Todo>, id: u64, text: &str) -> bool {
        add_todo(todos, id, text, String::new(), String::new())
    }

    #[test]
    fn test_add_todo_trims_text() {
        let mut todos = Vec::new();
        assert!(add(&mut todos, 1, "  Buy milk  "));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_add_todo_rejects_empty_and_whitespace() {
        let mut todos = Vec::new();
        assert!(!add(&mut todos, 1, ""));
        assert!(!add(&mut todos, 2, "   "));
        assert!(todos.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut todos = Vec::new();
        add(&mut todos, 1, "Buy milk");
        let original = todos[0].completed;
        toggle_todo(&mut todos, 1);
        assert_ne!(todos[0].completed, original);
        toggle_todo(&mut todos, 1);
        assert_eq!(todos[0].completed, original);
    }

    #[test]
    fn test_toggle_and_remove_unknown_id_are_noops() {
        let mut todos = Vec::new();
        add(&mut todos, 1, "Buy milk");
        toggle_todo(&mut todos, 99);
        remove_todo(&mut todos, 99);
        assert_eq!(todos.len(), 1);
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_filter_partitions_todos() {
        let mut todos = Vec::new();
        add(&mut todos, 1, "a");
        add(&mut todos, 2, "b");
        add(&mut todos, 3, "c");
        toggle_todo(&mut todos, 2);

        let all = filter_todos(&todos, TodoFilter::All, "");
        let active = filter_todos(&todos, TodoFilter::Active, "");
        let completed = filter_todos(&todos, TodoFilter::Completed, "");

        assert_eq!(all.len(), 3);
        assert_eq!(active.len() + completed.len(), all.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        // Insertion order preserved in every view
        let ids: Vec<u64> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_toggled_todo_moves_between_filters() {
        let mut todos = Vec::new();
        add(&mut todos, 1, "Buy milk");

        assert_eq!(filter_todos(&todos, TodoFilter::All, "").len(), 1);
        assert_eq!(filter_todos(&todos, TodoFilter::Active, "").len(), 1);
        assert!(filter_todos(&todos, TodoFilter::Completed, "").is_empty());

        toggle_todo(&mut todos, 1);

        assert_eq!(filter_todos(&todos, TodoFilter::All, "").len(), 1);
        assert!(filter_todos(&todos, TodoFilter::Active, "").is_empty());
        assert_eq!(filter_todos(&todos, TodoFilter::Completed, "").len(), 1);
    }

    #[test]
    fn test_search_todos_case_insensitive() {
        let mut todos = Vec::new();
        add(&mut todos, 1, "Buy milk");
        add(&mut todos, 2, "Walk dog");

        for query in ["milk", "MILK", "Milk"] {
            let found = filter_todos(&todos, TodoFilter::All, query);
            assert_eq!(found.len(), 1, "query {:?}", query);
            assert_eq!(found[0].text, "Buy milk");
        }
        assert_eq!(filter_todos(&todos, TodoFilter::All, "").len(), 2);
    }

    #[test]
    fn test_search_notes_matches_any_field() {
        let notes = vec![
            Note {
                id: 1,
                title: "Trip".to_string(),
                subtitle: "Japan".to_string(),
                content: "Packing list".to_string(),
                created_at: String::new(),
                attachments: Vec::new(),
            },
            make_note(2, "Groceries", Vec::new()),
        ];

        assert_eq!(filter_notes(&notes, "trip").len(), 1);
        assert_eq!(filter_notes(&notes, "JAPAN").len(), 1);
        assert_eq!(filter_notes(&notes, "packing").len(), 1);
        assert_eq!(filter_notes(&notes, "nowhere").len(), 0);
        assert_eq!(filter_notes(&notes, "").len(), 2);
    }

    #[test]
    fn test_commit_draft_requires_title_and_content() {
        let mut notes = Vec::new();
        let mut draft = NoteDraft {
            title: "Trip".to_string(),
            subtitle: String::new(),
            content: "   ".to_string(),
            attachments: vec![make_attachment(AttachmentKind::Voice, "blob:1")],
        };
        let before = draft.clone();

        assert!(!commit_draft(&mut notes, &mut draft, 1, "now".to_string()));
        assert!(notes.is_empty());
        // Draft untouched so the form keeps its values
        assert_eq!(draft, before);

        draft.content = "Packing list".to_string();
        assert!(commit_draft(&mut notes, &mut draft, 1, "now".to_string()));
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_commit_draft_moves_attachment_pool() {
        let mut notes = Vec::new();
        let mut draft = NoteDraft {
            title: "Trip".to_string(),
            subtitle: "Japan".to_string(),
            content: "Packing list".to_string(),
            attachments: vec![
                make_attachment(AttachmentKind::Image, "blob:img"),
                make_attachment(AttachmentKind::Voice, "blob:rec"),
            ],
        };

        assert!(commit_draft(&mut notes, &mut draft, 7, "now".to_string()));
        assert_eq!(draft, NoteDraft::default());
        assert_eq!(notes[0].attachments.len(), 2);
        // Stored as typed, not trimmed
        assert_eq!(notes[0].title, "Trip");
        assert_eq!(notes[0].created_at, "now");
    }

    #[test]
    fn test_remove_note_releases_each_voice_url_once() {
        let mut notes = vec![make_note(
            1,
            "Trip",
            vec![
                make_attachment(AttachmentKind::Voice, "blob:a"),
                make_attachment(AttachmentKind::Image, "blob:b"),
                make_attachment(AttachmentKind::Voice, "blob:c"),
            ],
        )];

        let urls = remove_note(&mut notes, 1);
        assert_eq!(urls, vec!["blob:a".to_string(), "blob:c".to_string()]);
        assert!(notes.is_empty());

        // Second delete finds nothing: no double release
        assert!(remove_note(&mut notes, 1).is_empty());
    }

    #[test]
    fn test_remove_note_unknown_id_is_noop() {
        let mut notes = vec![make_note(1, "Trip", Vec::new())];
        assert!(remove_note(&mut notes, 2).is_empty());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_discard_draft_clears_and_reports_voice_urls() {
        let mut draft = NoteDraft {
            title: "t".to_string(),
            subtitle: "s".to_string(),
            content: "c".to_string(),
            attachments: vec![
                make_attachment(AttachmentKind::Voice, "blob:a"),
                make_attachment(AttachmentKind::Document, "blob:d"),
            ],
        };

        let urls = discard_draft(&mut draft);
        assert_eq!(urls, vec!["blob:a".to_string()]);
        assert_eq!(draft, NoteDraft::default());
    }

    #[test]
    fn test_recording_finished_after_close_is_revoked_not_pooled() {
        let mut draft = NoteDraft::default();
        let attachment = make_attachment(AttachmentKind::Voice, "blob:late");

        // Panel open: the recording joins the pool
        assert_eq!(absorb_recording(&mut draft, attachment.clone(), true), None);
        assert_eq!(draft.attachments.len(), 1);

        // Panel closed: the recording is orphaned and must be revoked
        let mut closed = NoteDraft::default();
        assert_eq!(
            absorb_recording(&mut closed, attachment, false),
            Some("blob:late".to_string())
        );
        assert!(closed.attachments.is_empty());
    }

    #[test]
    fn test_remove_draft_attachment_shifts_positions() {
        let mut draft = NoteDraft {
            attachments: vec![
                make_attachment(AttachmentKind::Image, "blob:0"),
                make_attachment(AttachmentKind::Voice, "blob:1"),
                make_attachment(AttachmentKind::Document, "blob:2"),
            ],
            ..Default::default()
        };

        // Image removal reports no URL to revoke
        assert_eq!(remove_draft_attachment(&mut draft, 0), None);
        // What was at index 2 now sits at index 1
        assert_eq!(draft.attachments[1].url, "blob:2");

        assert_eq!(
            remove_draft_attachment(&mut draft, 0),
            Some("blob:1".to_string())
        );
        assert_eq!(draft.attachments.len(), 1);

        // Out of range is a no-op
        assert_eq!(remove_draft_attachment(&mut draft, 5), None);
        assert_eq!(draft.attachments.len(), 1);
    }
}
