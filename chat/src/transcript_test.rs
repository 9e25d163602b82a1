use super::*;

#[test]
fn new_transcript_is_empty() {
    let t = Transcript::new();
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
    assert_eq!(t.pending_count(), 0);
}

#[test]
fn push_user_appends_in_order() {
    let mut t = Transcript::new();
    let a = t.push_user("first");
    let b = t.push_user("second");
    assert!(a < b);
    assert_eq!(t.entries()[0].text, "first");
    assert_eq!(t.entries()[1].text, "second");
    assert!(t.entries().iter().all(|m| m.sender == Sender::User && !m.is_pending));
}

#[test]
fn push_pending_is_bot_placeholder() {
    let mut t = Transcript::new();
    let id = t.push_pending();
    let msg = t.get(id).unwrap();
    assert_eq!(msg.sender, Sender::Bot);
    assert_eq!(msg.text, PENDING_TEXT);
    assert!(msg.is_pending);
    assert!(!msg.is_error);
    assert_eq!(t.pending_count(), 1);
}

#[test]
fn resolve_updates_entry_in_place() {
    let mut t = Transcript::new();
    t.push_user("q");
    let id = t.push_pending();
    assert!(t.resolve(id, "answer"));
    assert_eq!(t.len(), 2);
    let msg = t.get(id).unwrap();
    assert_eq!(msg.text, "answer");
    assert!(!msg.is_pending);
    assert!(!msg.is_error);
}

#[test]
fn fail_marks_error() {
    let mut t = Transcript::new();
    let id = t.push_pending();
    assert!(t.fail(id, "Sorry, an error occurred: boom."));
    let msg = t.get(id).unwrap();
    assert!(msg.is_error);
    assert!(!msg.is_pending);
    assert_eq!(t.pending_count(), 0);
}

#[test]
fn settled_entry_is_not_settled_twice() {
    let mut t = Transcript::new();
    let id = t.push_pending();
    assert!(t.resolve(id, "first"));
    assert!(!t.fail(id, "late error"));
    assert_eq!(t.get(id).unwrap().text, "first");
    assert!(!t.get(id).unwrap().is_error);
}

#[test]
fn user_entries_cannot_be_settled() {
    let mut t = Transcript::new();
    let id = t.push_user("hello");
    assert!(!t.resolve(id, "changed"));
    assert_eq!(t.get(id).unwrap().text, "hello");
}

#[test]
fn unknown_id_is_ignored() {
    let mut other = Transcript::new();
    other.push_user("a");
    let foreign = other.push_pending();

    let mut t = Transcript::new();
    assert!(!t.resolve(foreign, "x"));
    assert!(t.get(foreign).is_none());
}

#[test]
fn entry_id_index_matches_position() {
    let mut t = Transcript::new();
    t.push_user("a");
    let id = t.push_pending();
    assert_eq!(id.index(), 1);
}
