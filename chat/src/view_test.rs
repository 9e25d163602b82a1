use super::*;
use crate::transcript::Transcript;

fn settled_bot(text: &str, is_error: bool) -> ChatMessage {
    ChatMessage { sender: Sender::Bot, text: text.to_owned(), is_pending: false, is_error }
}

#[test]
fn user_bubble_is_right_aligned_with_avatar_last() {
    let mut t = Transcript::new();
    let id = t.push_user("hi");
    let style = bubble_style(t.get(id).unwrap());
    assert!(style.wrapper.contains("justify-end"));
    assert!(style.wrapper.contains("chat-bubble"));
    assert!(style.content.contains("bg-blue-600"));
    assert!(style.icon.contains("bg-blue-500"));
    assert_eq!(style.avatar, "🧑‍💻");
    assert!(!style.avatar_first);
}

#[test]
fn bot_bubble_is_left_aligned_with_avatar_first() {
    let style = bubble_style(&settled_bot("answer", false));
    assert!(style.wrapper.contains("justify-start"));
    assert!(style.content.contains("bg-gray-700"));
    assert!(style.icon.contains("bg-green-500"));
    assert_eq!(style.avatar, "🤖");
    assert!(style.avatar_first);
}

#[test]
fn pending_bubble_shows_thinking_indicator() {
    let mut t = Transcript::new();
    let id = t.push_pending();
    let msg = t.get(id).unwrap();
    assert_eq!(display_text(msg), THINKING_LABEL);
    assert!(bubble_style(msg).text.contains("animate-pulse"));
}

#[test]
fn settled_bubble_shows_its_text() {
    let msg = settled_bot("Emissions are rising.", false);
    assert_eq!(display_text(&msg), "Emissions are rising.");
    assert_eq!(bubble_style(&msg).text, "text-sm");
}

#[test]
fn error_bubble_gets_error_styling() {
    let style = bubble_style(&settled_bot("Sorry, an error occurred: Internal error.", true));
    assert!(style.content.contains("bg-red-500/50"));
    assert!(style.content.contains("bg-gray-700"));
}

#[test]
fn non_error_bubble_has_no_error_styling() {
    assert!(!bubble_style(&settled_bot("ok", false)).content.contains("bg-red-500/50"));
}

#[test]
fn icon_never_shrinks() {
    assert!(bubble_style(&settled_bot("ok", false)).icon.ends_with("flex-shrink-0 bg-green-500"));
}
