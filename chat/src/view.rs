//! Transcript rendering: value records → chat bubbles.
//!
//! [`bubble_style`] is pure and decides classes, avatar and layout for one
//! entry. [`TranscriptView`] (hydrate only) owns the DOM nodes and keeps them
//! in step with a [`Transcript`]: new entries are appended, changed entries
//! (a pending bubble that just settled) are updated in place, and the
//! container scrolls to the newest bubble whenever one is added.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::transcript::{ChatMessage, Sender};
#[cfg(feature = "hydrate")]
use crate::transcript::Transcript;

/// Label shown inside a pending bot bubble.
pub const THINKING_LABEL: &str = "Thinking...";

const WRAPPER_BASE: [&str; 4] = ["flex", "items-start", "gap-3", "chat-bubble"];
const ICON_BASE: [&str; 7] = ["w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "text-lg"];
const CONTENT_BASE: [&str; 3] = ["rounded-lg", "p-4", "max-w-lg"];
const ERROR_CLASS: &str = "bg-red-500/50";
const PENDING_CLASS: &str = "animate-pulse";

/// Presentation of one transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleStyle {
    pub wrapper: String,
    pub icon: String,
    pub content: String,
    pub text: String,
    pub avatar: &'static str,
    /// Bot bubbles put the avatar before the content; user bubbles after.
    pub avatar_first: bool,
}

fn join(base: &[&str], extra: &[&str]) -> String {
    base.iter().chain(extra).copied().collect::<Vec<_>>().join(" ")
}

#[must_use]
pub fn bubble_style(message: &ChatMessage) -> BubbleStyle {
    let (align, icon_bg, content_bg, avatar) = match message.sender {
        Sender::User => ("justify-end", "bg-blue-500", "bg-blue-600", "🧑‍💻"),
        Sender::Bot => ("justify-start", "bg-green-500", "bg-gray-700", "🤖"),
    };

    let mut content_extra = vec![content_bg];
    if message.is_error {
        content_extra.push(ERROR_CLASS);
    }
    let text_extra: &[&str] = if message.is_pending { &[PENDING_CLASS] } else { &[] };

    BubbleStyle {
        wrapper: join(&WRAPPER_BASE, &[align]),
        icon: join(&ICON_BASE, &["flex-shrink-0", icon_bg]),
        content: join(&CONTENT_BASE, &content_extra),
        text: join(&["text-sm"], text_extra),
        avatar,
        avatar_first: message.sender == Sender::Bot,
    }
}

/// Text shown in the bubble: the thinking label while pending, else the entry text.
#[must_use]
pub fn display_text(message: &ChatMessage) -> &str {
    if message.is_pending { THINKING_LABEL } else { &message.text }
}

// =============================================================================
// DOM VIEW
// =============================================================================

#[cfg(feature = "hydrate")]
struct RenderedEntry {
    content: web_sys::Element,
    text: web_sys::Element,
    shown: ChatMessage,
}

/// DOM mirror of a transcript inside a scrollable container.
#[cfg(feature = "hydrate")]
pub struct TranscriptView {
    document: web_sys::Document,
    container: web_sys::Element,
    rendered: Vec<RenderedEntry>,
}

#[cfg(feature = "hydrate")]
impl TranscriptView {
    #[must_use]
    pub fn new(document: web_sys::Document, container: web_sys::Element) -> Self {
        Self { document, container, rendered: Vec::new() }
    }

    /// Bring the DOM in line with `transcript`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a DOM node cannot be created or attached.
    pub fn sync(&mut self, transcript: &Transcript) -> Result<(), wasm_bindgen::JsValue> {
        let entries = transcript.entries();

        for (rendered, message) in self.rendered.iter_mut().zip(entries) {
            if rendered.shown != *message {
                let style = bubble_style(message);
                rendered.content.set_class_name(&style.content);
                rendered.text.set_class_name(&style.text);
                rendered.text.set_text_content(Some(display_text(message)));
                rendered.shown = message.clone();
            }
        }

        let appended = entries.len() > self.rendered.len();
        for message in &entries[self.rendered.len()..] {
            let entry = self.append(message)?;
            self.rendered.push(entry);
        }

        if appended {
            self.container.set_scroll_top(self.container.scroll_height());
        }
        Ok(())
    }

    fn append(&self, message: &ChatMessage) -> Result<RenderedEntry, wasm_bindgen::JsValue> {
        let style = bubble_style(message);

        let wrapper = self.document.create_element("div")?;
        wrapper.set_class_name(&style.wrapper);

        let icon = self.document.create_element("div")?;
        icon.set_class_name(&style.icon);
        icon.set_text_content(Some(style.avatar));

        let content = self.document.create_element("div")?;
        content.set_class_name(&style.content);

        let text = self.document.create_element("p")?;
        text.set_class_name(&style.text);
        text.set_text_content(Some(display_text(message)));
        content.append_child(&text)?;

        if style.avatar_first {
            wrapper.append_child(&icon)?;
            wrapper.append_child(&content)?;
        } else {
            wrapper.append_child(&content)?;
            wrapper.append_child(&icon)?;
        }
        self.container.append_child(&wrapper)?;

        Ok(RenderedEntry { content, text, shown: message.clone() })
    }
}
