//! In-memory guestbook panel. Entries live only for the lifetime of the page.

use serde::{Deserialize, Serialize};

use crate::catalog::site_config;

/// Sender label shown on every visitor entry.
pub const GUEST_SENDER_LABEL: &str = "Guest";
/// Sender label carried by the welcome entry.
pub const SYSTEM_SENDER_LABEL: &str = "System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    System,
    Guest,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::System => "message system-message",
            Self::Guest => "message user-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub kind: MessageKind,
    pub sender_label: String,
    /// Plain text. Rendered as a text node, never as markup.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guestbook {
    entries: Vec<MessageEntry>,
}

impl Guestbook {
    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    /// Replaces the list with the single welcome entry.
    pub fn reset(&mut self) {
        self.entries = vec![MessageEntry {
            kind: MessageKind::System,
            sender_label: SYSTEM_SENDER_LABEL.to_string(),
            text: welcome_message(&site_config().owner),
        }];
    }

    /// Appends a guest entry with the trimmed `text`. Blank input is ignored.
    ///
    /// Returns whether an entry was appended.
    pub fn send(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.push(MessageEntry {
            kind: MessageKind::Guest,
            sender_label: GUEST_SENDER_LABEL.to_string(),
            text: trimmed.to_string(),
        });
        true
    }
}

pub fn welcome_message(owner: &str) -> String {
    format!(
        "Welcome to the Guest Book! Leave a message for {owner}. (Messages refresh on page reload)"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reset_book() -> Guestbook {
        let mut book = Guestbook::default();
        book.reset();
        book
    }

    #[test]
    fn reset_leaves_exactly_one_welcome_entry() {
        let mut book = reset_book();
        book.send("first");
        book.send("second");
        book.reset();

        assert_eq!(book.entries().len(), 1);
        assert_eq!(book.entries()[0].kind, MessageKind::System);
        assert!(book.entries()[0].text.starts_with("Welcome to the Guest Book!"));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut book = reset_book();
        let before = book.clone();

        assert!(!book.send(""));
        assert!(!book.send("   "));
        assert!(!book.send("\n\t "));
        assert_eq!(book, before);
    }

    #[test]
    fn send_appends_trimmed_guest_entry() {
        let mut book = reset_book();

        assert!(book.send("  hello  "));
        assert_eq!(book.entries().len(), 2);
        assert_eq!(
            book.entries()[1],
            MessageEntry {
                kind: MessageKind::Guest,
                sender_label: GUEST_SENDER_LABEL.to_string(),
                text: "hello".to_string(),
            }
        );
    }

    #[test]
    fn markup_is_stored_verbatim_as_text() {
        let mut book = reset_book();
        book.send("<img src=x onerror=alert(1)>");
        assert_eq!(book.entries()[1].text, "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn welcome_names_the_owner() {
        assert!(welcome_message("Nuru").contains("Leave a message for Nuru."));
    }
}
