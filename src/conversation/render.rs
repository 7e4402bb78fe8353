//! Text renderings of a conversation.

use super::types::{Conversation, Role};
use crate::style::{paint, BLUE, BOLD, GREEN};

const UNTITLED: &str = "Untitled Chat";

impl Conversation {
    /// Plain rendering used by `cat`: a title line, then one
    /// `<label>: <content>` paragraph per message.
    ///
    /// Returns `None` without a title so the caller can fall back to raw text.
    pub fn render_plain(&self) -> Option<String> {
        let title = self.title()?;
        let body = self
            .messages
            .iter()
            .map(|msg| format!("{}: {}", msg.role.label(), msg.content))
            .collect::<Vec<_>>()
            .join("\n\n");
        Some(format!("Title: {}\n\n{}", title, body))
    }

    /// Viewer rendering used by `open`: a bold title, then each message
    /// under a colored speaker label.
    pub fn render_highlighted(&self) -> String {
        let title = paint(BOLD, self.title().unwrap_or(UNTITLED));
        let body = self
            .messages
            .iter()
            .map(|msg| {
                let color = if msg.role == Role::User { BLUE } else { GREEN };
                format!("{}:\n{}", paint(color, msg.role.label()), msg.content)
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n\n{}", title, body)
    }
}
