//! Canned history used in place of a real chat service.

use async_trait::async_trait;
use chrono::Utc;

use super::types::*;
use crate::conversation::{Conversation, Message, Role};

/// Returns the same three conversations on every fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockHistorySource;

fn record(id: &str, title: &str, project: &str, question: &str, answer: &str) -> Conversation {
    let now = Utc::now().to_rfc3339();
    Conversation {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        project: Some(project.to_string()),
        messages: vec![
            Message::new(Role::User, question),
            Message::new(Role::Assistant, answer),
        ],
        created_at: Some(now.clone()),
        updated_at: Some(now),
    }
}

#[async_trait]
impl HistorySource for MockHistorySource {
    async fn fetch_history(&self) -> Result<Vec<Conversation>, HistoryError> {
        Ok(vec![
            record(
                "1",
                "React Component Design",
                "web-development",
                "How do I create a reusable React component?",
                "To create a reusable React component, you should...",
            ),
            record(
                "2",
                "Next.js Routing",
                "web-development",
                "How does routing work in Next.js?",
                "Next.js has a file-system based router built on the concept of pages...",
            ),
            record(
                "3",
                "GPT-4 Capabilities",
                "ai-research",
                "What can GPT-4 do that GPT-3 cannot?",
                "GPT-4 has several improvements over GPT-3, including...",
            ),
        ])
    }
}
