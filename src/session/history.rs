//! Up/down recall of previously submitted lines.

use super::types::HistoryDirection;

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    /// `None` while not browsing.
    index: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.index = None;
    }

    /// Move through history and return the line to show in the input box.
    ///
    /// `Up` starts at the newest entry and stops at the oldest. `Down` stops
    /// at the newest and does nothing while not browsing.
    pub fn navigate(&mut self, direction: HistoryDirection) -> String {
        let Some(last) = self.entries.len().checked_sub(1) else {
            return String::new();
        };

        self.index = match (direction, self.index) {
            (HistoryDirection::Up, None) => Some(last),
            (HistoryDirection::Up, Some(i)) => Some(i.saturating_sub(1)),
            (HistoryDirection::Down, None) => None,
            (HistoryDirection::Down, Some(i)) => Some((i + 1).min(last)),
        };

        self.index
            .map(|i| self.entries[i].clone())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
