use std::collections::HashMap;
use std::fmt;

use crate::models::history::HistoryItem;

pub const NO_DATA: &str = "Нет данных";
pub const NO_TIMESTAMP: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_count: usize,
    pub most_frequent_occasion: Option<String>,
    pub most_recent_timestamp: Option<String>,
}

impl HistoryStats {
    /// `items` is newest first. Occasions group case-insensitively; a group
    /// takes the lead only by strictly exceeding the current maximum.
    pub fn from_items(items: &[HistoryItem]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut max_count = 0;
        let mut leader: Option<&str> = None;

        for item in items {
            let count = counts.entry(item.occasion.to_lowercase()).or_insert(0);
            *count += 1;
            if *count > max_count {
                max_count = *count;
                leader = Some(item.occasion.as_str());
            }
        }

        Self {
            total_count: items.len(),
            most_frequent_occasion: leader.map(str::to_string),
            most_recent_timestamp: items.first().map(|item| item.timestamp.clone()),
        }
    }

    pub fn occasion_label(&self) -> &str {
        self.most_frequent_occasion.as_deref().unwrap_or(NO_DATA)
    }

    pub fn timestamp_label(&self) -> &str {
        self.most_recent_timestamp.as_deref().unwrap_or(NO_TIMESTAMP)
    }
}

impl fmt::Display for HistoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Всего открыток: {}", self.total_count)?;
        writeln!(f, "Поп. повод: {}", self.occasion_label())?;
        write!(f, "Последний раз: {}", self.timestamp_label())
    }
}
