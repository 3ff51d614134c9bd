use chrono::{DateTime, Utc};

/// A stored note. Ids and timestamps are assigned by the storage backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
}

impl Note {
    /// Build a freshly created note whose timestamps are both `now`.
    pub fn new(id: i64, title: String, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content,
            created_at: now,
            last_edited_at: now,
        }
    }

    /// Replace the content and refresh the edit timestamp.
    pub fn set_content(&mut self, content: String, now: DateTime<Utc>) {
        self.content = content;
        self.last_edited_at = now.max(self.created_at);
    }

    /// True if `keyword` occurs in the title or the content (case-sensitive).
    pub fn contains(&self, keyword: &str) -> bool {
        self.title.contains(keyword) || self.content.contains(keyword)
    }
}
