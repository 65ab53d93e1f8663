use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single blog entry parsed from a content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Rendered markdown body.
    pub html: String,
}

impl Entry {
    pub fn href(&self) -> String {
        format!("/entries/{}", urlencoding::encode(&self.slug))
    }
}
