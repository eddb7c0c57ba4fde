//! Article and history entry models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An article row as returned by the article list endpoints.
///
/// Only `id` and `title` are interpreted; every other field is kept as-is so
/// a history entry preserves the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            extra: Map::new(),
        }
    }
}

/// An article together with the time it was last viewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub article: Article,
    /// RFC 3339 UTC timestamp of the most recent view
    #[serde(rename = "viewedAt")]
    pub viewed_at: String,
}

impl HistoryItem {
    pub fn id(&self) -> &str {
        &self.article.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_item_keeps_unknown_article_fields() {
        let raw = r#"{"id":"a1","title":"X","views":12,"creator":"amy","viewedAt":"2026-01-01T00:00:00.000Z"}"#;
        let item: HistoryItem = serde_json::from_str(raw).unwrap();

        assert_eq!(item.id(), "a1");
        assert_eq!(item.article.title.as_deref(), Some("X"));
        assert_eq!(item.article.extra["views"], 12);
        assert_eq!(item.viewed_at, "2026-01-01T00:00:00.000Z");

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["creator"], "amy");
        assert_eq!(back["viewedAt"], "2026-01-01T00:00:00.000Z");
    }
}
