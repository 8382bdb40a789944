// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub tags: Vec<String>,
    pub content: String,
    pub publish_at: DateTime<Utc>,
}

impl Article {
    /// Replace the key, keeping every other field. Used when the id comes from
    /// the request path rather than the body.
    pub fn with_id(mut self, id: ArticleId) -> Self {
        self.id = id;
        self
    }
}
