// tests/support/builders.rs
use serde_json::{Value, json};

/// JSON article payload with sensible defaults.
pub struct ArticleJsonBuilder {
    id: String,
    title: String,
    tags: Vec<String>,
    content: String,
    publish_at: String,
}

impl ArticleJsonBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "T".into(),
            tags: vec!["x".into(), "y".into()],
            content: "C".into(),
            publish_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn publish_at(mut self, publish_at: impl Into<String>) -> Self {
        self.publish_at = publish_at.into();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "tags": self.tags,
            "content": self.content,
            "publishAt": self.publish_at,
        })
    }

    pub fn to_body(self) -> String {
        self.build().to_string()
    }
}
