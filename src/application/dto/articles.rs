use crate::domain::article::{Article, ArticleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Wire shape of an article. Every field except `publishAt` may be omitted on
/// input and then defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime, example = "2024-01-01T00:00:00Z")]
    pub publish_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title,
            tags: article.tags,
            content: article.content,
            publish_at: article.publish_at,
        }
    }
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: ArticleId::new(dto.id),
            title: dto.title,
            tags: dto.tags,
            content: dto.content,
            publish_at: dto.publish_at,
        }
    }
}
