// src/application/commands/articles/add.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, ArticleId},
};
use chrono::{DateTime, Utc};

pub struct AddArticleCommand {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub content: String,
    pub publish_at: DateTime<Utc>,
}

impl From<ArticleDto> for AddArticleCommand {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            tags: dto.tags,
            content: dto.content,
            publish_at: dto.publish_at,
        }
    }
}

impl ArticleCommandService {
    /// Store a new article. Fails with a conflict when the id is taken; the
    /// article already stored under that id is left as it was.
    pub async fn add_article(&self, command: AddArticleCommand) -> ApplicationResult<()> {
        let article = Article {
            id: ArticleId::new(command.id),
            title: command.title,
            tags: command.tags,
            content: command.content,
            publish_at: command.publish_at,
        };
        let id = article.id.clone();

        self.repo.insert_if_absent(article).await?;
        tracing::info!(article_id = %id, "article added");
        Ok(())
    }
}
