use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, ArticleId},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub article: ArticleDto,
}

impl UpdateArticleCommand {
    /// Build an update from a decoded body, keying it by `id` no matter what
    /// id the body carried.
    pub fn for_id(id: impl Into<String>, body: ArticleDto) -> Self {
        Self {
            id: id.into(),
            article: body,
        }
    }
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id);
        let article = Article::from(command.article).with_id(id.clone());

        self.repo.update(article).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(())
    }
}
