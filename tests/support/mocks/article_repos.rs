// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use quillstash::domain::article::{Article, ArticleId, ArticleRepository};
use quillstash::domain::errors::{DomainError, DomainResult};

/// Repository whose every call fails with a persistence error.
pub struct FailingArticleRepo;

fn failure<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("storage unavailable".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn insert(&self, _article: Article) -> DomainResult<()> {
        failure()
    }

    async fn insert_if_absent(&self, _article: Article) -> DomainResult<()> {
        failure()
    }

    async fn update(&self, _article: Article) -> DomainResult<()> {
        failure()
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<()> {
        failure()
    }

    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Article> {
        failure()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        failure()
    }
}
