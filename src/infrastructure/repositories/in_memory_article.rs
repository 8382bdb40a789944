use crate::domain::{
    article::{Article, ArticleId, ArticleRepository},
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use std::collections::{HashMap, hash_map::Entry};
use tokio::sync::RwLock;

/// Volatile article store. Each operation runs under the lock for its whole
/// duration, so every call is atomic with respect to the others.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: Article) -> DomainResult<()> {
        let mut guard = self.articles.write().await;
        guard.insert(article.id.clone(), article);
        Ok(())
    }

    async fn insert_if_absent(&self, article: Article) -> DomainResult<()> {
        let mut guard = self.articles.write().await;
        match guard.entry(article.id.clone()) {
            Entry::Occupied(_) => Err(DomainError::article_already_exists()),
            Entry::Vacant(slot) => {
                slot.insert(article);
                Ok(())
            }
        }
    }

    async fn update(&self, article: Article) -> DomainResult<()> {
        let mut guard = self.articles.write().await;
        match guard.get_mut(&article.id) {
            Some(stored) => {
                *stored = article;
                Ok(())
            }
            None => Err(DomainError::article_not_found()),
        }
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let mut guard = self.articles.write().await;
        guard.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Article> {
        let guard = self.articles.read().await;
        guard
            .get(id)
            .cloned()
            .ok_or_else(DomainError::article_not_found)
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let guard = self.articles.read().await;
        Ok(guard.values().cloned().collect())
    }
}
