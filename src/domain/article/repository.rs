use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage for articles keyed by [`ArticleId`]. Implementations hand out
/// clones; nothing returned from here aliases stored state.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Store `article`, overwriting any entry with the same id.
    async fn insert(&self, article: Article) -> DomainResult<()>;
    /// Store `article` only if its id is free. Fails with `Conflict` otherwise,
    /// leaving the existing entry untouched. Check and write are one atomic step.
    async fn insert_if_absent(&self, article: Article) -> DomainResult<()>;
    /// Overwrite an existing entry. Fails with `NotFound` if the id is absent.
    async fn update(&self, article: Article) -> DomainResult<()>;
    /// Remove the entry if present. Absent ids are not an error.
    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Article>;
    /// All stored articles, in no particular order.
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
