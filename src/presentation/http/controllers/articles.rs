// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{AddArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

const OK_BODY: &str = "ok";

#[utoipa::path(
    put,
    path = "/articles",
    request_body = ArticleDto,
    responses(
        (status = 200, description = "Article stored.", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not a valid article.", body = ErrorResponse),
        (status = 409, description = "An article with this id already exists.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn add_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleDto>,
) -> HttpResult<&'static str> {
    state
        .services
        .article_commands
        .add_article(AddArticleCommand::from(payload))
        .await
        .into_http()?;
    Ok(OK_BODY)
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All stored articles, unordered.", body = Vec<ArticleDto>)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id; overrides any id in the body")),
    request_body = ArticleDto,
    responses(
        (status = 200, description = "Article replaced.", body = String, content_type = "text/plain"),
        (status = 400, description = "Body or path id is not valid.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<ArticleDto>,
) -> HttpResult<&'static str> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand::for_id(id, payload))
        .await
        .into_http()?;
    Ok(OK_BODY)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The stored article.", body = ArticleDto),
        (status = 400, description = "Path id is not valid.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article removed, or was never there.", body = String, content_type = "text/plain"),
        (status = 400, description = "Path id is not valid.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId,
) -> HttpResult<&'static str> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(OK_BODY)
}
