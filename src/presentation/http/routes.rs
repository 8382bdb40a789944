// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub const WELCOME_TEXT: &str = "Hello Ghochu!";

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub enable_docs: bool,
    pub allowed_origins: CorsOrigins,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            enable_docs: true,
            allowed_origins: CorsOrigins::Any,
        }
    }
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let allow_origin = match options.allowed_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(origins),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut router = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::list_articles).put(articles::add_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        );

    if options.enable_docs {
        router = router.merge(openapi::docs_router());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn welcome() -> &'static str {
    WELCOME_TEXT
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
