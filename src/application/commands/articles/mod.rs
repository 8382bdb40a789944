// src/application/commands/articles/mod.rs
mod add;
mod delete;
mod service;
mod update;

pub use add::AddArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
