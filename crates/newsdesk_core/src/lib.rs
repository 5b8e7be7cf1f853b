//! Core domain logic for the Newsdesk article registry.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod summary;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{parse_day, Article, ArticleId, ArticleValidationError, DATE_FORMAT};
pub use repo::article_repo::{ArticleRepository, MemoryArticleRepository, RepoError, RepoResult};
pub use service::article_service::ArticleService;
pub use summary::tag_summary::{
    article_ids_on, last_article_ids_on, related_tags, tag_count, tag_summary, TagSummary,
    SUMMARY_ARTICLE_LIMIT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
