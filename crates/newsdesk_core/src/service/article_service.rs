//! Article use-case service.
//!
//! # Responsibility
//! - Provide the stable entry points consumed by external front ends
//!   (request handlers, CLI): add, point lookup, enumeration, tag summary.
//! - Parse query-time date text before any scan runs.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - The service layer remains storage-agnostic.

use crate::model::article::{parse_day, Article, ArticleId};
use crate::repo::article_repo::{ArticleRepository, RepoResult};
use crate::summary::tag_summary::{tag_summary, TagSummary};

/// Use-case service wrapper over an article repository.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores one article.
    ///
    /// Returns `AlreadyExists` unchanged when the id is taken; a failed
    /// call leaves the registry exactly as it was.
    pub fn add_article(&self, article: Article) -> RepoResult<Article> {
        self.repo.add(article)
    }

    /// Gets one article by id; `NotFound` when absent.
    pub fn get_article(&self, id: ArticleId) -> RepoResult<Article> {
        self.repo.get(id)
    }

    /// Returns all stored articles in insertion order.
    pub fn list_articles(&self) -> Vec<Article> {
        self.repo.get_all()
    }

    /// Builds the per-day summary for `tag`.
    ///
    /// `date_text` must be a `YYYY-MM-DD` day; malformed input fails with
    /// a validation error before any scan. A day with no matching
    /// articles yields an empty summary, not an error.
    pub fn tag_summary(&self, tag: &str, date_text: &str) -> RepoResult<TagSummary> {
        let date = parse_day(date_text)?;
        Ok(tag_summary(&self.repo, tag, date))
    }
}
