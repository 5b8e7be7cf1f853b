//! Tag summary queries over the article registry.
//!
//! # Responsibility
//! - Compose the per-day primitives (id scan, last-N suffix, tag count,
//!   related-tag accumulation) into the `TagSummary` read model.
//!
//! # Invariants
//! - All functions are pure reads over the repository date scan.
//! - `related_tags` keeps its reset-on-miss accumulator semantics;
//!   existing consumers of the summary output depend on them (see the
//!   function docs).

use crate::model::article::ArticleId;
use crate::repo::article_repo::ArticleRepository;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Number of most recent article ids reported by [`tag_summary`].
pub const SUMMARY_ARTICLE_LIMIT: usize = 10;

/// Derived per-day view of one tag. Computed per query, never stored.
///
/// The serde field names (`tag`, `count`, `articles`, `related_tags`) are
/// the stable wire schema; `related_tags` serializes as a sorted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// The queried tag, echoed back.
    pub tag: String,
    /// Number of same-day articles carrying the tag.
    pub count: usize,
    /// Ids of the last [`SUMMARY_ARTICLE_LIMIT`] articles entered that day.
    pub articles: Vec<ArticleId>,
    /// Tags co-occurring with the queried tag that day.
    pub related_tags: BTreeSet<String>,
}

/// Returns the ids of all articles published on `date`, insertion order.
pub fn article_ids_on<R: ArticleRepository>(repo: &R, date: NaiveDate) -> Vec<ArticleId> {
    repo.articles_on(date)
        .into_iter()
        .map(|article| article.id)
        .collect()
}

/// Returns the last `n` entries of [`article_ids_on`], relative order
/// preserved. When fewer than `n` articles match, all of them are
/// returned; there is no padding and no error.
pub fn last_article_ids_on<R: ArticleRepository>(
    repo: &R,
    date: NaiveDate,
    n: usize,
) -> Vec<ArticleId> {
    let mut ids = article_ids_on(repo, date);
    let start = ids.len().saturating_sub(n);
    ids.split_off(start)
}

/// Returns how many articles on `date` carry `tag`. Zero is a value, not
/// an error. The count is scoped to the single day, never across dates.
pub fn tag_count<R: ArticleRepository>(repo: &R, tag: &str, date: NaiveDate) -> usize {
    repo.articles_on(date)
        .iter()
        .filter(|article| article.has_tag(tag))
        .count()
}

/// Returns the tags co-occurring with `tag` on `date`.
///
/// The scan accumulates every tag of each same-day article in insertion
/// order, and clears the whole accumulator whenever an article does not
/// carry `tag`. The result is therefore non-empty only when every article
/// of that day carries the tag; a single counterexample anywhere in the
/// scan wipes prior progress. This is stricter than a union of tags over
/// matching articles; existing consumers depend on the stricter output,
/// so it must not change until the intended business rule is confirmed.
///
/// `tag` itself is removed before returning; when it was never
/// accumulated the removal is a no-op, since the accumulator is already
/// empty in that case.
pub fn related_tags<R: ArticleRepository>(
    repo: &R,
    tag: &str,
    date: NaiveDate,
) -> BTreeSet<String> {
    let mut accumulated = BTreeSet::new();

    for article in repo.articles_on(date) {
        accumulated.extend(article.tags.iter().cloned());
        if !article.has_tag(tag) {
            accumulated.clear();
        }
    }

    accumulated.remove(tag);
    accumulated
}

/// Composes count, last-10 ids and related tags into one read model.
/// Pure composition over the primitives above; no caching.
pub fn tag_summary<R: ArticleRepository>(repo: &R, tag: &str, date: NaiveDate) -> TagSummary {
    TagSummary {
        tag: tag.to_string(),
        count: tag_count(repo, tag, date),
        articles: last_article_ids_on(repo, date, SUMMARY_ARTICLE_LIMIT),
        related_tags: related_tags(repo, tag, date),
    }
}
