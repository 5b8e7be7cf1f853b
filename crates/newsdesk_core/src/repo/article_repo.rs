//! Article repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide existence-checked insertion, point lookup and ordered
//!   enumeration over the article registry.
//! - Provide the date-scan primitive all per-day queries build on.
//!
//! # Invariants
//! - Ids are unique; a failed insert leaves the registry untouched.
//! - `get_all` and `articles_on` return articles in insertion order.
//! - Date matching compares parsed day values, never date text.

use crate::model::article::{Article, ArticleId, ArticleValidationError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for registry mutations and lookups.
#[derive(Debug)]
pub enum RepoError {
    Validation(ArticleValidationError),
    AlreadyExists(ArticleId),
    NotFound(ArticleId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AlreadyExists(id) => write!(f, "article {id} already exists"),
            Self::NotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::AlreadyExists(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for registry operations.
pub trait ArticleRepository {
    /// Appends one article; fails with `AlreadyExists` for a known id.
    fn add(&self, article: Article) -> RepoResult<Article>;
    /// Returns whether the id is present.
    fn exists(&self, id: ArticleId) -> bool;
    /// Gets one article by id; fails with `NotFound` when absent.
    fn get(&self, id: ArticleId) -> RepoResult<Article>;
    /// Returns all articles in insertion order.
    fn get_all(&self) -> Vec<Article>;
    /// Returns the articles published on `date`, in insertion order.
    ///
    /// This is the shared primitive for every per-day query: a full scan
    /// with day-granularity equality on the parsed date value.
    fn articles_on(&self, date: NaiveDate) -> Vec<Article>;
}

/// In-memory, insertion-ordered article registry.
///
/// Storage is an append log plus a position index, guarded by a
/// read-write lock: `add` takes the writer side, every scan the reader
/// side, which is enough discipline for concurrent request handlers since
/// all operations are short and CPU-bound. State lives for the process
/// lifetime; there is no persistence.
#[derive(Debug, Default)]
pub struct MemoryArticleRepository {
    inner: RwLock<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    ordered: Vec<Article>,
    by_id: HashMap<ArticleId, usize>,
}

impl MemoryArticleRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is total (an insert fully succeeds or leaves both
    // structures untouched), so a poisoned lock never hides partial state
    // and the inner data stays safe to recover.
    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArticleRepository for MemoryArticleRepository {
    fn add(&self, article: Article) -> RepoResult<Article> {
        let mut inner = self.write();
        if inner.by_id.contains_key(&article.id) {
            return Err(RepoError::AlreadyExists(article.id));
        }

        let position = inner.ordered.len();
        inner.by_id.insert(article.id, position);
        inner.ordered.push(article.clone());
        Ok(article)
    }

    fn exists(&self, id: ArticleId) -> bool {
        self.read().by_id.contains_key(&id)
    }

    fn get(&self, id: ArticleId) -> RepoResult<Article> {
        let inner = self.read();
        inner
            .by_id
            .get(&id)
            .map(|&position| inner.ordered[position].clone())
            .ok_or(RepoError::NotFound(id))
    }

    fn get_all(&self) -> Vec<Article> {
        self.read().ordered.clone()
    }

    fn articles_on(&self, date: NaiveDate) -> Vec<Article> {
        self.read()
            .ordered
            .iter()
            .filter(|article| article.date == date)
            .cloned()
            .collect()
    }
}
