//! Repository layer abstraction and the in-memory registry.
//!
//! # Responsibility
//! - Define the data access contract consumed by services and queries.
//! - Keep storage details behind the `ArticleRepository` seam.
//!
//! # Invariants
//! - Insertion is existence-checked; a duplicate id is rejected outright
//!   with `AlreadyExists`, never overwritten or merged.
//! - Enumeration order equals insertion order; it is the only recency
//!   ordering the registry has, since article dates carry no time of day.

pub mod article_repo;
