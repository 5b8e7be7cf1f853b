//! Domain model for the article registry.
//!
//! # Responsibility
//! - Define the canonical article record used by core business logic.
//! - Normalize external inputs once, at construction time.
//!
//! # Invariants
//! - Every article is identified by a stable integer `ArticleId`.
//! - Articles are immutable after construction; the registry never
//!   updates or removes them.

pub mod article;
