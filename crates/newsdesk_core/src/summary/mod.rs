//! Per-day tag aggregation queries.
//!
//! # Responsibility
//! - Answer per-day questions about one tag: frequency, most recent
//!   article ids, co-occurring tags.
//!
//! # Invariants
//! - Every query scans in insertion order; "most recent" means most
//!   recently inserted, since article dates carry no time of day.
//! - Results are derived on demand and never stored.

pub mod tag_summary;
