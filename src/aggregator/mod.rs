//! Aggregation pipeline: concurrent dispatch, summary, links.
//!
//! This module fans a query out to every configured knowledge source
//! concurrently, groups the surviving results into labelled categories,
//! merges them into a single summary seeded by the most authoritative
//! source, and extracts a handful of de-duplicated supporting links.

pub mod dispatch;
pub mod links;
pub mod summary;
