//! # Daybook Reporting Engine
//!
//! This crate is the core of the system: it merges the six raw datasets into
//! one denormalized record set and computes the daily financial aggregates
//! served to clients.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate with no knowledge of files, HTTP or
//!   configuration. It depends only on `core-types` (Layer 0).
//! - **Build once, read forever:** The join runs exactly once, at repository
//!   construction. The joined record set is immutable afterwards, which is
//!   what makes the per-date summary cache safe with no invalidation at all.
//! - **Exact arithmetic:** Every sum and mean is computed in `Decimal`; a
//!   binary float never touches the financial path.
//!
//! ## Public API
//!
//! - `join_datasets`: the left-preserving six-way join.
//! - `DailyOrderSummaryRepository`: owns the joined set and answers
//!   `get(date)` queries, caching each computed `DailyOrderSummary`.
//! - `ReportingError`: the specific error types that can be returned.

pub mod error;
pub mod joiner;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use error::ReportingError;
pub use joiner::join_datasets;
pub use summary::DailyOrderSummaryRepository;
