//! # Daybook Core Types
//!
//! The shared vocabulary of the reporting system. Every other crate speaks in
//! these types: the six raw datasets as they come off disk, the denormalized
//! record produced by the joiner, and the daily summary served to clients.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate depends on nothing inside the workspace. It holds
//!   data definitions and trivial constructors only; all behavior lives in the
//!   crates that consume it.
//! - **Decimal everywhere:** Monetary amounts and rates are `rust_decimal::Decimal`,
//!   never `f64`, so sums and means are exact and reproducible.

pub mod joined;
pub mod records;
pub mod summary;

// Re-export the core types to provide a clean public API.
pub use joined::JoinedOrderRecord;
pub use records::{
    Datasets, Order, OrderLine, Product, ProductPromotion, Promotion, VendorCommission,
};
pub use summary::DailyOrderSummary;
