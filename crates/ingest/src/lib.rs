//! # Daybook Ingest
//!
//! Reads the six flat CSV datasets from disk into the typed records defined
//! in `core-types`. This is the only place raw text is parsed; everything
//! downstream works with already-typed data.
//!
//! ## Architectural Principles
//!
//! - **All-or-nothing:** A missing column, an unparseable decimal or an
//!   unreadable file fails the whole load. A silently dropped row would
//!   corrupt every aggregate for its date, so there is no partial ingestion.
//! - **Exact from the source:** Monetary columns are parsed from their text
//!   representation directly into `Decimal`, so no binary-float rounding ever
//!   enters the pipeline.
//!
//! ## Public API
//!
//! - `load_datasets`: reads all six files named in the configuration.
//! - Per-dataset loaders (`load_orders`, `load_products`, ...) for callers
//!   that need finer control.
//! - `IngestError`: the specific error types that can be returned.

pub mod error;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use error::IngestError;
pub use loader::{
    load_datasets, load_order_lines, load_orders, load_product_promotions, load_products,
    load_promotions, load_vendor_commissions,
};
