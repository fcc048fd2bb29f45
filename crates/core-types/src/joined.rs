use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One denormalized record per original order line, produced by left-joining
/// the six raw datasets.
///
/// The join is left-preserving: an order line always yields exactly one
/// record, and every column that comes from a lookup that can miss is an
/// `Option`. `date` is the calendar date of the owning order's `created_at`
/// and is the sole key for daily filtering; it is absent only when the line
/// references an order id that does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedOrderRecord {
    // From the order line itself — always present.
    pub order_id: i64,
    pub product_id: i64,
    pub total_amount: Decimal,
    pub discount_rate: Decimal,
    pub discounted_amount: Decimal,
    pub full_price_amount: Decimal,

    // From the product catalog.
    pub product_description: Option<String>,

    // From the owning order.
    pub customer_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub date: Option<NaiveDate>,

    // From the vendor commission schedule for (vendor_id, date).
    pub rate: Option<Decimal>,

    // From the promotion mapping active for (product_id, date).
    pub promotion_id: Option<i64>,
    pub promotion_description: Option<String>,

    /// `total_amount * rate`; zero when no commission rate applies.
    pub commission_amount: Decimal,
}
