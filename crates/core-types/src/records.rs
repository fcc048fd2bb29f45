use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer order as recorded at checkout. One order owns one or more
/// order lines; the calendar date used for all daily reporting is derived
/// from `created_at`, never stored separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub vendor_id: i64,
    pub created_at: NaiveDateTime,
}

/// A single line of an order: one product, with its pricing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: i64,
    pub product_id: i64,
    pub total_amount: Decimal,
    pub discount_rate: Decimal,
    pub discounted_amount: Decimal,
    pub full_price_amount: Decimal,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub description: String,
}

/// A promotion campaign. The distinct set of promotion ids in this dataset
/// defines the backfill universe for per-promotion commission totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub description: String,
}

/// Marks a product as covered by a promotion on a specific calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPromotion {
    pub product_id: i64,
    pub promotion_id: i64,
    pub date: NaiveDate,
}

/// The commission rate a vendor is charged on a specific calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCommission {
    pub vendor_id: i64,
    pub date: NaiveDate,
    pub rate: Decimal,
}

/// The six raw datasets, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub orders: Vec<Order>,
    pub order_lines: Vec<OrderLine>,
    pub products: Vec<Product>,
    pub promotions: Vec<Promotion>,
    pub product_promotions: Vec<ProductPromotion>,
    pub vendor_commissions: Vec<VendorCommission>,
}
