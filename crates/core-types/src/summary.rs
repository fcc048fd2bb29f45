use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full set of financial aggregates for one business date.
///
/// This struct is the final output of the summary repository and the data
/// transfer object handed to the serving layer. Instances are computed once
/// per date and cached for the process lifetime, so equality here means
/// bitwise-identical Decimal fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrderSummary {
    pub date: NaiveDate,
    pub total_items_sold: u64,
    pub total_customers: u64,
    pub total_discount_amount: Decimal,
    pub average_discount_rate: Decimal,
    pub average_order_total: Decimal,
    pub total_commissions: Decimal,
    pub average_commissions_per_order: Decimal,
    /// Summed commission per promotion id (rendered as a string key), with a
    /// zero entry backfilled for every known promotion absent that day.
    pub total_commission_amount_per_promotion: BTreeMap<String, Decimal>,
}

impl DailyOrderSummary {
    /// Creates a zeroed summary for a date, as a starting point before the
    /// aggregates are filled in.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_items_sold: 0,
            total_customers: 0,
            total_discount_amount: Decimal::ZERO,
            average_discount_rate: Decimal::ZERO,
            average_order_total: Decimal::ZERO,
            total_commissions: Decimal::ZERO,
            average_commissions_per_order: Decimal::ZERO,
            total_commission_amount_per_promotion: BTreeMap::new(),
        }
    }
}
