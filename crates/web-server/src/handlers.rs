use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use core_types::DailyOrderSummary;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AppState, error::AppError};

/// The wire shape of a daily summary, nested the way clients consume it.
#[derive(Debug, Serialize)]
pub struct DailyOrderSummaryResponse {
    pub date: NaiveDate,
    pub items_sold: u64,
    pub customers: u64,
    pub total_discount_amount: Decimal,
    pub average_discount_rate: Decimal,
    pub average_order_total: Decimal,
    pub commissions: CommissionsResponse,
}

#[derive(Debug, Serialize)]
pub struct CommissionsResponse {
    pub total: Decimal,
    pub order_average: Decimal,
    pub promotions: BTreeMap<String, Decimal>,
}

impl From<&DailyOrderSummary> for DailyOrderSummaryResponse {
    fn from(summary: &DailyOrderSummary) -> Self {
        Self {
            date: summary.date,
            items_sold: summary.total_items_sold,
            customers: summary.total_customers,
            total_discount_amount: summary.total_discount_amount,
            average_discount_rate: summary.average_discount_rate,
            average_order_total: summary.average_order_total,
            commissions: CommissionsResponse {
                total: summary.total_commissions,
                order_average: summary.average_commissions_per_order,
                promotions: summary.total_commission_amount_per_promotion.clone(),
            },
        }
    }
}

/// # GET /api/order_summary/:date
///
/// Returns the financial aggregates for one business date. The date arrives
/// as a path segment so it is parsed by hand; a malformed value is the
/// client's mistake (400), an unknown date is a miss (404).
pub async fn get_order_summary(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DailyOrderSummaryResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.clone()))?;

    let summary = state.repository.get(date)?;
    Ok(Json(DailyOrderSummaryResponse::from(summary.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn response_serializes_to_the_documented_shape() {
        let mut summary = DailyOrderSummary::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        summary.total_items_sold = 2;
        summary.total_customers = 2;
        summary.total_discount_amount = dec!(12.50);
        summary.average_discount_rate = dec!(0.10);
        summary.average_order_total = dec!(75.00);
        summary.total_commissions = dec!(15.00);
        summary.average_commissions_per_order = dec!(7.50);
        summary
            .total_commission_amount_per_promotion
            .insert("1".into(), dec!(5.00));

        let response = DailyOrderSummaryResponse::from(&summary);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["items_sold"], 2);
        assert_eq!(json["customers"], 2);
        assert_eq!(json["commissions"]["total"], "15.00");
        assert_eq!(json["commissions"]["order_average"], "7.50");
        assert_eq!(json["commissions"]["promotions"]["1"], "5.00");
    }
}
