use std::collections::HashMap;

use chrono::NaiveDate;
use core_types::{Datasets, JoinedOrderRecord, Order};
use rust_decimal::Decimal;

use crate::error::ReportingError;

/// Merges the six raw datasets into one denormalized record set, one record
/// per order line.
///
/// The join is left-preserving throughout: an order line that references a
/// missing product, order, commission schedule or promotion still produces a
/// record, with the unmatched columns absent. The calendar `date` is derived
/// from the owning order's `created_at` and is the join key for both the
/// vendor commission and the promotion lookups, so those two joins are only
/// resolvable after the order join.
///
/// Fails with [`ReportingError::MalformedInput`] when a dataset that is keyed
/// by a primary key (orders, products, promotions) contains a duplicate id;
/// silently picking one of the duplicates would corrupt every aggregate
/// downstream.
pub fn join_datasets(datasets: &Datasets) -> Result<Vec<JoinedOrderRecord>, ReportingError> {
    let products = index_unique(
        datasets.products.iter().map(|p| (p.id, p.description.as_str())),
        "products",
    )?;
    let orders = index_unique(datasets.orders.iter().map(|o| (o.id, o)), "orders")?;
    let promotions = index_unique(
        datasets.promotions.iter().map(|p| (p.id, p.description.as_str())),
        "promotions",
    )?;

    // Schedule-style datasets are keyed by a compound key. The joined set is
    // defined as one record per order line, so a single match applies; when a
    // schedule repeats a key the first row wins.
    let mut commission_rates: HashMap<(i64, NaiveDate), Decimal> = HashMap::new();
    for commission in &datasets.vendor_commissions {
        commission_rates
            .entry((commission.vendor_id, commission.date))
            .or_insert(commission.rate);
    }
    let mut active_promotions: HashMap<(i64, NaiveDate), i64> = HashMap::new();
    for mapping in &datasets.product_promotions {
        active_promotions
            .entry((mapping.product_id, mapping.date))
            .or_insert(mapping.promotion_id);
    }

    let joined = datasets
        .order_lines
        .iter()
        .map(|line| {
            let order: Option<&&Order> = orders.get(&line.order_id);
            let date = order.map(|o| o.created_at.date());

            let rate = order
                .zip(date)
                .and_then(|(o, d)| commission_rates.get(&(o.vendor_id, d)))
                .copied();
            let promotion_id = date
                .and_then(|d| active_promotions.get(&(line.product_id, d)))
                .copied();

            JoinedOrderRecord {
                order_id: line.order_id,
                product_id: line.product_id,
                total_amount: line.total_amount,
                discount_rate: line.discount_rate,
                discounted_amount: line.discounted_amount,
                full_price_amount: line.full_price_amount,
                product_description: products.get(&line.product_id).map(|d| d.to_string()),
                customer_id: order.map(|o| o.customer_id),
                vendor_id: order.map(|o| o.vendor_id),
                created_at: order.map(|o| o.created_at),
                date,
                rate,
                promotion_id,
                promotion_description: promotion_id
                    .and_then(|id| promotions.get(&id))
                    .map(|d| d.to_string()),
                // An absent rate means no commission applies, not an error.
                commission_amount: line.total_amount * rate.unwrap_or(Decimal::ZERO),
            }
        })
        .collect();

    Ok(joined)
}

/// Builds a primary-key index, rejecting duplicate keys.
fn index_unique<V>(
    entries: impl Iterator<Item = (i64, V)>,
    dataset: &str,
) -> Result<HashMap<i64, V>, ReportingError> {
    let mut index = HashMap::new();
    for (key, value) in entries {
        if index.insert(key, value).is_some() {
            return Err(ReportingError::MalformedInput(format!(
                "duplicate id {key} in the {dataset} dataset"
            )));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use core_types::{OrderLine, Product, ProductPromotion, Promotion, VendorCommission};
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn line(order_id: i64, product_id: i64, total: Decimal) -> OrderLine {
        OrderLine {
            order_id,
            product_id,
            total_amount: total,
            discount_rate: dec!(0.10),
            discounted_amount: total,
            full_price_amount: total,
        }
    }

    fn fixture() -> Datasets {
        Datasets {
            orders: vec![Order {
                id: 1,
                customer_id: 100,
                vendor_id: 7,
                created_at: ts("2024-01-01 13:30:00"),
            }],
            order_lines: vec![line(1, 10, dec!(100.00))],
            products: vec![Product {
                id: 10,
                description: "Keyboard".into(),
            }],
            promotions: vec![Promotion {
                id: 1,
                description: "New year".into(),
            }],
            product_promotions: vec![ProductPromotion {
                product_id: 10,
                promotion_id: 1,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            }],
            vendor_commissions: vec![VendorCommission {
                vendor_id: 7,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                rate: dec!(0.10),
            }],
        }
    }

    #[test]
    fn fully_matched_line_resolves_every_column() {
        let joined = join_datasets(&fixture()).unwrap();
        assert_eq!(joined.len(), 1);

        let record = &joined[0];
        assert_eq!(record.product_description.as_deref(), Some("Keyboard"));
        assert_eq!(record.customer_id, Some(100));
        assert_eq!(record.vendor_id, Some(7));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(record.rate, Some(dec!(0.10)));
        assert_eq!(record.promotion_id, Some(1));
        assert_eq!(record.promotion_description.as_deref(), Some("New year"));
        assert_eq!(record.commission_amount, dec!(10.0000));
    }

    #[test]
    fn line_with_unknown_product_keeps_all_line_fields() {
        let mut datasets = fixture();
        datasets.order_lines.push(line(1, 999, dec!(50.00)));

        let joined = join_datasets(&datasets).unwrap();
        let orphan = &joined[1];

        assert_eq!(orphan.product_id, 999);
        assert_eq!(orphan.total_amount, dec!(50.00));
        assert_eq!(orphan.product_description, None);
        // The order side still matches, so the date is derived as usual.
        assert_eq!(orphan.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn line_with_unknown_order_has_no_date_and_zero_commission() {
        let mut datasets = fixture();
        datasets.order_lines.push(line(999, 10, dec!(50.00)));

        let joined = join_datasets(&datasets).unwrap();
        let orphan = &joined[1];

        assert_eq!(orphan.customer_id, None);
        assert_eq!(orphan.date, None);
        assert_eq!(orphan.rate, None);
        assert_eq!(orphan.promotion_id, None);
        assert_eq!(orphan.commission_amount, Decimal::ZERO);
    }

    #[test]
    fn missing_commission_rate_means_zero_commission() {
        let mut datasets = fixture();
        datasets.vendor_commissions.clear();

        let joined = join_datasets(&datasets).unwrap();
        assert_eq!(joined[0].rate, None);
        assert_eq!(joined[0].commission_amount, Decimal::ZERO);
    }

    #[test]
    fn promotion_only_applies_on_its_mapped_date() {
        let mut datasets = fixture();
        datasets.product_promotions[0].date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let joined = join_datasets(&datasets).unwrap();
        assert_eq!(joined[0].promotion_id, None);
        assert_eq!(joined[0].promotion_description, None);
    }

    #[test]
    fn duplicate_product_id_is_rejected() {
        let mut datasets = fixture();
        datasets.products.push(Product {
            id: 10,
            description: "Keyboard again".into(),
        });

        let err = join_datasets(&datasets).unwrap_err();
        assert!(matches!(err, ReportingError::MalformedInput(_)));
    }
}
