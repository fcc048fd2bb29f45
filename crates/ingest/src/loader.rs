use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use configuration::DataFiles;
use core_types::{
    Datasets, Order, OrderLine, Product, ProductPromotion, Promotion, VendorCommission,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::IngestError;

/// Timestamp layouts accepted for an order's `created_at` column, tried in
/// order after RFC 3339.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Reads all six datasets named in the configuration. Fails on the first
/// file that cannot be fully parsed; no partial bundle is returned.
pub fn load_datasets(files: &DataFiles) -> Result<Datasets, IngestError> {
    let datasets = Datasets {
        orders: load_orders(&files.orders)?,
        order_lines: load_order_lines(&files.order_lines)?,
        products: load_products(&files.products)?,
        promotions: load_promotions(&files.promotions)?,
        product_promotions: load_product_promotions(&files.product_promotions)?,
        vendor_commissions: load_vendor_commissions(&files.vendor_commissions)?,
    };

    tracing::info!(
        orders = datasets.orders.len(),
        order_lines = datasets.order_lines.len(),
        products = datasets.products.len(),
        promotions = datasets.promotions.len(),
        product_promotions = datasets.product_promotions.len(),
        vendor_commissions = datasets.vendor_commissions.len(),
        "Datasets loaded."
    );
    Ok(datasets)
}

/// An order row as it appears on disk, before the timestamp is parsed.
#[derive(Debug, Deserialize)]
struct RawOrder {
    id: i64,
    customer_id: i64,
    vendor_id: i64,
    created_at: String,
}

pub fn load_orders(path: &Path) -> Result<Vec<Order>, IngestError> {
    let rows: Vec<RawOrder> = load_csv(path)?;
    rows.into_iter()
        .map(|row| {
            let created_at = parse_timestamp(&row.created_at).ok_or_else(|| {
                IngestError::InvalidTimestamp {
                    path: path.to_path_buf(),
                    value: row.created_at.clone(),
                }
            })?;
            Ok(Order {
                id: row.id,
                customer_id: row.customer_id,
                vendor_id: row.vendor_id,
                created_at,
            })
        })
        .collect()
}

pub fn load_order_lines(path: &Path) -> Result<Vec<OrderLine>, IngestError> {
    load_csv(path)
}

pub fn load_products(path: &Path) -> Result<Vec<Product>, IngestError> {
    load_csv(path)
}

pub fn load_promotions(path: &Path) -> Result<Vec<Promotion>, IngestError> {
    load_csv(path)
}

pub fn load_product_promotions(path: &Path) -> Result<Vec<ProductPromotion>, IngestError> {
    load_csv(path)
}

pub fn load_vendor_commissions(path: &Path) -> Result<Vec<VendorCommission>, IngestError> {
    load_csv(path)
}

/// Reads a whole CSV file into typed records via serde.
fn load_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, IngestError> {
    let read_error = |source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(&read_error)?;
    reader
        .deserialize()
        .map(|row| row.map_err(&read_error))
        .collect()
}

/// Parses a timestamp leniently: RFC 3339 first (offsets are normalized to
/// UTC), then the plain layouts in `TIMESTAMP_FORMATS`, then a bare date
/// taken as midnight.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_utc());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_orders_with_mixed_timestamp_layouts() {
        let file = csv_file(
            "id,customer_id,vendor_id,created_at\n\
             1,100,7,2024-01-01 09:30:00\n\
             2,200,7,2024-01-02T10:00:00\n\
             3,300,8,2024-01-03\n",
        );

        let orders = load_orders(file.path()).unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(
            orders[0].created_at,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
        assert_eq!(
            orders[2].created_at,
            NaiveDate::from_ymd_opt(2024, 1, 3)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn order_lines_parse_money_columns_as_decimal() {
        let file = csv_file(
            "order_id,product_id,total_amount,discount_rate,discounted_amount,full_price_amount\n\
             1,10,90.00,0.10,90.00,100.00\n",
        );

        let lines = load_order_lines(file.path()).unwrap();
        assert_eq!(lines[0].total_amount, dec!(90.00));
        assert_eq!(lines[0].discount_rate, dec!(0.10));
        assert_eq!(lines[0].full_price_amount, dec!(100.00));
    }

    #[test]
    fn missing_column_fails_the_whole_load() {
        // No vendor_id column.
        let file = csv_file("id,customer_id,created_at\n1,100,2024-01-01 09:30:00\n");

        let err = load_orders(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Read { .. }));
    }

    #[test]
    fn unparseable_decimal_fails_the_whole_load() {
        let file = csv_file(
            "order_id,product_id,total_amount,discount_rate,discounted_amount,full_price_amount\n\
             1,10,ninety,0.10,90.00,100.00\n",
        );

        assert!(load_order_lines(file.path()).is_err());
    }

    #[test]
    fn unrecognized_timestamp_is_reported_with_its_value() {
        let file = csv_file("id,customer_id,vendor_id,created_at\n1,100,7,last tuesday\n");

        match load_orders(file.path()).unwrap_err() {
            IngestError::InvalidTimestamp { value, .. } => assert_eq!(value, "last tuesday"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn vendor_commissions_parse_dates_and_rates() {
        let file = csv_file("vendor_id,date,rate\n7,2024-01-01,0.10\n");

        let commissions = load_vendor_commissions(file.path()).unwrap();
        assert_eq!(commissions[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(commissions[0].rate, dec!(0.10));
    }
}
