use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use core_types::{DailyOrderSummary, Datasets, JoinedOrderRecord};
use rust_decimal::Decimal;

use crate::error::ReportingError;
use crate::joiner::join_datasets;

/// Read-only access to daily order summaries.
///
/// The repository runs the six-way join once at construction and owns the
/// resulting record set for the process lifetime. Summaries are computed
/// lazily per date and cached forever; since the underlying data never
/// changes there is no invalidation, and a `get` for the same date always
/// returns the identical cached value.
///
/// Only `get` is exposed. This is deliberately not a full CRUD repository:
/// the reporting role is read-only, so add/update/delete have no meaning
/// here.
#[derive(Debug)]
pub struct DailyOrderSummaryRepository {
    joined: Vec<JoinedOrderRecord>,
    /// The distinct promotion ids known to the system, used to backfill
    /// zero-commission entries so the output shape is stable across dates.
    promotion_universe: BTreeSet<i64>,
    cache: RwLock<HashMap<NaiveDate, Arc<DailyOrderSummary>>>,
}

impl DailyOrderSummaryRepository {
    /// Joins the datasets and builds the repository. Fails if any dataset is
    /// malformed; no partially joined repository is ever returned.
    pub fn new(datasets: &Datasets) -> Result<Self, ReportingError> {
        let joined = join_datasets(datasets)?;
        let promotion_universe: BTreeSet<i64> =
            datasets.promotions.iter().map(|p| p.id).collect();

        tracing::info!(
            records = joined.len(),
            promotions = promotion_universe.len(),
            "Joined order data built."
        );

        Ok(Self {
            joined,
            promotion_universe,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Returns the summary for `date`, computing and caching it on first
    /// access.
    ///
    /// Safe under concurrent callers: readers share the lock, and if two
    /// requests race on the same uncomputed date the first inserted summary
    /// wins — both computations produce the identical value, so the loser is
    /// simply discarded. A date with no data fails with
    /// [`ReportingError::SummaryNotAvailable`] and leaves no cache entry.
    pub fn get(&self, date: NaiveDate) -> Result<Arc<DailyOrderSummary>, ReportingError> {
        if let Some(summary) = self
            .cache
            .read()
            .expect("summary cache lock poisoned")
            .get(&date)
        {
            tracing::debug!(%date, "Daily summary served from cache.");
            return Ok(Arc::clone(summary));
        }

        let summary = Arc::new(self.compute(date)?);

        let mut cache = self.cache.write().expect("summary cache lock poisoned");
        Ok(Arc::clone(cache.entry(date).or_insert(summary)))
    }

    fn compute(&self, date: NaiveDate) -> Result<DailyOrderSummary, ReportingError> {
        let rows: Vec<&JoinedOrderRecord> = self
            .joined
            .iter()
            .filter(|record| record.date == Some(date))
            .collect();
        if rows.is_empty() {
            return Err(ReportingError::SummaryNotAvailable(date));
        }
        let row_count = Decimal::from(rows.len());

        let customers: HashSet<i64> = rows.iter().filter_map(|r| r.customer_id).collect();

        let full_price_total: Decimal = rows.iter().map(|r| r.full_price_amount).sum();
        let discounted_total: Decimal = rows.iter().map(|r| r.discounted_amount).sum();
        let discount_rate_total: Decimal = rows.iter().map(|r| r.discount_rate).sum();
        let order_total: Decimal = rows.iter().map(|r| r.total_amount).sum();
        let total_commissions: Decimal = rows.iter().map(|r| r.commission_amount).sum();

        // Commissions are averaged per order, not per line: sum each order's
        // lines first, then take the mean of those sums.
        let mut commissions_per_order: HashMap<i64, Decimal> = HashMap::new();
        for row in &rows {
            *commissions_per_order.entry(row.order_id).or_insert(Decimal::ZERO) +=
                row.commission_amount;
        }
        let average_commissions_per_order = commissions_per_order
            .values()
            .copied()
            .sum::<Decimal>()
            / Decimal::from(commissions_per_order.len());

        let mut commissions_per_promotion: BTreeMap<i64, Decimal> = BTreeMap::new();
        for row in &rows {
            // Lines without an active promotion contribute to no bucket.
            if let Some(promotion_id) = row.promotion_id {
                *commissions_per_promotion
                    .entry(promotion_id)
                    .or_insert(Decimal::ZERO) += row.commission_amount;
            }
        }
        let mut total_commission_amount_per_promotion: BTreeMap<String, Decimal> =
            commissions_per_promotion
                .into_iter()
                .map(|(id, amount)| (id.to_string(), amount))
                .collect();
        // Backfill promotions with no activity that day so the output shape
        // is identical for every date.
        for promotion_id in &self.promotion_universe {
            total_commission_amount_per_promotion
                .entry(promotion_id.to_string())
                .or_insert(Decimal::ZERO);
        }

        tracing::debug!(%date, rows = rows.len(), "Daily summary computed.");

        Ok(DailyOrderSummary {
            date,
            total_items_sold: rows.len() as u64,
            total_customers: customers.len() as u64,
            total_discount_amount: full_price_total - discounted_total,
            average_discount_rate: discount_rate_total / row_count,
            average_order_total: order_total / row_count,
            total_commissions,
            average_commissions_per_order,
            total_commission_amount_per_promotion,
        })
    }
}
