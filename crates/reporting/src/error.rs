use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportingError {
    /// A source dataset violates an assumption the join relies on, e.g. a
    /// duplicated primary key. Fatal at construction: no partial join is
    /// ever returned.
    #[error("Malformed input dataset: {0}")]
    MalformedInput(String),

    /// No order line carries the requested derived date. Recoverable; the
    /// serving layer maps it to a "not found" response.
    #[error("No orders at date: '{0}'")]
    SummaryNotAvailable(NaiveDate),
}
