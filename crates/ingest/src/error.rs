use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// The file could not be read, a required column is missing, or a field
    /// failed to parse into its typed representation.
    #[error("Failed to read dataset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// An order's `created_at` value matched none of the accepted timestamp
    /// formats.
    #[error("Unrecognized timestamp '{value}' in dataset '{path}'")]
    InvalidTimestamp { path: PathBuf, value: String },
}
