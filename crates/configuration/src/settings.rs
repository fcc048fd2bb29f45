use std::path::PathBuf;

use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub data: DataFiles,
}

/// Where the HTTP server binds.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// The interface to listen on (e.g., "0.0.0.0").
    pub host: String,
    pub port: u16,
}

/// The locations of the six flat-file datasets, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DataFiles {
    pub orders: PathBuf,
    pub order_lines: PathBuf,
    pub products: PathBuf,
    pub promotions: PathBuf,
    pub product_promotions: PathBuf,
    pub vendor_commissions: PathBuf,
}
