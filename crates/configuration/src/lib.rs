use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{DataFiles, Server, Settings};

/// Loads the application configuration from a TOML file, with environment
/// overrides.
///
/// Every setting can be overridden through a `DAYBOOK_`-prefixed variable
/// using `__` as the section separator, e.g. `DAYBOOK_SERVER__PORT=8080` or
/// `DAYBOOK_DATA__ORDERS=/srv/data/orders.csv`. This keeps container
/// deployments configurable without editing the file.
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("DAYBOOK").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
