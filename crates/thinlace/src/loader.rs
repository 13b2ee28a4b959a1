//! Environment configuration loader.

use std::path::PathBuf;

use tracing::debug;

use crate::conf::{C_ENV_DATABASE_URL, C_ENV_HEADER, C_ENV_QUERY, C_ENV_XLSX_FILENAME};
use crate::spec::{ConfigError, SpecExportConfig};

/// Load the four required settings from the process environment.
///
/// A setting that is present but empty is accepted as is.
pub fn load_config() -> Result<SpecExportConfig, ConfigError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Load settings through `lookup`; the first missing one is reported.
pub fn load_config_with<F>(lookup: F) -> Result<SpecExportConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let fetch = |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingSetting(key.to_string()));

    let config = SpecExportConfig {
        database_url: fetch(C_ENV_DATABASE_URL)?,
        query: fetch(C_ENV_QUERY)?,
        header: fetch(C_ENV_HEADER)?,
        path_file_out: PathBuf::from(fetch(C_ENV_XLSX_FILENAME)?),
    };
    debug!(path = %config.path_file_out.display(), "configuration loaded");
    Ok(config)
}
