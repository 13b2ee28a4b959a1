//! Export configuration, options, report models and errors.

use std::path::PathBuf;

use thiserror::Error;
use thinlace_io_sql::{QueryError, SpecQueryOptions};
use thinlace_io_xlsx::conf::derive_default_xlsx_write_options;
use thinlace_io_xlsx::{SpecXlsxReport, SpecXlsxWriteOptions, XlsxWriteError};

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// What a failed workbook save does to the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumSaveFailurePolicy {
    /// Return the save error; the export fails.
    #[default]
    Fatal,
    /// Log the save error, record it in the report and finish normally.
    Report,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// The four required settings. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecExportConfig {
    /// Database connection URL.
    pub database_url: String,
    /// Query text, run verbatim.
    pub query: String,
    /// Comma-separated header labels.
    pub header: String,
    /// Output workbook path.
    pub path_file_out: PathBuf,
}

/// Behavior knobs that are not read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecExportOptions {
    /// Query stage options.
    pub query: SpecQueryOptions,
    /// Writer options.
    pub xlsx: SpecXlsxWriteOptions,
    /// Save failure handling.
    pub rule_save_failure: EnumSaveFailurePolicy,
}

impl Default for SpecExportOptions {
    fn default() -> Self {
        Self {
            query: SpecQueryOptions::default(),
            xlsx: derive_default_xlsx_write_options(),
            rule_save_failure: EnumSaveFailurePolicy::Fatal,
        }
    }
}

/// Outcome of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecExportReport {
    /// Output workbook path.
    pub path_file_out: PathBuf,
    /// Number of data rows, header excluded.
    pub n_rows_body: usize,
    /// Writer report.
    pub xlsx: SpecXlsxReport,
    /// Save failure text kept under [`EnumSaveFailurePolicy::Report`].
    pub save_error: Option<String>,
}

impl SpecExportReport {
    /// Whether the workbook reached the disk.
    pub fn if_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Configuration loading failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is not set.
    #[error("ENV {0} is not set")]
    MissingSetting(String),
}

/// Any export failure; `main` turns it into a non-zero exit.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration stage.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Query stage.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Write or save stage.
    #[error(transparent)]
    Xlsx(#[from] XlsxWriteError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
