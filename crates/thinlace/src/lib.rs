//! `thinlace` v1:
//! Export the result of one SQL query to a single-sheet XLSX file.
//!
//! Module layout:
//! - `conf`     : setting names and lifecycle markers
//! - `spec`     : configuration/options/report models and errors
//! - `loader`   : environment configuration loader
//! - `pipeline` : query -> workbook export
pub mod conf;
pub mod loader;
pub mod pipeline;
pub mod spec;

pub use loader::{load_config, load_config_with};
pub use pipeline::{run_export, run_with_lookup, write_result_set};
pub use spec::{
    ConfigError, EnumSaveFailurePolicy, ExportError, SpecExportConfig, SpecExportOptions,
    SpecExportReport,
};
