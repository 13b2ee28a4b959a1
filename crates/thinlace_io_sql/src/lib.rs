//! `thinlace_io_sql` v1:
//! Rust-side query executor kernel.
//!
//! Module layout:
//! - `conf`     : constants
//! - `spec`     : options/result models/errors
//! - `util`     : pure helpers (header split, row materialization, backend pick, value rendering)
//! - `executor` : connect/query/scan orchestration
pub mod conf;
pub mod executor;
pub mod spec;
pub mod util;

pub use conf::{C_HEADER_SEPARATOR, C_NULL_TOKEN};
pub use executor::{fetch_result_set, run_query};
pub use spec::{EnumDatabaseBackend, EnumNullPolicy, QueryError, SpecQueryOptions, SpecResultSet};
pub use util::{RenderCellText, derive_backend_from_url, materialize_row, split_header_labels};
