//! `thinlace_io_xlsx` v1:
//! Rust-side XLSX writer kernel for string grids.
//!
//! Module layout:
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions (cell addressing, limits)
//! - `writer` : workbook writer kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL,
};
pub use spec::{SpecXlsxReport, SpecXlsxWriteOptions, XlsxWriteError};
pub use util::{
    derive_cell_address, derive_column_label, derive_used_range, sanitize_sheet_name,
    validate_sheet_bounds,
};
pub use writer::XlsxWriter;
