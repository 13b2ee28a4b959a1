//! Shared XLSX specification models.

use std::path::PathBuf;

use thiserror::Error;

use crate::conf::C_SHEET_NAME_DEFAULT;

////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Writer-wide options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Requested sheet name; sanitized before use.
    pub sheet_name: String,
    /// Mark the written sheet as the active one when the workbook opens.
    pub if_active_sheet: bool,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
            if_active_sheet: true,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Actual sheet name in workbook.
    pub sheet_name: String,
    /// Used cell range such as `A1:C3`; `None` when nothing was written.
    pub range_used: Option<String>,
    /// Number of rows written, header included.
    pub n_rows: usize,
    /// Widest row written.
    pub n_cols_max: usize,
    /// Number of cells written.
    pub cnt_cells: u64,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheet={} range={} rows={} cols={} cells={} warnings={}",
            self.sheet_name,
            self.range_used.as_deref().unwrap_or("-"),
            self.n_rows,
            self.n_cols_max,
            self.cnt_cells,
            self.warnings.len()
        )
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// XLSX write/save failures.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    /// Row count exceeds the worksheet limit.
    #[error("Sheet too tall: {n_rows} rows exceeds Excel limit of {n_rows_max}.")]
    SheetTooTall {
        /// Rows requested, header included.
        n_rows: usize,
        /// Worksheet row limit.
        n_rows_max: usize,
    },
    /// One row is wider than the worksheet column limit.
    #[error("Sheet too wide: row {row_idx} has {n_cols} columns, Excel limit is {n_cols_max}.")]
    SheetTooWide {
        /// Zero-based row index.
        row_idx: usize,
        /// Columns in that row.
        n_cols: usize,
        /// Worksheet column limit.
        n_cols_max: usize,
    },
    /// Writer was already closed.
    #[error("Cannot write after close().")]
    Closed,
    /// Rows were already written by this writer.
    #[error("Sheet {0:?} was already written.")]
    AlreadyWritten(String),
    /// Cell or sheet setup rejected by the encoder.
    #[error("xlsx write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    /// Workbook could not be persisted.
    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        /// Output path.
        path: PathBuf,
        /// Encoder/IO failure.
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
