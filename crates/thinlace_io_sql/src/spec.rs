//! Query options, result models and error types.

use thiserror::Error;

use crate::conf::C_NULL_TOKEN;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// How a database null becomes a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumNullPolicy {
    /// Append the null token so the row keeps its width.
    #[default]
    Token,
    /// Drop the cell; later values shift left and the row gets shorter.
    Skip,
}

/// Database driver, picked from the connection URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDatabaseBackend {
    /// `mysql://` or `mariadb://`.
    MySql,
    /// `postgres://` or `postgresql://`.
    Postgres,
    /// `sqlite:`.
    Sqlite,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Options for one query run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecQueryOptions {
    /// Null handling rule.
    pub rule_null: EnumNullPolicy,
    /// Text written for a null under [`EnumNullPolicy::Token`].
    pub null_token: String,
}

impl Default for SpecQueryOptions {
    fn default() -> Self {
        Self {
            rule_null: EnumNullPolicy::Token,
            null_token: C_NULL_TOKEN.to_string(),
        }
    }
}

/// Materialized query output: header row first, then data rows in query order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecResultSet {
    /// All rows, header included.
    pub rows: Vec<Vec<String>>,
    /// Number of database nulls seen while scanning.
    pub cnt_nulls: u64,
}

impl SpecResultSet {
    /// Header row; empty slice only for a default-constructed set.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows, header excluded.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of data rows.
    pub fn n_rows_body(&self) -> usize {
        self.body().len()
    }
}

/// Query stage failures. All of them abort the export.
#[derive(Debug, Error)]
pub enum QueryError {
    /// URL scheme names no supported driver.
    #[error("Error connecting to the database: unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    /// Connection could not be opened.
    #[error("Error connecting to the database: {0}")]
    Connect(#[source] sqlx::Error),
    /// Database rejected the statement before the first row arrived.
    #[error("Error creating the query: {0}")]
    Query(#[source] sqlx::Error),
    /// Result stream failed after `row_idx` data rows.
    #[error("Error scanning rows from table after row {row_idx}: {source}")]
    Rows {
        /// Zero-based index of the row that failed to arrive.
        row_idx: usize,
        /// Driver failure.
        #[source]
        source: sqlx::Error,
    },
    /// One column value could not be decoded.
    #[error("Error scanning row {row_idx} column {col_idx} from table: {source}")]
    Scan {
        /// Zero-based data row index.
        row_idx: usize,
        /// Zero-based column index.
        col_idx: usize,
        /// Driver failure.
        #[source]
        source: sqlx::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
