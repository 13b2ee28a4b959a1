//! Stateless helpers used by the query executor.

use sqlx::mysql::{MySql, MySqlRow};
use sqlx::postgres::{PgRow, Postgres};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Database, Row, ValueRef};

use crate::conf::C_HEADER_SEPARATOR;
use crate::spec::{EnumDatabaseBackend, EnumNullPolicy, QueryError, SpecQueryOptions};

////////////////////////////////////////////////////////////////////////////////
// #region HeaderAndRows

/// Split the configured header on commas.
///
/// No escaping: empty labels between consecutive commas are kept, and an
/// empty header yields one empty label.
pub fn split_header_labels(header: &str) -> Vec<String> {
    header
        .split(C_HEADER_SEPARATOR)
        .map(ToString::to_string)
        .collect()
}

/// Turn scanned column values into one output row.
///
/// Returns the row and the number of nulls it contained.
pub fn materialize_row(
    values: Vec<Option<String>>,
    options: &SpecQueryOptions,
) -> (Vec<String>, u64) {
    let mut cnt_nulls = 0u64;
    let mut l_cells = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Some(val) => l_cells.push(val),
            None => {
                cnt_nulls += 1;
                if options.rule_null == EnumNullPolicy::Token {
                    l_cells.push(options.null_token.clone());
                }
            }
        }
    }
    (l_cells, cnt_nulls)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Backend

/// Pick the driver from the scheme in front of the first `:` of `database_url`.
pub fn derive_backend_from_url(database_url: &str) -> Result<EnumDatabaseBackend, QueryError> {
    let c_scheme = database_url
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .unwrap_or_default()
        .to_ascii_lowercase();

    if MySql::URL_SCHEMES.contains(&c_scheme.as_str()) {
        Ok(EnumDatabaseBackend::MySql)
    } else if Postgres::URL_SCHEMES.contains(&c_scheme.as_str()) {
        Ok(EnumDatabaseBackend::Postgres)
    } else if Sqlite::URL_SCHEMES.contains(&c_scheme.as_str()) {
        Ok(EnumDatabaseBackend::Sqlite)
    } else {
        Err(QueryError::UnsupportedScheme(c_scheme))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ValueRendering

/// Rows whose column values can be read back as text whatever their SQL type.
///
/// Statements run without bind arguments, so MySQL and Postgres answer over
/// their text protocols and every value already arrives as its textual form.
/// SQLite converts integers and reals to text when asked for their bytes.
pub trait RenderCellText: Row {
    /// Render column `col_idx` as text; `None` for a database null.
    fn render_cell_text(&self, col_idx: usize) -> Result<Option<String>, sqlx::Error>;
}

impl RenderCellText for MySqlRow {
    fn render_cell_text(&self, col_idx: usize) -> Result<Option<String>, sqlx::Error> {
        let value = self.try_get_unchecked::<Option<Vec<u8>>, _>(col_idx)?;
        Ok(value.map(|bytes| derive_text_lossy(&bytes)))
    }
}

impl RenderCellText for PgRow {
    fn render_cell_text(&self, col_idx: usize) -> Result<Option<String>, sqlx::Error> {
        let value = self.try_get_raw(col_idx)?;
        if value.is_null() {
            return Ok(None);
        }
        let bytes = value.as_bytes().map_err(sqlx::Error::Decode)?;
        Ok(Some(derive_text_lossy(bytes)))
    }
}

impl RenderCellText for SqliteRow {
    fn render_cell_text(&self, col_idx: usize) -> Result<Option<String>, sqlx::Error> {
        let value = self.try_get_unchecked::<Option<Vec<u8>>, _>(col_idx)?;
        Ok(value.map(|bytes| derive_text_lossy(&bytes)))
    }
}

/// Invalid UTF-8 sequences become U+FFFD.
pub fn derive_text_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
