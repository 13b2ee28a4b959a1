//! Connect, run one query and materialize every row as text.

use futures_util::TryStreamExt;
use sqlx::mysql::MySqlConnection;
use sqlx::postgres::PgConnection;
use sqlx::sqlite::SqliteConnection;
use sqlx::{Connection, Database, Executor, Row};
use tracing::{debug, info, warn};

use crate::spec::{EnumDatabaseBackend, QueryError, SpecQueryOptions, SpecResultSet};
use crate::util::{RenderCellText, derive_backend_from_url, materialize_row, split_header_labels};

/// Open one connection to `database_url`, run `query` and materialize the result.
///
/// The driver is picked from the URL scheme (`mysql://`, `postgres://`,
/// `sqlite:`). The connection is closed before returning; a failing close is
/// only logged since the rows are already in memory.
pub async fn run_query(
    database_url: &str,
    query: &str,
    header: &str,
    options: &SpecQueryOptions,
) -> Result<SpecResultSet, QueryError> {
    let backend = derive_backend_from_url(database_url)?;
    debug!(?backend, "opening database connection");

    match backend {
        EnumDatabaseBackend::MySql => {
            let mut conn = MySqlConnection::connect(database_url)
                .await
                .map_err(QueryError::Connect)?;
            let result = fetch_result_set(&mut conn, query, header, options).await;
            close_connection(conn).await;
            result
        }
        EnumDatabaseBackend::Postgres => {
            let mut conn = PgConnection::connect(database_url)
                .await
                .map_err(QueryError::Connect)?;
            let result = fetch_result_set(&mut conn, query, header, options).await;
            close_connection(conn).await;
            result
        }
        EnumDatabaseBackend::Sqlite => {
            let mut conn = SqliteConnection::connect(database_url)
                .await
                .map_err(QueryError::Connect)?;
            let result = fetch_result_set(&mut conn, query, header, options).await;
            close_connection(conn).await;
            result
        }
    }
}

async fn close_connection<C: Connection>(conn: C) {
    if let Err(err) = conn.close().await {
        warn!("Failed to close database connection: {err}");
    }
}

/// Run `query` verbatim on an open connection.
///
/// The first row of the result is the comma split of `header`; data rows
/// follow in the order the database returns them, every value rendered as
/// text. Any driver failure aborts the whole call and discards the rows
/// scanned so far.
pub async fn fetch_result_set<'e, 'q: 'e, E>(
    executor: E,
    query: &'q str,
    header: &str,
    options: &SpecQueryOptions,
) -> Result<SpecResultSet, QueryError>
where
    E: Executor<'e>,
    <E::Database as Database>::Row: RenderCellText,
{
    let mut result_set = SpecResultSet {
        rows: vec![split_header_labels(header)],
        cnt_nulls: 0,
    };

    let mut stream_rows = sqlx::raw_sql(query).fetch(executor);
    let mut n_idx_row = 0usize;
    loop {
        let row = match stream_rows.try_next().await {
            Ok(Some(row)) => row,
            Ok(None) => break,
            Err(err @ sqlx::Error::Database(_)) if n_idx_row == 0 => {
                return Err(QueryError::Query(err));
            }
            Err(source) => {
                return Err(QueryError::Rows {
                    row_idx: n_idx_row,
                    source,
                });
            }
        };

        let n_cols = row.len();
        let mut l_values = Vec::with_capacity(n_cols);
        for n_idx_col in 0..n_cols {
            let value = row
                .render_cell_text(n_idx_col)
                .map_err(|source| QueryError::Scan {
                    row_idx: n_idx_row,
                    col_idx: n_idx_col,
                    source,
                })?;
            l_values.push(value);
        }

        let (l_cells, cnt_nulls) = materialize_row(l_values, options);
        result_set.cnt_nulls += cnt_nulls;
        result_set.rows.push(l_cells);
        n_idx_row += 1;
    }

    info!(
        rows = result_set.n_rows_body(),
        nulls = result_set.cnt_nulls,
        "query result materialized"
    );
    Ok(result_set)
}
