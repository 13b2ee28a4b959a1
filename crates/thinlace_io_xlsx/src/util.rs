//! Stateless helper utilities used by the XLSX writer kernel.

use rust_xlsxwriter::{ColNum, RowNum};

use crate::conf::{
    C_COLUMN_ALPHABET, C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::XlsxWriteError;

////////////////////////////////////////////////////////////////////////////////
// #region CellAddressing

/// Convert zero-based column index to its spreadsheet label.
///
/// Bijective base-26 over `A..=Z`: `0 -> A`, `25 -> Z`, `26 -> AA`,
/// `701 -> ZZ`, `702 -> AAA`.
pub fn derive_column_label(col_idx: usize) -> String {
    let mut l_chars = Vec::with_capacity(4);
    let mut n_rest = col_idx;
    loop {
        l_chars.push(C_COLUMN_ALPHABET[n_rest % 26] as char);
        if n_rest < 26 {
            break;
        }
        n_rest = n_rest / 26 - 1;
    }
    l_chars.iter().rev().collect()
}

/// Build an `A1`-style cell address from zero-based row/column indices.
pub fn derive_cell_address(row_idx: usize, col_idx: usize) -> String {
    format!("{}{}", derive_column_label(col_idx), row_idx + 1)
}

/// Range covering `n_rows` x `n_cols` cells anchored at `A1`.
pub fn derive_used_range(n_rows: usize, n_cols: usize) -> Option<String> {
    if n_rows == 0 || n_cols == 0 {
        return None;
    }
    Some(format!("A1:{}", derive_cell_address(n_rows - 1, n_cols - 1)))
}

pub(crate) fn cast_row_num(value: usize) -> Result<RowNum, XlsxWriteError> {
    RowNum::try_from(value).map_err(|_| XlsxWriteError::SheetTooTall {
        n_rows: value + 1,
        n_rows_max: N_NROWS_EXCEL_MAX,
    })
}

pub(crate) fn cast_col_num(row_idx: usize, value: usize) -> Result<ColNum, XlsxWriteError> {
    ColNum::try_from(value).map_err(|_| XlsxWriteError::SheetTooWide {
        row_idx,
        n_cols: value + 1,
        n_cols_max: N_NCOLS_EXCEL_MAX,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = C_SHEET_NAME_DEFAULT.to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Reject grids that do not fit one worksheet.
pub fn validate_sheet_bounds(rows: &[Vec<String>]) -> Result<(), XlsxWriteError> {
    if rows.len() > N_NROWS_EXCEL_MAX {
        return Err(XlsxWriteError::SheetTooTall {
            n_rows: rows.len(),
            n_rows_max: N_NROWS_EXCEL_MAX,
        });
    }
    if let Some((row_idx, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() > N_NCOLS_EXCEL_MAX)
    {
        return Err(XlsxWriteError::SheetTooWide {
            row_idx,
            n_cols: row.len(),
            n_cols_max: N_NCOLS_EXCEL_MAX,
        });
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
