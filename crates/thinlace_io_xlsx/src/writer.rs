//! XLSX writer kernel that lays a string grid onto a single worksheet.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tracing::{debug, trace};

use crate::spec::{SpecXlsxReport, SpecXlsxWriteOptions, XlsxWriteError};
use crate::util::{
    cast_col_num, cast_row_num, derive_cell_address, derive_used_range, sanitize_sheet_name,
    validate_sheet_bounds,
};

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    write_options: SpecXlsxWriteOptions,
    report: Option<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and options.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, write_options: SpecXlsxWriteOptions) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            write_options,
            report: None,
            if_closed: false,
        }
    }

    /// Output file path.
    pub fn file_out(&self) -> &Path {
        &self.path_file_out
    }

    /// Report of the sheet written so far, if any.
    pub fn report(&self) -> Option<&SpecXlsxReport> {
        self.report.as_ref()
    }

    /// Flush workbook to disk. Idempotent once it succeeded.
    pub fn close(&mut self) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(|source| XlsxWriteError::Save {
                path: self.path_file_out.clone(),
                source,
            })?;
        self.if_closed = true;
        debug!(path = %self.path_file_out.display(), "workbook saved");
        Ok(())
    }

    /// Write `rows` into the single sheet, row `i` landing on sheet row `i + 1`.
    ///
    /// Every value is written as a string cell. Rows may differ in width.
    pub fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<SpecXlsxReport, XlsxWriteError> {
        if self.if_closed {
            return Err(XlsxWriteError::Closed);
        }
        if let Some(report) = &self.report {
            return Err(XlsxWriteError::AlreadyWritten(report.sheet_name.clone()));
        }
        validate_sheet_bounds(rows)?;

        let sheet_name = sanitize_sheet_name(&self.write_options.sheet_name, "_");
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;
        if self.write_options.if_active_sheet {
            worksheet.set_active(true);
        }

        let mut report = SpecXlsxReport {
            sheet_name,
            ..Default::default()
        };

        let mut n_cols_min = usize::MAX;
        for (n_idx_row, row) in rows.iter().enumerate() {
            let n_row = cast_row_num(n_idx_row)?;
            for (n_idx_col, value) in row.iter().enumerate() {
                trace!(cell = %derive_cell_address(n_idx_row, n_idx_col), "write cell");
                worksheet.write_string(n_row, cast_col_num(n_idx_row, n_idx_col)?, value.as_str())?;
                report.cnt_cells += 1;
            }
            n_cols_min = usize::min(n_cols_min, row.len());
            report.n_cols_max = usize::max(report.n_cols_max, row.len());
        }

        report.n_rows = rows.len();
        report.range_used = derive_used_range(report.n_rows, report.n_cols_max);
        if !rows.is_empty() && n_cols_min != report.n_cols_max {
            report.warn(format!(
                "Ragged rows: widths range {n_cols_min}..={}.",
                report.n_cols_max
            ));
        }

        debug!("{}", report.format("[XLSX]"));
        self.report = Some(report.clone());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use calamine::{Data, Reader, Xlsx, open_workbook};

    use super::XlsxWriter;
    use crate::spec::{SpecXlsxWriteOptions, XlsxWriteError};

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("thinlace_xlsx_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|val| val.to_string()).collect())
            .collect()
    }

    fn cell_text(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<String> {
        match range.get_value((row, col)) {
            Some(Data::String(val)) => Some(val.clone()),
            _ => None,
        }
    }

    #[test]
    fn write_rows_places_header_on_first_row() {
        let tmp = TestDir::new();
        let path = tmp.path().join("out.xlsx");

        let mut writer = XlsxWriter::new(path.clone(), SpecXlsxWriteOptions::default());
        let report = writer
            .write_rows(&grid(&[&["X", "Y"], &["a", "b"], &["c", "NULL"]]))
            .expect("write rows");
        writer.close().expect("close");

        assert_eq!(report.sheet_name, "Sheet1");
        assert_eq!(report.range_used.as_deref(), Some("A1:B3"));
        assert_eq!(report.cnt_cells, 6);
        assert!(report.warnings.is_empty());

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
        assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);
        let range = workbook.worksheet_range("Sheet1").expect("sheet range");
        assert_eq!(cell_text(&range, 0, 0).as_deref(), Some("X"));
        assert_eq!(cell_text(&range, 0, 1).as_deref(), Some("Y"));
        assert_eq!(cell_text(&range, 1, 0).as_deref(), Some("a"));
        assert_eq!(cell_text(&range, 1, 1).as_deref(), Some("b"));
        assert_eq!(cell_text(&range, 2, 0).as_deref(), Some("c"));
        assert_eq!(cell_text(&range, 2, 1).as_deref(), Some("NULL"));
    }

    #[test]
    fn write_rows_keeps_numbers_as_text() {
        let tmp = TestDir::new();
        let path = tmp.path().join("numbers.xlsx");

        let mut writer = XlsxWriter::new(path.clone(), SpecXlsxWriteOptions::default());
        writer
            .write_rows(&grid(&[&["id"], &["42"], &["3.5"]]))
            .expect("write rows");
        writer.close().expect("close");

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
        let range = workbook.worksheet_range("Sheet1").expect("sheet range");
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("42".to_string())));
        assert_eq!(range.get_value((2, 0)), Some(&Data::String("3.5".to_string())));
    }

    #[test]
    fn write_rows_reports_ragged_rows() {
        let tmp = TestDir::new();
        let path = tmp.path().join("ragged.xlsx");

        let mut writer = XlsxWriter::new(path.clone(), SpecXlsxWriteOptions::default());
        let report = writer
            .write_rows(&grid(&[&["X", "Y"], &["c"]]))
            .expect("write rows");
        writer.close().expect("close");

        assert_eq!(report.n_cols_max, 2);
        assert_eq!(report.cnt_cells, 3);
        assert_eq!(report.warnings.len(), 1);

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
        let range = workbook.worksheet_range("Sheet1").expect("sheet range");
        assert_eq!(cell_text(&range, 1, 0).as_deref(), Some("c"));
        assert_eq!(cell_text(&range, 1, 1), None);
    }

    #[test]
    fn write_rows_header_only() {
        let tmp = TestDir::new();
        let path = tmp.path().join("empty.xlsx");

        let mut writer = XlsxWriter::new(path.clone(), SpecXlsxWriteOptions::default());
        let report = writer
            .write_rows(&grid(&[&["X", "Y"]]))
            .expect("write rows");
        writer.close().expect("close");

        assert_eq!(report.n_rows, 1);
        let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
        let range = workbook.worksheet_range("Sheet1").expect("sheet range");
        assert_eq!(range.height(), 1);
    }

    #[test]
    fn write_rows_twice_or_after_close_rejected() {
        let tmp = TestDir::new();
        let path = tmp.path().join("twice.xlsx");

        let mut writer = XlsxWriter::new(path, SpecXlsxWriteOptions::default());
        writer.write_rows(&grid(&[&["X"]])).expect("write rows");
        assert!(matches!(
            writer.write_rows(&grid(&[&["X"]])),
            Err(XlsxWriteError::AlreadyWritten(_))
        ));

        writer.close().expect("close");
        writer.close().expect("close is idempotent");
        assert!(matches!(
            writer.write_rows(&grid(&[&["X"]])),
            Err(XlsxWriteError::Closed)
        ));
    }

    #[test]
    fn close_to_missing_directory_fails() {
        let tmp = TestDir::new();
        let path = tmp.path().join("missing").join("out.xlsx");

        let mut writer = XlsxWriter::new(path.clone(), SpecXlsxWriteOptions::default());
        writer.write_rows(&grid(&[&["X"]])).expect("write rows");
        match writer.close() {
            Err(XlsxWriteError::Save { path: path_err, .. }) => assert_eq!(path_err, path),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!path.exists());
    }
}
