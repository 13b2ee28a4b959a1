//! Export pipeline: configuration -> query executor -> workbook writer.

use std::path::Path;

use thinlace_io_sql::run_query;
use thinlace_io_xlsx::XlsxWriter;
use tracing::{error, info};

use crate::loader::load_config_with;
use crate::spec::{
    EnumSaveFailurePolicy, ExportError, SpecExportConfig, SpecExportOptions, SpecExportReport,
};

/// Load settings through `lookup`, then export.
///
/// A missing setting fails before any database or file I/O.
pub async fn run_with_lookup<F>(
    lookup: F,
    options: &SpecExportOptions,
) -> Result<SpecExportReport, ExportError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config_with(lookup)?;
    run_export(&config, options).await
}

/// Run the configured query once and write its rows to the output workbook.
pub async fn run_export(
    config: &SpecExportConfig,
    options: &SpecExportOptions,
) -> Result<SpecExportReport, ExportError> {
    let result_set = run_query(
        &config.database_url,
        &config.query,
        &config.header,
        &options.query,
    )
    .await?;

    write_result_set(&result_set.rows, &config.path_file_out, options)
}

/// Write header + data rows to `path_file_out` and save the workbook.
///
/// Save failures follow `options.rule_save_failure`.
pub fn write_result_set(
    rows: &[Vec<String>],
    path_file_out: &Path,
    options: &SpecExportOptions,
) -> Result<SpecExportReport, ExportError> {
    let mut writer = XlsxWriter::new(path_file_out.to_path_buf(), options.xlsx.clone());
    let report_xlsx = writer.write_rows(rows)?;
    info!("{}", report_xlsx.format("[XLSX]"));
    for warning in &report_xlsx.warnings {
        info!("{warning}");
    }

    let save_error = match writer.close() {
        Ok(()) => None,
        Err(err) => match options.rule_save_failure {
            EnumSaveFailurePolicy::Fatal => return Err(err.into()),
            EnumSaveFailurePolicy::Report => {
                error!("{err}");
                Some(err.to_string())
            }
        },
    };

    Ok(SpecExportReport {
        path_file_out: path_file_out.to_path_buf(),
        n_rows_body: rows.len().saturating_sub(1),
        xlsx: report_xlsx,
        save_error,
    })
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::write_result_set;
    use crate::spec::{EnumSaveFailurePolicy, ExportError, SpecExportOptions};

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("thinlace_pipeline_test_{n}"));
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

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["X".to_string(), "Y".to_string()],
            vec!["a".to_string(), "b".to_string()],
        ]
    }

    #[test]
    fn write_result_set_saves_workbook() {
        let tmp = TestDir::new();
        let path = tmp.path().join("out.xlsx");

        let report =
            write_result_set(&rows(), &path, &SpecExportOptions::default()).expect("export");
        assert!(report.if_saved());
        assert_eq!(report.n_rows_body, 1);
        assert_eq!(report.xlsx.range_used.as_deref(), Some("A1:B2"));
        assert!(path.exists());
    }

    #[test]
    fn save_failure_is_fatal_by_default() {
        let tmp = TestDir::new();
        let path = tmp.path().join("missing").join("out.xlsx");

        let err = write_result_set(&rows(), &path, &SpecExportOptions::default())
            .expect_err("save must fail");
        assert!(matches!(err, ExportError::Xlsx(_)));
        assert!(!path.exists());
    }

    #[test]
    fn save_failure_reported_when_requested() {
        let tmp = TestDir::new();
        let path = tmp.path().join("missing").join("out.xlsx");
        let options = SpecExportOptions {
            rule_save_failure: EnumSaveFailurePolicy::Report,
            ..Default::default()
        };

        let report = write_result_set(&rows(), &path, &options).expect("completes");
        assert!(!report.if_saved());
        assert!(
            report
                .save_error
                .as_deref()
                .is_some_and(|msg| msg.starts_with("Failed to save"))
        );
        assert!(!path.exists());
    }
}
