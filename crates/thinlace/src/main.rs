use std::process::ExitCode;

use thinlace::conf::{C_MARKER_COMPLETED, C_MARKER_STARTED};
use thinlace::{ExportError, SpecExportOptions, load_config, run_export};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = thinlace_log::init_logging() {
        eprintln!("{err}");
    }

    info!("{C_MARKER_STARTED}");
    let options = SpecExportOptions::default();
    let result = match load_config() {
        Ok(config) => run_export(&config, &options).await,
        Err(err) => Err(ExportError::from(err)),
    };
    match result {
        Ok(report) => {
            info!("{} generated successfully.", report.path_file_out.display());
            info!("{C_MARKER_COMPLETED}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
