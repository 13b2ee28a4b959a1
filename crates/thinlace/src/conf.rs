//! Setting names and process lifecycle markers.

/// Database connection URL.
pub const C_ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Query text executed verbatim.
pub const C_ENV_QUERY: &str = "QUERY";
/// Comma-separated header labels.
pub const C_ENV_HEADER: &str = "HEADER";
/// Output workbook path.
pub const C_ENV_XLSX_FILENAME: &str = "XLSX_FILENAME";

/// Required settings in load order.
pub const TUP_ENV_REQUIRED: [&str; 4] = [
    C_ENV_DATABASE_URL,
    C_ENV_QUERY,
    C_ENV_HEADER,
    C_ENV_XLSX_FILENAME,
];

pub const C_MARKER_STARTED: &str = "THINLACE STARTED.";
pub const C_MARKER_COMPLETED: &str = "THINLACE COMPLETED.";
