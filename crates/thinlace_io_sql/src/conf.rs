//! Query executor constants.

/// Cell text substituted for a database null.
pub const C_NULL_TOKEN: &str = "NULL";
/// Separator between header labels.
pub const C_HEADER_SEPARATOR: char = ',';
