//! Backup archive naming

use chrono::NaiveDateTime;

/// Timestamp layout embedded in archive names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `<tool>_backup_<suffix>_<YYYYMMDD_HHMMSS>.archive`
#[must_use]
pub fn backup_file_name(tool: &str, suffix: &str, at: NaiveDateTime) -> String {
    format!(
        "{tool}_backup_{suffix}_{}.archive",
        at.format(TIMESTAMP_FORMAT)
    )
}
