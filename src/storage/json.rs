use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use super::SessionLog;
use crate::error::{PersistenceError, PersistenceResult};

/// Auto-generated log file name, `whatsapp_reports_<YYYYMMDD_HHMMSS>.json`,
/// using local time.
pub fn default_log_filename(now: DateTime<Utc>) -> String {
    format!(
        "whatsapp_reports_{}.json",
        now.with_timezone(&Local).format("%Y%m%d_%H%M%S")
    )
}

/// Writes `log` to `path` as 2-space indented UTF-8 JSON, replacing any
/// existing file. Missing parent directories are created.
pub fn persist(path: &Path, log: &SessionLog) -> PersistenceResult<PathBuf> {
    let mut body = serde_json::to_string_pretty(log)?;
    body.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, body).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), reports = log.reports.len(), "Session log written");
    Ok(path.to_path_buf())
}

/// Reads a session log written by [`persist`].
pub fn load(path: &Path) -> PersistenceResult<SessionLog> {
    let body = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&body)?)
}
