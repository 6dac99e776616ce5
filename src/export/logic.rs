use crate::core::history::gap_before;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::export::notify_export_success;
use crate::models::FeedSession;
use crate::ui::messages::warning;
use std::fs;
use std::path::PathBuf;

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole log, newest first. Returns the written path, or
    /// `None` when there was nothing to export.
    pub fn export_sessions(
        sessions: &[FeedSession],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = require_absolute(file)?;

        if sessions.is_empty() {
            warning("No feeding sessions to export.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<SessionExport> = sessions
            .iter()
            .map(|s| SessionExport::from_session(s, gap_before(s, sessions)))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(Some(path))
    }

    /// Write the rendered report as a text file.
    pub fn write_report(report: &str, file: &str, force: bool) -> AppResult<PathBuf> {
        let path = require_absolute(file)?;
        ensure_writable(&path, force)?;

        fs::write(&path, format!("{report}\n"))?;

        notify_export_success("Report", &path);
        Ok(path)
    }
}
