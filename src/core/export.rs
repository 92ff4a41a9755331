use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, RecordExport, ensure_writable, export_csv, export_json};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level business logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the current record sequence (optionally filtered by
    /// registration) to `file`; returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        registration: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let records = RecordStore::new(&mut *pool).list()?;

        let rows: Vec<RecordExport> = records
            .iter()
            .filter(|r| {
                registration
                    .as_ref()
                    .is_none_or(|reg| &r.registration_id == reg)
            })
            .map(RecordExport::from)
            .collect();

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} entries to {}", rows.len(), path.display()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}
