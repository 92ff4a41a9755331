use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record::{OvertimeRecord, RecordFields};
use crate::store::RecordStore;
use crate::ui::messages::warning;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, fields: RecordFields) -> AppResult<OvertimeRecord> {
        let records = RecordStore::new(&mut *pool).create(fields)?;

        // The freshly appended record is the last element of the returned
        // sequence.
        let record = records
            .last()
            .cloned()
            .ok_or_else(|| AppError::Other("create returned an empty sequence".into()))?;

        // Internal log is non-fatal; the record is already persisted.
        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &record.registration_id,
            &format!(
                "Recorded {}h on {} for {}",
                record.hours_worked, record.work_date, record.employee_name
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(record)
    }
}
