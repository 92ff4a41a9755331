use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record::{OvertimeRecord, RecordFields};
use crate::store::RecordStore;
use crate::ui::messages::warning;

/// Fields supplied to an edit. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct EditPatch {
    pub employee_name: Option<String>,
    pub registration_id: Option<String>,
    pub hours_worked: Option<f64>,
    pub work_date: Option<String>,
    pub hourly_rate: Option<f64>,
}

impl EditPatch {
    pub fn is_empty(&self) -> bool {
        self.employee_name.is_none()
            && self.registration_id.is_none()
            && self.hours_worked.is_none()
            && self.work_date.is_none()
            && self.hourly_rate.is_none()
    }
}

/// High-level business logic for the `edit` command: read the current
/// record, merge the patch, replace it in place. The total is recomputed
/// by the store on every replace.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(pool: &mut DbPool, id: u64, patch: EditPatch) -> AppResult<OvertimeRecord> {
        let record = {
            let mut store = RecordStore::new(&mut *pool);
            let current = store.get(id)?;

            let fields = RecordFields {
                employee_name: patch.employee_name.unwrap_or(current.employee_name),
                registration_id: patch.registration_id.unwrap_or(current.registration_id),
                hours_worked: patch.hours_worked.unwrap_or(current.hours_worked),
                work_date: patch.work_date.unwrap_or(current.work_date),
                hourly_rate: patch.hourly_rate.unwrap_or(current.hourly_rate),
            };

            let records = store.update(id, fields)?;
            records
                .into_iter()
                .find(|r| r.id == id)
                .ok_or(AppError::UnknownRecord(id))?
        };

        if let Err(e) = ttlog(
            &pool.conn,
            "edit",
            &record.registration_id,
            &format!("Updated entry #{} for {}", record.id, record.employee_name),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(record)
    }
}
