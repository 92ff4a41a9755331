use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::warning;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the record with the given id; returns how many entries remain.
    pub fn apply(pool: &mut DbPool, id: u64) -> AppResult<usize> {
        let remaining = RecordStore::new(&mut *pool).delete(id)?.len();

        if let Err(e) = ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted entry #{} ({} remaining)", id, remaining),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(remaining)
    }
}
