//! The overtime record store.
//!
//! Owns the durable ordered sequence of [`OvertimeRecord`] values,
//! JSON-serialized under one fixed key of the key-value collaborator.
//! Every mutation is a full read-modify-write cycle: load the whole
//! sequence, change it in memory, write the whole sequence back. There is
//! no locking and no merge; if two callers ever raced on the same key the
//! last writer would win.

use crate::db::kv::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::{OvertimeRecord, RecordFields};

/// Fixed key holding the JSON-serialized record sequence.
/// The store is the sole owner of this key's contents.
pub const RECORDS_KEY: &str = "overtime_records";

pub struct RecordStore<K: KvStore> {
    kv: K,
}

impl<K: KvStore> RecordStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Load the full ordered sequence.
    ///
    /// An absent key is an empty sequence. Content that fails to
    /// deserialize surfaces as [`AppError::CorruptData`]; the stored bytes
    /// are left untouched so they can be inspected.
    pub fn list(&mut self) -> AppResult<Vec<OvertimeRecord>> {
        match self.kv.get(RECORDS_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| AppError::CorruptData(e.to_string()))
            }
        }
    }

    /// Append a new record and return the updated sequence.
    /// `total_pay` is derived from the submitted hours and rate.
    pub fn create(&mut self, fields: RecordFields) -> AppResult<Vec<OvertimeRecord>> {
        let mut records = self.list()?;
        let id = next_id(&records);
        records.push(OvertimeRecord::build(id, fields));
        self.save(&records)?;
        Ok(records)
    }

    /// Replace the record with the given id in place.
    ///
    /// Position in the sequence and the id itself are preserved;
    /// `total_pay` is recomputed from the new fields, never taken from the
    /// caller. An unknown id fails before anything is written.
    pub fn update(&mut self, id: u64, fields: RecordFields) -> AppResult<Vec<OvertimeRecord>> {
        let mut records = self.list()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::UnknownRecord(id))?;
        *slot = OvertimeRecord::build(id, fields);
        self.save(&records)?;
        Ok(records)
    }

    /// Remove the record with the given id and return the remaining
    /// sequence. An unknown id fails before anything is written.
    pub fn delete(&mut self, id: u64) -> AppResult<Vec<OvertimeRecord>> {
        let mut records = self.list()?;
        let pos = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::UnknownRecord(id))?;
        records.remove(pos);
        self.save(&records)?;
        Ok(records)
    }

    /// Single-record lookup, used by the edit flow to pre-fill fields.
    pub fn get(&mut self, id: u64) -> AppResult<OvertimeRecord> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(AppError::UnknownRecord(id))
    }

    fn save(&mut self, records: &[OvertimeRecord]) -> AppResult<()> {
        let raw =
            serde_json::to_string(records).map_err(|e| AppError::StorageWrite(e.to_string()))?;
        self.kv.set(RECORDS_KEY, &raw)
    }
}

/// Ids are monotonic within the live sequence: max existing + 1.
/// Deleting the highest record may reissue its id later, which is safe
/// because lookups only ever run against the current sequence.
fn next_id(records: &[OvertimeRecord]) -> u64 {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for the persistence collaborator.
    #[derive(Default)]
    struct MemoryKv {
        map: HashMap<String, String>,
    }

    impl KvStore for MemoryKv {
        fn get(&mut self, key: &str) -> AppResult<Option<String>> {
            Ok(self.map.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
            self.map.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Collaborator whose reads always fail, as if the backing file were
    /// unreachable.
    struct BrokenKv;

    impl KvStore for BrokenKv {
        fn get(&mut self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::StorageRead("disk on fire".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::StorageWrite("disk on fire".into()))
        }
    }

    fn fields(name: &str, reg: &str, hours: f64, date: &str, rate: f64) -> RecordFields {
        RecordFields {
            employee_name: name.to_string(),
            registration_id: reg.to_string(),
            hours_worked: hours,
            work_date: date.to_string(),
            hourly_rate: rate,
        }
    }

    #[test]
    fn list_on_missing_key_is_empty() {
        let mut store = RecordStore::new(MemoryKv::default());
        assert!(store.list().expect("list").is_empty());
    }

    #[test]
    fn create_appends_and_derives_total() {
        let mut store = RecordStore::new(MemoryKv::default());
        store
            .create(fields("Ana Souza", "001", 5.0, "01/01/2025", 20.5))
            .expect("create");

        let records = store.list().expect("list");
        let last = records.last().expect("one record");
        assert_eq!(last.employee_name, "Ana Souza");
        assert_eq!(last.registration_id, "001");
        assert_eq!(last.total_pay, 102.5);
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut store = RecordStore::new(MemoryKv::default());
        store.create(fields("A", "1", 1.0, "d", 1.0)).expect("a");
        store.create(fields("B", "2", 1.0, "d", 1.0)).expect("b");

        let records = store.list().expect("list");
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
    }

    #[test]
    fn update_recomputes_total_and_keeps_position() {
        let mut store = RecordStore::new(MemoryKv::default());
        store.create(fields("A", "1", 2.0, "d1", 10.0)).expect("a");
        store.create(fields("B", "2", 3.0, "d2", 10.0)).expect("b");

        let before = store.list().expect("list");
        let target = before[0].id;

        store
            .update(target, fields("A", "1", 4.0, "d1", 10.0))
            .expect("update");

        let after = store.list().expect("list");
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].id, target);
        assert_eq!(after[0].total_pay, 40.0);
        // The untouched neighbour is byte-identical.
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn update_ignores_any_caller_total() {
        // RecordFields has no total field at all, so the only way a stale
        // total could survive is the store forgetting to recompute.
        let mut store = RecordStore::new(MemoryKv::default());
        store.create(fields("A", "1", 2.0, "d", 10.0)).expect("a");
        store
            .update(1, fields("A", "1", 2.0, "d", 50.0))
            .expect("update");
        assert_eq!(store.get(1).expect("get").total_pay, 100.0);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut store = RecordStore::new(MemoryKv::default());
        store.create(fields("A", "1", 1.0, "d", 1.0)).expect("a");
        store.create(fields("B", "2", 1.0, "d", 1.0)).expect("b");
        store.create(fields("C", "3", 1.0, "d", 1.0)).expect("c");

        let remaining = store.delete(2).expect("delete");
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].employee_name, "A");
        assert_eq!(remaining[1].employee_name, "C");
    }

    #[test]
    fn unknown_id_leaves_sequence_unchanged() {
        let mut store = RecordStore::new(MemoryKv::default());
        store.create(fields("A", "1", 1.0, "d", 1.0)).expect("a");
        let before = store.list().expect("list");

        assert!(matches!(
            store.update(99, fields("X", "9", 1.0, "d", 1.0)),
            Err(AppError::UnknownRecord(99))
        ));
        assert!(matches!(
            store.delete(99),
            Err(AppError::UnknownRecord(99))
        ));

        assert_eq!(store.list().expect("list"), before);
    }

    #[test]
    fn list_is_idempotent() {
        let mut store = RecordStore::new(MemoryKv::default());
        store.create(fields("A", "1", 2.5, "d", 4.0)).expect("a");
        let first = store.list().expect("first");
        let second = store.list().expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_payload_surfaces_instead_of_resetting() {
        let mut kv = MemoryKv::default();
        kv.set(RECORDS_KEY, "{not json").expect("seed");
        let mut store = RecordStore::new(kv);

        assert!(matches!(store.list(), Err(AppError::CorruptData(_))));
        // The bytes are still there for inspection.
        assert_eq!(
            store.kv.get(RECORDS_KEY).expect("raw").as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn unreachable_collaborator_surfaces_read_error() {
        let mut store = RecordStore::new(BrokenKv);
        assert!(matches!(store.list(), Err(AppError::StorageRead(_))));
    }

    #[test]
    fn full_lifecycle_create_edit_delete() {
        let mut store = RecordStore::new(MemoryKv::default());

        let records = store
            .create(fields("Ana", "001", 3.0, "01/01/2025", 10.0))
            .expect("create");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_pay, 30.0);

        let id = records[0].id;
        let records = store
            .update(id, fields("Ana", "001", 4.0, "01/01/2025", 10.0))
            .expect("update");
        assert_eq!(records[0].total_pay, 40.0);

        let records = store.delete(id).expect("delete");
        assert!(records.is_empty());
        assert!(store.list().expect("list").is_empty());
    }
}
