use serde::{Deserialize, Serialize};

/// One submitted overtime entry: who worked, how long, on which date, at
/// which rate, and the pay owed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    pub id: u64,
    pub employee_name: String,
    pub registration_id: String,
    pub hours_worked: f64,
    /// Kept exactly as typed; the store never interprets it as a calendar date.
    pub work_date: String,
    pub hourly_rate: f64,
    /// Always `hours_worked * hourly_rate` as of the last write.
    pub total_pay: f64,
}

/// Validated input for a create or an in-place replace.
/// There is deliberately no `total_pay` field here: the derived value can
/// only ever be computed by the store, never supplied.
#[derive(Debug, Clone)]
pub struct RecordFields {
    pub employee_name: String,
    pub registration_id: String,
    pub hours_worked: f64,
    pub work_date: String,
    pub hourly_rate: f64,
}

impl OvertimeRecord {
    pub fn build(id: u64, fields: RecordFields) -> Self {
        let total_pay = fields.hours_worked * fields.hourly_rate;
        Self {
            id,
            employee_name: fields.employee_name,
            registration_id: fields.registration_id,
            hours_worked: fields.hours_worked,
            work_date: fields.work_date,
            hourly_rate: fields.hourly_rate,
            total_pay,
        }
    }
}
