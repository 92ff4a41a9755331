use serde::Serialize;

use crate::models::record::OvertimeRecord;

/// Flat row shape shared by the CSV and JSON writers.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: u64,
    pub employee_name: String,
    pub registration_id: String,
    pub work_date: String,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub total_pay: f64,
}

impl From<&OvertimeRecord> for RecordExport {
    fn from(r: &OvertimeRecord) -> Self {
        Self {
            id: r.id,
            employee_name: r.employee_name.clone(),
            registration_id: r.registration_id.clone(),
            work_date: r.work_date.clone(),
            hours_worked: r.hours_worked,
            hourly_rate: r.hourly_rate,
            total_pay: r.total_pay,
        }
    }
}
