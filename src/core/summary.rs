use crate::models::record::OvertimeRecord;

/// Aggregated totals for one registration number.
/// The registration is a grouping key only; it is not required to be
/// unique per employee, so the name shown is the latest one recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationSummary {
    pub registration_id: String,
    pub employee_name: String,
    pub entries: usize,
    pub hours: f64,
    pub total_pay: f64,
}

/// Group records by registration, in order of first appearance.
pub fn summarize(records: &[OvertimeRecord]) -> Vec<RegistrationSummary> {
    let mut out: Vec<RegistrationSummary> = Vec::new();

    for rec in records {
        match out
            .iter_mut()
            .find(|s| s.registration_id == rec.registration_id)
        {
            Some(s) => {
                s.employee_name = rec.employee_name.clone();
                s.entries += 1;
                s.hours += rec.hours_worked;
                s.total_pay += rec.total_pay;
            }
            None => out.push(RegistrationSummary {
                registration_id: rec.registration_id.clone(),
                employee_name: rec.employee_name.clone(),
                entries: 1,
                hours: rec.hours_worked,
                total_pay: rec.total_pay,
            }),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{OvertimeRecord, RecordFields};

    fn rec(id: u64, name: &str, reg: &str, hours: f64, rate: f64) -> OvertimeRecord {
        OvertimeRecord::build(
            id,
            RecordFields {
                employee_name: name.to_string(),
                registration_id: reg.to_string(),
                hours_worked: hours,
                work_date: "01/02/2025".to_string(),
                hourly_rate: rate,
            },
        )
    }

    #[test]
    fn groups_by_registration_in_first_seen_order() {
        let records = vec![
            rec(1, "Ana", "001", 2.0, 10.0),
            rec(2, "Bruno", "002", 1.0, 20.0),
            rec(3, "Ana", "001", 3.0, 10.0),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].registration_id, "001");
        assert_eq!(summary[0].entries, 2);
        assert_eq!(summary[0].hours, 5.0);
        assert_eq!(summary[0].total_pay, 50.0);

        assert_eq!(summary[1].registration_id, "002");
        assert_eq!(summary[1].total_pay, 20.0);
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }
}
