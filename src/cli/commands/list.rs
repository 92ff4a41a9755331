use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::summarize;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::OvertimeRecord;
use crate::store::RecordStore;
use crate::utils::number::format_money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        registration,
        search,
        summary,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let records = RecordStore::new(&mut pool).list()?;

        let filtered: Vec<&OvertimeRecord> = records
            .iter()
            .filter(|r| {
                registration
                    .as_ref()
                    .is_none_or(|reg| &r.registration_id == reg)
            })
            .filter(|r| {
                search.as_ref().is_none_or(|q| {
                    r.employee_name
                        .to_lowercase()
                        .contains(&q.to_lowercase())
                })
            })
            .collect();

        if filtered.is_empty() {
            println!("No overtime entries recorded.");
            return Ok(());
        }

        if *summary {
            print_summary(&filtered, &cfg.currency_symbol);
        } else {
            print_entries(&filtered, &cfg.currency_symbol);
        }
    }
    Ok(())
}

fn print_entries(records: &[&OvertimeRecord], currency: &str) {
    let mut table = Table::new(&["ID", "EMPLOYEE", "REG", "DATE", "HOURS", "RATE", "TOTAL"]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.employee_name.clone(),
            r.registration_id.clone(),
            r.work_date.clone(),
            format!("{}", r.hours_worked),
            format!("{:.2}", r.hourly_rate),
            format_money(currency, r.total_pay),
        ]);
    }

    println!("{}", table.render());

    let owed: f64 = records.iter().map(|r| r.total_pay).sum();
    println!(
        "Entries: {} | Total owed: {}",
        records.len(),
        format_money(currency, owed)
    );
}

fn print_summary(records: &[&OvertimeRecord], currency: &str) {
    let owned: Vec<OvertimeRecord> = records.iter().map(|r| (*r).clone()).collect();
    let rows = summarize(&owned);

    let mut table = Table::new(&["REG", "EMPLOYEE", "ENTRIES", "HOURS", "TOTAL"]);
    for s in &rows {
        table.add_row(vec![
            s.registration_id.clone(),
            s.employee_name.clone(),
            s.entries.to_string(),
            format!("{}", s.hours),
            format_money(currency, s.total_pay),
        ]);
    }

    println!("{}", table.render());
}
