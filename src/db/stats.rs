use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORD SEQUENCE
    //
    let records = RecordStore::new(&mut *pool).list()?;

    println!(
        "{}• Overtime entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    let mut registrations: Vec<&str> = records
        .iter()
        .map(|r| r.registration_id.as_str())
        .collect();
    registrations.sort_unstable();
    registrations.dedup();

    println!(
        "{}• Distinct registrations:{} {}",
        CYAN,
        RESET,
        registrations.len()
    );

    let owed: f64 = records.iter().map(|r| r.total_pay).sum();
    println!("{}• Total owed:{} {:.2}", CYAN, RESET, owed);

    //
    // 3) LOG ROWS
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    if log_rows == 0 {
        println!("{}• Log entries:{} {}--{}", CYAN, RESET, GREY, RESET);
    } else {
        println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);
    }

    println!();
    Ok(())
}
