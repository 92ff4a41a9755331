use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::RecordFields;
use crate::ui::messages::success;
use crate::utils::number::{format_money, parse_decimal, require_text};

/// Record a new overtime entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        registration,
        hours,
        date,
        rate,
    } = cmd
    {
        //
        // 1. Validate the submitted fields at the boundary.
        //    Numbers get a typed parse; free text only needs to be present.
        //
        let fields = RecordFields {
            employee_name: require_text("name", name)?,
            registration_id: require_text("registration", registration)?,
            hours_worked: parse_decimal("hours", hours)?,
            work_date: require_text("date", date)?,
            hourly_rate: parse_decimal("rate", rate)?,
        };

        //
        // 2. Open DB and make sure the schema exists.
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        //
        // 3. Execute logic
        //
        let record = AddLogic::apply(&mut pool, fields)?;

        success(format!(
            "Recorded entry #{} for {}: total {}",
            record.id,
            record.employee_name,
            format_money(&cfg.currency_symbol, record.total_pay)
        ));
    }

    Ok(())
}
