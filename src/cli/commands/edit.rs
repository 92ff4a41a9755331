use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditPatch};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::number::{format_money, parse_decimal, require_text};

/// Edit an overtime entry in place.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        registration,
        hours,
        date,
        rate,
    } = cmd
    {
        //
        // 1. Validate only the fields that were actually supplied.
        //
        let patch = EditPatch {
            employee_name: match name {
                Some(v) => Some(require_text("name", v)?),
                None => None,
            },
            registration_id: match registration {
                Some(v) => Some(require_text("registration", v)?),
                None => None,
            },
            hours_worked: match hours {
                Some(v) => Some(parse_decimal("hours", v)?),
                None => None,
            },
            work_date: match date {
                Some(v) => Some(require_text("date", v)?),
                None => None,
            },
            hourly_rate: match rate {
                Some(v) => Some(parse_decimal("rate", v)?),
                None => None,
            },
        };

        if patch.is_empty() {
            info("Nothing to change: pass at least one of --name, --reg, --hours, --date, --rate.");
            return Ok(());
        }

        //
        // 2. Execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let record = EditLogic::apply(&mut pool, *id, patch)?;

        success(format!(
            "Updated entry #{} for {}: total {}",
            record.id,
            record.employee_name,
            format_money(&cfg.currency_symbol, record.total_pay)
        ));
    }

    Ok(())
}
