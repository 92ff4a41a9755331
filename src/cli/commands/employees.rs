use crate::cli::parser::Commands;
use crate::config::Config;
use crate::directory;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// Browse the remote employee directory.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees { search, url } = cmd {
        let endpoint = url.as_deref().unwrap_or(&cfg.directory_url);

        info(format!("Fetching employee directory from {}", endpoint));
        let employees = directory::fetch(endpoint)?;

        let shown: Vec<&Employee> = match search {
            Some(q) => directory::search(&employees, q),
            None => employees.iter().collect(),
        };

        if shown.is_empty() {
            println!("No employees match.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "NAME", "JOB", "ADMITTED", "PHONE"]);
        for e in &shown {
            table.add_row(vec![
                e.id.to_string(),
                e.name.clone(),
                e.job.clone(),
                e.admission_date.clone(),
                e.phone.clone(),
            ]);
        }

        println!("{}", table.render());
        println!("Employees: {} of {}", shown.len(), employees.len());
    }
    Ok(())
}
