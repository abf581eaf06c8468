use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::full_log_descending;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::describe_event;
use crate::utils::period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        checked_in,
        limit,
    } = cmd
    {
        let store = db::open(cfg)?;
        if !store.exists() {
            info("No data file found.");
            return Ok(());
        }

        let table = period::apply(store.load()?, period.as_deref())?;

        let events: Vec<_> = full_log_descending(&table)
            .into_iter()
            .filter(|ev| !*checked_in || ev.is_checked_in())
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        if events.is_empty() {
            info("No check events found.");
            return Ok(());
        }

        println!("📋 Check-In/Out Log (most recent first)\n");
        for ev in &events {
            println!("{}", describe_event(ev));
        }
        println!("\n{} of {} rows", events.len(), table.len());
    }
    Ok(())
}
