use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access::AdminSession;
use crate::core::admin::{AdminLogic, print_banner};
use crate::errors::AppResult;
use std::io::{self, Write};
use std::time::Duration;

/// Gate with the admin PIN, then show (or watch) the dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin {
        pin,
        watch,
        refreshes,
    } = cmd
    {
        print_banner();

        let entered = match pin {
            Some(p) => p.clone(),
            None => prompt_pin()?,
        };

        let mut session =
            AdminSession::new(&cfg.admin_pin, Duration::from_secs(cfg.refresh_interval));

        if !AdminLogic::login(&mut session, cfg, &entered)? {
            return Ok(());
        }

        if *watch {
            AdminLogic::watch(&mut session, cfg, *refreshes)?;
        } else {
            AdminLogic::refresh(&mut session, cfg)?;
        }
    }

    Ok(())
}

fn prompt_pin() -> AppResult<String> {
    print!("Enter Admin PIN: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
