use crate::config::Config;
use crate::core::access::{AdminSession, PinOutcome};
use crate::core::aggregate::{Dashboard, GroupCount};
use crate::db;
use crate::db::log::journal;
use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, CheckEvent};
use crate::ui::messages::{header, info, success};
use crate::utils::table::TextTable;
use std::thread;
use std::time::{Duration, Instant};

/// High-level logic for the admin dashboard.
pub struct AdminLogic;

impl AdminLogic {
    /// Gate the session with `pin`. `Ok(false)` means nothing was entered.
    pub fn login(session: &mut AdminSession, cfg: &Config, pin: &str) -> AppResult<bool> {
        match session.enter_pin(pin) {
            PinOutcome::Granted => {
                journal(cfg, "admin", "dashboard", "Access granted");
                success("Access granted. You are logged in as Admin.");
                Ok(true)
            }
            PinOutcome::Empty => {
                info("Enter Admin PIN to open the Ops Dashboard.");
                Ok(false)
            }
            PinOutcome::Incorrect => {
                journal(cfg, "admin", "dashboard", "Incorrect PIN");
                Err(AppError::AccessDenied("Incorrect PIN.".into()))
            }
        }
    }

    /// Reload the store and print every view once.
    pub fn refresh(session: &mut AdminSession, cfg: &Config) -> AppResult<Dashboard> {
        if !session.is_logged_in() {
            return Err(AppError::AccessDenied("Admin login required.".into()));
        }

        let store = db::open(cfg)?;
        if !store.exists() {
            info("No data file found.");
        }
        let table = store.load()?;
        let dashboard = Dashboard::build(&table);

        print!("{}", render_dashboard(&dashboard));
        session.mark_refreshed(Instant::now());
        Ok(dashboard)
    }

    /// Redraw whenever the refresh interval elapses. `max_refreshes`
    /// bounds the loop; `None` runs until interrupted.
    pub fn watch(
        session: &mut AdminSession,
        cfg: &Config,
        max_refreshes: Option<usize>,
    ) -> AppResult<()> {
        let mut done = 0usize;
        loop {
            let now = Instant::now();
            if session.due_for_refresh(now) {
                Self::refresh(session, cfg)?;
                done += 1;
                if max_refreshes.is_some_and(|max| done >= max) {
                    return Ok(());
                }
            }

            let wait = session
                .until_next_refresh(Instant::now())
                .max(Duration::from_millis(50));
            thread::sleep(wait);
        }
    }
}

pub fn render_counts(label: &str, counts: &[GroupCount]) -> String {
    let mut table = TextTable::new(&[label, "Total Checked In"]);
    for c in counts {
        table.add_row(vec![c.label.clone(), c.total.to_string()]);
    }
    table.render()
}

pub fn render_log(events: &[CheckEvent]) -> String {
    let mut table = TextTable::new(&COLUMNS);
    for ev in events {
        table.add_row(ev.to_row());
    }
    table.render()
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    out.push_str(&section("📍 Current Check-Ins by Location"));
    out.push_str(&render_counts("Location", &dashboard.by_location));

    out.push_str(&section("🏢 Current Check-Ins by Department"));
    out.push_str(&render_counts("Department", &dashboard.by_department));

    out.push_str(&section("📋 Full Check-In/Out Log (most recent first)"));
    out.push_str(&render_log(&dashboard.log));

    out
}

fn section(title: &str) -> String {
    format!("\n### {title}\n\n")
}

/// Print the banner shown above the dashboard.
pub fn print_banner() {
    header("🔒 Ops Dashboard (Admin Access Only)");
}
