use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{SubmitLogic, Submission};
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::models::{Location, Status};

/// Record one check-in / check-out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        name,
        department,
        location,
        status,
        notes,
        flight,
    } = cmd
    {
        //
        // 1. Parse the closed choices
        //
        let location = Location::from_input(location).ok_or_else(|| {
            AppError::InvalidLocation(format!(
                "'{}'. Use one of: main, fta, lego, city, other",
                location
            ))
        })?;

        let status = Status::from_input(status).ok_or_else(|| {
            AppError::InvalidStatus(format!("'{}'. Use 'in' or 'out'", status))
        })?;

        //
        // 2. Open the configured store
        //
        let mut store = db::open(cfg)?;

        //
        // 3. Validate, stamp and append
        //
        let submission = Submission {
            name: name.clone(),
            department: department.clone(),
            location: Some(location),
            status: Some(status),
            notes: notes.clone(),
            flight_name: flight.clone(),
        };

        SubmitLogic::apply(store.as_mut(), cfg, &submission)?;
    }

    Ok(())
}
