use crate::config::Config;
use crate::db::EventStore;
use crate::db::log::journal;
use crate::errors::{AppResult, ValidationError};
use crate::models::{CheckEvent, Location, Status};
use crate::ui::messages::{success, warning};
use crate::utils::time;
use chrono::NaiveDateTime;

/// Departments whose staff must give a flight name.
const FLIGHT_DEPARTMENTS: [&str; 2] = ["aviation", "survival"];

/// Raw values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub name: String,
    pub department: String,
    pub location: Option<Location>,
    pub status: Option<Status>,
    pub notes: String,
    pub flight_name: String,
}

/// Case-insensitive substring match on "aviation" / "survival".
pub fn requires_flight_name(department: &str) -> bool {
    let dept = department.to_lowercase();
    FLIGHT_DEPARTMENTS.iter().any(|d| dept.contains(d))
}

/// Missing name/department is reported before a missing flight name.
pub fn validate(name: &str, department: &str, flight_name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || department.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }
    if requires_flight_name(department) && flight_name.is_empty() {
        return Err(ValidationError::FlightNameRequired);
    }
    Ok(())
}

impl Submission {
    /// Validate and build the event stamped with `now`.
    pub fn accept(&self, now: NaiveDateTime) -> Result<CheckEvent, ValidationError> {
        validate(&self.name, &self.department, &self.flight_name)?;

        let flight_name = if requires_flight_name(&self.department) {
            self.flight_name.as_str()
        } else {
            ""
        };

        Ok(CheckEvent::new(
            &self.name,
            &self.department,
            self.location.unwrap_or(Location::MainTrainingSite),
            self.status.unwrap_or(Status::CheckIn),
            now,
        )
        .with_notes(&self.notes)
        .with_flight_name(flight_name))
    }
}

/// High-level business logic for the `submit` command.
pub struct SubmitLogic;

impl SubmitLogic {
    pub fn apply(
        store: &mut dyn EventStore,
        cfg: &Config,
        submission: &Submission,
    ) -> AppResult<CheckEvent> {
        // Stamped at acceptance, not when the command started.
        let event = submission.accept(time::now())?;

        if event.flight_name.is_empty() && !submission.flight_name.is_empty() {
            warning(format!(
                "Flight Name is only recorded for Aviation or Survival departments; '{}' ignored.",
                submission.flight_name
            ));
        }

        store.record(&event)?;

        journal(
            cfg,
            "submit",
            &store.path().to_string_lossy(),
            &format!(
                "{} ({}) {} at {}",
                event.name, event.department, event.status, event.location
            ),
        );

        success(format!(
            "Submitted! {} {} at {} ({})",
            event.name,
            event.status.label().to_lowercase(),
            event.location,
            event.time_str()
        ));

        Ok(event)
    }
}
