use std::time::{Duration, Instant};

/// Result of one PIN entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    Granted,
    /// Nothing typed: not granted, but not an error either.
    Empty,
    Incorrect,
}

/// Per-session admin state, owned by the caller and passed explicitly.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pin: String,
    logged_in: bool,
    refresh_interval: Duration,
    last_refresh: Option<Instant>,
}

impl AdminSession {
    pub fn new(pin: &str, refresh_interval: Duration) -> Self {
        Self {
            pin: pin.to_string(),
            logged_in: false,
            refresh_interval,
            last_refresh: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Once granted, access is kept for the rest of the session.
    pub fn enter_pin(&mut self, entered: &str) -> PinOutcome {
        if self.logged_in {
            return PinOutcome::Granted;
        }

        if entered == self.pin {
            self.logged_in = true;
            PinOutcome::Granted
        } else if entered.is_empty() {
            PinOutcome::Empty
        } else {
            PinOutcome::Incorrect
        }
    }

    /// True when the dashboard has never been drawn or the interval has passed.
    pub fn due_for_refresh(&self, now: Instant) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.refresh_interval,
        }
    }

    pub fn mark_refreshed(&mut self, now: Instant) {
        self.last_refresh = Some(now);
    }

    /// Time left before the next refresh is due.
    pub fn until_next_refresh(&self, now: Instant) -> Duration {
        match self.last_refresh {
            None => Duration::ZERO,
            Some(last) => self
                .refresh_interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }
}
