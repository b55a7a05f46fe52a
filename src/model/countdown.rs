use std::fmt;

use chrono::{DateTime, Utc};

use super::race::{Race, RaceTable};

/// First race in the table that has not started yet.
#[must_use]
pub fn next_race(schedule: &RaceTable, now: DateTime<Utc>) -> Option<&Race> {
    schedule
        .races
        .iter()
        .find(|race| race.starts_at().is_some_and(|start| start > now))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Pending {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Started,
}

impl Countdown {
    #[must_use]
    pub fn until(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (start - now).num_seconds();
        if remaining <= 0 {
            return Countdown::Started;
        }
        Countdown::Pending {
            days: remaining / 86_400,
            hours: (remaining % 86_400) / 3_600,
            minutes: (remaining % 3_600) / 60,
            seconds: remaining % 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Pending {
                days,
                hours,
                minutes,
                seconds,
            } => write!(f, "{days}d {hours}h {minutes}m {seconds}s"),
            Countdown::Started => write!(f, "Race in progress or finished"),
        }
    }
}
