use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::driver::{Constructor, Driver};
use super::numeric::{parse_count, parse_points, parse_position};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RaceTable {
    #[serde(default)]
    pub season: String,
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub circuit_id: String,
    #[serde(default)]
    pub url: String,
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: Location,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RaceTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub millis: Option<String>,
    pub time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LapTime {
    pub time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AverageSpeed {
    pub units: String,
    pub speed: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FastestLap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    pub lap: String,
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<LapTime>,
    #[serde(
        rename = "AverageSpeed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub average_speed: Option<AverageSpeed>,
}

/// One driver's classification in a session.
///
/// Race classifications carry grid, laps, status and points. Qualifying
/// classifications carry `Q1`..`Q3` instead, and leave the race-only fields
/// empty. `grid` is the starting slot, `position` the finishing one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(default)]
    pub number: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laps: Option<String>,
    /// Free-form: "Finished", "+1 Lap", "Engine", "Collision", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RaceTime>,
    #[serde(rename = "FastestLap", default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap: Option<FastestLap>,
    #[serde(rename = "Q1", default, skip_serializing_if = "Option::is_none")]
    pub q1: Option<String>,
    #[serde(rename = "Q2", default, skip_serializing_if = "Option::is_none")]
    pub q2: Option<String>,
    #[serde(rename = "Q3", default, skip_serializing_if = "Option::is_none")]
    pub q3: Option<String>,
}

impl ResultEntry {
    #[must_use]
    pub fn position_number(&self) -> Option<u32> {
        parse_position(&self.position)
    }

    #[must_use]
    pub fn points_value(&self) -> f64 {
        self.points.as_deref().map_or(0.0, parse_points)
    }

    #[must_use]
    pub fn grid_number(&self) -> Option<u32> {
        self.grid.as_deref().and_then(parse_position)
    }

    #[must_use]
    pub fn laps_count(&self) -> u32 {
        self.laps.as_deref().map_or(0, parse_count)
    }

    /// Classified at the flag: either "Finished" or lapped ("+1 Lap", "+3 Laps").
    #[must_use]
    pub fn is_classified_finish(&self) -> bool {
        match self.status.as_deref() {
            Some("Finished") => true,
            Some(status) => {
                let status = status.trim();
                status.starts_with('+') && status.contains("Lap")
            }
            None => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitStop {
    pub driver_id: String,
    pub lap: String,
    pub stop: String,
    pub time: String,
    pub duration: String,
}

impl PitStop {
    #[must_use]
    pub fn lap_number(&self) -> u32 {
        parse_count(&self.lap)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub season: String,
    pub round: String,
    #[serde(default)]
    pub url: String,
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "FirstPractice", default, skip_serializing_if = "Option::is_none")]
    pub first_practice: Option<Session>,
    #[serde(rename = "SecondPractice", default, skip_serializing_if = "Option::is_none")]
    pub second_practice: Option<Session>,
    #[serde(rename = "ThirdPractice", default, skip_serializing_if = "Option::is_none")]
    pub third_practice: Option<Session>,
    #[serde(rename = "Sprint", default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<Session>,
    #[serde(rename = "Qualifying", default, skip_serializing_if = "Option::is_none")]
    pub qualifying: Option<Session>,
    #[serde(rename = "Results", default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ResultEntry>>,
    #[serde(
        rename = "QualifyingResults",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub qualifying_results: Option<Vec<ResultEntry>>,
    #[serde(rename = "PitStops", default, skip_serializing_if = "Option::is_none")]
    pub pit_stops: Option<Vec<PitStop>>,
}

impl Race {
    #[must_use]
    pub fn round_number(&self) -> u32 {
        parse_count(&self.round)
    }

    #[must_use]
    pub fn results(&self) -> &[ResultEntry] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Lights-out instant in UTC. The provider omits `time` for older seasons;
    /// those races are taken to start at midnight UTC.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = self
            .time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t.trim_end_matches('Z'), "%H:%M:%S").ok())
            .unwrap_or(NaiveTime::MIN);
        Some(date.and_time(time).and_utc())
    }

    /// Moves the provider's qualifying list into `results` so qualifying order
    /// renders through the same table as race order.
    ///
    /// Returns `None` when the provider sent no qualifying list.
    #[must_use]
    pub fn into_qualifying_view(mut self) -> Option<Self> {
        let qualifying = self.qualifying_results.take()?;
        self.results = Some(qualifying);
        Some(self)
    }
}
