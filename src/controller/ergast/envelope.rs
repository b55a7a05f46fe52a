//! Every provider response is wrapped as `{"MRData": {...}}` with the payload
//! two or three keys further down. Each accessor names its path once and
//! [`extract`] walks it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key(&'static str),
    Index(usize),
}

pub const STANDINGS_LIST: &[Step] = &[
    Step::Key("MRData"),
    Step::Key("StandingsTable"),
    Step::Key("StandingsLists"),
    Step::Index(0),
];

pub const RACE_TABLE: &[Step] = &[Step::Key("MRData"), Step::Key("RaceTable")];

pub const FIRST_RACE: &[Step] = &[
    Step::Key("MRData"),
    Step::Key("RaceTable"),
    Step::Key("Races"),
    Step::Index(0),
];

/// Relative to an already unwrapped `RACE_TABLE`.
pub const PIT_STOPS_IN_TABLE: &[Step] = &[Step::Key("Races"), Step::Index(0), Step::Key("PitStops")];

pub const DRIVER_TABLE: &[Step] = &[Step::Key("MRData"), Step::Key("DriverTable")];

#[must_use]
pub fn describe(path: &[Step]) -> String {
    let mut out = String::new();
    for step in path {
        match step {
            Step::Key(k) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(k);
            }
            Step::Index(i) => out.push_str(&format!("[{i}]")),
        }
    }
    out
}

/// Walks `path` into `value` and decodes the subtree found there.
///
/// # Errors
///
/// Will return `Err` if a step is missing (`MissingField`), or the subtree
/// does not decode as `T` (`Parse`)
pub fn extract<T: DeserializeOwned>(mut value: Value, path: &[Step]) -> Result<T, FetchError> {
    for (depth, step) in path.iter().enumerate() {
        let next = match step {
            Step::Key(k) => value.get_mut(*k),
            Step::Index(i) => value.get_mut(*i),
        }
        .filter(|v| !v.is_null())
        .map(Value::take);
        value = match next {
            Some(v) => v,
            None => return Err(FetchError::MissingField(describe(&path[..=depth]))),
        };
    }
    Ok(serde_json::from_value(value)?)
}
