use serde::{Deserialize, Serialize};

use super::driver::{Constructor, Driver};
use super::numeric::{parse_count, parse_points, parse_position};

/// One standings snapshot. The provider fills exactly one of the two lists,
/// depending on which endpoint was asked.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StandingsList {
    pub season: String,
    pub round: String,
    #[serde(
        rename = "DriverStandings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub driver_standings: Option<Vec<DriverStanding>>,
    #[serde(
        rename = "ConstructorStandings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub constructor_standings: Option<Vec<ConstructorStanding>>,
}

impl StandingsList {
    #[must_use]
    pub fn drivers(&self) -> &[DriverStanding] {
        self.driver_standings.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn constructors(&self) -> &[ConstructorStanding] {
        self.constructor_standings.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub position: String,
    #[serde(default)]
    pub position_text: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

impl DriverStanding {
    #[must_use]
    pub fn position_number(&self) -> Option<u32> {
        parse_position(&self.position)
    }

    #[must_use]
    pub fn points_value(&self) -> f64 {
        parse_points(&self.points)
    }

    #[must_use]
    pub fn wins_count(&self) -> u32 {
        parse_count(&self.wins)
    }

    /// The team the driver finished the snapshot with, if any.
    #[must_use]
    pub fn current_constructor(&self) -> Option<&Constructor> {
        self.constructors.first()
    }

    #[must_use]
    pub fn drove_for(&self, constructor_id: &str) -> bool {
        self.constructors
            .iter()
            .any(|c| c.constructor_id == constructor_id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub position: String,
    #[serde(default)]
    pub position_text: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

impl ConstructorStanding {
    #[must_use]
    pub fn position_number(&self) -> Option<u32> {
        parse_position(&self.position)
    }

    #[must_use]
    pub fn points_value(&self) -> f64 {
        parse_points(&self.points)
    }

    #[must_use]
    pub fn wins_count(&self) -> u32 {
        parse_count(&self.wins)
    }
}
