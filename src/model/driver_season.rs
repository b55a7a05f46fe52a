use serde::Serialize;

use super::race::{RaceTable, ResultEntry};

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct DriverSeasonSummary {
    pub driver_id: String,
    pub races: u32,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
    pub dnfs: u32,
    pub best_finish: Option<u32>,
    pub average_finish: Option<f64>,
}

impl DriverSeasonSummary {
    /// Folds the driver's own classification from each race. Races where the
    /// provider lists no entry for the driver are skipped.
    #[must_use]
    pub fn from_races(driver_id: &str, table: &RaceTable) -> Self {
        let entries: Vec<&ResultEntry> = table
            .races
            .iter()
            .filter_map(|race| {
                race.results()
                    .iter()
                    .find(|r| r.driver.driver_id == driver_id)
            })
            .collect();

        let finishes: Vec<u32> = entries
            .iter()
            .filter_map(|r| r.position_number())
            .collect();

        let average_finish = if finishes.is_empty() {
            None
        } else {
            Some(f64::from(finishes.iter().sum::<u32>()) / finishes.len() as f64)
        };

        Self {
            driver_id: driver_id.to_string(),
            races: entries.len() as u32,
            points: entries.iter().map(|r| r.points_value()).sum(),
            wins: finishes.iter().filter(|p| **p == 1).count() as u32,
            podiums: finishes.iter().filter(|p| **p <= 3).count() as u32,
            dnfs: entries.iter().filter(|r| !r.is_classified_finish()).count() as u32,
            best_finish: finishes.iter().min().copied(),
            average_finish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> RaceTable {
        let race = |round: &str, position: &str, points: &str, status: &str| {
            json!({
                "season": "2023", "round": round, "raceName": format!("Race {round}"), "date": "2023-03-05",
                "Circuit": {"circuitId": "c", "circuitName": "C", "Location": {}},
                "Results": [{
                    "number": "44", "position": position, "points": points, "grid": "3", "laps": "57", "status": status,
                    "Driver": {"driverId": "hamilton", "givenName": "Lewis", "familyName": "Hamilton"},
                    "Constructor": {"constructorId": "mercedes", "name": "Mercedes"}
                }]
            })
        };
        serde_json::from_value(json!({
            "season": "2023",
            "Races": [
                race("1", "1", "25", "Finished"),
                race("2", "3", "15", "+1 Lap"),
                race("3", "18", "0", "Collision"),
            ]
        }))
        .unwrap()
    }

    #[test]
    fn aggregates_own_results() {
        let summary = DriverSeasonSummary::from_races("hamilton", &table());
        assert_eq!(summary.races, 3);
        assert!((summary.points - 40.0).abs() < f64::EPSILON);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.podiums, 2);
        assert_eq!(summary.dnfs, 1);
        assert_eq!(summary.best_finish, Some(1));
        assert!((summary.average_finish.unwrap() - 22.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn other_drivers_yield_empty_summary() {
        let summary = DriverSeasonSummary::from_races("alonso", &table());
        assert_eq!(summary.races, 0);
        assert_eq!(summary.average_finish, None);
        assert_eq!(summary.best_finish, None);
    }
}
