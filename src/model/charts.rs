use serde::Serialize;

use super::standings::{ConstructorStanding, DriverStanding};

pub const FILLER_DRIVER: &str = "Driver 2";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DriverPointsRow {
    pub code: String,
    pub driver: String,
    pub points: f64,
    pub wins: u32,
    pub constructor: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DriverContribution {
    pub label: String,
    pub points: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConstructorContributionRow {
    pub constructor_id: String,
    pub constructor_name: String,
    pub drivers: Vec<DriverContribution>,
}

impl ConstructorContributionRow {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.drivers.iter().map(|d| d.points).sum()
    }
}

#[must_use]
pub fn driver_points(standings: &[DriverStanding]) -> Vec<DriverPointsRow> {
    standings
        .iter()
        .map(|s| DriverPointsRow {
            code: s.driver.short_label().to_string(),
            driver: s.driver.full_name(),
            points: s.points_value(),
            wins: s.wins_count(),
            constructor: s
                .current_constructor()
                .map_or_else(|| "N/A".to_string(), |c| c.name.clone()),
        })
        .collect()
}

/// Stacks each driver's points onto the team they ended the snapshot with.
///
/// Every constructor in `constructors` gets a row, even when none of its
/// drivers scored. A team with a single driver entry is padded with a
/// zero-point filler so every stack has two segments.
#[must_use]
pub fn constructor_contribution(
    drivers: &[DriverStanding],
    constructors: &[ConstructorStanding],
) -> Vec<ConstructorContributionRow> {
    let mut rows: Vec<ConstructorContributionRow> = constructors
        .iter()
        .map(|cs| ConstructorContributionRow {
            constructor_id: cs.constructor.constructor_id.clone(),
            constructor_name: shorten_team_name(&cs.constructor.name).to_string(),
            drivers: Vec::new(),
        })
        .collect();

    for standing in drivers {
        let Some(team) = standing.current_constructor() else {
            continue;
        };
        let Some(row) = rows
            .iter_mut()
            .find(|r| r.constructor_id == team.constructor_id)
        else {
            continue;
        };
        let label = standing.driver.short_label().to_string();
        if row.drivers.iter().all(|d| d.label != label) {
            row.drivers.push(DriverContribution {
                label,
                points: standing.points_value(),
            });
        }
    }

    for row in &mut rows {
        if row.drivers.len() == 1 {
            row.drivers.push(DriverContribution {
                label: FILLER_DRIVER.to_string(),
                points: 0.0,
            });
        }
    }

    rows.sort_by(|a, b| b.total().total_cmp(&a.total()));
    rows
}

#[must_use]
pub fn shorten_team_name(name: &str) -> &str {
    name.strip_suffix(" F1 Team").unwrap_or(name)
}

#[must_use]
pub fn team_color(constructor_id: &str) -> &'static str {
    match constructor_id {
        "ferrari" => "#DC0000",
        "mercedes" => "#00D2BE",
        "red_bull" => "#060024",
        "mclaren" => "#FF8700",
        "aston_martin" => "#006F62",
        "alpine" => "#0090FF",
        "rb" => "#0032FF",
        "sauber" => "#00E701",
        "williams" => "#005AFF",
        "haas" => "#B6B6B6",
        _ => "#FFFFFF",
    }
}

/// Bar width in percent of the largest value, for the CSS bars.
#[must_use]
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}
