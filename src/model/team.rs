use serde::Serialize;

use super::driver::Driver;
use super::standings::{ConstructorStanding, DriverStanding};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamProfile {
    pub principal: &'static str,
    pub base: &'static str,
    pub history: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub standing: ConstructorStanding,
    pub drivers: Vec<Driver>,
    pub profile: Option<TeamProfile>,
}

/// Pairs each constructor with every driver who raced for it in the snapshot,
/// keeping constructor standings order.
#[must_use]
pub fn assemble_teams(constructors: &[ConstructorStanding], drivers: &[DriverStanding]) -> Vec<Team> {
    constructors
        .iter()
        .map(|standing| {
            let id = &standing.constructor.constructor_id;
            Team {
                standing: standing.clone(),
                drivers: drivers
                    .iter()
                    .filter(|ds| ds.drove_for(id))
                    .map(|ds| ds.driver.clone())
                    .collect(),
                profile: team_profile(id),
            }
        })
        .collect()
}

#[must_use]
pub fn team_profile(constructor_id: &str) -> Option<TeamProfile> {
    let (principal, base, history) = match constructor_id {
        "ferrari" => (
            "Frédéric Vasseur",
            "Maranello, Italy",
            "Scuderia Ferrari is the oldest surviving and most successful Formula One team, having competed in every world championship since the 1950 season.",
        ),
        "mclaren" => (
            "Andrea Stella",
            "Woking, United Kingdom",
            "Founded by New Zealander Bruce McLaren in 1963, McLaren is one of the most successful teams in F1 history, second only to Ferrari.",
        ),
        "mercedes" => (
            "Toto Wolff",
            "Brackley, United Kingdom",
            "The modern Mercedes works team won eight consecutive constructors' championships from 2014 to 2021.",
        ),
        "red_bull" => (
            "Christian Horner",
            "Milton Keynes, United Kingdom",
            "Owned by Red Bull GmbH, the team has been a dominant force in F1, known for its strong aerodynamics and engineering.",
        ),
        "williams" => (
            "James Vowles",
            "Grove, United Kingdom",
            "Founded by Sir Frank Williams and Sir Patrick Head, Williams is one of the most iconic teams in the sport.",
        ),
        "aston_martin" => (
            "Mike Krack",
            "Silverstone, United Kingdom",
            "The Aston Martin name returned to F1 in 2021, taking over the former Racing Point team.",
        ),
        "alpine" => (
            "Bruno Famin",
            "Enstone, United Kingdom",
            "Owned by Renault and racing under the Alpine brand, with roots in the Toleman and Benetton teams.",
        ),
        "haas" => (
            "Ayao Komatsu",
            "Kannapolis, United States",
            "The only American-owned team on the grid, Haas F1 Team made its debut in 2016.",
        ),
        "rb" => (
            "Laurent Mekies",
            "Faenza, Italy",
            "Formerly Scuderia Toro Rosso and AlphaTauri, the junior team to Red Bull Racing.",
        ),
        "sauber" => (
            "Alessandro Alunni Bravi",
            "Hinwil, Switzerland",
            "Founded by Peter Sauber, often partnered with manufacturers such as BMW and Alfa Romeo.",
        ),
        _ => return None,
    };
    Some(TeamProfile {
        principal,
        base,
        history,
    })
}
