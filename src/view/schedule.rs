use chrono::{DateTime, SecondsFormat, Utc};
use maud::{Markup, html};

use crate::model::{Countdown, Race, RaceTable, next_race};
use crate::view::layout::no_data;

/// Live countdown: the server renders the starting value, `countdown.js`
/// ticks it from `data-start`.
pub fn render_countdown(start: DateTime<Utc>, now: DateTime<Utc>) -> Markup {
    html! {
        span class="countdown" data-start=(start.to_rfc3339_opts(SecondsFormat::Secs, true)) {
            (Countdown::until(start, now).to_string())
        }
    }
}

pub fn render_upcoming(schedule: Option<&RaceTable>, now: DateTime<Utc>) -> Markup {
    let upcoming = schedule.and_then(|s| next_race(s, now));
    html! {
        section class="upcoming-race" {
            h2 { "Upcoming Race" }
            @match upcoming.and_then(|race| race.starts_at().map(|start| (race, start))) {
                Some((race, start)) => {
                    p class="race-name" { (race.race_name) }
                    p class="circuit" { (race.circuit.circuit_name) }
                    p class="when" { (start.format("%A %-d %B, %H:%M UTC").to_string()) }
                    (render_countdown(start, now))
                }
                None => { p class="no-data" { "No upcoming races found for this season." } }
            }
        }
    }
}

fn render_race_card(race: &Race, is_next: bool, now: DateTime<Utc>) -> Markup {
    html! {
        div class=(if is_next { "race-card next" } else { "race-card" }) {
            span class="round" { "Round " (race.round) }
            h3 {
                a href=(format!("/race/{}/{}", race.season, race.round)) { (race.race_name) }
            }
            p { (race.circuit.circuit_name) }
            p class="location" {
                (race.circuit.location.locality) ", " (race.circuit.location.country)
            }
            p class="date" {
                (race.date)
                @if let Some(time) = &race.time {
                    " " (time)
                }
            }
            @if is_next {
                @if let Some(start) = race.starts_at() {
                    (render_countdown(start, now))
                }
            }
        }
    }
}

pub fn render_schedule(schedule: Option<&RaceTable>, now: DateTime<Utc>) -> Markup {
    let next_round = schedule
        .and_then(|s| next_race(s, now))
        .map(|race| race.round.clone());
    html! {
        @match schedule.filter(|s| !s.races.is_empty()) {
            Some(table) => {
                div class="race-grid" {
                    @for race in &table.races {
                        (render_race_card(race, next_round.as_deref() == Some(race.round.as_str()), now))
                    }
                }
            }
            None => { (no_data("race calendar")) }
        }
    }
}
