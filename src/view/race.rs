use maud::{Markup, html};

use crate::model::{PitStop, Race, ResultEntry};
use crate::view::layout::no_data;

fn dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

fn render_race_header(race: &Race) -> Markup {
    html! {
        p class="caption" {
            (race.season) " round " (race.round) ", " (race.circuit.circuit_name) ", " (race.date)
        }
        nav class="race-tabs" {
            a href=(format!("/race/{}/{}", race.season, race.round)) { "Race" }
            a href=(format!("/race/{}/{}/qualifying", race.season, race.round)) { "Qualifying" }
        }
    }
}

fn render_result_row(race: &Race, r: &ResultEntry) -> Markup {
    html! {
        tr {
            td { (dash(r.position_text.as_deref().or(Some(r.position.as_str())))) }
            td {
                a href=(format!("/race/{}/{}/pitstops/{}", race.season, race.round, r.driver.driver_id)) {
                    (r.driver.full_name())
                }
            }
            td { (r.constructor.name) }
            td { (dash(r.grid.as_deref())) }
            td { (dash(r.laps.as_deref())) }
            td {
                @match (&r.time, r.status.as_deref()) {
                    (Some(time), _) => { (time.time) }
                    (None, status) => { (dash(status)) }
                }
            }
            td { (dash(r.points.as_deref())) }
            td {
                @if let Some(lap) = &r.fastest_lap {
                    @if lap.rank.as_deref() == Some("1") { span class="fastest" { "● " } }
                    (lap.time.as_ref().map_or("-", |t| t.time.as_str()))
                } @else {
                    "-"
                }
            }
        }
    }
}

pub fn render_race_results(race: Option<&Race>) -> Markup {
    html! {
        @match race.filter(|r| !r.results().is_empty()) {
            Some(race) => {
                (render_race_header(race))
                table class="styled-table results" {
                    thead {
                        tr {
                            th { "Pos" }
                            th { "Driver" }
                            th { "Constructor" }
                            th { "Grid" }
                            th { "Laps" }
                            th { "Time/Status" }
                            th { "Points" }
                            th { "Fastest Lap" }
                        }
                    }
                    tbody {
                        @for r in race.results() {
                            (render_result_row(race, r))
                        }
                    }
                }
            }
            None => { (no_data("race results")) }
        }
    }
}

/// Qualifying order arrives in `results`; this table never shows race
/// finishing data.
pub fn render_qualifying(race: Option<&Race>) -> Markup {
    html! {
        @match race.filter(|r| !r.results().is_empty()) {
            Some(race) => {
                (render_race_header(race))
                table class="styled-table qualifying" {
                    thead {
                        tr {
                            th { "Pos" }
                            th { "Driver" }
                            th { "Constructor" }
                            th { "Q1" }
                            th { "Q2" }
                            th { "Q3" }
                        }
                    }
                    tbody {
                        @for r in race.results() {
                            tr {
                                td { (r.position) }
                                td { (r.driver.full_name()) }
                                td { (r.constructor.name) }
                                td { (dash(r.q1.as_deref())) }
                                td { (dash(r.q2.as_deref())) }
                                td { (dash(r.q3.as_deref())) }
                            }
                        }
                    }
                }
            }
            None => { (no_data("qualifying results")) }
        }
    }
}

pub fn render_pit_stops(driver_id: &str, stops: Option<&[PitStop]>) -> Markup {
    html! {
        @match stops {
            Some(stops) => {
                table class="styled-table pit-stops" {
                    thead {
                        tr {
                            th { "Stop" }
                            th { "Lap" }
                            th { "Time of day" }
                            th { "Duration" }
                        }
                    }
                    tbody {
                        @for stop in stops {
                            tr {
                                td { (stop.stop) }
                                td { (stop.lap) }
                                td { (stop.time) }
                                td { (stop.duration) }
                            }
                        }
                    }
                }
            }
            None => { p class="no-data" { "No pit stops recorded for " (driver_id) "." } }
        }
    }
}
