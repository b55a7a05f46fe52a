use maud::{Markup, html};

use crate::model::{DriverSeasonSummary, DriverTable, RaceTable, format_points};
use crate::view::layout::no_data;

pub fn render_roster(table: Option<&DriverTable>, year_query: &str) -> Markup {
    html! {
        @match table.filter(|t| !t.drivers.is_empty()) {
            Some(table) => {
                table class="styled-table roster" {
                    thead {
                        tr {
                            th { "No." }
                            th { "Code" }
                            th { "Driver" }
                            th { "Nationality" }
                            th { "Born" }
                        }
                    }
                    tbody {
                        @for d in &table.drivers {
                            tr {
                                td { (d.permanent_number.as_deref().unwrap_or("-")) }
                                td { (d.code.as_deref().unwrap_or("-")) }
                                td {
                                    a href=(format!("/drivers/{}{}", d.driver_id, year_query)) { (d.full_name()) }
                                }
                                td { (d.nationality) }
                                td { (d.date_of_birth.as_deref().unwrap_or("-")) }
                            }
                        }
                    }
                }
            }
            None => { (no_data("driver roster")) }
        }
    }
}

fn render_summary(summary: &DriverSeasonSummary) -> Markup {
    html! {
        dl class="season-summary" {
            dt { "Races" } dd { (summary.races) }
            dt { "Points" } dd { (format_points(summary.points)) }
            dt { "Wins" } dd { (summary.wins) }
            dt { "Podiums" } dd { (summary.podiums) }
            dt { "DNFs" } dd { (summary.dnfs) }
            dt { "Best finish" }
            dd { (summary.best_finish.map_or_else(|| "-".to_string(), |p| p.to_string())) }
            dt { "Average finish" }
            dd { (summary.average_finish.map_or_else(|| "-".to_string(), |a| format!("{a:.1}"))) }
        }
    }
}

pub fn render_driver_season(
    driver_id: &str,
    races: Option<&RaceTable>,
    summary: Option<&DriverSeasonSummary>,
) -> Markup {
    html! {
        @match (races.filter(|t| !t.races.is_empty()), summary) {
            (Some(table), Some(summary)) => {
                (render_summary(summary))
                table class="styled-table driver-season" {
                    thead {
                        tr {
                            th { "Round" }
                            th { "Race" }
                            th { "Constructor" }
                            th { "Grid" }
                            th { "Finish" }
                            th { "Status" }
                            th { "Points" }
                        }
                    }
                    tbody {
                        @for race in &table.races {
                            @if let Some(r) = race.results().iter().find(|r| r.driver.driver_id == driver_id) {
                                tr {
                                    td { (race.round) }
                                    td {
                                        a href=(format!("/race/{}/{}", race.season, race.round)) { (race.race_name) }
                                    }
                                    td { (r.constructor.name) }
                                    td { (r.grid.as_deref().unwrap_or("-")) }
                                    td { (r.position_text.as_deref().unwrap_or(&r.position)) }
                                    td { (r.status.as_deref().unwrap_or("-")) }
                                    td { (r.points.as_deref().unwrap_or("0")) }
                                }
                            }
                        }
                    }
                }
            }
            _ => { (no_data(&format!("results for {driver_id}"))) }
        }
    }
}
