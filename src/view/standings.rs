use maud::{Markup, html};

use crate::model::{ConstructorStanding, DriverStanding, StandingsList};
use crate::view::layout::no_data;

pub fn render_driver_table(rows: &[DriverStanding]) -> Markup {
    html! {
        table class="styled-table" {
            thead {
                tr {
                    th { "Pos" }
                    th { "Driver" }
                    th { "Constructor" }
                    th { "Wins" }
                    th { "Points" }
                }
            }
            tbody {
                @for s in rows {
                    tr {
                        td { (s.position_text) }
                        td {
                            a href=(format!("/drivers/{}", s.driver.driver_id)) { (s.driver.full_name()) }
                        }
                        td {
                            @match s.current_constructor() {
                                Some(c) => { (c.name) }
                                None => { "N/A" }
                            }
                        }
                        td { (s.wins) }
                        td { (s.points) }
                    }
                }
            }
        }
    }
}

pub fn render_constructor_table(rows: &[ConstructorStanding]) -> Markup {
    html! {
        table class="styled-table" {
            thead {
                tr {
                    th { "Pos" }
                    th { "Constructor" }
                    th { "Nationality" }
                    th { "Wins" }
                    th { "Points" }
                }
            }
            tbody {
                @for s in rows {
                    tr {
                        td { (s.position_text) }
                        td { (s.constructor.name) }
                        td { (s.constructor.nationality) }
                        td { (s.wins) }
                        td { (s.points) }
                    }
                }
            }
        }
    }
}

pub fn render_standings(
    drivers: Option<&StandingsList>,
    constructors: Option<&StandingsList>,
) -> Markup {
    html! {
        section id="driver-standings" {
            h2 { "Drivers" }
            @match drivers.map(StandingsList::drivers).filter(|d| !d.is_empty()) {
                Some(rows) => {
                    p class="caption" { "After round " (drivers.map_or("?", |d| d.round.as_str())) }
                    (render_driver_table(rows))
                }
                None => { (no_data("driver standings")) }
            }
        }
        section id="constructor-standings" {
            h2 { "Constructors" }
            @match constructors.map(StandingsList::constructors).filter(|c| !c.is_empty()) {
                Some(rows) => { (render_constructor_table(rows)) }
                None => { (no_data("constructor standings")) }
            }
        }
    }
}
