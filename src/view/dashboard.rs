use chrono::{DateTime, Utc};
use maud::{Markup, html};

use crate::model::{RaceTable, StandingsList};
use crate::view::layout::no_data;
use crate::view::schedule::render_upcoming;
use crate::view::standings::{render_constructor_table, render_driver_table};

pub const TOP_N: usize = 5;

pub fn render_dashboard(
    schedule: Option<&RaceTable>,
    drivers: Option<&StandingsList>,
    constructors: Option<&StandingsList>,
    now: DateTime<Utc>,
) -> Markup {
    let top_drivers = drivers.map(StandingsList::drivers).unwrap_or_default();
    let top_constructors = constructors.map(StandingsList::constructors).unwrap_or_default();
    html! {
        div class="dashboard-grid" {
            div class="widget" { (render_upcoming(schedule, now)) }
            div class="widget" {
                h2 { a href="/standings" { "Driver Standings" } }
                @if top_drivers.is_empty() {
                    (no_data("driver standings"))
                } @else {
                    (render_driver_table(&top_drivers[..top_drivers.len().min(TOP_N)]))
                }
            }
            div class="widget" {
                h2 { a href="/standings" { "Constructor Standings" } }
                @if top_constructors.is_empty() {
                    (no_data("constructor standings"))
                } @else {
                    (render_constructor_table(&top_constructors[..top_constructors.len().min(TOP_N)]))
                }
            }
        }
    }
}
