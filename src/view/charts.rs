use maud::{Markup, html};

use crate::model::{
    ConstructorContributionRow, DriverPointsRow, FILLER_DRIVER, bar_width, format_points,
    team_color,
};
use crate::view::layout::no_data;

pub fn render_driver_points(rows: &[DriverPointsRow]) -> Markup {
    let max = rows.iter().map(|r| r.points).fold(0.0_f64, f64::max);
    html! {
        h2 { "Driver Points" }
        @if rows.is_empty() {
            (no_data("driver points chart"))
        } @else {
            div class="bar-chart" {
                @for row in rows {
                    div class="bar-row" title=(format!("{} ({})", row.driver, row.constructor)) {
                        span class="bar-label" { (row.code) }
                        div class="bar-track" {
                            div class="bar points" style=(format!("width: {:.2}%;", bar_width(row.points, max))) {
                                (format_points(row.points))
                            }
                        }
                        span class="bar-wins" { (row.wins) " W" }
                    }
                }
            }
        }
    }
}

pub fn render_constructor_contribution(rows: &[ConstructorContributionRow]) -> Markup {
    let max = rows
        .iter()
        .map(ConstructorContributionRow::total)
        .fold(0.0_f64, f64::max);
    html! {
        h2 { "Constructor Contribution" }
        @if rows.is_empty() {
            (no_data("constructor contribution chart"))
        } @else {
            div class="bar-chart stacked" {
                @for row in rows {
                    @let color = team_color(&row.constructor_id);
                    div class="bar-row" {
                        span class="bar-label" { (row.constructor_name) }
                        div class="bar-track" {
                            @for (idx, d) in row.drivers.iter().enumerate() {
                                @let shade = if idx == 0 { "primary" } else { "secondary" };
                                div class=(format!("bar segment {shade}"))
                                    style=(format!("width: {:.2}%; background-color: {color};", bar_width(d.points, max)))
                                    title=(format!("{}: {}", d.label, format_points(d.points))) {
                                    @if d.label != FILLER_DRIVER && d.points > 0.0 { (d.label) }
                                }
                            }
                        }
                        span class="bar-total" { (format_points(row.total())) }
                    }
                }
            }
        }
    }
}
