use maud::{DOCTYPE, Markup, html};

use crate::model::Season;

const NAV: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/standings", "Standings"),
    ("/calendar", "Calendar"),
    ("/drivers", "Drivers"),
    ("/teams", "Teams"),
    ("/charts", "Charts"),
];

pub fn render_page(title: &str, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href="/static/styles.css";
                title { (title) " | Pitwall" }
                script src="/static/countdown.js" defer {}
            }
            body {
                nav class="top-nav" {
                    span class="brand" { "Pitwall" }
                    @for (href, label) in NAV {
                        a href=(href) { (label) }
                    }
                }
                main {
                    h1 { (title) }
                    (body)
                }
            }
        }
    }
}

/// The one empty state every page falls back to.
pub fn no_data(what: &str) -> Markup {
    html! {
        p class="no-data" { "No data available: " (what) "." }
    }
}

/// Year picker that reloads the current page with `?year=`.
pub fn season_picker(action: &str, season: &Season, latest_year: i32) -> Markup {
    let selected = season.to_string();
    html! {
        form class="season-picker" method="get" action=(action) {
            label for="year" { "Season" }
            select id="year" name="year" onchange="this.form.submit()" {
                option value="current" selected[selected == "current"] { "Current" }
                @for year in (1950..=latest_year).rev() {
                    @let value = year.to_string();
                    option value=(value) selected[selected == value] { (value) }
                }
            }
            noscript { button type="submit" { "Go" } }
        }
    }
}
