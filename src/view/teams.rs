use maud::{Markup, html};

use crate::model::{Team, team_color};
use crate::view::layout::no_data;

fn render_team_card(team: &Team) -> Markup {
    let c = &team.standing.constructor;
    html! {
        div class="team-card" style=(format!("border-top-color: {};", team_color(&c.constructor_id))) {
            span class="position" { "P" (team.standing.position_text) }
            h3 { (c.name) }
            p class="points" { (team.standing.points) " pts, " (team.standing.wins) " wins" }
            @if let Some(profile) = &team.profile {
                dl {
                    dt { "Team principal" } dd { (profile.principal) }
                    dt { "Base" } dd { (profile.base) }
                }
                p class="history" { (profile.history) }
            }
            h4 { "Drivers" }
            @if team.drivers.is_empty() {
                p class="no-data" { "No drivers listed." }
            } @else {
                ul {
                    @for d in &team.drivers {
                        li {
                            a href=(format!("/drivers/{}", d.driver_id)) { (d.full_name()) }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_teams(teams: &[Team]) -> Markup {
    html! {
        @if teams.is_empty() {
            (no_data("teams for this season"))
        } @else {
            div class="team-grid" {
                @for team in teams {
                    (render_team_card(team))
                }
            }
        }
    }
}
