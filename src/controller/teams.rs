use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;
use chrono::{Datelike, Utc};
use maud::html;

use super::ergast::ErgastClient;
use super::params::{bad_request, html_response, json_flag, json_response, season_param};
use crate::model::{StandingsList, assemble_teams};
use crate::view::layout::{render_page, season_picker};
use crate::view::teams::render_teams;

pub async fn teams(
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let season = match season_param(&query) {
        Ok(season) => season,
        Err(e) => return bad_request(&e),
    };

    let (constructors, drivers) = futures::join!(
        client.constructor_standings(&season),
        client.driver_standings(&season)
    );

    let teams = assemble_teams(
        constructors.as_ref().map(StandingsList::constructors).unwrap_or_default(),
        drivers.as_ref().map(StandingsList::drivers).unwrap_or_default(),
    );

    if json_flag(&query) {
        return json_response(&teams);
    }

    let body = html! {
        (season_picker("/teams", &season, Utc::now().year()))
        (render_teams(&teams))
    };
    html_response(render_page(&format!("F1 Teams {season}"), &body))
}
