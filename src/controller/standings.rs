use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;
use chrono::{Datelike, Utc};
use maud::html;
use serde_json::json;

use super::ergast::ErgastClient;
use super::params::{bad_request, html_response, json_flag, json_response, season_param};
use crate::view::layout::{render_page, season_picker};
use crate::view::standings::render_standings;

pub async fn standings(
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let season = match season_param(&query) {
        Ok(season) => season,
        Err(e) => return bad_request(&e),
    };

    let (drivers, constructors) = futures::join!(
        client.driver_standings(&season),
        client.constructor_standings(&season)
    );

    if json_flag(&query) {
        return json_response(&json!({
            "season": season,
            "drivers": drivers,
            "constructors": constructors,
        }));
    }

    let body = html! {
        (season_picker("/standings", &season, Utc::now().year()))
        (render_standings(drivers.as_ref(), constructors.as_ref()))
    };
    html_response(render_page(&format!("F1 Standings {season}"), &body))
}
