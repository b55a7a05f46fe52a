use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;
use chrono::Utc;
use serde_json::json;

use super::ergast::ErgastClient;
use super::params::{bad_request, html_response, json_flag, json_response, season_param};
use crate::view::dashboard::render_dashboard;
use crate::view::layout::render_page;

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let season = match season_param(&query) {
        Ok(season) => season,
        Err(e) => return bad_request(&e),
    };

    let (schedule, drivers, constructors) = futures::join!(
        client.race_schedule(&season),
        client.driver_standings(&season),
        client.constructor_standings(&season)
    );

    if json_flag(&query) {
        return json_response(&json!({
            "season": season,
            "schedule": schedule,
            "drivers": drivers,
            "constructors": constructors,
        }));
    }

    let body = render_dashboard(
        schedule.as_ref(),
        drivers.as_ref(),
        constructors.as_ref(),
        Utc::now(),
    );
    html_response(render_page("Dashboard", &body))
}
