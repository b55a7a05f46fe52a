use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;
use chrono::{Datelike, Utc};
use maud::html;

use super::ergast::ErgastClient;
use super::params::{bad_request, html_response, json_flag, json_response, season_param};
use crate::view::layout::{render_page, season_picker};
use crate::view::schedule::render_schedule;

pub async fn calendar(
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let season = match season_param(&query) {
        Ok(season) => season,
        Err(e) => return bad_request(&e),
    };

    let schedule = client.race_schedule(&season).await;

    if json_flag(&query) {
        return json_response(&schedule);
    }

    let now = Utc::now();
    let body = html! {
        (season_picker("/calendar", &season, now.year()))
        (render_schedule(schedule.as_ref(), now))
    };
    html_response(render_page(&format!("Race Calendar {season}"), &body))
}
