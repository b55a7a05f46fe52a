use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;

use super::ergast::ErgastClient;
use super::params::{bad_request, driver_param, html_response, json_flag, json_response, round_param};
use crate::error::AppError;
use crate::model::Season;
use crate::view::layout::render_page;
use crate::view::race::{render_pit_stops, render_qualifying, render_race_results};

fn race_params(year: &str, round: &str) -> Result<(Season, String), AppError> {
    Ok((Season::parse(year)?, round_param(round)?))
}

pub async fn race_results(
    path: web::Path<(String, String)>,
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let (year, round) = path.into_inner();
    let (season, round) = match race_params(&year, &round) {
        Ok(params) => params,
        Err(e) => return bad_request(&e),
    };

    let race = client.race_results(&season, &round).await;

    if json_flag(&query) {
        return json_response(&race);
    }

    let title = race
        .as_ref()
        .map_or_else(|| "Race Results".to_string(), |r| r.race_name.clone());
    html_response(render_page(&title, &render_race_results(race.as_ref())))
}

pub async fn qualifying(
    path: web::Path<(String, String)>,
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let (year, round) = path.into_inner();
    let (season, round) = match race_params(&year, &round) {
        Ok(params) => params,
        Err(e) => return bad_request(&e),
    };

    let race = client.qualifying_results(&season, &round).await;

    if json_flag(&query) {
        return json_response(&race);
    }

    let title = race.as_ref().map_or_else(
        || "Qualifying".to_string(),
        |r| format!("{} Qualifying", r.race_name),
    );
    html_response(render_page(&title, &render_qualifying(race.as_ref())))
}

pub async fn pit_stops(
    path: web::Path<(String, String, String)>,
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let (year, round, driver) = path.into_inner();
    let params = race_params(&year, &round)
        .and_then(|(season, round)| Ok((season, round, driver_param(&driver)?)));
    let (season, round, driver_id) = match params {
        Ok(params) => params,
        Err(e) => return bad_request(&e),
    };

    let stops = client.pit_stops(&season, &round, &driver_id).await;

    if json_flag(&query) {
        return json_response(&stops);
    }

    let title = format!("Pit Stops: {driver_id}, {season} round {round}");
    html_response(render_page(&title, &render_pit_stops(&driver_id, stops.as_deref())))
}
