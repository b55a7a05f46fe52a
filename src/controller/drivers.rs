use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;
use chrono::{Datelike, Utc};
use maud::html;
use serde_json::json;

use super::ergast::ErgastClient;
use super::params::{
    bad_request, driver_param, get_param_str, html_response, json_flag, json_response,
    season_param,
};
use crate::model::DriverSeasonSummary;
use crate::view::drivers::{render_driver_season, render_roster};
use crate::view::layout::{render_page, season_picker};

pub async fn roster(
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let season = match season_param(&query) {
        Ok(season) => season,
        Err(e) => return bad_request(&e),
    };

    let table = client.drivers(&season).await;

    if json_flag(&query) {
        return json_response(&table);
    }

    let year_query = match get_param_str(&query, "year") {
        "" => String::new(),
        _ => format!("?year={season}"),
    };
    let body = html! {
        (season_picker("/drivers", &season, Utc::now().year()))
        (render_roster(table.as_ref(), &year_query))
    };
    html_response(render_page(&format!("Drivers {season}"), &body))
}

pub async fn driver_season(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    client: Data<ErgastClient>,
) -> impl Responder {
    let params = season_param(&query)
        .and_then(|season| Ok((season, driver_param(&path.into_inner())?)));
    let (season, driver_id) = match params {
        Ok(params) => params,
        Err(e) => return bad_request(&e),
    };

    let races = client.driver_results(&season, &driver_id).await;
    let summary = races
        .as_ref()
        .map(|table| DriverSeasonSummary::from_races(&driver_id, table));

    if json_flag(&query) {
        return json_response(&json!({
            "season": season,
            "races": races,
            "summary": summary,
        }));
    }

    let title = races
        .as_ref()
        .and_then(|t| t.races.iter().flat_map(|r| r.results()).find(|r| r.driver.driver_id == driver_id))
        .map_or_else(|| driver_id.clone(), |r| r.driver.full_name());
    let body = html! {
        (season_picker(&format!("/drivers/{driver_id}"), &season, Utc::now().year()))
        (render_driver_season(&driver_id, races.as_ref(), summary.as_ref()))
    };
    html_response(render_page(&format!("{title} {season}"), &body))
}
