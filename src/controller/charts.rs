use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::Responder;
use chrono::{Datelike, Utc};
use maud::html;
use serde_json::json;

use super::ergast::ErgastClient;
use super::params::{bad_request, html_response, json_flag, json_response, season_param};
use crate::model::{StandingsList, constructor_contribution, driver_points};
use crate::view::charts::{render_constructor_contribution, render_driver_points};
use crate::view::layout::{render_page, season_picker};

pub async fn charts(
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
    let driver_rows = drivers.as_ref().map(StandingsList::drivers).unwrap_or_default();
    let constructor_rows = constructors
        .as_ref()
        .map(StandingsList::constructors)
        .unwrap_or_default();

    let points = driver_points(driver_rows);
    let contribution = constructor_contribution(driver_rows, constructor_rows);

    if json_flag(&query) {
        return json_response(&json!({
            "season": season,
            "driver_points": points,
            "constructor_contribution": contribution,
        }));
    }

    let body = html! {
        (season_picker("/charts", &season, Utc::now().year()))
        div class="chart-grid" {
            section { (render_driver_points(&points)) }
            section { (render_constructor_contribution(&contribution)) }
        }
    };
    html_response(render_page(&format!("Championship Analysis {season}"), &body))
}
