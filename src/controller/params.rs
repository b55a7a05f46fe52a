use std::collections::HashMap;
use std::sync::LazyLock;

use actix_web::HttpResponse;
use maud::Markup;
use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::model::{Season, prompt_json};

static ROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d{0,2}$").expect("Hardcoded round pattern should always compile"));

static DRIVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_\-]{0,63}$").expect("Hardcoded driver pattern should always compile")
});

pub fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(|s| s.trim()).unwrap_or("")
}

/// `year` query parameter; absent or empty means the current season.
///
/// # Errors
///
/// Will return `Err` if the parameter is present but not a season
pub fn season_param(query: &HashMap<String, String>) -> Result<Season, AppError> {
    match get_param_str(query, "year") {
        "" => Ok(Season::default()),
        raw => Season::parse(raw),
    }
}

/// `json=1` switches a page to its raw entities.
pub fn json_flag(query: &HashMap<String, String>) -> bool {
    match get_param_str(query, "json") {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false),
    }
}

/// # Errors
///
/// Will return `Err` if `raw` is not a round number
pub fn round_param(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if ROUND_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(AppError::InvalidRound(raw.to_string()))
    }
}

/// # Errors
///
/// Will return `Err` if `raw` does not look like a provider driver slug
pub fn driver_param(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if DRIVER_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(AppError::InvalidDriver(raw.to_string()))
    }
}

pub fn bad_request(err: &AppError) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": err.to_string()}))
}

pub fn html_response(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

/// Entities go out through the same compact rendering used for prompts.
pub fn json_response<T: Serialize>(value: &T) -> HttpResponse {
    match prompt_json(value) {
        Some(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        None => HttpResponse::InternalServerError().json(json!({"error": "serialization failed"})),
    }
}
