use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::envelope::{self, Step};
use crate::error::{AppError, FetchError};
use crate::model::{DriverTable, PitStop, Race, RaceTable, Season, StandingsList};

/// Jolpica's Ergast-compatible mirror.
pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// The provider pages at 30 rows by default, which cuts off a full grid and
/// the larger historic rosters.
pub const RESULTS_PAGE_LIMIT: &str = "100";

/// Read-only accessors over the provider's REST endpoints.
///
/// Every accessor is a single best-effort GET. Whatever goes wrong (transport,
/// status, body, envelope) is logged and comes back as `None`.
#[derive(Debug, Clone)]
pub struct ErgastClient {
    client: Client,
    base_url: Url,
}

impl ErgastClient {
    /// # Errors
    ///
    /// Will return `Err` if `base_url` cannot have path segments appended
    pub fn new(base_url: Url) -> Result<Self, AppError> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "stats api base url '{base_url}' cannot be a base"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if `base_url` does not parse or cannot be a base
    pub fn from_base_url(base_url: &str) -> Result<Self, AppError> {
        let url = Url::parse(base_url).map_err(|e| AppError::Config(e.to_string()))?;
        Self::new(url)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn driver_standings(&self, season: &Season) -> Option<StandingsList> {
        let url = self.endpoint(&[season.as_segment().as_str(), "driverStandings.json"], true);
        let result = self.fetch(url.clone(), envelope::STANDINGS_LIST).await;
        absent_on_error("driver standings", &url, result)
    }

    pub async fn constructor_standings(&self, season: &Season) -> Option<StandingsList> {
        let url = self.endpoint(&[season.as_segment().as_str(), "constructorStandings.json"], true);
        let result = self.fetch(url.clone(), envelope::STANDINGS_LIST).await;
        absent_on_error("constructor standings", &url, result)
    }

    pub async fn race_schedule(&self, season: &Season) -> Option<RaceTable> {
        let url = self.endpoint(&[format!("{season}.json").as_str()], false);
        let result = self.fetch(url.clone(), envelope::RACE_TABLE).await;
        absent_on_error("race schedule", &url, result)
    }

    pub async fn drivers(&self, season: &Season) -> Option<DriverTable> {
        let url = self.endpoint(&[season.as_segment().as_str(), "drivers.json"], true);
        let result = self.fetch(url.clone(), envelope::DRIVER_TABLE).await;
        absent_on_error("drivers", &url, result)
    }

    /// Every race of the season, each carrying only `driver_id`'s result.
    pub async fn driver_results(&self, season: &Season, driver_id: &str) -> Option<RaceTable> {
        let url = self.endpoint(
            &[season.as_segment().as_str(), "drivers", driver_id, "results.json"],
            false,
        );
        let result = self.fetch(url.clone(), envelope::RACE_TABLE).await;
        absent_on_error("driver results", &url, result)
    }

    pub async fn race_results(&self, season: &Season, round: &str) -> Option<Race> {
        let url = self.endpoint(&[season.as_segment().as_str(), round, "results.json"], true);
        let result = self.fetch(url.clone(), envelope::FIRST_RACE).await;
        absent_on_error("race results", &url, result)
    }

    /// The race record with qualifying order moved into `results`.
    ///
    /// That list is grid-setting order, not finishing order.
    pub async fn qualifying_results(&self, season: &Season, round: &str) -> Option<Race> {
        let url = self.endpoint(&[season.as_segment().as_str(), round, "qualifying.json"], true);
        let result = self
            .fetch::<Race>(url.clone(), envelope::FIRST_RACE)
            .await
            .and_then(|race| {
                race.into_qualifying_view().ok_or_else(|| {
                    FetchError::MissingField(format!(
                        "{}.QualifyingResults",
                        envelope::describe(envelope::FIRST_RACE)
                    ))
                })
            });
        absent_on_error("qualifying results", &url, result)
    }

    /// `None` when the driver made no stops.
    ///
    /// The provider answers a stop-less query with an error status, an empty
    /// race list or a race without stops. Those are logged at debug only. A
    /// response without the `MRData.RaceTable` envelope, transport failures
    /// and decode failures still warn.
    pub async fn pit_stops(
        &self,
        season: &Season,
        round: &str,
        driver_id: &str,
    ) -> Option<Vec<PitStop>> {
        let url = self.endpoint(
            &[season.as_segment().as_str(), round, "drivers", driver_id, "pitstops.json"],
            false,
        );
        let table = match self.fetch::<Value>(url.clone(), envelope::RACE_TABLE).await {
            Ok(table) => table,
            Err(e @ FetchError::Status { .. }) => {
                debug!(endpoint = %url, reason = %e, "no pit stops recorded");
                return None;
            }
            Err(e) => return absent_on_error("pit stops", &url, Err(e)),
        };
        match envelope::extract::<Vec<PitStop>>(table, envelope::PIT_STOPS_IN_TABLE) {
            Ok(stops) if stops.is_empty() => {
                debug!(endpoint = %url, "no pit stops recorded");
                None
            }
            Ok(stops) => Some(stops),
            Err(e @ FetchError::MissingField(_)) => {
                debug!(endpoint = %url, reason = %e, "no pit stops recorded");
                None
            }
            Err(e) => absent_on_error("pit stops", &url, Err(e)),
        }
    }

    fn endpoint(&self, segments: &[&str], paged: bool) -> Url {
        let mut url = self.base_url.clone();
        // checked in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if paged {
            url.query_pairs_mut()
                .append_pair("limit", RESULTS_PAGE_LIMIT);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, path: &[Step]) -> Result<T, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!(endpoint = %url, status = %status, "stats response received");

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        envelope::extract(value, path)
    }
}

fn absent_on_error<T>(operation: &str, url: &Url, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            match &e {
                FetchError::Status { status, .. } => {
                    warn!(operation, endpoint = %url, status, error = %e, "stats data unavailable");
                }
                _ => warn!(operation, endpoint = %url, error = %e, "stats data unavailable"),
            }
            None
        }
    }
}
