pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod charts;
    pub mod dashboard;
    pub mod drivers;
    pub mod ergast;
    pub mod params;
    pub mod race;
    pub mod schedule;
    pub mod standings;
    pub mod teams;
}
pub mod view {
    pub mod charts;
    pub mod dashboard;
    pub mod drivers;
    pub mod layout;
    pub mod race;
    pub mod schedule;
    pub mod standings;
    pub mod teams;
}

use actix_web::{HttpResponse, web};

pub use controller::ergast::ErgastClient;
pub use error::AppError;
pub use model::Season;

/// Every dashboard route. Shared by `main` and the integration tests, which
/// register it against a mock provider.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    use controller::{charts, dashboard, drivers, race, schedule, standings, teams};

    cfg.route("/", web::get().to(dashboard::index))
        .route("/standings", web::get().to(standings::standings))
        .route("/calendar", web::get().to(schedule::calendar))
        .route("/race/{year}/{round}", web::get().to(race::race_results))
        .route("/race/{year}/{round}/qualifying", web::get().to(race::qualifying))
        .route(
            "/race/{year}/{round}/pitstops/{driver}",
            web::get().to(race::pit_stops),
        )
        .route("/drivers", web::get().to(drivers::roster))
        .route("/drivers/{driver}", web::get().to(drivers::driver_season))
        .route("/teams", web::get().to(teams::teams))
        .route("/charts", web::get().to(charts::charts))
        .route("/health", web::get().to(HttpResponse::Ok));
}
