use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitwall::args;
use pitwall::{ErgastClient, configure_routes};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitwall=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = args::args_checks();
    let client = ErgastClient::new(args.api_base_url.clone())?;
    tracing::info!(base_url = %client.base_url(), "stats api configured");

    let static_dir = args.static_dir.clone();
    let bind = (args.host.clone(), args.port);
    tracing::info!(host = %bind.0, port = bind.1, "starting dashboard");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(client.clone()))
            .configure(configure_routes)
            .service(Files::new("/static", &static_dir))
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
