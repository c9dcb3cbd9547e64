mod config;
mod errors;
mod handlers;
mod logging;
mod models;
mod routes;

use actix_web::HttpServer;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(std::io::Error::other)?;
    logging::init_logging(config.log_level);

    log::info!(
        "Starting {} v{} on {}:{}",
        handlers::SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        config.host,
        config.port
    );

    let max_payload_bytes = config.max_payload_bytes;
    let mut server = HttpServer::new(move || routes::app(max_payload_bytes));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
