use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use std::sync::Arc;

mod api;
mod config;
mod docs;
mod error;
mod knowledge;
mod ledger;
mod model;
mod routes;
mod seed;
mod state;
mod tools;

use config::Config;
use ledger::SystemClock;
use state::{AppState, Store};

use crate::docs::ApiDoc;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Leave Ledger is running. See /swagger-ui/ and /help/quick-start"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "leave-ledger.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let mut store = Store::new(Box::new(SystemClock));
    if config.seed_demo_data {
        seed::load_demo_data(&mut store)?;
    } else {
        warn!("Demo data disabled, starting with an empty ledger");
    }

    let stats = store.system_stats();
    info!(
        employees = stats.total_employees,
        requests = stats.total_leave_requests,
        policies = stats.total_policies,
        addr = %config.server_addr,
        "Leave ledger ready"
    );

    let state = Data::new(AppState::new(store));
    let limiter = Arc::new(routes::build_limiter(config.rate_api_per_min)?);
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config, limiter.clone()))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
