use axum::{
    Router,
    routing::{get, post},
};

use chrono::Utc;
use http::Method;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse, DefaultOnFailure},
};

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod state;
mod db;
mod period;

mod models {
    pub mod user;
    pub mod shift;
    pub mod summary;
}

mod repositories {
    pub mod user;
    pub mod shift;
    pub mod summary;
}

mod services {
    pub mod tracking;
    pub mod reporting;
    pub mod archive;
}

mod handlers {
    pub mod users;
    pub mod shifts;
    pub mod reports;
}

mod validation {
    pub mod input;
}

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config).await?;

    // The original front-end is a browser page served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/login", post(handlers::users::login))
        .route("/entrada", post(handlers::shifts::entrada))
        .route("/salida", post(handlers::shifts::salida))
        .route("/registros", get(handlers::shifts::registros))
        .route("/contador-semanal/{user_id}", get(handlers::reports::contador_semanal))
        .route("/contador-mensual/{user_id}", get(handlers::reports::contador_mensual))
        .route("/resumen-semanal", get(handlers::reports::resumen_semanal))
        .route("/resumen-mensual", get(handlers::reports::resumen_mensual))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(cors)
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state.clone());

    // Archival jobs: run once at startup to catch up, then re-run at each
    // week/month rollover. Failures are logged and swallowed; the jobs run
    // unattended and must never take the process down.
    let weekly_state = state.clone();
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            match services::archive::run_weekly_reset(&weekly_state.db, now).await {
                Ok(written) => {
                    tracing::info!("✅ Weekly reset completed ({} summaries)", written);
                }
                Err(e) => {
                    tracing::error!("❌ Weekly reset failed: {}", e);
                }
            }
            let pause = (period::next_week_start(now) - Utc::now())
                .to_std()
                .unwrap_or(Duration::from_secs(60));
            tokio::time::sleep(pause).await;
        }
    });

    let monthly_state = state.clone();
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            match services::archive::run_monthly_reset(&monthly_state.db, now).await {
                Ok(deleted) => {
                    tracing::info!("✅ Monthly reset completed ({} shifts purged)", deleted);
                }
                Err(e) => {
                    tracing::error!("❌ Monthly reset failed: {}", e);
                }
            }
            let pause = (period::next_month_start(now) - Utc::now())
                .to_std()
                .unwrap_or(Duration::from_secs(60));
            tokio::time::sleep(pause).await;
        }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);
    tracing::info!("✅ Archival jobs scheduled (weekly and monthly rollover)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
