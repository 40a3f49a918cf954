mod app;
mod config;
mod db;
mod error;
mod routes;
mod state;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "rostermatch=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    if config.expose_debug_routes {
        tracing::warn!("/debug-routes is exposed; set EXPOSE_DEBUG_ROUTES=false to hide it");
    }

    let app_state = AppState::init(config.clone()).await?;
    let app = app::build_app(app_state);
    app::serve(app, &config).await
}
