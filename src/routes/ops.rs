use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    app::{mount, registered_routes, RouteTable, DEBUG_ROUTES, HEALTH},
    config::AppConfig,
    state::AppState,
};

pub fn routes(config: &AppConfig) -> RouteTable {
    let mut routes: RouteTable = vec![(HEALTH, get(health))];
    if config.expose_debug_routes {
        routes.push((DEBUG_ROUTES, get(debug_routes)));
    }
    routes
}

pub fn router(config: &AppConfig) -> Router<AppState> {
    mount(routes(config))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<&'static str>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Lists every registered path. Only mounted when `expose_debug_routes` is on.
pub async fn debug_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: registered_routes(&state.config),
    })
}
