use std::{any::Any, net::SocketAddr, time::Duration};

use axum::{
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::AppState;
use crate::{routes::ops, users};

pub const HEALTH: &str = "/health";
pub const DEBUG_ROUTES: &str = "/debug-routes";
pub const SIGNUP: &str = "/signup";
pub const MATCH: &str = "/match";

/// Paths paired with their handlers. Each module hands one to `mount`.
pub type RouteTable = Vec<(&'static str, MethodRouter<AppState>)>;

pub fn mount(routes: RouteTable) -> Router<AppState> {
    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method)| router.route(path, method))
}

/// Paths `build_app` mounts for this configuration, in registration order.
pub fn registered_routes(config: &AppConfig) -> Vec<&'static str> {
    ops::routes(config)
        .into_iter()
        .chain(users::routes())
        .map(|(path, _)| path)
        .collect()
}

pub fn build_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .merge(ops::router(&state.config))
        .merge(users::router())
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!(
                        "http_request",
                        %method,
                        uri = %uri,
                        status = tracing::field::Empty
                    )
                })
                .on_request(|req: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::info!(method = %req.method(), path = %req.uri().path(), "incoming request");
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    ApiError::Internal.into_response()
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
