//! Web endpoint serving the scraped snapshot.
//!
//! Every GET on the telemetry path triggers exactly one scrape (snapshot +
//! reset sweep) and returns the rendered exposition text. The landing page
//! at `/` links the telemetry path.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::app_state::AppState;
use crate::config::AuthSection;

pub fn build_router(state: AppState) -> Router {
    let telemetry_path = state.cfg().web.telemetry_path.clone();
    Router::new()
        .route("/", get(index))
        .route(&telemetry_path, get(metrics))
        .with_state(state)
}

async fn metrics(State(app): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(auth) = &app.cfg().web.auth {
        if !authorized(&headers, auth) {
            tracing::error!("invalid http auth on metrics endpoint");
            return (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"metrics\"")],
                "Invalid username or password",
            )
                .into_response();
        }
    }

    let snapshot = app.scraper().scrape().await;
    let body = snapshot.render(
        &app.cfg().metrics.namespace,
        &app.cfg().metrics.environment,
    );
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}

async fn index(State(app): State<AppState>) -> Html<String> {
    let path = &app.cfg().web.telemetry_path;
    Html(format!(
        "<html>\n\
         <head><title>Fleetline TSDB Exporter</title></head>\n\
         <body>\n\
         <h1>Fleetline TSDB Exporter</h1>\n\
         <p><a href='{path}'>Metrics</a></p>\n\
         </body>\n\
         </html>"
    ))
}

fn authorized(headers: &HeaderMap, auth: &AuthSection) -> bool {
    let expected = format!(
        "Basic {}",
        BASE64.encode(format!("{}:{}", auth.username, auth.password))
    );
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false)
}
