/**
 * Router Configuration
 *
 * This module assembles the full application router: the health check, the
 * `/api` routes, the JSON 404 fallback and the cross-cutting tower-http
 * layers. Unknown paths and known paths hit with an unsupported method both
 * answer with the 404 envelope.
 *
 * # Layers (outermost first)
 *
 * 1. Request tracing
 * 2. CORS, restricted to the configured client origin
 * 3. Security headers (`nosniff`, `SAMEORIGIN` framing, `no-referrer`)
 * 4. Panic catching; the panic payload is echoed as `stack` outside production
 */

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::error::INTERNAL_MESSAGE;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::{AppConfig, ConfigError};
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

pub const SERVICE_NAME: &str = "Portfolio & Blog API";

/// `GET /` health check
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Route not found")),
    )
}

/// Turn a caught panic into the error envelope
fn panic_response(payload: Box<dyn Any + Send + 'static>, expose_stack: bool) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    let mut body = json!({
        "success": false,
        "message": INTERNAL_MESSAGE,
    });
    if expose_stack {
        body["stack"] = json!(detail);
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(&config.client_url)
        .map_err(|_| ConfigError::InvalidUrl(config.client_url.clone()))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true))
}

/// Create the Axum router with all routes and layers configured
///
/// # Errors
///
/// Fails only if the configured client origin is not a valid header value.
pub fn create_router(app_state: AppState) -> Result<Router, ConfigError> {
    let cors = cors_layer(&app_state.config)?;
    let expose_stack = !app_state.config.environment.is_production();

    let router = Router::new()
        .route("/", get(health))
        .nest("/api", configure_api_routes(&app_state))
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(move |payload: Box<dyn Any + Send + 'static>| {
            panic_response(payload, expose_stack)
        }))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
