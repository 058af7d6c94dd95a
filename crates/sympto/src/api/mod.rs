use axum::{
  Router,
  middleware,
  routing::{get, post},
};
use libsympto::prelude::*;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::api::config::Config;

pub mod config;
pub mod dto;
pub mod errors;

pub mod handlers;
mod middlewares;

#[derive(Clone)]
pub struct AppState<C: Corrector> {
  pub config: Config,
  pub prometheus: Option<PrometheusHandle>,
  pub sympto: Sympto<C>,
}

pub fn router<C: Corrector>(state: AppState<C>) -> Router {
  Router::new()
    .route("/analyze", post(handlers::analyze))
    .route("/diseases/{name}", get(handlers::get_disease))
    .fallback(handlers::not_found)
    .layer(middleware::from_fn(middlewares::metrics))
    .layer(TraceLayer::new_for_http().make_span_with(middlewares::create_request_span))
    // The routes below will not go through the observability middlewares above
    .route("/healthz", get(handlers::healthz))
    .route("/readyz", get(handlers::readyz))
    .route("/metrics", get(handlers::prometheus))
    .layer(middleware::from_fn(middlewares::logging::api_logger))
    .layer(middleware::from_fn(middlewares::request_id))
    .with_state(state)
}
