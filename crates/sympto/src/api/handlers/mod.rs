mod analyze;
mod get_disease;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use libsympto::prelude::*;

use crate::api::AppState;
use crate::api::errors::AppError;

pub use self::analyze::analyze;
pub(super) use self::get_disease::get_disease;

pub async fn not_found() -> impl IntoResponse {
  AppError::ResourceNotFound
}

pub async fn healthz() -> StatusCode {
  StatusCode::OK
}

pub async fn readyz<C: Corrector>(State(state): State<AppState<C>>) -> StatusCode {
  match state.sympto.dataset().is_empty() {
    true => StatusCode::SERVICE_UNAVAILABLE,
    false => StatusCode::OK,
  }
}

pub async fn prometheus<C: Corrector>(State(state): State<AppState<C>>) -> Result<impl IntoResponse, AppError> {
  match state.prometheus {
    Some(handle) => Ok(handle.render()),
    None => Err(AppError::ResourceNotFound),
  }
}
