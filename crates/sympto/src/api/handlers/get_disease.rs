use axum::{
  Json,
  extract::{Path, State},
  response::IntoResponse,
};
use axum_extra::extract::Query;
use libsympto::prelude::*;
use tracing::instrument;

use crate::api::{AppState, dto::GetDiseaseParams, errors::AppError};

#[instrument(skip_all)]
pub async fn get_disease<C: Corrector>(
  State(state): State<AppState<C>>,
  Path(name): Path<String>,
  Query(params): Query<GetDiseaseParams>,
) -> Result<impl IntoResponse, AppError> {
  match state.sympto.lookup(&name, &params.language) {
    Some(diagnosis) => Ok(Json(diagnosis)),
    None => Err(AppError::ResourceNotFound),
  }
}
