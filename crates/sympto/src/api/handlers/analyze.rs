use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use libsympto::prelude::*;
use metrics::{counter, histogram};
use tracing::instrument;

use crate::api::{AppState, dto::AnalyzePayload, errors::AppError, middlewares::json_rejection::TypedJson};

#[instrument(skip_all)]
pub async fn analyze<C: Corrector>(State(state): State<AppState<C>>, TypedJson(body): TypedJson<AnalyzePayload>) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let then = Instant::now();
  let diagnosis = state.sympto.analyze(&body.symptoms, body.language());

  histogram!("sympto_analyze_latency_seconds").record(then.elapsed().as_secs_f64());

  match diagnosis.disease {
    Some(_) => counter!("sympto_matched_total").increment(1),
    None => counter!("sympto_unmatched_total").increment(1),
  }

  Ok((StatusCode::OK, Json(diagnosis)))
}
