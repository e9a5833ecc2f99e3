//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{CalculationResponse, CatalogResponse, ConfigResponse, ErrorResponse};
use crate::calc::CircuitInput;
use crate::calc::constants::{LIMIT_LIGHTING_PCT, LIMIT_OTHER_PCT, STANDARD_SECTIONS_MM2};

/// Runs one calculation from a JSON circuit payload.
///
/// `POST /calculate` → 200 + `CalculationResponse` JSON
/// Invalid input → 400 + `ErrorResponse` naming the field
pub async fn post_calculate(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CircuitInput>,
) -> impl IntoResponse {
    match state.calculator.run(&input) {
        Ok(calc) => Ok(Json(CalculationResponse::from(&calc))),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// Returns the standard section catalog and enumerated input choices.
///
/// `GET /catalog` → 200 + `CatalogResponse` JSON
pub async fn get_catalog(State(_state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        sections_mm2: STANDARD_SECTIONS_MM2,
        phases: &["mono", "tri"],
        materials: &["copper", "aluminum"],
        usages: &["lighting", "other"],
    })
}

/// Returns the deployed compliance mode and limits.
///
/// `GET /config` → 200 + `ConfigResponse` JSON
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        mode: state.calculator.mode(),
        limit_lighting_pct: LIMIT_LIGHTING_PCT,
        limit_other_pct: LIMIT_OTHER_PCT,
    })
}
