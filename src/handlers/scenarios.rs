use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    names,
    rejections::{AppError, ContentResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/scenarios/{scenario_id}", get(scenario))
}

async fn scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let scenario = state
        .content
        .load_scenario(&scenario_id)
        .or_not_found(names::SCENARIO_NOT_FOUND)?;
    Ok(Json(scenario))
}
