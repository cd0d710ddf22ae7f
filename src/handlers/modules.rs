use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    extractors::{PathParams, QueryParams},
    models::CatalogEntry,
    names,
    rejections::{AppError, ContentResultExt},
    services::steps::{self, QuizResultContext, RenderedStep, StepError},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/modules", get(list_modules))
        .route("/modules/{module_id}/raw", get(module_raw))
        .route("/modules/{module_id}/content", get(module_content))
        .route("/modules/{module_id}/step/{index}", get(module_step))
        .route(
            "/modules/{module_id}/scenario/{scenario_id}",
            get(module_scenario),
        )
}

async fn list_modules(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.entries().to_vec())
}

async fn module_raw(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let raw = state
        .content
        .load_module_raw(&module_id)
        .or_not_found(names::MODULE_NOT_FOUND)?;
    Ok(Json(raw))
}

#[derive(Serialize)]
struct ModuleSummary {
    id: Value,
    title: Value,
    total_steps: usize,
}

async fn module_content(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<Json<ModuleSummary>, AppError> {
    let module = state
        .content
        .load_module(&module_id)
        .or_not_found(names::MODULE_NOT_FOUND)?;

    Ok(Json(ModuleSummary {
        id: module.id.unwrap_or(Value::String(module_id)),
        title: module.title.unwrap_or_else(|| Value::String(String::new())),
        total_steps: module.steps.len(),
    }))
}

#[derive(Serialize)]
struct StepResponse {
    module_id: String,
    step_index: i64,
    step: RenderedStep,
}

async fn module_step(
    State(state): State<AppState>,
    PathParams((module_id, index)): PathParams<(String, i64)>,
    QueryParams(context): QueryParams<QuizResultContext>,
) -> Result<Json<StepResponse>, AppError> {
    let module = state
        .content
        .load_module(&module_id)
        .or_not_found(names::MODULE_NOT_FOUND)?;

    let raw_step = steps::get_step(&module, index).map_err(|e| {
        tracing::debug!("module {module_id}: {e}");
        AppError::NotFound(names::STEP_OUT_OF_RANGE)
    })?;

    // Unknown tags and missing fields are authoring bugs, reported as 500s.
    let step = steps::process_step(raw_step, &context).map_err(|e| {
        tracing::error!("module {module_id} step {index}: {e}");
        match e {
            StepError::UnknownStepType(_) => AppError::Internal("unknown step type"),
            StepError::MissingField { .. } => AppError::Internal("step is missing a required field"),
            StepError::IndexOutOfRange { .. } => AppError::NotFound(names::STEP_OUT_OF_RANGE),
        }
    })?;

    Ok(Json(StepResponse {
        module_id,
        step_index: index,
        step,
    }))
}

#[derive(Serialize)]
struct ScenarioResponse {
    module_id: String,
    title: Value,
    scenario: Value,
}

async fn module_scenario(
    State(state): State<AppState>,
    Path((module_id, scenario_id)): Path<(String, String)>,
) -> Result<Json<ScenarioResponse>, AppError> {
    let module = state
        .content
        .load_module(&module_id)
        .or_not_found(names::MODULE_NOT_FOUND)?;

    let scenario = module
        .scenario(&scenario_id)
        .cloned()
        .ok_or(AppError::NotFound(names::SCENARIO_NOT_FOUND))?;

    Ok(Json(ScenarioResponse {
        module_id,
        title: module.title.unwrap_or_else(|| Value::String(String::new())),
        scenario,
    }))
}
