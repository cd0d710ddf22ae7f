use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::{
    extractors::JsonBody,
    models::{QuizSubmission, SanitizedQuiz},
    names,
    rejections::{AppError, ContentResultExt, ResultExt},
    services::scoring::{self, QuizResult},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/{quiz_id}/content", get(quiz_content))
        .route("/quiz/{quiz_id}", post(submit_quiz))
}

/// Questions and answer texts only; the style each answer scores for stays server-side.
async fn quiz_content(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<Json<SanitizedQuiz>, AppError> {
    let quiz = state
        .content
        .load_quiz(&quiz_id)
        .or_not_found(names::QUIZ_NOT_FOUND)?;

    Ok(Json(SanitizedQuiz::from(&quiz)))
}

async fn submit_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
    JsonBody(submission): JsonBody<QuizSubmission>,
) -> Result<Json<QuizResult>, AppError> {
    let quiz = state
        .content
        .load_quiz(&quiz_id)
        .or_not_found(names::QUIZ_NOT_FOUND)?;

    let result =
        scoring::score(&quiz, &submission.answers).reject_input("invalid quiz submission")?;

    tracing::info!(
        "scored {} answers for {quiz_id}: primary style {}",
        result.breakdown.total(),
        result.primary_style
    );

    Ok(Json(result))
}
