use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

async fn health_check() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: names::HEALTH_MESSAGE,
    })
}
