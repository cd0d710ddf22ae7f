pub mod content;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use content::{Catalog, ContentStore};

#[derive(Clone)]
pub struct AppState {
    pub content: ContentStore,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(content: ContentStore, catalog: Catalog) -> Self {
        Self {
            content,
            catalog: Arc::new(catalog),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // Open CORS for the local frontend; tighten before deploying anywhere public.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::modules::routes())
        .merge(handlers::scenarios::routes())
        .merge(handlers::quiz::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
