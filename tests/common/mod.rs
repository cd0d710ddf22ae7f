#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use http_body_util::BodyExt;
use server_training::{
    content::{Catalog, ContentStore},
    router, AppState,
};
use tempfile::TempDir;

/// The sample content shipped in the repository.
pub fn shipped_content_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

pub fn shipped_app() -> axum::Router {
    let content = ContentStore::new(shipped_content_dir());
    let catalog = Catalog::load(content.root()).expect("shipped catalog should load");
    router(AppState::new(content, catalog))
}

/// A throwaway content root; files are removed when it is dropped.
pub struct TestContent {
    dir: TempDir,
}

impl TestContent {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for sub in ["modules", "quizzes", "scenarios"] {
            std::fs::create_dir(dir.path().join(sub)).expect("failed to create content dir");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        std::fs::write(self.dir.path().join(relative), contents).expect("failed to write content");
        self
    }

    pub fn write_json(&self, relative: &str, value: &serde_json::Value) -> &Self {
        self.write(relative, &value.to_string())
    }

    pub fn store(&self) -> ContentStore {
        ContentStore::new(self.dir.path())
    }

    pub fn app(&self) -> axum::Router {
        let catalog = Catalog::load(self.dir.path()).expect("catalog should load");
        router(AppState::new(self.store(), catalog))
    }
}

pub async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.expect("body should collect").to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
