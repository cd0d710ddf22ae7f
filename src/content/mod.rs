// Content store - read-only access to the JSON files under the content root

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

use crate::names;

mod catalog;
mod helpers;
mod module;
mod quiz;
mod scenario;

pub use catalog::Catalog;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

/// Files are read on every call; nothing is cached, so edits to the content
/// directory show up on the next request.
#[derive(Clone, Debug)]
pub struct ContentStore {
    root: Arc<PathBuf>,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `{dir}/{id}.json`, or `NotFound` if `id` is not a plain identifier.
    fn file_path(&self, dir: &str, kind: &'static str, id: &str) -> Result<PathBuf, ContentError> {
        if !is_valid_id(id) {
            tracing::warn!("rejected {kind} id {id:?}");
            return Err(ContentError::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        Ok(self
            .root
            .join(dir)
            .join(id)
            .with_extension(names::CONTENT_EXTENSION))
    }
}

/// Ids map straight onto file names, so only `[A-Za-z0-9_-]` is allowed.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
