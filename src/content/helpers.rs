use std::{io::ErrorKind, path::Path};

use serde::de::DeserializeOwned;

use super::ContentError;

/// Read and parse a JSON file. A missing file becomes `NotFound` for `kind`/`id`.
pub fn read_json<T: DeserializeOwned>(
    path: &Path,
    kind: &'static str,
    id: &str,
) -> Result<T, ContentError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ContentError::NotFound {
            kind,
            id: id.to_string(),
        },
        _ => ContentError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
