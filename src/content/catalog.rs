use std::path::Path;

use color_eyre::{eyre::WrapErr, Result};

use super::{helpers::read_json, ContentError};
use crate::{models::CatalogEntry, names};

/// Modules offered by the picker. Loaded once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Reads `catalog.json` from the content root, falling back to the
    /// built-in catalog when the file does not exist.
    pub fn load(content_root: &Path) -> Result<Self> {
        let path = content_root.join(names::CATALOG_FILE);
        match read_json::<Vec<CatalogEntry>>(&path, "catalog", names::CATALOG_FILE) {
            Ok(entries) => {
                tracing::info!("loaded {} catalog entries from {}", entries.len(), path.display());
                Ok(Self::new(entries))
            }
            Err(ContentError::NotFound { .. }) => {
                tracing::warn!("{} not found, using built-in catalog", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).wrap_err("could not load module catalog"),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![CatalogEntry {
            id: names::DEFAULT_MODULE_ID.to_string(),
            title: names::DEFAULT_MODULE_TITLE.to_string(),
            estimated_minutes: names::DEFAULT_MODULE_MINUTES,
            default_scenario_id: names::DEFAULT_SCENARIO_ID.to_string(),
        }])
    }
}
