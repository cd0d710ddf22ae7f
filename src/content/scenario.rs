use super::{helpers::read_json, ContentError, ContentStore};
use crate::names;

impl ContentStore {
    /// Standalone scenario files are served as-is.
    pub fn load_scenario(&self, scenario_id: &str) -> Result<serde_json::Value, ContentError> {
        let path = self.file_path(names::SCENARIOS_DIR, "scenario", scenario_id)?;
        read_json(&path, "scenario", scenario_id)
    }
}
