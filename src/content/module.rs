use super::{helpers::read_json, ContentError, ContentStore};
use crate::{models::Module, names};

impl ContentStore {
    pub fn load_module(&self, module_id: &str) -> Result<Module, ContentError> {
        let path = self.file_path(names::MODULES_DIR, "module", module_id)?;
        read_json(&path, "module", module_id)
    }

    /// The module file exactly as it is on disk, without interpreting steps.
    pub fn load_module_raw(&self, module_id: &str) -> Result<serde_json::Value, ContentError> {
        let path = self.file_path(names::MODULES_DIR, "module", module_id)?;
        read_json(&path, "module", module_id)
    }
}
