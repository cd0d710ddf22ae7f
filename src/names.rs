pub const MODULES_URL: &str = "/modules";

pub fn module_raw_url(module_id: &str) -> String {
    format!("/modules/{module_id}/raw")
}

pub fn module_content_url(module_id: &str) -> String {
    format!("/modules/{module_id}/content")
}

pub fn module_step_url(module_id: &str, index: i64) -> String {
    format!("/modules/{module_id}/step/{index}")
}

pub fn module_scenario_url(module_id: &str, scenario_id: &str) -> String {
    format!("/modules/{module_id}/scenario/{scenario_id}")
}

pub fn quiz_content_url(quiz_id: &str) -> String {
    format!("/quiz/{quiz_id}/content")
}

pub fn quiz_submit_url(quiz_id: &str) -> String {
    format!("/quiz/{quiz_id}")
}

// Content layout
pub const MODULES_DIR: &str = "modules";
pub const QUIZZES_DIR: &str = "quizzes";
pub const SCENARIOS_DIR: &str = "scenarios";
pub const CATALOG_FILE: &str = "catalog.json";
pub const CONTENT_EXTENSION: &str = "json";

// The personality quiz shipped with the app
pub const SERVER_STYLE_QUIZ_ID: &str = "server-style";

// Built-in catalog, used when no catalog.json is present
pub const DEFAULT_MODULE_ID: &str = "orientation";
pub const DEFAULT_MODULE_TITLE: &str = "Orientation";
pub const DEFAULT_MODULE_MINUTES: u32 = 5;
pub const DEFAULT_SCENARIO_ID: &str = "first_5_minutes";

// 404 details
pub const MODULE_NOT_FOUND: &str = "Module not found";
pub const SCENARIO_NOT_FOUND: &str = "Scenario not found";
pub const QUIZ_NOT_FOUND: &str = "Quiz not found";
pub const STEP_OUT_OF_RANGE: &str = "Step index out of range";

pub const MISSING_PRIMARY_STYLE: &str =
    "Missing primary_style. Quiz results must be passed as query parameters.";

pub const HEALTH_MESSAGE: &str = "Server Training Backend Running";
