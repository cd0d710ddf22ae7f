use super::{helpers::read_json, ContentError, ContentStore};
use crate::{models::Quiz, names};

impl ContentStore {
    /// Loads `quizzes/{name}.json`. URL-style ids (`server-style`) resolve
    /// to their snake_case file (`server_style.json`).
    pub fn load_quiz(&self, name: &str) -> Result<Quiz, ContentError> {
        let file_stem = quiz_file_stem(name);
        let path = self.file_path(names::QUIZZES_DIR, "quiz", &file_stem)?;
        read_json(&path, "quiz", name)
    }
}

pub(crate) fn quiz_file_stem(quiz_id: &str) -> String {
    quiz_id.replace('-', "_")
}
