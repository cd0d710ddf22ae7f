use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::scoring::Style;

/// A lesson module as stored in `modules/{id}.json`. Only `steps` and
/// `scenarios` need a particular shape; the rest is carried as authored.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub estimated_minutes: Option<Value>,
    #[serde(default)]
    pub version: Option<Value>,
    /// Steps as authored. Their `type` tag is only checked when a step is
    /// dispatched, so one odd step never stops the module from loading.
    #[serde(default)]
    pub steps: Vec<Value>,
    #[serde(default)]
    pub scenarios: Vec<Value>,
}

impl Module {
    /// Scenarios are free-form objects matched on their `id`.
    pub fn scenario(&self, scenario_id: &str) -> Option<&Value> {
        self.scenarios
            .iter()
            .find(|s| s.get("id").and_then(Value::as_str) == Some(scenario_id))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub question: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub text: String,
    pub style: Style,
}

/// Quiz content as sent to the frontend: answer texts only, no scoring metadata.
#[derive(Debug, Serialize)]
pub struct SanitizedQuiz {
    pub questions: Vec<SanitizedQuestion>,
}

#[derive(Debug, Serialize)]
pub struct SanitizedQuestion {
    pub question: String,
    pub answers: Vec<String>,
}

impl From<&Quiz> for SanitizedQuiz {
    fn from(quiz: &Quiz) -> Self {
        let questions = quiz
            .questions
            .iter()
            .map(|q| SanitizedQuestion {
                question: q.question.clone(),
                answers: q.answers.iter().map(|a| a.text.clone()).collect(),
            })
            .collect();
        SanitizedQuiz { questions }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub estimated_minutes: u32,
    pub default_scenario_id: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<i64>,
}
