use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{models::Module, names};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("unknown step type: {0:?}")]
    UnknownStepType(Option<Value>),

    #[error("{step_type} step is missing required field `{field}`")]
    MissingField {
        step_type: &'static str,
        field: &'static str,
    },

    #[error("step index {index} is out of range ({len} steps)")]
    IndexOutOfRange { index: i64, len: usize },
}

/// A step whose tag has been recognised and whose required fields are
/// present. Payloads are passed through as authored, whatever their JSON type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Text { content: Value },
    Reflection { prompt: Value },
    Quiz { quiz_id: Value },
    QuizResult,
}

impl TryFrom<&Value> for Step {
    type Error = StepError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let required = |step_type: &'static str, field: &'static str| {
            raw.get(field)
                .cloned()
                .ok_or(StepError::MissingField { step_type, field })
        };

        match raw.get("type").and_then(Value::as_str) {
            Some("text") => Ok(Step::Text {
                content: required("text", "content")?,
            }),
            Some("reflection") => Ok(Step::Reflection {
                prompt: required("reflection", "prompt")?,
            }),
            Some("quiz") => Ok(Step::Quiz {
                quiz_id: required("quiz", "quiz_id")?,
            }),
            Some("quiz_result") => Ok(Step::QuizResult),
            _ => Err(StepError::UnknownStepType(raw.get("type").cloned())),
        }
    }
}

/// Quiz outcome passed along with a step request. Each field stays `None`
/// unless the caller supplied it, so an explicit `0` is kept apart from "unset".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizResultContext {
    pub primary_style: Option<String>,
    pub strategist: Option<u32>,
    pub guide: Option<u32>,
    pub anchor: Option<u32>,
    pub spark: Option<u32>,
}

impl QuizResultContext {
    fn breakdown(&self) -> Option<Breakdown> {
        let breakdown = Breakdown {
            strategist: self.strategist,
            guide: self.guide,
            anchor: self.anchor,
            spark: self.spark,
        };
        (!breakdown.is_empty()).then_some(breakdown)
    }
}

/// Only the styles the caller supplied are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategist: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark: Option<u32>,
}

impl Breakdown {
    fn is_empty(&self) -> bool {
        self.strategist.is_none()
            && self.guide.is_none()
            && self.anchor.is_none()
            && self.spark.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedStep {
    Text { content: Value },
    Reflection { prompt: Value },
    Quiz { quiz_id: Value },
    QuizResult(QuizResultStep),
}

/// A missing `primary_style` is reported inside the payload rather than as a
/// failed request, so the frontend always gets something it can render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizResultStep {
    Missing {
        error: String,
    },
    Scored {
        primary_style: String,
        breakdown: Option<Breakdown>,
    },
}

pub fn get_step(module: &Module, index: i64) -> Result<&Value, StepError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| module.steps.get(i))
        .ok_or(StepError::IndexOutOfRange {
            index,
            len: module.steps.len(),
        })
}

pub fn process_step(raw: &Value, context: &QuizResultContext) -> Result<RenderedStep, StepError> {
    let rendered = match Step::try_from(raw)? {
        Step::Text { content } => RenderedStep::Text { content },
        Step::Reflection { prompt } => RenderedStep::Reflection { prompt },
        Step::Quiz { quiz_id } => RenderedStep::Quiz { quiz_id },
        Step::QuizResult => RenderedStep::QuizResult(quiz_result(context)),
    };
    Ok(rendered)
}

fn quiz_result(context: &QuizResultContext) -> QuizResultStep {
    match &context.primary_style {
        None => QuizResultStep::Missing {
            error: names::MISSING_PRIMARY_STYLE.to_string(),
        },
        Some(primary_style) => QuizResultStep::Scored {
            primary_style: primary_style.clone(),
            breakdown: context.breakdown(),
        },
    }
}
