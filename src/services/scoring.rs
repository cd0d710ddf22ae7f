use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Quiz;

/// The four approach styles a quiz answer can count towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Strategist,
    Guide,
    Anchor,
    Spark,
}

impl Style {
    /// Canonical order. Ties in [`calculate_result`] resolve to the earliest entry.
    pub const ALL: [Style; 4] = [Style::Strategist, Style::Guide, Style::Anchor, Style::Spark];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Strategist => "strategist",
            Style::Guide => "guide",
            Style::Anchor => "anchor",
            Style::Spark => "spark",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-style answer counts. Every style is always present, even at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StyleTally {
    pub strategist: u32,
    pub guide: u32,
    pub anchor: u32,
    pub spark: u32,
}

impl StyleTally {
    pub fn get(&self, style: Style) -> u32 {
        match style {
            Style::Strategist => self.strategist,
            Style::Guide => self.guide,
            Style::Anchor => self.anchor,
            Style::Spark => self.spark,
        }
    }

    pub fn increment(&mut self, style: Style) {
        let slot = match style {
            Style::Strategist => &mut self.strategist,
            Style::Guide => &mut self.guide,
            Style::Anchor => &mut self.anchor,
            Style::Spark => &mut self.spark,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        Style::ALL.iter().map(|&s| self.get(s)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub primary_style: Style,
    pub breakdown: StyleTally,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    #[error("answer {index} is out of range for question {question} ({available} answers)")]
    AnswerOutOfRange {
        question: usize,
        index: i64,
        available: usize,
    },
}

/// Style with the highest count. The shipped quiz has an odd number of
/// questions, but nothing stops a content change from producing a tie, so
/// ties go to the first tied style in [`Style::ALL`].
pub fn calculate_result(tally: &StyleTally) -> Style {
    let mut best = Style::ALL[0];
    for style in Style::ALL.into_iter().skip(1) {
        if tally.get(style) > tally.get(best) {
            best = style;
        }
    }
    best
}

/// Scores a submission: one answer index per question, in question order.
pub fn score(quiz: &Quiz, answers: &[i64]) -> Result<QuizResult, ScoreError> {
    if answers.len() != quiz.questions.len() {
        return Err(ScoreError::AnswerCount {
            expected: quiz.questions.len(),
            got: answers.len(),
        });
    }

    let mut tally = StyleTally::default();

    for (question_idx, (question, &answer_idx)) in quiz.questions.iter().zip(answers).enumerate() {
        let answer = usize::try_from(answer_idx)
            .ok()
            .and_then(|i| question.answers.get(i))
            .ok_or(ScoreError::AnswerOutOfRange {
                question: question_idx,
                index: answer_idx,
                available: question.answers.len(),
            })?;
        tally.increment(answer.style);
    }

    Ok(QuizResult {
        primary_style: calculate_result(&tally),
        breakdown: tally,
    })
}
