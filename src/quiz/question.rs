//! Quiz questions and quiz kinds

use serde::{Deserialize, Serialize};

use crate::core::types::Glowbits;

/// Which quiz surface a session belongs to.
///
/// Each kind pays a fixed Glowbits rate per correct answer, so a quiz's
/// maximum payout is `len * reward_per_correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    /// The standalone media-literacy quiz on the home page
    MediaLiteracy,
    /// Comprehension quizzes attached to individual articles
    Article,
}

impl QuizKind {
    pub fn reward_per_correct(self) -> Glowbits {
        match self {
            QuizKind::MediaLiteracy => 20,
            QuizKind::Article => 10,
        }
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    /// At least two options
    pub options: Vec<String>,
    /// Index into `options`
    pub correct: usize,
    /// Shown to the user after answering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
