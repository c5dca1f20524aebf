//! Quiz session state machine
//!
//! A session moves strictly forward: exactly one answer per question,
//! `advance` to step to the next one, and completion reports the result
//! exactly once. The session never touches the wallet; the caller
//! credits the reward.

use tracing::debug;

use crate::core::error::{EngineError, Result};
use crate::core::types::Glowbits;
use crate::quiz::question::{QuizKind, QuizQuestion};

/// Result of recording an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The option that was correct, for the explanation view
    pub correct_option: usize,
}

/// Final tally of a finished (or skipped) session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub reward: Glowbits,
}

/// What happened after `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question
    Next,
    /// That was the last question; the session is finished
    Completed(QuizResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizState {
    InProgress,
    Completed,
}

/// One run through a quiz. Restarting means building a fresh session.
#[derive(Debug, Clone)]
pub struct QuizSession {
    kind: QuizKind,
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    answered: bool,
    state: QuizState,
}

impl QuizSession {
    /// Start a session over a validated question list
    pub fn new(kind: QuizKind, questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(EngineError::InvalidQuestion(
                "a quiz needs at least one question".into(),
            ));
        }
        for (i, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(EngineError::InvalidQuestion(format!(
                    "question {i} has fewer than two options"
                )));
            }
            if q.correct >= q.options.len() {
                return Err(EngineError::InvalidQuestion(format!(
                    "question {i} marks option {} correct but has {} options",
                    q.correct,
                    q.options.len()
                )));
            }
        }
        Ok(Self {
            kind,
            questions,
            current: 0,
            score: 0,
            answered: false,
            state: QuizState::InProgress,
        })
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    /// Zero-based index of the question being shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// The question currently awaiting an answer
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Record the answer for the current question.
    ///
    /// Exactly one answer per question: a second call is rejected, not
    /// overwritten.
    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome> {
        if self.state == QuizState::Completed {
            return Err(EngineError::QuizFinished);
        }
        if self.answered {
            return Err(EngineError::AlreadyAnswered);
        }
        let question = &self.questions[self.current];
        if option >= question.options.len() {
            return Err(EngineError::InvalidOption {
                index: option,
                options: question.options.len(),
            });
        }

        self.answered = true;
        let correct = option == question.correct;
        if correct {
            self.score += 1;
        }
        Ok(AnswerOutcome {
            correct,
            correct_option: question.correct,
        })
    }

    /// Step to the next question, or finish after the last one.
    ///
    /// Completion is reported exactly once; advancing a finished session
    /// is an error.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.state == QuizState::Completed {
            return Err(EngineError::QuizFinished);
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.answered = false;
            Ok(Advance::Next)
        } else {
            self.state = QuizState::Completed;
            let result = self.result();
            debug!(
                kind = ?self.kind,
                score = result.score,
                total = result.total,
                reward = result.reward,
                "quiz completed"
            );
            Ok(Advance::Completed(result))
        }
    }

    /// Abandon the quiz, keeping whatever score has accumulated
    pub fn skip(mut self) -> QuizResult {
        self.state = QuizState::Completed;
        self.result()
    }

    fn result(&self) -> QuizResult {
        QuizResult {
            score: self.score,
            total: self.questions.len() as u32,
            reward: self.score * self.kind.reward_per_correct(),
        }
    }
}
