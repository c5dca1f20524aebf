use thiserror::Error;

use crate::catalog::ItemCategory;
use crate::quests::QuestId;

/// Errors produced by engine operations.
///
/// Everything here is a recoverable, synchronous rejection: state is left
/// unchanged and the UI can surface the reason (a locked shop affordance,
/// a disabled claim button). `UnknownItem` and friends indicate a caller
/// bug rather than a user action and should be treated as such upstream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Insufficient funds: item costs {cost}, balance is {balance}")]
    InsufficientFunds { cost: u32, balance: u32 },

    #[error("Item not owned: {0}")]
    NotOwned(String),

    #[error("Item {item} is a {actual:?} item, not {requested:?}")]
    CategoryMismatch {
        item: String,
        requested: ItemCategory,
        actual: ItemCategory,
    },

    #[error("Quest not completed: {0}")]
    NotCompleted(QuestId),

    #[error("Quest already claimed: {0}")]
    AlreadyClaimed(QuestId),

    #[error("Current question already answered")]
    AlreadyAnswered,

    #[error("Option {index} out of range for a question with {options} options")]
    InvalidOption { index: usize, options: usize },

    #[error("Quiz already finished")]
    QuizFinished,

    #[error("No quiz in progress")]
    NoActiveQuiz,

    #[error("Invalid quiz question: {0}")]
    InvalidQuestion(String),

    #[error("Nickname must not be empty")]
    InvalidNickname,

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Profile service error: {0}")]
    Profile(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
