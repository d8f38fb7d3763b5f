use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The question id is not in the bank, or the answer index is out of range.
    #[error("invalid selection: question {question_id}, answer {answer_index}")]
    InvalidSelection {
        question_id: u32,
        answer_index: usize,
    },

    /// A result was requested before every question had an answer.
    #[error("quiz is incomplete: {answered} of {total} questions answered")]
    IncompleteQuiz { answered: usize, total: usize },

    /// The result table has no copy for this flavor.
    #[error("no result copy for flavor '{0}'")]
    UnknownFlavor(String),

    /// A flavor's total no longer fits in a `u32`.
    #[error("score for flavor '{0}' overflowed")]
    ScoreOverflow(String),

    #[error("invalid question set: {0}")]
    InvalidQuestionSet(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
