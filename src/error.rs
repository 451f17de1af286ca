use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("invalid answer `{0}` (use an option index or `-` for unanswered)")]
    InvalidAnswer(String),
    #[error("too many answers: got {got}, the quiz has {max} questions")]
    TooManyAnswers { got: usize, max: usize },
    #[error("option {option} is out of range (each question has {max} options)")]
    OptionOutOfRange { option: usize, max: usize },
    #[error("quiz is already complete; retake to answer again")]
    AlreadyComplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallError {
    #[error("sign in to continue")]
    NotSignedIn,
    #[error("only the author can change prayer {0}")]
    NotAuthor(String),
    #[error("prayer not found: {0}")]
    PrayerNotFound(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("content is empty")]
    EmptyContent,
    #[error("content is too long (limit {limit} characters)")]
    TooLong { limit: usize },
    #[error("content mentions self-harm and was not posted")]
    CrisisDetected,
}
