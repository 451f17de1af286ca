use crate::error::QuizError;
use crate::model::quiz::{AnswerVector, OPTIONS_PER_QUESTION, QUESTION_COUNT, QuizDestination};
use crate::quiz::scoring::calculate_result;

/// Walks one visitor through the quiz. `current == QUESTION_COUNT` means the
/// result is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    current: usize,
    answers: AnswerVector,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_question(&self) -> usize {
        self.current
    }

    pub fn answers(&self) -> &AnswerVector {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.current >= QUESTION_COUNT
    }

    /// Progress bar width while a question is showing; `None` on the result.
    pub fn progress_percent(&self) -> Option<usize> {
        if self.is_complete() {
            None
        } else {
            Some((self.current + 1) * 100 / QUESTION_COUNT)
        }
    }

    pub fn select(&mut self, option: usize) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::AlreadyComplete);
        }
        if option >= OPTIONS_PER_QUESTION {
            return Err(QuizError::OptionOutOfRange {
                option,
                max: OPTIONS_PER_QUESTION,
            });
        }
        self.answers[self.current] = Some(option);
        self.current += 1;
        tracing::debug!(question = self.current, option, "quiz answer recorded");
        Ok(())
    }

    /// Keeps the answer already given so it shows as selected again.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn retake(&mut self) {
        self.current = 0;
        self.answers = [None; QUESTION_COUNT];
    }

    pub fn result(&self) -> Option<&'static QuizDestination> {
        self.is_complete().then(|| calculate_result(&self.answers))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/quiz/session.rs"]
mod tests;
