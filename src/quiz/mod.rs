pub mod defs;
pub mod scoring;
pub mod session;

pub use scoring::{FeatureScores, calculate_result, destination_for, score_answers};
pub use session::QuizSession;

use crate::error::QuizError;
use crate::model::quiz::QUESTION_COUNT;

/// Comma-separated selections, e.g. `0,-,2,,1`. Blank, `-`, `_` and `null`
/// leave a question unanswered.
pub fn parse_answers(text: &str) -> Result<Vec<Option<usize>>, QuizError> {
    let mut answers = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        let answer = match token {
            "" | "-" | "_" | "null" => None,
            other => Some(
                other
                    .parse::<usize>()
                    .map_err(|_| QuizError::InvalidAnswer(other.to_string()))?,
            ),
        };
        answers.push(answer);
    }
    if answers.len() > QUESTION_COUNT {
        return Err(QuizError::TooManyAnswers {
            got: answers.len(),
            max: QUESTION_COUNT,
        });
    }
    Ok(answers)
}

#[cfg(test)]
#[path = "../../tests/src_inline/quiz/tests.rs"]
mod tests;
