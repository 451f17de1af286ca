use serde::Serialize;

use crate::report::{FeedPage, QuizReport};

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

pub fn render_quiz_json(report: &QuizReport) -> Result<String, serde_json::Error> {
    render_json(report)
}

pub fn render_feed_json(page: &FeedPage) -> Result<String, serde_json::Error> {
    render_json(page)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
