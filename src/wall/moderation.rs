use serde::Serialize;

use crate::error::WallError;
use crate::model::limits::WallLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub phone: Option<&'static str>,
    pub text: Option<&'static str>,
    pub link: &'static str,
}

const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        phone: Some("988"),
        text: None,
        link: "https://988lifeline.org",
    },
    CrisisResource {
        name: "Crisis Text Line",
        phone: None,
        text: Some("Text HOME to 741741"),
        link: "https://www.crisistextline.org",
    },
    CrisisResource {
        name: "SAMHSA National Helpline",
        phone: Some("1-800-662-4357"),
        text: None,
        link: "https://www.samhsa.gov/find-help/national-helpline",
    },
];

const SELF_HARM_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "hurt myself",
    "end my life",
    "want to die",
    "better off dead",
];

pub fn crisis_resources() -> &'static [CrisisResource] {
    CRISIS_RESOURCES
}

pub fn contains_crisis_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    SELF_HARM_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn validate(content: &str, limit: usize) -> Result<String, WallError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(WallError::EmptyContent);
    }
    if trimmed.chars().count() > limit {
        return Err(WallError::TooLong { limit });
    }
    if contains_crisis_keyword(trimmed) {
        tracing::warn!("post held back: crisis keyword detected");
        return Err(WallError::CrisisDetected);
    }
    Ok(trimmed.to_string())
}

/// Returns the trimmed text ready to post.
pub fn validate_prayer(content: &str, limits: &WallLimits) -> Result<String, WallError> {
    validate(content, limits.max_prayer_length)
}

pub fn validate_comment(content: &str, limits: &WallLimits) -> Result<String, WallError> {
    validate(content, limits.max_comment_length)
}

#[cfg(test)]
#[path = "../../tests/src_inline/wall/moderation.rs"]
mod tests;
