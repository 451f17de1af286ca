use serde::Serialize;

use crate::model::features::FeatureKey;

pub const QUESTION_COUNT: usize = 5;
pub const OPTIONS_PER_QUESTION: usize = 4;

/// One selection per question; `None` means not answered yet.
pub type AnswerVector = [Option<usize>; QUESTION_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub label: &'static str,
    /// Sparse: features not listed score zero for this option.
    pub points: &'static [(FeatureKey, u32)],
}

impl QuizOption {
    pub fn points_for(&self, key: FeatureKey) -> u32 {
        self.points
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [QuizOption; OPTIONS_PER_QUESTION],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDestination {
    pub key: FeatureKey,
    pub name: &'static str,
    pub route: &'static str,
    pub cta_label: &'static str,
    pub description: &'static str,
    pub verse: &'static str,
    pub verse_reference: &'static str,
}
