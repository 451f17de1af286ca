use serde::Serialize;

use crate::model::features::{FEATURE_COUNT, FeatureKey, feature_order};
use crate::model::quiz::QuizDestination;
use crate::quiz::defs::{builtin_destinations, builtin_questions};

/// Per-feature point totals for one answer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureScores {
    totals: [u32; FEATURE_COUNT],
}

impl FeatureScores {
    pub fn get(&self, key: FeatureKey) -> u32 {
        self.totals[key.index()]
    }

    fn add(&mut self, key: FeatureKey, points: u32) {
        self.totals[key.index()] += points;
    }

    /// Pairs in canonical order.
    pub fn ordered(&self) -> Vec<(FeatureKey, u32)> {
        feature_order().iter().map(|&k| (k, self.get(k))).collect()
    }

    /// Highest score; on ties the key earliest in canonical order wins.
    pub fn winner(&self) -> FeatureKey {
        let order = feature_order();
        let mut winner = order[0];
        let mut max_score = self.get(winner);
        for &key in order.iter() {
            let score = self.get(key);
            if score > max_score {
                max_score = score;
                winner = key;
            }
        }
        winner
    }
}

impl Serialize for FeatureScores {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (key, score) in self.ordered() {
            map.serialize_entry(key.as_str(), &score)?;
        }
        map.end()
    }
}

/// Unanswered, missing and out-of-range entries contribute nothing; entries
/// past the last question are ignored.
pub fn score_answers(answers: &[Option<usize>]) -> FeatureScores {
    let mut scores = FeatureScores::default();
    for (question, &answer) in builtin_questions().iter().zip(answers.iter()) {
        let Some(option) = answer.and_then(|idx| question.options.get(idx)) else {
            continue;
        };
        for &(key, points) in option.points {
            scores.add(key, points);
        }
    }
    scores
}

pub fn destination_for(key: FeatureKey) -> &'static QuizDestination {
    builtin_destinations()
        .iter()
        .find(|d| d.key == key)
        .unwrap_or_else(|| panic!("quiz destination table has no entry for `{key}`"))
}

pub fn calculate_result(answers: &[Option<usize>]) -> &'static QuizDestination {
    destination_for(score_answers(answers).winner())
}

#[cfg(test)]
#[path = "../../tests/src_inline/quiz/scoring.rs"]
mod tests;
