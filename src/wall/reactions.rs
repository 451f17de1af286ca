use std::collections::BTreeMap;

use crate::catalog::get_reactions;
use crate::model::prayer_wall::PrayerReaction;

/// The signed-in user's praying/bookmark state, keyed by prayer id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionStore {
    reactions: BTreeMap<String, PrayerReaction>,
}

impl ReactionStore {
    pub fn from_catalog() -> Self {
        Self {
            reactions: get_reactions(),
        }
    }

    pub fn get(&self, prayer_id: &str) -> Option<&PrayerReaction> {
        self.reactions.get(prayer_id)
    }

    pub fn is_praying(&self, prayer_id: &str) -> bool {
        self.get(prayer_id).is_some_and(|r| r.is_praying)
    }

    pub fn is_bookmarked(&self, prayer_id: &str) -> bool {
        self.get(prayer_id).is_some_and(|r| r.is_bookmarked)
    }

    fn entry(&mut self, prayer_id: &str) -> &mut PrayerReaction {
        self.reactions
            .entry(prayer_id.to_string())
            .or_insert_with(|| PrayerReaction {
                prayer_id: prayer_id.to_string(),
                is_praying: false,
                is_bookmarked: false,
            })
    }

    /// Returns whether the user was praying before the toggle.
    pub fn toggle_praying(&mut self, prayer_id: &str) -> bool {
        let reaction = self.entry(prayer_id);
        let was_praying = reaction.is_praying;
        reaction.is_praying = !was_praying;
        was_praying
    }

    pub fn toggle_bookmark(&mut self, prayer_id: &str) {
        let reaction = self.entry(prayer_id);
        reaction.is_bookmarked = !reaction.is_bookmarked;
    }

    pub fn bookmarked_ids(&self) -> Vec<&str> {
        self.reactions
            .values()
            .filter(|r| r.is_bookmarked)
            .map(|r| r.prayer_id.as_str())
            .collect()
    }

    pub fn praying_ids(&self) -> Vec<&str> {
        self.reactions
            .values()
            .filter(|r| r.is_praying)
            .map(|r| r.prayer_id.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/wall/reactions.rs"]
mod tests;
