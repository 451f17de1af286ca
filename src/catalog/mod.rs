pub mod defs;
pub mod loader;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::prayer_wall::{PrayerComment, PrayerReaction, PrayerRequest, PrayerWallUser};

pub use loader::parse_timestamp;

/// Read-only mock backend. Only reachable through the accessors below, which
/// hand out owned copies so callers can mutate freely.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub users: Vec<PrayerWallUser>,
    pub prayers: Vec<PrayerRequest>,
    pub comments: Vec<PrayerComment>,
    pub reactions: BTreeMap<String, PrayerReaction>,
    pub current_user: PrayerWallUser,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(loader::load_catalog);

/// Sorted by last activity, newest first.
pub fn get_prayers() -> Vec<PrayerRequest> {
    CATALOG.prayers.clone()
}

pub fn get_comments(prayer_id: &str) -> Vec<PrayerComment> {
    CATALOG
        .comments
        .iter()
        .filter(|c| c.prayer_id == prayer_id)
        .cloned()
        .collect()
}

pub fn get_all_comments() -> Vec<PrayerComment> {
    CATALOG.comments.clone()
}

pub fn get_user(user_id: &str) -> Option<PrayerWallUser> {
    CATALOG.users.iter().find(|u| u.id == user_id).cloned()
}

pub fn get_users() -> Vec<PrayerWallUser> {
    CATALOG.users.clone()
}

/// Keyed by prayer id.
pub fn get_reactions() -> BTreeMap<String, PrayerReaction> {
    CATALOG.reactions.clone()
}

/// Case-insensitive match on first name.
pub fn get_user_by_name(first_name: &str) -> Option<PrayerWallUser> {
    let wanted = first_name.to_lowercase();
    CATALOG
        .users
        .iter()
        .find(|u| u.first_name.to_lowercase() == wanted)
        .cloned()
}

pub fn current_user() -> PrayerWallUser {
    CATALOG.current_user.clone()
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
