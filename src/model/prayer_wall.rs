use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerWallUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// `None` renders an initials avatar.
    pub avatar_url: Option<String>,
    pub bio: String,
    pub joined_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    pub id: String,
    /// `None` for anonymous prayers.
    pub user_id: Option<String>,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub is_anonymous: bool,
    pub content: String,
    pub is_answered: bool,
    pub answered_text: Option<String>,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Bumped by new comments; the feed sorts on it.
    pub last_activity_at: DateTime<Utc>,
    pub praying_count: u32,
    pub comment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerComment {
    pub id: String,
    pub prayer_id: String,
    pub user_id: String,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerReaction {
    pub prayer_id: String,
    pub is_praying: bool,
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerReport {
    pub prayer_id: String,
    pub reason: String,
}
