use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::catalog::defs::{
    CURRENT_USER_ID, CommentDef, PrayerDef, UserDef, builtin_comments, builtin_prayers,
    builtin_reactions, builtin_users,
};
use crate::model::prayer_wall::{PrayerComment, PrayerReaction, PrayerRequest, PrayerWallUser};

pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|t| t.with_timezone(&Utc))
}

fn seed_timestamp(text: &str) -> DateTime<Utc> {
    parse_timestamp(text)
        .unwrap_or_else(|e| panic!("catalog seed timestamp `{text}` is not RFC 3339: {e}"))
}

pub fn load_catalog() -> Catalog {
    let users: Vec<PrayerWallUser> = builtin_users().iter().map(map_user).collect();
    let current_user = users
        .iter()
        .find(|u| u.id == CURRENT_USER_ID)
        .cloned()
        .unwrap_or_else(|| panic!("catalog seed has no current user `{CURRENT_USER_ID}`"));

    let mut prayers: Vec<PrayerRequest> = builtin_prayers().iter().map(map_prayer).collect();
    // stable: equal timestamps keep seed order
    prayers.sort_by(|a, b| b.last_activity_at.cmp(&a.last_activity_at));

    let comments = builtin_comments().iter().map(map_comment).collect();

    let reactions = builtin_reactions()
        .iter()
        .map(|def| {
            (
                def.prayer_id.to_string(),
                PrayerReaction {
                    prayer_id: def.prayer_id.to_string(),
                    is_praying: def.is_praying,
                    is_bookmarked: def.is_bookmarked,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    tracing::debug!(
        users = users.len(),
        prayers = prayers.len(),
        reactions = reactions.len(),
        "prayer wall catalog loaded"
    );

    Catalog {
        users,
        prayers,
        comments,
        reactions,
        current_user,
    }
}

fn map_user(def: &UserDef) -> PrayerWallUser {
    PrayerWallUser {
        id: def.id.to_string(),
        first_name: def.first_name.to_string(),
        last_name: def.last_name.to_string(),
        avatar_url: def.avatar_url.map(str::to_string),
        bio: def.bio.to_string(),
        joined_date: seed_timestamp(def.joined_date),
    }
}

fn map_prayer(def: &PrayerDef) -> PrayerRequest {
    PrayerRequest {
        id: def.id.to_string(),
        user_id: def.user_id.map(str::to_string),
        author_name: def.author_name.to_string(),
        author_avatar_url: def.author_avatar_url.map(str::to_string),
        is_anonymous: def.is_anonymous,
        content: def.content.to_string(),
        is_answered: def.answered_at.is_some(),
        answered_text: def.answered_text.map(str::to_string),
        answered_at: def.answered_at.map(seed_timestamp),
        created_at: seed_timestamp(def.created_at),
        last_activity_at: seed_timestamp(def.last_activity_at),
        praying_count: def.praying_count,
        comment_count: def.comment_count,
    }
}

fn map_comment(def: &CommentDef) -> PrayerComment {
    PrayerComment {
        id: def.id.to_string(),
        prayer_id: def.prayer_id.to_string(),
        user_id: def.user_id.to_string(),
        author_name: def.author_name.to_string(),
        author_avatar_url: def.author_avatar_url.map(str::to_string),
        content: def.content.to_string(),
        created_at: seed_timestamp(def.created_at),
    }
}
