use serde::Serialize;

use crate::catalog::get_user;
use crate::model::prayer_wall::{PrayerComment, PrayerRequest, PrayerWallUser};
use crate::wall::feed::{CommentThread, PrayerFeed};

/// The signed-in user's own corner of the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: PrayerWallUser,
    pub my_prayers: Vec<PrayerRequest>,
    pub my_comments: Vec<PrayerComment>,
    pub bookmarked: Vec<PrayerRequest>,
    pub praying_for: Vec<PrayerRequest>,
}

/// Public profile; anonymous prayers never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: PrayerWallUser,
    pub prayers: Vec<PrayerRequest>,
    pub comments: Vec<PrayerComment>,
    /// Reactions are private to their owner.
    pub reacted: Vec<PrayerRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerDetail {
    pub prayer: PrayerRequest,
    pub thread: CommentThread,
}

fn prayers_where(feed: &PrayerFeed, keep: impl Fn(&PrayerRequest) -> bool) -> Vec<PrayerRequest> {
    feed.prayers().iter().filter(|p| keep(p)).cloned().collect()
}

pub fn dashboard(feed: &PrayerFeed, user: &PrayerWallUser) -> DashboardView {
    let reactions = feed.reactions();
    DashboardView {
        user: user.clone(),
        my_prayers: prayers_where(feed, |p| p.user_id.as_deref() == Some(user.id.as_str())),
        my_comments: feed
            .all_comments()
            .into_iter()
            .filter(|c| c.user_id == user.id)
            .collect(),
        bookmarked: prayers_where(feed, |p| reactions.is_bookmarked(&p.id)),
        praying_for: prayers_where(feed, |p| reactions.is_praying(&p.id)),
    }
}

pub fn profile(feed: &PrayerFeed, user_id: &str) -> Option<ProfileView> {
    let user = get_user(user_id)?;
    Some(ProfileView {
        prayers: prayers_where(feed, |p| {
            !p.is_anonymous && p.user_id.as_deref() == Some(user_id)
        }),
        comments: feed
            .all_comments()
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect(),
        reacted: Vec::new(),
        user,
    })
}

pub fn prayer_detail(feed: &PrayerFeed, prayer_id: &str) -> Option<PrayerDetail> {
    let prayer = feed.find(prayer_id)?.clone();
    let thread = feed.thread(prayer_id).ok()?;
    Some(PrayerDetail { prayer, thread })
}

#[cfg(test)]
#[path = "../../tests/src_inline/wall/views.rs"]
mod tests;
