use chrono::{TimeZone, Utc};

use super::*;
use crate::catalog::current_user;
use crate::model::limits::WallLimits;
use crate::wall::Viewer;

fn ids(prayers: &[PrayerRequest]) -> Vec<&str> {
    prayers.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_dashboard_from_catalog() {
    let feed = PrayerFeed::load(WallLimits::default_v1());
    let view = dashboard(&feed, &current_user());
    assert_eq!(ids(&view.my_prayers), vec!["prayer-1", "prayer-12"]);
    assert_eq!(view.my_comments.len(), 6);
    assert!(view.my_comments.iter().all(|c| c.user_id == "user-1"));
    assert_eq!(ids(&view.bookmarked), vec!["prayer-1", "prayer-5", "prayer-12"]);
    assert_eq!(
        ids(&view.praying_for),
        vec!["prayer-1", "prayer-3", "prayer-5", "prayer-12", "prayer-18"]
    );
}

#[test]
fn test_dashboard_follows_local_changes() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let viewer = Viewer::SignedIn(current_user());
    let now = Utc.with_ymd_and_hms(2026, 2, 27, 9, 0, 0).unwrap();
    feed.compose(&viewer, "A new request", false, now).unwrap();
    feed.submit_comment(&viewer, "prayer-9", "Amen", now).unwrap();
    feed.toggle_bookmark(&viewer, "prayer-1").unwrap();

    let view = dashboard(&feed, &current_user());
    assert_eq!(view.my_prayers.len(), 3);
    assert_eq!(view.my_comments.len(), 7);
    assert_eq!(ids(&view.bookmarked), vec!["prayer-5", "prayer-12"]);
}

#[test]
fn test_profile() {
    let feed = PrayerFeed::load(WallLimits::default_v1());
    let view = profile(&feed, "user-2").unwrap();
    assert_eq!(view.user.first_name, "David");
    assert_eq!(ids(&view.prayers), vec!["prayer-2", "prayer-13"]);
    assert_eq!(view.comments.len(), 4);
    assert!(view.reacted.is_empty());
}

#[test]
fn test_profile_hides_anonymous_prayers() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let viewer = Viewer::SignedIn(current_user());
    let now = Utc.with_ymd_and_hms(2026, 2, 27, 9, 0, 0).unwrap();
    feed.compose(&viewer, "Private", true, now).unwrap();
    let view = profile(&feed, "user-1").unwrap();
    assert_eq!(ids(&view.prayers), vec!["prayer-1", "prayer-12"]);
}

#[test]
fn test_profile_unknown_user() {
    let feed = PrayerFeed::load(WallLimits::default_v1());
    assert!(profile(&feed, "user-404").is_none());
}

#[test]
fn test_prayer_detail() {
    let feed = PrayerFeed::load(WallLimits::default_v1());
    let detail = prayer_detail(&feed, "prayer-5").unwrap();
    assert_eq!(detail.prayer.author_name, "James");
    assert_eq!(detail.thread.comments.len(), 3);
    assert_eq!(detail.thread.total, 15);
    assert!(prayer_detail(&feed, "prayer-99").is_none());
}
