use chrono::TimeZone;

use super::*;
use crate::catalog::{current_user, get_user};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 27, 9, 0, 0).unwrap()
}

fn sarah() -> Viewer {
    Viewer::SignedIn(current_user())
}

fn small_pages() -> WallLimits {
    WallLimits {
        prayers_per_page: 5,
        ..WallLimits::default_v1()
    }
}

#[test]
fn test_load_first_page() {
    let feed = PrayerFeed::load(WallLimits::default_v1());
    assert_eq!(feed.prayers().len(), 18);
    assert!(!feed.has_more());
    assert_eq!(feed.prayers()[0].id, "prayer-1");
}

#[test]
fn test_paging() {
    let mut feed = PrayerFeed::load(small_pages());
    assert_eq!(feed.prayers().len(), 5);
    assert!(feed.has_more());
    assert_eq!(feed.load_more(), 5);
    assert_eq!(feed.load_more(), 5);
    assert_eq!(feed.load_more(), 3);
    assert!(!feed.has_more());
    assert_eq!(feed.load_more(), 0);
    assert_eq!(feed.prayers().len(), 18);
}

#[test]
fn test_load_more_keeps_local_changes() {
    let mut feed = PrayerFeed::load(small_pages());
    feed.compose(&sarah(), "Please pray for my exams", false, now())
        .unwrap();
    feed.toggle_praying("prayer-2").unwrap();
    feed.load_all();
    assert_eq!(feed.prayers().len(), 19);
    assert!(feed.prayers()[0].id.starts_with("prayer-new-"));
    assert_eq!(feed.find("prayer-2").unwrap().praying_count, 32);
}

#[test]
fn test_compose_requires_sign_in() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let err = feed
        .compose(&Viewer::Anonymous, "hello", false, now())
        .unwrap_err();
    assert_eq!(err, WallError::NotSignedIn);
    assert_eq!(feed.prayers().len(), 18);
}

#[test]
fn test_compose_inserts_at_top() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let prayer = feed
        .compose(&sarah(), "  Pray for my family  ", false, now())
        .unwrap()
        .clone();
    assert!(prayer.id.starts_with("prayer-new-"));
    assert_eq!(prayer.content, "Pray for my family");
    assert_eq!(prayer.user_id.as_deref(), Some("user-1"));
    assert_eq!(prayer.author_name, "Sarah");
    assert_eq!(prayer.praying_count, 0);
    assert_eq!(prayer.comment_count, 0);
    assert_eq!(prayer.created_at, now());
    assert_eq!(feed.prayers()[0], prayer);
}

#[test]
fn test_compose_anonymous_hides_author() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let prayer = feed
        .compose(&sarah(), "Quiet request", true, now())
        .unwrap();
    assert!(prayer.is_anonymous);
    assert_eq!(prayer.user_id, None);
    assert_eq!(prayer.author_name, "Anonymous");
}

#[test]
fn test_compose_ids_are_unique() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let a = feed.compose(&sarah(), "one", false, now()).unwrap().id.clone();
    let b = feed.compose(&sarah(), "two", false, now()).unwrap().id.clone();
    assert_ne!(a, b);
}

#[test]
fn test_compose_validation() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    assert_eq!(
        feed.compose(&sarah(), "   ", false, now()).unwrap_err(),
        WallError::EmptyContent
    );
    let long = "a".repeat(1001);
    assert_eq!(
        feed.compose(&sarah(), &long, false, now()).unwrap_err(),
        WallError::TooLong { limit: 1000 }
    );
    assert_eq!(
        feed.compose(&sarah(), "I think about suicide", false, now())
            .unwrap_err(),
        WallError::CrisisDetected
    );
    assert_eq!(feed.prayers().len(), 18);
}

#[test]
fn test_toggle_praying_adjusts_count() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    // prayer-1 starts with the viewer praying
    assert_eq!(feed.toggle_praying("prayer-1").unwrap(), 46);
    assert_eq!(feed.toggle_praying("prayer-1").unwrap(), 47);
    assert_eq!(feed.toggle_praying("prayer-2").unwrap(), 32);
    assert!(feed.reactions().is_praying("prayer-2"));
}

#[test]
fn test_toggle_praying_never_below_zero() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let id = feed.compose(&sarah(), "new", false, now()).unwrap().id.clone();
    assert_eq!(feed.toggle_praying(&id).unwrap(), 1);
    assert_eq!(feed.toggle_praying(&id).unwrap(), 0);
}

#[test]
fn test_toggle_praying_unknown_prayer() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    assert_eq!(
        feed.toggle_praying("prayer-99").unwrap_err(),
        WallError::PrayerNotFound("prayer-99".to_string())
    );
    assert!(feed.reactions().get("prayer-99").is_none());
}

#[test]
fn test_toggle_bookmark() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    assert_eq!(
        feed.toggle_bookmark(&Viewer::Anonymous, "prayer-2").unwrap_err(),
        WallError::NotSignedIn
    );
    assert!(feed.toggle_bookmark(&sarah(), "prayer-2").unwrap());
    assert!(!feed.toggle_bookmark(&sarah(), "prayer-1").unwrap());
}

#[test]
fn test_submit_comment() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let comment = feed
        .submit_comment(&sarah(), "prayer-2", " Praying for you ", now())
        .unwrap();
    assert!(comment.id.starts_with("comment-local-"));
    assert_eq!(comment.content, "Praying for you");
    assert_eq!(comment.user_id, "user-1");
    assert_eq!(comment.author_name, "Sarah");

    let prayer = feed.find("prayer-2").unwrap();
    assert_eq!(prayer.comment_count, 9);
    assert_eq!(prayer.last_activity_at, now());

    let comments = feed.comments_for("prayer-2");
    assert_eq!(comments[0], comment);
    assert_eq!(comments.len(), 4);
}

#[test]
fn test_local_comments_newest_first() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let first = feed
        .submit_comment(&sarah(), "prayer-13", "first", now())
        .unwrap();
    let second = feed
        .submit_comment(&sarah(), "prayer-13", "second", now())
        .unwrap();
    assert_eq!(feed.comments_for("prayer-13"), vec![second, first]);
}

#[test]
fn test_submit_comment_errors() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    assert_eq!(
        feed.submit_comment(&Viewer::Anonymous, "prayer-2", "hi", now())
            .unwrap_err(),
        WallError::NotSignedIn
    );
    assert_eq!(
        feed.submit_comment(&sarah(), "prayer-99", "hi", now())
            .unwrap_err(),
        WallError::PrayerNotFound("prayer-99".to_string())
    );
    let long = "b".repeat(501);
    assert_eq!(
        feed.submit_comment(&sarah(), "prayer-2", &long, now())
            .unwrap_err(),
        WallError::TooLong { limit: 500 }
    );
    assert_eq!(feed.find("prayer-2").unwrap().comment_count, 8);
}

#[test]
fn test_thread_caps_visible_comments() {
    let feed = PrayerFeed::load(WallLimits::default_v1());
    let thread = feed.thread("prayer-1").unwrap();
    assert_eq!(thread.comments.len(), 5);
    assert_eq!(thread.total, 12);
    assert!(thread.has_more());

    let quiet = feed.thread("prayer-13").unwrap();
    assert!(quiet.comments.is_empty());
    assert!(!quiet.has_more());
}

#[test]
fn test_mark_answered() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    feed.mark_answered(&sarah(), "prayer-1", "  God is good  ", now())
        .unwrap();
    let prayer = feed.find("prayer-1").unwrap();
    assert!(prayer.is_answered);
    assert_eq!(prayer.answered_text.as_deref(), Some("God is good"));
    assert_eq!(prayer.answered_at, Some(now()));
}

#[test]
fn test_mark_answered_blank_praise() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    feed.mark_answered(&sarah(), "prayer-1", "   ", now()).unwrap();
    let prayer = feed.find("prayer-1").unwrap();
    assert!(prayer.is_answered);
    assert_eq!(prayer.answered_text, None);
}

#[test]
fn test_only_author_changes_prayer() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let david = Viewer::SignedIn(get_user("user-2").unwrap());
    assert_eq!(
        feed.mark_answered(&david, "prayer-1", "", now()).unwrap_err(),
        WallError::NotAuthor("prayer-1".to_string())
    );
    assert_eq!(
        feed.delete(&david, "prayer-1").unwrap_err(),
        WallError::NotAuthor("prayer-1".to_string())
    );
    assert_eq!(
        feed.delete(&Viewer::Anonymous, "prayer-1").unwrap_err(),
        WallError::NotSignedIn
    );
    assert!(feed.find("prayer-1").is_some());
}

#[test]
fn test_delete_own_prayer() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    let removed = feed.delete(&sarah(), "prayer-12").unwrap();
    assert_eq!(removed.id, "prayer-12");
    assert!(feed.find("prayer-12").is_none());
    assert_eq!(feed.prayers().len(), 17);
}

#[test]
fn test_report() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    feed.report("prayer-4", "  spam  ").unwrap();
    assert_eq!(
        feed.reports(),
        &[PrayerReport {
            prayer_id: "prayer-4".to_string(),
            reason: "spam".to_string(),
        }]
    );
    assert!(feed.report("prayer-99", "spam").is_err());
}

#[test]
fn test_toggle_comments() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    assert!(!feed.is_comments_open("prayer-1"));
    assert!(feed.toggle_comments("prayer-1"));
    assert!(feed.is_comments_open("prayer-1"));
    assert!(!feed.toggle_comments("prayer-1"));
}

#[test]
fn test_feed_does_not_touch_catalog() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    feed.toggle_praying("prayer-1").unwrap();
    feed.delete(&sarah(), "prayer-12").unwrap();
    let fresh = PrayerFeed::load(WallLimits::default_v1());
    assert_eq!(fresh.find("prayer-1").unwrap().praying_count, 47);
    assert!(fresh.find("prayer-12").is_some());
}

#[test]
fn test_thread_more_link_follows_comment_count() {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    feed.load_all();
    // five counted, two seeded: nothing beyond the visible cap
    let thread = feed.thread("prayer-6").unwrap();
    assert_eq!(thread.comments.len(), 2);
    assert_eq!(thread.total, 5);
    assert!(!thread.has_more());

    let busy = feed.thread("prayer-1").unwrap();
    assert!(busy.has_more());
    assert_eq!(busy.hidden_count(), 7);
}
