pub mod json;
pub mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::prayer_wall::PrayerRequest;
use crate::model::quiz::QuizDestination;
use crate::quiz::{FeatureScores, destination_for, score_answers};
use crate::time::time_ago;
use crate::wall::PrayerFeed;
use crate::wall::display::{author_link, truncate_content};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub answers: Vec<Option<usize>>,
    pub scores: FeatureScores,
    pub destination: QuizDestination,
}

impl QuizReport {
    pub fn build(answers: &[Option<usize>]) -> Self {
        let scores = score_answers(answers);
        Self {
            answers: answers.to_vec(),
            scores,
            destination: *destination_for(scores.winner()),
        }
    }
}

/// One prayer as a card on the wall, relative to a reference instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCard {
    #[serde(flatten)]
    pub prayer: PrayerRequest,
    pub posted_ago: String,
    pub active_ago: String,
    pub preview: String,
    pub author_link: Option<String>,
    pub is_praying: bool,
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub page: usize,
    pub has_more: bool,
    pub prayers: Vec<FeedCard>,
}

pub fn feed_card(feed: &PrayerFeed, prayer: &PrayerRequest, now: DateTime<Utc>) -> FeedCard {
    FeedCard {
        prayer: prayer.clone(),
        posted_ago: time_ago(prayer.created_at, now),
        active_ago: time_ago(prayer.last_activity_at, now),
        preview: truncate_content(&prayer.content, feed.limits()),
        author_link: author_link(prayer),
        is_praying: feed.reactions().is_praying(&prayer.id),
        is_bookmarked: feed.reactions().is_bookmarked(&prayer.id),
    }
}

/// Loads pages until `page` (1-based) is available and returns just that page.
pub fn feed_page(feed: &mut PrayerFeed, page: usize, now: DateTime<Utc>) -> FeedPage {
    let page = page.max(1);
    let per_page = feed.limits().prayers_per_page.max(1);
    let wanted = page.saturating_mul(per_page);
    while feed.prayers().len() < wanted && feed.has_more() {
        feed.load_more();
    }
    let feed: &PrayerFeed = feed;
    let start = (page - 1).saturating_mul(per_page).min(feed.prayers().len());
    let end = wanted.min(feed.prayers().len());
    let prayers = feed.prayers()[start..end]
        .iter()
        .map(|p| feed_card(feed, p, now))
        .collect();
    FeedPage {
        page,
        has_more: feed.has_more() || end < feed.prayers().len(),
        prayers,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
