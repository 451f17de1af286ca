use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{get_all_comments, get_comments, get_prayers};
use crate::error::WallError;
use crate::model::limits::WallLimits;
use crate::model::prayer_wall::{PrayerComment, PrayerReport, PrayerRequest};
use crate::wall::Viewer;
use crate::wall::moderation::{validate_comment, validate_prayer};
use crate::wall::reactions::ReactionStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub comments: Vec<PrayerComment>,
    pub total: u32,
    pub visible_limit: usize,
}

impl CommentThread {
    /// Follows the prayer's comment count, not how many comments are loaded.
    pub fn has_more(&self) -> bool {
        self.total as usize > self.visible_limit
    }

    pub fn hidden_count(&self) -> usize {
        (self.total as usize).saturating_sub(self.comments.len())
    }
}

/// Client-side view of the wall: a paged window over the catalog plus every
/// optimistic change the viewer has made since loading it.
#[derive(Debug, Clone)]
pub struct PrayerFeed {
    limits: WallLimits,
    source: Vec<PrayerRequest>,
    loaded: usize,
    prayers: Vec<PrayerRequest>,
    local_comments: BTreeMap<String, Vec<PrayerComment>>,
    reactions: ReactionStore,
    open_comments: BTreeSet<String>,
    reports: Vec<PrayerReport>,
    local_seq: u64,
}

impl PrayerFeed {
    pub fn load(limits: WallLimits) -> Self {
        let mut feed = Self {
            limits,
            source: get_prayers(),
            loaded: 0,
            prayers: Vec::new(),
            local_comments: BTreeMap::new(),
            reactions: ReactionStore::from_catalog(),
            open_comments: BTreeSet::new(),
            reports: Vec::new(),
            local_seq: 0,
        };
        feed.load_more();
        feed
    }

    pub fn limits(&self) -> &WallLimits {
        &self.limits
    }

    pub fn prayers(&self) -> &[PrayerRequest] {
        &self.prayers
    }

    pub fn reactions(&self) -> &ReactionStore {
        &self.reactions
    }

    pub fn reports(&self) -> &[PrayerReport] {
        &self.reports
    }

    pub fn find(&self, prayer_id: &str) -> Option<&PrayerRequest> {
        self.prayers.iter().find(|p| p.id == prayer_id)
    }

    fn find_mut(&mut self, prayer_id: &str) -> Result<&mut PrayerRequest, WallError> {
        self.prayers
            .iter_mut()
            .find(|p| p.id == prayer_id)
            .ok_or_else(|| WallError::PrayerNotFound(prayer_id.to_string()))
    }

    pub fn has_more(&self) -> bool {
        self.loaded < self.source.len()
    }

    /// Appends the next page; returns how many prayers were added.
    pub fn load_more(&mut self) -> usize {
        let end = (self.loaded + self.limits.prayers_per_page.max(1)).min(self.source.len());
        let page = &self.source[self.loaded..end];
        self.prayers.extend_from_slice(page);
        let added = end - self.loaded;
        self.loaded = end;
        added
    }

    pub fn load_all(&mut self) {
        while self.has_more() {
            self.load_more();
        }
    }

    fn next_local_id(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        self.local_seq += 1;
        format!("{prefix}-{}-{}", now.timestamp_millis(), self.local_seq)
    }

    pub fn compose(
        &mut self,
        viewer: &Viewer,
        content: &str,
        anonymous: bool,
        now: DateTime<Utc>,
    ) -> Result<&PrayerRequest, WallError> {
        let user = viewer.require_user()?;
        let content = validate_prayer(content, &self.limits)?;
        let (user_id, author_name) = if anonymous {
            (None, "Anonymous".to_string())
        } else {
            (Some(user.id.clone()), user.first_name.clone())
        };
        let prayer = PrayerRequest {
            id: self.next_local_id("prayer-new", now),
            user_id,
            author_name,
            author_avatar_url: None,
            is_anonymous: anonymous,
            content,
            is_answered: false,
            answered_text: None,
            answered_at: None,
            created_at: now,
            last_activity_at: now,
            praying_count: 0,
            comment_count: 0,
        };
        tracing::debug!(prayer = %prayer.id, anonymous, "prayer shared");
        self.prayers.insert(0, prayer);
        Ok(&self.prayers[0])
    }

    /// Returns the new praying count.
    pub fn toggle_praying(&mut self, prayer_id: &str) -> Result<u32, WallError> {
        self.find_mut(prayer_id)?;
        let was_praying = self.reactions.toggle_praying(prayer_id);
        let prayer = self.find_mut(prayer_id)?;
        prayer.praying_count = if was_praying {
            prayer.praying_count.saturating_sub(1)
        } else {
            prayer.praying_count + 1
        };
        Ok(prayer.praying_count)
    }

    /// Returns whether the prayer is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, viewer: &Viewer, prayer_id: &str) -> Result<bool, WallError> {
        viewer.require_user()?;
        self.find_mut(prayer_id)?;
        self.reactions.toggle_bookmark(prayer_id);
        Ok(self.reactions.is_bookmarked(prayer_id))
    }

    pub fn submit_comment(
        &mut self,
        viewer: &Viewer,
        prayer_id: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<PrayerComment, WallError> {
        let user = viewer.require_user()?.clone();
        let content = validate_comment(content, &self.limits)?;
        self.find_mut(prayer_id)?;

        let comment = PrayerComment {
            id: self.next_local_id("comment-local", now),
            prayer_id: prayer_id.to_string(),
            user_id: user.id,
            author_name: user.first_name,
            author_avatar_url: None,
            content,
            created_at: now,
        };

        let prayer = self.find_mut(prayer_id)?;
        prayer.comment_count += 1;
        prayer.last_activity_at = now;

        self.local_comments
            .entry(prayer_id.to_string())
            .or_default()
            .insert(0, comment.clone());
        tracing::debug!(prayer = prayer_id, comment = %comment.id, "comment posted");
        Ok(comment)
    }

    /// Newest local comments first, then the catalog thread.
    pub fn comments_for(&self, prayer_id: &str) -> Vec<PrayerComment> {
        let mut comments = self
            .local_comments
            .get(prayer_id)
            .cloned()
            .unwrap_or_default();
        comments.extend(get_comments(prayer_id));
        comments
    }

    pub fn all_comments(&self) -> Vec<PrayerComment> {
        let mut comments: Vec<PrayerComment> =
            self.local_comments.values().flatten().cloned().collect();
        comments.extend(get_all_comments());
        comments
    }

    pub fn thread(&self, prayer_id: &str) -> Result<CommentThread, WallError> {
        let prayer = self
            .find(prayer_id)
            .ok_or_else(|| WallError::PrayerNotFound(prayer_id.to_string()))?;
        let mut comments = self.comments_for(prayer_id);
        comments.truncate(self.limits.max_visible_comments);
        Ok(CommentThread {
            comments,
            total: prayer.comment_count,
            visible_limit: self.limits.max_visible_comments,
        })
    }

    fn require_author(&self, viewer: &Viewer, prayer_id: &str) -> Result<(), WallError> {
        let user = viewer.require_user()?;
        let prayer = self
            .find(prayer_id)
            .ok_or_else(|| WallError::PrayerNotFound(prayer_id.to_string()))?;
        if prayer.user_id.as_deref() != Some(user.id.as_str()) {
            return Err(WallError::NotAuthor(prayer_id.to_string()));
        }
        Ok(())
    }

    /// Blank praise text still marks the prayer answered.
    pub fn mark_answered(
        &mut self,
        viewer: &Viewer,
        prayer_id: &str,
        praise: &str,
        now: DateTime<Utc>,
    ) -> Result<(), WallError> {
        self.require_author(viewer, prayer_id)?;
        let praise = praise.trim();
        let prayer = self.find_mut(prayer_id)?;
        prayer.is_answered = true;
        prayer.answered_text = (!praise.is_empty()).then(|| praise.to_string());
        prayer.answered_at = Some(now);
        tracing::debug!(prayer = prayer_id, "prayer marked as answered");
        Ok(())
    }

    pub fn delete(&mut self, viewer: &Viewer, prayer_id: &str) -> Result<PrayerRequest, WallError> {
        self.require_author(viewer, prayer_id)?;
        let idx = self
            .prayers
            .iter()
            .position(|p| p.id == prayer_id)
            .ok_or_else(|| WallError::PrayerNotFound(prayer_id.to_string()))?;
        self.local_comments.remove(prayer_id);
        self.open_comments.remove(prayer_id);
        tracing::debug!(prayer = prayer_id, "prayer deleted");
        Ok(self.prayers.remove(idx))
    }

    pub fn report(&mut self, prayer_id: &str, reason: &str) -> Result<(), WallError> {
        if self.find(prayer_id).is_none() {
            return Err(WallError::PrayerNotFound(prayer_id.to_string()));
        }
        self.reports.push(PrayerReport {
            prayer_id: prayer_id.to_string(),
            reason: reason.trim().to_string(),
        });
        tracing::info!(prayer = prayer_id, "prayer reported");
        Ok(())
    }

    /// Returns whether the thread is open afterwards.
    pub fn toggle_comments(&mut self, prayer_id: &str) -> bool {
        if self.open_comments.remove(prayer_id) {
            false
        } else {
            self.open_comments.insert(prayer_id.to_string());
            true
        }
    }

    pub fn is_comments_open(&self, prayer_id: &str) -> bool {
        self.open_comments.contains(prayer_id)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/wall/feed.rs"]
mod tests;
