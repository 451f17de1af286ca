pub mod display;
pub mod feed;
pub mod moderation;
pub mod reactions;
pub mod views;

pub use feed::{CommentThread, PrayerFeed};
pub use reactions::ReactionStore;

use crate::error::WallError;
use crate::model::prayer_wall::PrayerWallUser;

/// Who is acting on the wall.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    SignedIn(PrayerWallUser),
}

impl Viewer {
    pub fn user(&self) -> Option<&PrayerWallUser> {
        match self {
            Viewer::Anonymous => None,
            Viewer::SignedIn(user) => Some(user),
        }
    }

    pub fn require_user(&self) -> Result<&PrayerWallUser, WallError> {
        self.user().ok_or(WallError::NotSignedIn)
    }
}
