#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallLimits {
    pub prayers_per_page: usize,
    pub max_prayer_length: usize,
    pub max_comment_length: usize,
    pub max_visible_comments: usize,
    pub truncate_length: usize,
    pub share_preview_length: usize,
}

impl WallLimits {
    pub fn default_v1() -> Self {
        Self {
            prayers_per_page: 20,
            max_prayer_length: 1000,
            max_comment_length: 500,
            max_visible_comments: 5,
            truncate_length: 150,
            share_preview_length: 100,
        }
    }
}

impl Default for WallLimits {
    fn default() -> Self {
        Self::default_v1()
    }
}
