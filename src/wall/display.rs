use crate::model::limits::WallLimits;
use crate::model::prayer_wall::PrayerRequest;

const AVATAR_COLORS: &[&str] = &[
    "#6D28D9", "#2563EB", "#059669", "#D97706", "#DC2626", "#7C3AED", "#0891B2", "#BE185D",
];

fn take_chars(text: &str, n: usize) -> (&str, bool) {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

pub fn share_text(content: &str, limits: &WallLimits) -> String {
    let (preview, cut) = take_chars(content, limits.share_preview_length);
    let ellipsis = if cut { "..." } else { "" };
    format!("Please pray with me \u{2014} {preview}{ellipsis} \u{2014} Worship Room Prayer Wall")
}

pub fn share_url(origin: &str, prayer_id: &str) -> String {
    format!("{}/prayer-wall/{prayer_id}", origin.trim_end_matches('/'))
}

/// Card preview; the detail page shows the full text.
pub fn truncate_content(content: &str, limits: &WallLimits) -> String {
    match take_chars(content, limits.truncate_length) {
        (head, true) => format!("{head}..."),
        (all, false) => all.to_string(),
    }
}

pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Deterministic colour for initials avatars.
pub fn avatar_color(seed: &str) -> &'static str {
    let hash: u64 = seed.encode_utf16().map(u64::from).sum();
    AVATAR_COLORS[(hash % AVATAR_COLORS.len() as u64) as usize]
}

/// Anonymous prayers never link to a profile.
pub fn author_link(prayer: &PrayerRequest) -> Option<String> {
    if prayer.is_anonymous {
        return None;
    }
    prayer
        .user_id
        .as_deref()
        .map(|id| format!("/prayer-wall/user/{id}"))
}

pub fn reply_prefix(author_name: &str) -> String {
    format!("@{author_name} ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/wall/display.rs"]
mod tests;
