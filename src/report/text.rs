use chrono::{DateTime, Utc};

use crate::model::prayer_wall::{PrayerComment, PrayerRequest};
use crate::quiz::defs::{builtin_destinations, builtin_questions};
use crate::report::{FeedCard, FeedPage, QuizReport};
use crate::time::{format_full_date, time_ago};
use crate::wall::moderation::crisis_resources;
use crate::wall::views::{DashboardView, PrayerDetail, ProfileView};

pub fn render_quiz_text(report: &QuizReport) -> String {
    let dest = &report.destination;
    let mut out = String::new();

    out.push_str(&format!("We'd recommend: {}\n", dest.name));
    out.push_str(&format!("{}\n\n", dest.description));
    out.push_str(&format!("\"{}\"\n  {}\n\n", dest.verse, dest.verse_reference));
    out.push_str(&format!("Go to {} ({})\n\n", dest.cta_label, dest.route));

    let answered = report.answers.iter().filter(|a| a.is_some()).count();
    out.push_str(&format!("Answered: {answered} of {}\n", builtin_questions().len()));
    out.push_str("Scores:\n");
    for (key, score) in report.scores.ordered() {
        out.push_str(&format!("  {:<14}{score}\n", key.as_str()));
    }
    out
}

pub fn render_questions_text() -> String {
    let mut out = String::new();
    for (i, q) in builtin_questions().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, q.question));
        for (j, opt) in q.options.iter().enumerate() {
            out.push_str(&format!("   [{j}] {}\n", opt.label));
        }
        out.push('\n');
    }
    out
}

pub fn render_destinations_text() -> String {
    let mut out = String::new();
    for dest in builtin_destinations() {
        out.push_str(&format!(
            "{:<14}{:<22}{}\n",
            dest.key.as_str(),
            dest.name,
            dest.route
        ));
    }
    out
}

fn push_card(out: &mut String, card: &FeedCard) {
    let p = &card.prayer;
    out.push_str(&format!("[{}] {} - {}\n", p.id, p.author_name, card.posted_ago));
    out.push_str(&format!("  {}\n", card.preview));
    if p.is_answered {
        match &p.answered_text {
            Some(text) => out.push_str(&format!("  Answered: {text}\n")),
            None => out.push_str("  Answered\n"),
        }
    }
    let mut marks = String::new();
    if card.is_praying {
        marks.push_str(" (praying)");
    }
    if card.is_bookmarked {
        marks.push_str(" (bookmarked)");
    }
    out.push_str(&format!(
        "  {} praying, {} comments, active {}{marks}\n",
        p.praying_count, p.comment_count, card.active_ago
    ));
}

pub fn render_feed_text(page: &FeedPage) -> String {
    let mut out = String::new();
    out.push_str(&format!("Prayer Wall, page {}\n\n", page.page));
    if page.prayers.is_empty() {
        out.push_str("No prayers on this page.\n");
    }
    for card in &page.prayers {
        push_card(&mut out, card);
        out.push('\n');
    }
    if page.has_more {
        out.push_str(&format!("More prayers: --page {}\n", page.page + 1));
    }
    out
}

fn push_comment(out: &mut String, comment: &PrayerComment, now: DateTime<Utc>) {
    out.push_str(&format!(
        "  {} ({}): {}\n",
        comment.author_name,
        time_ago(comment.created_at, now),
        comment.content
    ));
}

fn push_prayer_line(out: &mut String, prayer: &PrayerRequest, now: DateTime<Utc>) {
    out.push_str(&format!(
        "  [{}] {} ({})\n",
        prayer.id,
        prayer.content,
        time_ago(prayer.created_at, now)
    ));
}

pub fn render_prayer_text(detail: &PrayerDetail, now: DateTime<Utc>) -> String {
    let p = &detail.prayer;
    let mut out = String::new();
    out.push_str(&format!(
        "{} - {}\n\n{}\n\n",
        p.author_name,
        format_full_date(p.created_at),
        p.content
    ));
    if let (true, Some(at)) = (p.is_answered, p.answered_at) {
        out.push_str(&format!("Answered {}", format_full_date(at)));
        match &p.answered_text {
            Some(text) => out.push_str(&format!(": {text}\n\n")),
            None => out.push_str("\n\n"),
        }
    }
    out.push_str(&format!(
        "{} praying, {} comments\n",
        p.praying_count, p.comment_count
    ));
    for comment in &detail.thread.comments {
        push_comment(&mut out, comment, now);
    }
    if detail.thread.has_more() {
        out.push_str(&format!(
            "  ... {} more\n",
            detail.thread.hidden_count()
        ));
    }
    out
}

pub fn render_profile_text(view: &ProfileView, now: DateTime<Utc>) -> String {
    let u = &view.user;
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", u.first_name, u.last_name));
    out.push_str(&format!("Joined {}\n", format_full_date(u.joined_date)));
    if !u.bio.is_empty() {
        out.push_str(&format!("{}\n", u.bio));
    }
    out.push_str(&format!("\nPrayers ({})\n", view.prayers.len()));
    for prayer in &view.prayers {
        push_prayer_line(&mut out, prayer, now);
    }
    out.push_str(&format!("\nReplies ({})\n", view.comments.len()));
    for comment in &view.comments {
        push_comment(&mut out, comment, now);
    }
    out
}

pub fn render_dashboard_text(view: &DashboardView, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Dashboard for {}\n", view.user.first_name));
    let sections: [(&str, &[PrayerRequest]); 3] = [
        ("My prayers", &view.my_prayers),
        ("Bookmarked", &view.bookmarked),
        ("Praying for", &view.praying_for),
    ];
    for (title, prayers) in sections {
        out.push_str(&format!("\n{title} ({})\n", prayers.len()));
        for prayer in prayers {
            push_prayer_line(&mut out, prayer, now);
        }
    }
    out.push_str(&format!("\nMy comments ({})\n", view.my_comments.len()));
    for comment in &view.my_comments {
        push_comment(&mut out, comment, now);
    }
    out
}

/// Shown in place of a post that mentions self-harm.
pub fn render_crisis_text() -> String {
    let mut out = String::new();
    out.push_str("You are not alone. Please reach out now:\n");
    for r in crisis_resources() {
        out.push_str(&format!("  {}", r.name));
        if let Some(phone) = r.phone {
            out.push_str(&format!(": call {phone}"));
        }
        if let Some(text) = r.text {
            out.push_str(&format!(": {text}"));
        }
        out.push_str(&format!(" ({})\n", r.link));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
