use chrono::{DateTime, Utc};
use newsreader_core::Story;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::{LINK, MUTED, TEXT};

/// Lines of one news card: title, link, metadata, blank separator.
pub fn card_lines(story: &Story, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let title = if story.title.is_empty() {
        "(untitled)".to_string()
    } else {
        story.title.clone()
    };

    vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            story.url.clone(),
            Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(meta_line(story, now), Style::default().fg(MUTED))),
        Line::from(""),
    ]
}

fn meta_line(story: &Story, now: DateTime<Utc>) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some(points) = story.points {
        parts.push(plural(points.into(), "point"));
    }
    if !story.author.is_empty() {
        parts.push(format!("by {}", story.author));
    }
    let age = format_age(&story.created_at, now);
    if !age.is_empty() {
        parts.push(age);
    }
    if let Some(comments) = story.num_comments {
        parts.push(plural(comments.into(), "comment"));
    }
    parts.join(" | ")
}

/// "5 minutes ago" style label; unparsable timestamps are shown as-is.
pub fn format_age(created_at: &str, now: DateTime<Utc>) -> String {
    if created_at.is_empty() {
        return String::new();
    }
    let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };

    let elapsed = now.signed_duration_since(created.with_timezone(&Utc));
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} ago", plural(minutes, "minute"))
    } else if elapsed.num_hours() < 24 {
        format!("{} ago", plural(elapsed.num_hours(), "hour"))
    } else if elapsed.num_days() < 30 {
        format!("{} ago", plural(elapsed.num_days(), "day"))
    } else {
        created.format("%Y-%m-%d").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
