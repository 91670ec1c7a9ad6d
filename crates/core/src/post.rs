//! Post entity, request DTOs, and the timeline period selector.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use pulldown_cmark::{html, Event, Options, Parser};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// A blog post.
///
/// Posts are only ever replaced as a whole; `id` is unique within a
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub author_id: EntityId,
    pub created: Timestamp,
    pub markdown: String,
    pub html: String,
}

/// Payload for creating a post. The id and author are assigned server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub html: String,
}

/// Payload for replacing a post. `id` selects the post to replace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub id: EntityId,
    pub title: String,
    pub created: Timestamp,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub html: String,
}

/// Recency window used to filter the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    Today,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "This Month")]
    ThisMonth,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Today, Period::ThisWeek, Period::ThisMonth];

    /// Display label, as shown on the timeline tabs.
    pub fn label(self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::ThisWeek => "This Week",
            Period::ThisMonth => "This Month",
        }
    }

    /// How far back the window reaches, or `None` when nothing is filtered.
    pub fn lookback(self) -> Option<Duration> {
        match self {
            Period::Today => Some(Duration::days(1)),
            Period::ThisWeek => Some(Duration::weeks(1)),
            Period::ThisMonth => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    /// Accepts the display labels and their snake_case forms, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "today" => Ok(Period::Today),
            "this_week" => Ok(Period::ThisWeek),
            "this_month" => Ok(Period::ThisMonth),
            _ => Err(CoreError::Validation(format!("Unknown period '{s}'"))),
        }
    }
}

/// Render post markdown to HTML.
///
/// GitHub-flavoured tables and strikethrough are enabled, and single
/// newlines become `<br />` line breaks.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Build the three sample posts relative to `now`: one from today, one from
/// five days ago, and one from three weeks ago.
pub fn sample_posts(now: Timestamp) -> [Post; 3] {
    let sample = |id: &str, title: &str, created: Timestamp| Post {
        id: id.to_string(),
        title: title.to_string(),
        author_id: "-1".to_string(),
        created,
        markdown: String::new(),
        html: String::new(),
    };

    [
        sample("1", "Today", now),
        sample("2", "This Week", now - Duration::days(5)),
        sample("3", "This Month", now - Duration::weeks(3)),
    ]
}
