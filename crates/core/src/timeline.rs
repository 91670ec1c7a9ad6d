//! Timeline filtering by recency.
//!
//! [`filter_posts`] is the pure filter; [`Timeline`] keeps an ordered id list
//! plus the posts they refer to and the currently selected [`Period`].

use std::collections::HashMap;

use chrono::Utc;

use crate::post::{Period, Post};
use crate::types::{EntityId, Timestamp};

/// Whether `created` falls inside `period`'s window ending at `now`.
pub fn in_period(created: Timestamp, period: Period, now: Timestamp) -> bool {
    match period.lookback() {
        Some(window) => created >= now - window,
        None => true,
    }
}

/// Keep the posts created within `period` of `now`, preserving order.
pub fn filter_posts_at<'a, I>(posts: I, period: Period, now: Timestamp) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .filter(|post| in_period(post.created, period, now))
        .collect()
}

/// [`filter_posts_at`] against the current wall clock.
///
/// The result depends on when it is called.
pub fn filter_posts<'a, I>(posts: I, period: Period) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    filter_posts_at(posts, period, Utc::now())
}

/// Ordered post collection with a selected period.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    ids: Vec<EntityId>,
    all: HashMap<EntityId, Post>,
    selected_period: Period,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a post. Inserting an existing id replaces the stored post and
    /// keeps its original position.
    pub fn insert(&mut self, post: Post) {
        if !self.all.contains_key(&post.id) {
            self.ids.push(post.id.clone());
        }
        self.all.insert(post.id.clone(), post);
    }

    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    pub fn set_selected_period(&mut self, period: Period) {
        self.selected_period = period;
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Posts within the selected period, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if an id in the ordered list has no stored post.
    pub fn filtered_posts_at(&self, now: Timestamp) -> Vec<&Post> {
        let posts = self.ids.iter().map(|id| {
            self.all
                .get(id)
                .unwrap_or_else(|| panic!("Post with id of {id} was expected but not found."))
        });
        filter_posts_at(posts, self.selected_period, now)
    }

    /// [`Timeline::filtered_posts_at`] against the current wall clock.
    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.filtered_posts_at(Utc::now())
    }
}

impl FromIterator<Post> for Timeline {
    fn from_iter<T: IntoIterator<Item = Post>>(iter: T) -> Self {
        let mut timeline = Timeline::new();
        for post in iter {
            timeline.insert(post);
        }
        timeline
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::post::sample_posts;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn post_created(id: &str, created: Timestamp) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            author_id: "1".to_string(),
            created,
            markdown: String::new(),
            html: String::new(),
        }
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn two_day_old_post_is_this_week_but_not_today() {
        let posts = [post_created("a", now() - Duration::days(2))];

        assert!(filter_posts_at(&posts, Period::Today, now()).is_empty());
        assert_eq!(filter_posts_at(&posts, Period::ThisWeek, now()).len(), 1);
    }

    #[test]
    fn ten_day_old_post_is_outside_this_week() {
        let posts = [post_created("a", now() - Duration::days(10))];

        assert!(filter_posts_at(&posts, Period::ThisWeek, now()).is_empty());
        assert_eq!(filter_posts_at(&posts, Period::ThisMonth, now()).len(), 1);
    }

    #[test]
    fn window_start_is_inclusive() {
        let posts = [post_created("a", now() - Duration::days(1))];
        assert_eq!(filter_posts_at(&posts, Period::Today, now()).len(), 1);

        let posts = [post_created("a", now() - Duration::days(1) - Duration::seconds(1))];
        assert!(filter_posts_at(&posts, Period::Today, now()).is_empty());
    }

    #[test]
    fn empty_collection_stays_empty() {
        let posts: Vec<Post> = Vec::new();
        for period in Period::ALL {
            assert!(filter_posts_at(&posts, period, now()).is_empty());
            assert!(filter_posts(&posts, period).is_empty());
        }
    }

    #[test]
    fn filter_preserves_input_order() {
        let posts = [
            post_created("old", now() - Duration::days(20)),
            post_created("recent", now() - Duration::hours(3)),
            post_created("mid", now() - Duration::days(4)),
            post_created("newest", now()),
        ];

        let filtered = filter_posts_at(&posts, Period::ThisWeek, now());
        assert_eq!(ids(&filtered), vec!["recent", "mid", "newest"]);
    }

    #[test]
    fn future_posts_pass_every_window() {
        let posts = [post_created("future", now() + Duration::hours(1))];
        for period in Period::ALL {
            assert_eq!(filter_posts_at(&posts, period, now()).len(), 1);
        }
    }

    #[test]
    fn timeline_defaults_to_today() {
        assert_eq!(Timeline::new().selected_period(), Period::Today);
    }

    #[test]
    fn timeline_counts_per_period_with_sample_posts() {
        let mut timeline: Timeline = sample_posts(now()).into_iter().collect();

        assert_eq!(ids(&timeline.filtered_posts_at(now())), vec!["1"]);

        timeline.set_selected_period(Period::ThisWeek);
        assert_eq!(ids(&timeline.filtered_posts_at(now())), vec!["1", "2"]);

        timeline.set_selected_period(Period::ThisMonth);
        assert_eq!(ids(&timeline.filtered_posts_at(now())), vec!["1", "2", "3"]);
    }

    #[test]
    fn timeline_with_wall_clock_sees_fresh_sample_post() {
        let timeline: Timeline = sample_posts(Utc::now()).into_iter().collect();
        assert_eq!(timeline.len(), 3);
        assert_eq!(ids(&timeline.filtered_posts()), vec!["1"]);
    }

    #[test]
    fn reinserting_replaces_without_reordering() {
        let mut timeline = Timeline::new();
        timeline.insert(post_created("a", now()));
        timeline.insert(post_created("b", now()));

        let mut replacement = post_created("a", now());
        replacement.title = "Edited".to_string();
        timeline.insert(replacement);

        timeline.set_selected_period(Period::ThisMonth);
        let posts = timeline.filtered_posts_at(now());
        assert_eq!(ids(&posts), vec!["a", "b"]);
        assert_eq!(posts[0].title, "Edited");
    }

    #[test]
    #[should_panic(expected = "Post with id of ghost was expected but not found.")]
    fn missing_post_for_known_id_panics() {
        let mut timeline = Timeline::new();
        timeline.ids.push("ghost".to_string());
        let _ = timeline.filtered_posts_at(now());
    }
}
