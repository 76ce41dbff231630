//! Derived read-only views over the session state.
//!
//! Everything here is computed on read and parameterized by `now`; nothing
//! writes back into the session.

use crate::state::SessionState;
use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;
use vetrina_core::{Analytics, Platform, Post};

/// How many upcoming posts the dashboard previews.
pub const UPCOMING_PREVIEW: usize = 3;

/// Future posts ascending by time, capped to `cap`.
pub fn upcoming_posts(posts: &[Post], now: DateTime<Utc>, cap: usize) -> Vec<Post> {
    let mut upcoming: Vec<Post> = posts
        .iter()
        .filter(|post| !post.is_past(now))
        .cloned()
        .collect();
    upcoming.sort_by_key(|post| *post.scheduled_at());
    upcoming.truncate(cap);
    upcoming
}

/// Number of posts whose time has passed.
pub fn past_post_count(posts: &[Post], now: DateTime<Utc>) -> usize {
    posts.iter().filter(|post| post.is_past(now)).count()
}

/// All posts ascending by scheduled time, for the list view.
pub fn posts_by_time(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by_key(|post| *post.scheduled_at());
    sorted
}

/// Posts of one month grouped by day of month, for the month grid.
pub fn posts_by_day(posts: &[Post], year: i32, month: u32) -> BTreeMap<u32, Vec<Post>> {
    let mut grid: BTreeMap<u32, Vec<Post>> = BTreeMap::new();
    for post in posts {
        let when = post.scheduled_at();
        if when.year() == year && when.month() == month {
            grid.entry(when.day()).or_default().push(post.clone());
        }
    }
    grid
}

/// Counter totals across all posts.
pub fn analytics_totals(posts: &[Post]) -> Analytics {
    posts.iter().fold(Analytics::default(), |totals, post| {
        let analytics = post.analytics();
        Analytics {
            views: totals.views + analytics.views,
            likes: totals.likes + analytics.likes,
            shares: totals.shares + analytics.shares,
            comments: totals.comments + analytics.comments,
        }
    })
}

/// One row of the per-platform performance chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub platform: Platform,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
}

/// Chart rows, one per post, labeled by platform.
pub fn chart_rows(posts: &[Post]) -> Vec<ChartRow> {
    posts
        .iter()
        .map(|post| {
            let analytics = post.analytics();
            ChartRow {
                platform: *post.platform(),
                views: analytics.views,
                likes: analytics.likes,
                shares: analytics.shares,
            }
        })
        .collect()
}

/// The platform with the highest average likes per post.
///
/// Ties break toward the earlier platform in declaration order, so the
/// insights summary is reproducible.
pub fn best_platform(posts: &[Post]) -> Option<Platform> {
    let mut best: Option<(Platform, f64)> = None;
    for platform in Platform::all() {
        let likes: Vec<u64> = posts
            .iter()
            .filter(|post| *post.platform() == platform)
            .map(|post| post.analytics().likes)
            .collect();
        if likes.is_empty() {
            continue;
        }
        let average = likes.iter().sum::<u64>() as f64 / likes.len() as f64;
        match best {
            Some((_, current)) if average <= current => {}
            _ => best = Some((platform, average)),
        }
    }
    best.map(|(platform, _)| platform)
}

/// Snapshot numbers for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Next few upcoming posts, ascending
    pub upcoming: Vec<Post>,
    /// Posts still in the future
    pub scheduled_count: usize,
    /// Posts whose time has passed
    pub past_count: usize,
    /// Connected platform accounts
    pub connected_count: usize,
}

/// Compute the dashboard snapshot.
pub fn dashboard_summary(state: &SessionState, now: DateTime<Utc>) -> DashboardSummary {
    let past_count = past_post_count(&state.posts, now);
    DashboardSummary {
        upcoming: upcoming_posts(&state.posts, now, UPCOMING_PREVIEW),
        scheduled_count: state.posts.len() - past_count,
        past_count,
        connected_count: state.connections.connected_count(),
    }
}
