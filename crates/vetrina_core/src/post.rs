//! Scheduled posts, comments, and analytics counters.

use crate::media::MediaKind;
use crate::platform::Platform;
use chrono::{DateTime, SecondsFormat, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Identifier of a scheduled post, deterministic from platform and time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct PostId(pub String);

impl PostId {
    /// Compose the id for a platform/time pair.
    ///
    /// Scheduling the same pair twice therefore replaces rather than
    /// duplicates.
    pub fn compose(platform: Platform, scheduled_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}-{}",
            platform,
            scheduled_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ))
    }
}

/// Engagement counters for one post.
///
/// Zero-initialized at scheduling time; the analytics simulation replaces
/// all four wholesale, never accumulates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

/// Sentiment of a simulated comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A simulated audience comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Commenter username
    pub author: String,
    /// Comment text
    #[serde(rename = "comment")]
    pub text: String,
    /// Sentiment classification
    pub sentiment: Sentiment,
    /// Set locally for positive comments by the engagement pass
    #[serde(default)]
    pub auto_liked: bool,
    /// Drafted reply; guaranteed present for positive comments after the
    /// engagement pass
    #[serde(default, rename = "autoReply")]
    pub auto_reply: Option<String>,
}

/// A scheduled unit of content.
///
/// `scheduled_at` is fixed at creation; rescheduling is cancel-then-recreate.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Post {
    /// Deterministic id, `{platform}-{RFC3339 time}`
    id: PostId,

    /// Target platform
    platform: Platform,

    /// Post title
    title: String,

    /// Caption or description
    description: String,

    /// Ordered hashtags
    #[builder(default)]
    hashtags: Vec<String>,

    /// Publication time, immutable once created
    scheduled_at: DateTime<Utc>,

    /// Kind of media attached
    media_kind: MediaKind,

    /// Engagement counters
    #[builder(default)]
    #[serde(default)]
    analytics: Analytics,

    /// Simulated comments, populated once by the engagement pass
    #[builder(default)]
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Post {
    /// Creates a new builder for Post.
    pub fn builder() -> PostBuilder {
        PostBuilder::default()
    }

    /// Create a freshly scheduled post with zeroed analytics and no comments.
    pub fn scheduled(
        platform: Platform,
        title: impl Into<String>,
        description: impl Into<String>,
        hashtags: Vec<String>,
        scheduled_at: DateTime<Utc>,
        media_kind: MediaKind,
    ) -> Self {
        Self {
            id: PostId::compose(platform, scheduled_at),
            platform,
            title: title.into(),
            description: description.into(),
            hashtags,
            scheduled_at,
            media_kind,
            analytics: Analytics::default(),
            comments: Vec::new(),
        }
    }

    /// Whether the publication time is in the past relative to `now`.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_at <= now
    }

    /// Replace all four analytics counters at once.
    pub fn set_analytics(&mut self, analytics: Analytics) {
        self.analytics = analytics;
    }

    /// Attach the simulated comment set.
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }
}
