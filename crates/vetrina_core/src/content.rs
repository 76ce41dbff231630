//! Generated per-platform content.

use crate::platform::Platform;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content tailored for one platform.
///
/// `scheduled_at` is the only field set after generation; cancelling the
/// matching post clears it again so the platform becomes reschedulable.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PlatformContent {
    /// Post title
    title: String,

    /// Caption or description
    description: String,

    /// Ordered hashtags, without the leading '#'
    #[builder(default)]
    #[serde(default)]
    hashtags: Vec<String>,

    /// When the matching post was scheduled, if it was
    #[builder(default)]
    #[serde(default)]
    scheduled_at: Option<DateTime<Utc>>,
}

impl PlatformContent {
    /// Creates a new builder for PlatformContent.
    pub fn builder() -> PlatformContentBuilder {
        PlatformContentBuilder::default()
    }

    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        hashtags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            hashtags,
            scheduled_at: None,
        }
    }

    /// Stamp the scheduling time.
    pub fn set_scheduled_at(&mut self, when: DateTime<Utc>) {
        self.scheduled_at = Some(when);
    }

    /// Clear the scheduling time so the platform can be rescheduled.
    pub fn clear_schedule(&mut self) {
        self.scheduled_at = None;
    }
}

/// The per-platform content produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    entries: BTreeMap<Platform, PlatformContent>,
}

impl GeneratedContent {
    /// Build from platform/content pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (Platform, PlatformContent)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Content for one platform.
    pub fn get(&self, platform: Platform) -> Option<&PlatformContent> {
        self.entries.get(&platform)
    }

    /// Mutable content for one platform.
    pub fn get_mut(&mut self, platform: Platform) -> Option<&mut PlatformContent> {
        self.entries.get_mut(&platform)
    }

    /// Platforms with generated content, in declaration order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.entries.keys().copied()
    }

    /// Platform/content pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformContent)> {
        self.entries.iter().map(|(p, c)| (*p, c))
    }

    /// Number of platforms covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no platform has content.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the session's generated content currently stands.
///
/// The flow navigates into the editing phase before the generation call
/// returns, so consumers must handle `Pending` explicitly instead of
/// null-checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ContentState {
    /// No generation requested this session
    #[default]
    Idle,
    /// A generation call is in flight
    Pending,
    /// Content arrived and is ready for review
    Ready(GeneratedContent),
}

impl ContentState {
    /// Whether a generation call is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, ContentState::Pending)
    }

    /// The generated content, when ready.
    pub fn ready(&self) -> Option<&GeneratedContent> {
        match self {
            ContentState::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// Mutable generated content, when ready.
    pub fn ready_mut(&mut self) -> Option<&mut GeneratedContent> {
        match self {
            ContentState::Ready(content) => Some(content),
            _ => None,
        }
    }
}
