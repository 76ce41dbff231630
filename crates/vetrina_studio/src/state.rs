//! The session state owned by the studio.

use crate::phase::Phase;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use vetrina_core::{
    ActivityLog, AiConfig, ConnectionSet, ContentState, EditSession, EditingSuggestions,
    ImageData, MediaSource, Platform, Post, PostId, TaskModelSelection, User,
};

/// Everything the studio tracks for one tab-lifetime session.
///
/// Mutated only through the studio's named operations.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The active phase
    pub phase: Phase,
    /// The media of the current creative session, if any
    pub media: Option<MediaSource>,
    /// Generated per-platform content, with an explicit pending tag
    pub content: ContentState,
    /// The loaded editing suggestion bundle
    pub suggestions: Option<EditingSuggestions>,
    /// Accepted edits and their undo history
    pub edits: EditSession,
    /// Edited-image preview awaiting adoption
    pub edited_image: Option<ImageData>,
    /// Scheduled posts
    pub posts: Vec<Post>,
    /// Per-platform account connections
    pub connections: ConnectionSet,
    /// The signed-in user
    pub user: User,
    /// AI backend configuration
    pub ai_config: AiConfig,
    /// Per-task model assignment
    pub task_models: TaskModelSelection,
    /// Bounded activity log
    pub activity: ActivityLog,
    /// Last user-visible error, if any
    pub error: Option<String>,
    /// AI-suggested posting times used to prefill scheduling inputs
    pub suggested_times: HashMap<Platform, DateTime<Utc>>,
    /// Posts with a comment fetch in flight
    pub engagement_in_flight: HashSet<PostId>,
}

impl SessionState {
    /// The post with the given id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == id)
    }

    /// Mutable post with the given id.
    pub(crate) fn post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id() == id)
    }

    /// Clear everything tied to the current creative session, leaving posts,
    /// activity, connections, and configuration untouched.
    pub(crate) fn reset_creative_session(&mut self) {
        self.media = None;
        self.content = ContentState::Idle;
        self.suggestions = None;
        self.edits = EditSession::new();
        self.edited_image = None;
        self.suggested_times.clear();
        self.error = None;
    }
}
