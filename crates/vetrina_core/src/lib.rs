//! Core data types for the Vetrina content studio.
//!
//! This crate provides the data model shared across the workspace: platforms
//! and connections, media sources, generated per-platform content, editing
//! suggestions and the edit session, scheduled posts, the activity log, and
//! AI backend configuration.

mod activity;
mod bundle;
mod config;
mod content;
mod editing;
mod media;
mod platform;
mod post;
mod suggestions;

pub use activity::{ACTIVITY_CAP, Activity, ActivityLog};
pub use bundle::{ContentBundle, IdeaBundle};
pub use config::{AiConfig, AiModel, GenerationTask, TaskModelSelection, User};
pub use content::{ContentState, GeneratedContent, PlatformContent};
pub use editing::{AspectRatio, EditChange, EditSession, EditState};
pub use media::{ImageData, MediaKind, MediaSource, VideoMetadata};
pub use platform::{Connection, ConnectionSet, Platform};
pub use post::{Analytics, Comment, Post, PostId, Sentiment};
pub use suggestions::{
    EditingSuggestions, EffectKind, EffectSuggestion, FilterSuggestion, OverlayAnimation,
    OverlayPosition, OverlaySuggestion, TransitionKind, TransitionSuggestion, TrimWindow,
};
