//! AI-produced editing suggestion bundle.
//!
//! A bundle is read-only once fetched; the user selectively applies subsets
//! into the edit session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Screen position for a text overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    TopLeft,
    TopCenter,
    TopRight,
    Center,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Entrance animation for a text overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayAnimation {
    FadeIn,
    SlideUp,
    None,
}

/// Transition type between clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    CrossFade,
    ZoomIn,
}

/// Visual effect type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    Glitch,
    SlowMotion,
}

/// Suggested clip window, in seconds from the start of the video.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimWindow {
    /// Clip start, seconds
    start_time: f64,
    /// Clip end, seconds
    end_time: f64,
    /// Why this window was chosen
    reason: String,
}

impl TrimWindow {
    pub fn new(start_time: f64, end_time: f64, reason: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            reason: reason.into(),
        }
    }
}

/// Suggested text overlay.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySuggestion {
    /// Overlay text
    text: String,
    /// When to show it, seconds
    timestamp: f64,
    /// Style label, e.g. "Title" or "Call-to-Action"
    style: String,
    /// Where on screen
    position: OverlayPosition,
    /// How it enters
    animation: OverlayAnimation,
}

impl OverlaySuggestion {
    pub fn new(
        text: impl Into<String>,
        timestamp: f64,
        style: impl Into<String>,
        position: OverlayPosition,
        animation: OverlayAnimation,
    ) -> Self {
        Self {
            text: text.into(),
            timestamp,
            style: style.into(),
            position,
            animation,
        }
    }
}

/// Suggested color filter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FilterSuggestion {
    /// Filter name from the known set, e.g. "Cinematic"
    name: String,
    /// Why this filter fits
    reason: String,
}

impl FilterSuggestion {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Suggested transition.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSuggestion {
    /// Transition type
    #[serde(rename = "type")]
    kind: TransitionKind,
    /// When to apply it, seconds
    timestamp: f64,
    /// Why it fits
    reason: String,
}

impl TransitionSuggestion {
    pub fn new(kind: TransitionKind, timestamp: f64, reason: impl Into<String>) -> Self {
        Self {
            kind,
            timestamp,
            reason: reason.into(),
        }
    }
}

/// Suggested visual effect.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSuggestion {
    /// Effect type
    #[serde(rename = "type")]
    kind: EffectKind,
    /// When to apply it, seconds
    timestamp: f64,
    /// How long it runs, seconds
    duration: f64,
    /// Why it fits
    reason: String,
}

impl EffectSuggestion {
    pub fn new(
        kind: EffectKind,
        timestamp: f64,
        duration: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            timestamp,
            duration,
            reason: reason.into(),
        }
    }
}

/// The full recommendation bundle for one media item.
#[derive(
    Debug, Clone, PartialEq, Getters, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), default)]
pub struct EditingSuggestions {
    /// Free-form actionable notes
    general: Vec<String>,

    /// Suggested clip window
    trimming: Option<TrimWindow>,

    /// Suggested text overlays
    overlays: Vec<OverlaySuggestion>,

    /// Suggested color filter
    filter: Option<FilterSuggestion>,

    /// Suggested transition
    transition: Option<TransitionSuggestion>,

    /// Suggested visual effect
    visual_effect: Option<EffectSuggestion>,
}

impl EditingSuggestions {
    /// Creates a new builder for EditingSuggestions.
    pub fn builder() -> EditingSuggestionsBuilder {
        EditingSuggestionsBuilder::default()
    }
}
