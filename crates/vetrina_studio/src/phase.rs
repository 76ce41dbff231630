//! Application phases and navigation gating.

use serde::{Deserialize, Serialize};

/// The workflow phases. Exactly one is active at a time.
///
/// Transitions are free-form: any phase is reachable from any phase. Entry
/// points that need preconditions are gated in navigation via
/// [`phase_enabled`], not here.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Phase {
    /// Activity overview and entry into the workflow
    #[default]
    Dashboard,
    /// Upload a video or start from an idea
    Upload,
    /// Apply AI editing suggestions to a video
    Editing,
    /// Instruction-driven image editing
    ImageEditing,
    /// Review generated content and schedule posts
    Generation,
    /// Month grid and list of scheduled posts
    Calendar,
    /// Simulated comments and auto-replies
    Engagement,
    /// Performance analytics
    Analytics,
    /// Profile, connections, and AI backend settings
    Profile,
}

impl Phase {
    /// Phases that only make sense once at least one post exists.
    fn requires_posts(self) -> bool {
        matches!(self, Phase::Calendar | Phase::Engagement | Phase::Analytics)
    }
}

/// Whether navigation to a phase should be offered, given the current number
/// of scheduled posts.
///
/// Observational only: `set_phase` never consults this.
pub fn phase_enabled(phase: Phase, post_count: usize) -> bool {
    !phase.requires_posts() || post_count > 0
}
