//! The studio container and its session-level operations.

use crate::phase::{Phase, phase_enabled};
use crate::state::SessionState;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use vetrina_core::{AiModel, GenerationTask, Platform};
use vetrina_interface::GenerationDriver;

/// Single source of truth for one studio session.
///
/// Generic over the generation driver so flows can be exercised against an
/// in-memory driver in tests. State is process-lifetime only; dropping the
/// studio discards everything.
pub struct Studio<D> {
    pub(crate) driver: D,
    pub(crate) state: RwLock<SessionState>,
}

impl<D: GenerationDriver> Studio<D> {
    /// Create a studio with a fresh session.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// The injected generation driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// A clone of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// The active phase.
    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase
    }

    /// Transition to a phase. Unconditional; every phase is reachable from
    /// every phase.
    pub async fn set_phase(&self, target: Phase) {
        let mut state = self.state.write().await;
        state.phase = target;
    }

    /// Whether navigation to a phase should currently be offered.
    pub async fn phase_enabled(&self, phase: Phase) -> bool {
        let state = self.state.read().await;
        phase_enabled(phase, state.posts.len())
    }

    /// Clear the creative session ahead of a new upload, idea, or image.
    ///
    /// Posts, activity, connections, and configuration survive.
    #[instrument(skip(self))]
    pub async fn reset_for_new_content(&self) {
        let mut state = self.state.write().await;
        state.reset_creative_session();
    }

    /// Record an activity line (bounded, newest first).
    pub async fn add_activity(&self, text: impl Into<String>) {
        let mut state = self.state.write().await;
        state.activity.record(text);
    }

    /// The last user-visible error, if any.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Clear the user-visible error.
    pub async fn clear_error(&self) {
        let mut state = self.state.write().await;
        state.error = None;
    }

    /// Update the profile display name.
    pub async fn set_username(&self, name: impl Into<String>) {
        let mut state = self.state.write().await;
        state.user.name = name.into();
        state.activity.record("Updated profile username.");
    }

    /// Flip a platform connection. Returns the new connected state.
    #[instrument(skip(self))]
    pub async fn toggle_connection(&self, platform: Platform) -> bool {
        let mut state = self.state.write().await;
        let connected = state.connections.toggle(platform);
        let verb = if connected { "Connected" } else { "Disconnected" };
        state.activity.record(format!("{} {} account.", verb, platform));
        info!(%platform, connected, "Connection toggled");
        connected
    }

    /// Complete a (simulated) OAuth grant for a platform.
    #[instrument(skip(self, username))]
    pub async fn complete_oauth(&self, platform: Platform, username: impl Into<String>) {
        let mut state = self.state.write().await;
        let username = username.into();
        state
            .activity
            .record(format!("Connected {} as @{}.", platform, username));
        state.connections.grant(platform, username);
    }

    /// Select the AI backend and optionally store its key.
    #[instrument(skip(self, api_key))]
    pub async fn save_ai_config(&self, model: AiModel, api_key: Option<String>) {
        let mut state = self.state.write().await;
        state.ai_config.model = model;
        if let Some(key) = api_key {
            state.ai_config.set_key(model, key);
        }
        state.activity.record(format!("Set AI backend to {}.", model));
    }

    /// Assign a model to one generation task.
    pub async fn assign_task_model(&self, task: GenerationTask, model: AiModel) {
        let mut state = self.state.write().await;
        state.task_models.assign(task, model);
    }
}
