//! Edit operations over the session's edit machine.

use crate::studio::Studio;
use tracing::instrument;
use vetrina_core::{AspectRatio, EditChange};
use vetrina_error::VetrinaResult;
use vetrina_interface::GenerationDriver;

impl<D: GenerationDriver> Studio<D> {
    /// Merge a partial change into the live edit state, recording undo
    /// history.
    ///
    /// # Errors
    ///
    /// Rejects overlay indices outside the loaded suggestion bundle without
    /// mutating anything.
    pub async fn apply_edit(&self, change: EditChange) -> VetrinaResult<()> {
        let mut state = self.state.write().await;
        state.edits.apply(change)
    }

    /// Add one suggested overlay to the applied set.
    pub async fn add_overlay(&self, index: usize) -> VetrinaResult<()> {
        let mut state = self.state.write().await;
        state.edits.add_overlay(index)
    }

    /// Undo the most recent edit. Returns false when there is nothing to
    /// undo.
    pub async fn undo_edit(&self) -> bool {
        let mut state = self.state.write().await;
        state.edits.undo()
    }

    /// Clear all edits back to the content-type-derived default crop.
    #[instrument(skip(self))]
    pub async fn reset_edits(&self) {
        let mut state = self.state.write().await;
        let default_crop = state
            .media
            .as_ref()
            .map(|media| AspectRatio::recommended_for(media.content_type()))
            .unwrap_or_default();
        state.edits.reset(default_crop);
    }
}
