//! The edit session: accepted edits plus a linear undo history.

use crate::suggestions::{EffectSuggestion, TransitionSuggestion, TrimWindow};
use serde::{Deserialize, Serialize};
use vetrina_error::{StudioError, StudioErrorKind, VetrinaResult};

/// Output aspect ratio for the edited media.
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
pub enum AspectRatio {
    /// Widescreen 16:9
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Wide,
    /// Vertical 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Tall,
    /// Square 1:1
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// Portrait 4:5
    #[serde(rename = "4:5")]
    #[strum(serialize = "4:5")]
    Portrait,
}

impl AspectRatio {
    /// Aspect ratio recommended for a content category.
    ///
    /// Short-form categories (skits, vlogs, routines) map to vertical,
    /// tutorials to widescreen, reviews to square.
    pub fn recommended_for(content_type: &str) -> AspectRatio {
        let lowered = content_type.to_lowercase();
        if lowered.contains("skit") || lowered.contains("vlog") || lowered.contains("routine") {
            AspectRatio::Tall
        } else if lowered.contains("tutorial") {
            AspectRatio::Wide
        } else if lowered.contains("review") {
            AspectRatio::Square
        } else {
            AspectRatio::Wide
        }
    }
}

/// The user's accepted edits for the active media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditState {
    /// Accepted clip window
    pub trim: Option<TrimWindow>,
    /// Indices into the loaded suggestion bundle's overlays
    pub overlays: Vec<usize>,
    /// Selected filter name
    pub filter: Option<String>,
    /// Accepted transition
    pub transition: Option<TransitionSuggestion>,
    /// Accepted visual effect
    pub effect: Option<EffectSuggestion>,
    /// Output aspect ratio
    pub crop: AspectRatio,
}

/// A partial change merged into the live [`EditState`].
///
/// Each present field replaces the corresponding live field wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditChange {
    pub trim: Option<Option<TrimWindow>>,
    pub overlays: Option<Vec<usize>>,
    pub filter: Option<Option<String>>,
    pub transition: Option<Option<TransitionSuggestion>>,
    pub effect: Option<Option<EffectSuggestion>>,
    pub crop: Option<AspectRatio>,
}

impl EditChange {
    /// Change that applies a trim window.
    pub fn trim(window: TrimWindow) -> Self {
        Self {
            trim: Some(Some(window)),
            ..Self::default()
        }
    }

    /// Change that replaces the applied overlay set.
    pub fn overlays(indices: Vec<usize>) -> Self {
        Self {
            overlays: Some(indices),
            ..Self::default()
        }
    }

    /// Change that selects a filter by name.
    pub fn filter(name: impl Into<String>) -> Self {
        Self {
            filter: Some(Some(name.into())),
            ..Self::default()
        }
    }

    /// Change that applies a transition.
    pub fn transition(transition: TransitionSuggestion) -> Self {
        Self {
            transition: Some(Some(transition)),
            ..Self::default()
        }
    }

    /// Change that applies a visual effect.
    pub fn effect(effect: EffectSuggestion) -> Self {
        Self {
            effect: Some(Some(effect)),
            ..Self::default()
        }
    }

    /// Change that sets the output aspect ratio.
    pub fn crop(ratio: AspectRatio) -> Self {
        Self {
            crop: Some(ratio),
            ..Self::default()
        }
    }
}

/// Linear-undo edit machine for one media item.
///
/// Every `apply` pushes the prior state onto the history stack, including
/// applications identical to the live state (no dedup). `undo` restores the
/// most recent snapshot verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditSession {
    live: EditState,
    history: Vec<EditState>,
    /// Number of overlays in the loaded suggestion bundle
    overlay_bound: usize,
    /// Whether the one-shot crop recommendation has fired
    crop_recommended: bool,
}

impl EditSession {
    /// A fresh session with no suggestions loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live edit state.
    pub fn live(&self) -> &EditState {
        &self.live
    }

    /// Depth of the undo stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record the overlay count of a freshly loaded suggestion bundle.
    ///
    /// Applied overlay indices from the previous bundle would be stale, so
    /// they are cleared here rather than left dangling.
    pub fn set_overlay_bound(&mut self, bound: usize) {
        self.overlay_bound = bound;
        self.live.overlays.clear();
    }

    /// Merge a partial change into the live state, pushing the prior state
    /// onto the undo stack.
    ///
    /// # Errors
    ///
    /// Returns [`StudioErrorKind::OverlayOutOfRange`] without mutating
    /// anything when the change references an overlay index outside the
    /// loaded bundle.
    pub fn apply(&mut self, change: EditChange) -> VetrinaResult<()> {
        if let Some(ref indices) = change.overlays {
            for &index in indices {
                if index >= self.overlay_bound {
                    return Err(StudioError::new(StudioErrorKind::OverlayOutOfRange {
                        index,
                        bound: self.overlay_bound,
                    })
                    .into());
                }
            }
        }

        self.history.push(self.live.clone());

        if let Some(trim) = change.trim {
            self.live.trim = trim;
        }
        if let Some(overlays) = change.overlays {
            self.live.overlays = overlays;
        }
        if let Some(filter) = change.filter {
            self.live.filter = filter;
        }
        if let Some(transition) = change.transition {
            self.live.transition = transition;
        }
        if let Some(effect) = change.effect {
            self.live.effect = effect;
        }
        if let Some(crop) = change.crop {
            self.live.crop = crop;
        }
        Ok(())
    }

    /// Add one overlay index to the applied set.
    pub fn add_overlay(&mut self, index: usize) -> VetrinaResult<()> {
        let mut overlays = self.live.overlays.clone();
        if !overlays.contains(&index) {
            overlays.push(index);
        }
        self.apply(EditChange::overlays(overlays))
    }

    /// Restore the state prior to the most recent `apply`.
    ///
    /// Returns false (and does nothing) when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.live = previous;
                true
            }
            None => false,
        }
    }

    /// Clear the live state back to the given default crop and empty the
    /// undo stack. The overlay bound is kept; the loaded bundle is unchanged.
    pub fn reset(&mut self, default_crop: AspectRatio) {
        self.live = EditState {
            crop: default_crop,
            ..EditState::default()
        };
        self.history.clear();
        self.crop_recommended = false;
    }

    /// Apply the content-type-derived crop once, as a normal recorded edit.
    ///
    /// Fires only while no crop change has occurred yet (the live crop is
    /// still the default and no history entry changed it); later manual
    /// changes always win.
    pub fn recommend_crop(&mut self, content_type: &str) {
        if self.crop_recommended {
            return;
        }
        let untouched = self.live.crop == AspectRatio::default()
            && !self
                .history
                .iter()
                .any(|state| state.crop != AspectRatio::default());
        if !untouched {
            return;
        }
        let recommended = AspectRatio::recommended_for(content_type);
        // apply() cannot fail for a crop-only change
        let _ = self.apply(EditChange::crop(recommended));
        self.crop_recommended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_ratios() {
        assert_eq!(
            AspectRatio::recommended_for("Comedy Skit"),
            AspectRatio::Tall
        );
        assert_eq!(
            AspectRatio::recommended_for("DIY Tutorial"),
            AspectRatio::Wide
        );
        assert_eq!(
            AspectRatio::recommended_for("Tech Review"),
            AspectRatio::Square
        );
        assert_eq!(AspectRatio::recommended_for("News"), AspectRatio::Wide);
    }

    #[test]
    fn apply_then_undo_restores_exactly() {
        let mut session = EditSession::new();
        session.set_overlay_bound(2);

        session.apply(EditChange::filter("Vintage")).unwrap();
        let before = session.live().clone();

        session.apply(EditChange::crop(AspectRatio::Square)).unwrap();
        assert_eq!(session.live().crop, AspectRatio::Square);

        assert!(session.undo());
        assert_eq!(session.live(), &before);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut session = EditSession::new();
        assert!(!session.undo());
        assert_eq!(session.live(), &EditState::default());
    }

    #[test]
    fn identical_apply_still_pushes_history() {
        let mut session = EditSession::new();
        session.apply(EditChange::filter("Vibrant")).unwrap();
        session.apply(EditChange::filter("Vibrant")).unwrap();
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn overlay_bound_is_enforced() {
        let mut session = EditSession::new();
        session.set_overlay_bound(2);
        session.add_overlay(1).unwrap();

        let before = session.live().clone();
        let depth = session.history_len();
        assert!(session.apply(EditChange::overlays(vec![0, 2])).is_err());
        assert_eq!(session.live(), &before);
        assert_eq!(session.history_len(), depth);
    }

    #[test]
    fn new_bundle_clears_stale_overlays() {
        let mut session = EditSession::new();
        session.set_overlay_bound(3);
        session.add_overlay(2).unwrap();
        assert_eq!(session.live().overlays, vec![2]);

        session.set_overlay_bound(1);
        assert!(session.live().overlays.is_empty());
        assert!(session.apply(EditChange::overlays(vec![2])).is_err());
        session.apply(EditChange::overlays(vec![0])).unwrap();
    }

    #[test]
    fn reset_returns_to_default_regardless_of_depth() {
        let mut session = EditSession::new();
        session.set_overlay_bound(2);
        session.apply(EditChange::filter("Cinematic")).unwrap();
        session.apply(EditChange::crop(AspectRatio::Tall)).unwrap();
        session.add_overlay(0).unwrap();

        session.reset(AspectRatio::Square);
        assert_eq!(session.history_len(), 0);
        assert_eq!(
            session.live(),
            &EditState {
                crop: AspectRatio::Square,
                ..EditState::default()
            }
        );
    }

    #[test]
    fn crop_recommendation_fires_once_and_respects_manual_changes() {
        let mut session = EditSession::new();
        session.recommend_crop("Comedy Skit");
        assert_eq!(session.live().crop, AspectRatio::Tall);
        assert_eq!(session.history_len(), 1);

        // A second call does nothing
        session.recommend_crop("Tech Review");
        assert_eq!(session.live().crop, AspectRatio::Tall);
        assert_eq!(session.history_len(), 1);

        // Manual change first means no recommendation at all
        let mut manual = EditSession::new();
        manual.apply(EditChange::crop(AspectRatio::Portrait)).unwrap();
        manual.recommend_crop("Comedy Skit");
        assert_eq!(manual.live().crop, AspectRatio::Portrait);
    }
}
