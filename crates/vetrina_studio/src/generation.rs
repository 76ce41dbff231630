//! The content generation flow: seed to per-platform content.

use crate::phase::Phase;
use crate::studio::Studio;
use chrono::Utc;
use tracing::{error, info, instrument, warn};
use vetrina_core::{ContentState, MediaSource, Platform, VideoMetadata};
use vetrina_error::{StudioError, StudioErrorKind, VetrinaResult};
use vetrina_interface::GenerationDriver;

const UPLOAD_FAILURE_MESSAGE: &str =
    "Failed to generate content. Please check your API key and try again.";
const IDEA_FAILURE_MESSAGE: &str =
    "Failed to generate content from idea. Please check your API key and try again.";

impl<D: GenerationDriver> Studio<D> {
    /// Pre-fill upload metadata from a file name.
    ///
    /// Degrades to a locally derived fallback when the inference call fails;
    /// the upload form never blocks on this.
    #[instrument(skip(self))]
    pub async fn infer_upload_metadata(&self, file_name: &str) -> VideoMetadata {
        match self.driver.infer_metadata(file_name).await {
            Ok(mut metadata) => {
                if metadata.file_name().is_none() {
                    metadata.set_file_name(file_name);
                }
                metadata
            }
            Err(err) => {
                warn!(file_name, error = %err, "Metadata inference failed, using fallback");
                VideoMetadata::fallback_for_file(file_name)
            }
        }
    }

    /// Start a session from uploaded media and generate content for it.
    ///
    /// Validation failures return an error without touching state. The phase
    /// moves to Editing before the generation call; consumers see
    /// [`ContentState::Pending`] until the result lands. A generation failure
    /// is non-fatal: it surfaces as the session error and rolls the phase
    /// back to Upload.
    #[instrument(skip(self, metadata), fields(title = %metadata.title()))]
    pub async fn generate_from_upload(&self, metadata: VideoMetadata) -> VetrinaResult<()> {
        if metadata.title().trim().is_empty() {
            return Err(StudioError::new(StudioErrorKind::MissingTitle).into());
        }
        if metadata.file_name().is_none() {
            return Err(StudioError::new(StudioErrorKind::MissingFile).into());
        }

        let file_name = metadata.file_name().clone().unwrap_or_default();
        {
            let mut state = self.state.write().await;
            state.reset_creative_session();
            state.media = Some(MediaSource::Video(metadata.clone()));
            state.content = ContentState::Pending;
            state.phase = Phase::Editing;
            state
                .activity
                .record(format!("Uploaded video: \"{}\"", file_name));
        }

        match self.driver.generate_content(&metadata).await {
            Ok(bundle) => {
                let (content, suggestions) = bundle.into_parts();
                let mut state = self.state.write().await;
                state.edits.set_overlay_bound(suggestions.overlays().len());
                state.edits.recommend_crop(metadata.content_type());
                state.suggestions = Some(suggestions);
                state.content = ContentState::Ready(content);
                state
                    .activity
                    .record(format!("Generated content for \"{}\"", metadata.title()));
                info!(title = %metadata.title(), "Generated content for upload");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Content generation failed");
                let mut state = self.state.write().await;
                state.content = ContentState::Idle;
                state.error = Some(UPLOAD_FAILURE_MESSAGE.to_string());
                state.phase = Phase::Upload;
                Ok(())
            }
        }
    }

    /// Start a session from a free-text idea.
    ///
    /// Same shape as [`Studio::generate_from_upload`], except the media is
    /// itself a product of the call.
    #[instrument(skip(self, idea))]
    pub async fn generate_from_idea(&self, idea: &str) -> VetrinaResult<()> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptyIdea).into());
        }

        {
            let mut state = self.state.write().await;
            state.reset_creative_session();
            state.content = ContentState::Pending;
            state.phase = Phase::Editing;
            state
                .activity
                .record(format!("Brainstorming from idea: \"{}\"", idea));
        }

        match self.driver.expand_idea(idea).await {
            Ok(bundle) => {
                let (metadata, content, suggestions) = bundle.into_parts();
                let mut state = self.state.write().await;
                state.edits.set_overlay_bound(suggestions.overlays().len());
                state.edits.recommend_crop(metadata.content_type());
                state.suggestions = Some(suggestions);
                state.content = ContentState::Ready(content);
                state
                    .activity
                    .record(format!("Generated concept: \"{}\"", metadata.title()));
                info!(title = %metadata.title(), "Expanded idea into content");
                state.media = Some(MediaSource::Video(metadata));
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Idea expansion failed");
                let mut state = self.state.write().await;
                state.content = ContentState::Idle;
                state.error = Some(IDEA_FAILURE_MESSAGE.to_string());
                state.phase = Phase::Upload;
                Ok(())
            }
        }
    }

    /// Fetch AI-suggested posting times for the connected platforms.
    ///
    /// Used only to prefill scheduling inputs; a failure logs a warning and
    /// leaves the suggestions empty. Never blocks scheduling.
    #[instrument(skip(self))]
    pub async fn suggest_post_times(&self) -> VetrinaResult<()> {
        let (platforms, content_type) = {
            let state = self.state.read().await;
            let Some(content) = state.content.ready() else {
                return Ok(());
            };
            let platforms: Vec<Platform> = content
                .platforms()
                .filter(|platform| state.connections.is_connected(*platform))
                .collect();
            let content_type = state
                .media
                .as_ref()
                .map(|media| media.content_type().to_string())
                .unwrap_or_else(|| "General".to_string());
            (platforms, content_type)
        };
        if platforms.is_empty() {
            return Ok(());
        }

        match self
            .driver
            .suggest_post_times(&platforms, &content_type, Utc::now())
            .await
        {
            Ok(times) => {
                info!(count = times.len(), "Stored suggested posting times");
                let mut state = self.state.write().await;
                state.suggested_times = times;
            }
            Err(err) => {
                warn!(error = %err, "Best-time suggestion failed, scheduling proceeds without prefills");
            }
        }
        Ok(())
    }
}
