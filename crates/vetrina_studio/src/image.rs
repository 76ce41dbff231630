//! The image editing session: instruction-driven edits and adoption.

use crate::phase::Phase;
use crate::studio::Studio;
use tracing::{error, info, instrument};
use vetrina_core::{
    AspectRatio, ContentState, EditSession, ImageData, MediaSource, VideoMetadata,
};
use vetrina_error::{StudioError, StudioErrorKind, VetrinaResult};
use vetrina_interface::GenerationDriver;

const EDIT_FAILURE_MESSAGE: &str =
    "Failed to edit image. The model may not be able to fulfill this request.";
const ADOPT_FAILURE_MESSAGE: &str = "Failed to generate content for the new image.";
const GENERATE_FAILURE_MESSAGE: &str =
    "Failed to generate image. Please check your API key and try again.";

impl<D: GenerationDriver> Studio<D> {
    /// Begin an image session: clears the creative session, makes the image
    /// the active media, and opens the image editor.
    #[instrument(skip(self, image))]
    pub async fn start_image_session(&self, image: ImageData) {
        let mut state = self.state.write().await;
        state.reset_creative_session();
        state.media = Some(MediaSource::Image(image));
        state.phase = Phase::ImageEditing;
        state.activity.record("Opened image in the editor.");
    }

    /// Generate an image from a prompt and open it in the image editor.
    ///
    /// A service failure surfaces as the session error and leaves the
    /// current session untouched.
    #[instrument(skip(self, prompt))]
    pub async fn generate_image_session(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> VetrinaResult<()> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptyInstruction).into());
        }
        match self.driver.generate_image(prompt, aspect_ratio).await {
            Ok(image) => {
                self.start_image_session(image).await;
                let mut state = self.state.write().await;
                state
                    .activity
                    .record(format!("Generated image from prompt: \"{}\"", prompt));
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Image generation failed");
                let mut state = self.state.write().await;
                state.error = Some(GENERATE_FAILURE_MESSAGE.to_string());
                Ok(())
            }
        }
    }

    /// Apply a text instruction to the active image, storing the result as
    /// the pending edited preview.
    ///
    /// A service failure surfaces as the session error; the phase does not
    /// change.
    #[instrument(skip(self, instruction))]
    pub async fn edit_image(&self, instruction: &str) -> VetrinaResult<()> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptyInstruction).into());
        }
        let image = {
            let state = self.state.read().await;
            state
                .media
                .as_ref()
                .and_then(|media| media.image())
                .cloned()
                .ok_or_else(|| StudioError::new(StudioErrorKind::NoActiveImage))?
        };
        self.clear_error().await;

        match self.driver.edit_image(&image, instruction).await {
            Ok(edited) => {
                let mut state = self.state.write().await;
                state.edited_image = Some(edited);
                state
                    .activity
                    .record(format!("Edited image with prompt: \"{}\"", instruction));
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Image edit failed");
                let mut state = self.state.write().await;
                state.error = Some(EDIT_FAILURE_MESSAGE.to_string());
                Ok(())
            }
        }
    }

    /// Promote the edited image to the active media and generate content for
    /// it, then move to the scheduling phase.
    ///
    /// Video-only edit state does not apply to an image and is cleared.
    #[instrument(skip(self))]
    pub async fn adopt_edited_image(&self) -> VetrinaResult<()> {
        let edited = {
            let state = self.state.read().await;
            state
                .edited_image
                .clone()
                .ok_or_else(|| StudioError::new(StudioErrorKind::NoActiveImage))?
        };

        let metadata = VideoMetadata::new(
            None,
            format!("AI Art: {}", edited.prompt()),
            format!(
                "An AI-generated image based on the prompt: \"{}\"",
                edited.prompt()
            ),
            vec![
                "AIart".to_string(),
                "digitalart".to_string(),
                "generative".to_string(),
            ],
            "Image Post",
        );

        match self.driver.generate_content(&metadata).await {
            Ok(bundle) => {
                let (content, _) = bundle.into_parts();
                let mut state = self.state.write().await;
                state.media = Some(MediaSource::Image(edited));
                state.content = ContentState::Ready(content);
                state.suggestions = None;
                state.edits = EditSession::new();
                state.edited_image = None;
                state.phase = Phase::Generation;
                info!("Adopted edited image for scheduling");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Content generation for edited image failed");
                let mut state = self.state.write().await;
                state.error = Some(ADOPT_FAILURE_MESSAGE.to_string());
                Ok(())
            }
        }
    }
}
