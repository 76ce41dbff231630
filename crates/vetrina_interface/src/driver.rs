//! The generation-service contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use vetrina_core::{
    Analytics, AspectRatio, Comment, ContentBundle, IdeaBundle, ImageData, Platform, Post,
    VideoMetadata,
};
use vetrina_error::VetrinaResult;

/// Trait for the external content-generation service.
///
/// Every response is structured data validated against a fixed shape; a
/// schema violation or missing field is a hard failure of that call, never a
/// partial result.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Infer video metadata from a file name.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name of the uploaded file
    ///
    /// # Returns
    ///
    /// Title, description, tags, and a content category. The caller attaches
    /// the file name itself.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response violates the
    /// expected shape.
    async fn infer_metadata(&self, file_name: &str) -> VetrinaResult<VideoMetadata>;

    /// Generate per-platform content and editing suggestions for existing
    /// media.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response violates the
    /// expected shape.
    async fn generate_content(&self, metadata: &VideoMetadata) -> VetrinaResult<ContentBundle>;

    /// Expand a free-text idea into metadata, per-platform content, and
    /// editing suggestions.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response violates the
    /// expected shape.
    async fn expand_idea(&self, idea: &str) -> VetrinaResult<IdeaBundle>;

    /// Suggest the best posting time for each platform.
    ///
    /// # Arguments
    ///
    /// * `platforms` - Platforms to suggest for
    /// * `content_type` - Content category of the media
    /// * `now` - Current time the suggestions should be in the future of
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; callers treat failure as a silent
    /// degradation, never a blocker.
    async fn suggest_post_times(
        &self,
        platforms: &[Platform],
        content_type: &str,
        now: DateTime<Utc>,
    ) -> VetrinaResult<HashMap<Platform, DateTime<Utc>>>;

    /// Simulate a small set of audience comments for a post.
    ///
    /// Positive comments may carry a suggested reply; sentiment is always
    /// present.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response violates the
    /// expected shape.
    async fn simulate_comments(
        &self,
        title: &str,
        description: &str,
    ) -> VetrinaResult<Vec<Comment>>;

    /// Simulate week-one analytics for a post.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any counter is missing.
    async fn simulate_analytics(&self, post: &Post) -> VetrinaResult<Analytics>;

    /// Apply a text instruction to an image, producing a new image.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or no image comes back.
    async fn edit_image(&self, image: &ImageData, instruction: &str) -> VetrinaResult<ImageData>;

    /// Generate an image from a prompt.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or no image comes back.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> VetrinaResult<ImageData>;

    /// Generate a video from a prompt, optionally seeded with an image.
    ///
    /// The underlying operation is long-running; implementations poll a
    /// bounded number of times and surface a timeout distinct from request
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the operation reports failure, or
    /// the poll ceiling is reached.
    async fn generate_video(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        seed_image: Option<&ImageData>,
    ) -> VetrinaResult<Vec<u8>>;
}
