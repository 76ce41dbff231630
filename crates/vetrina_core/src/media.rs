//! Media sources for a creative session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of media backing a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Video upload or generated concept
    Video,
    /// Still image
    Image,
}

/// Metadata describing an uploaded or AI-conceived video.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct VideoMetadata {
    /// Original file name; absent for idea-born concepts
    #[builder(default)]
    #[serde(default)]
    file_name: Option<String>,

    /// Video title
    title: String,

    /// Short description
    description: String,

    /// Topic tags
    #[builder(default)]
    #[serde(default)]
    tags: Vec<String>,

    /// Content category, e.g. "Tutorial" or "Travel Vlog"
    content_type: String,
}

impl VideoMetadata {
    /// Creates a new builder for VideoMetadata.
    pub fn builder() -> VideoMetadataBuilder {
        VideoMetadataBuilder::default()
    }

    pub fn new(
        file_name: Option<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            file_name,
            title: title.into(),
            description: description.into(),
            tags,
            content_type: content_type.into(),
        }
    }

    /// Fallback metadata derived locally from a file name, used when the
    /// inference call fails.
    pub fn fallback_for_file(file_name: &str) -> Self {
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name)
            .replace(['_', '-'], " ");
        Self {
            file_name: Some(file_name.to_string()),
            title: stem,
            description: String::new(),
            tags: Vec::new(),
            content_type: "General".to_string(),
        }
    }

    /// Attach the source file name.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
    }
}

/// An image payload with the prompt that produced or described it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageData {
    /// Base64-encoded image bytes
    base64: String,

    /// MIME type of the encoded bytes
    #[builder(default = "String::from(\"image/png\")")]
    #[serde(default)]
    mime_type: String,

    /// Prompt that generated or last edited the image
    prompt: String,
}

impl ImageData {
    /// Creates a new builder for ImageData.
    pub fn builder() -> ImageDataBuilder {
        ImageDataBuilder::default()
    }
}

/// The active media of a creative session.
///
/// At most one source is active at a time; starting a new session replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaSource {
    /// Video session
    Video(VideoMetadata),
    /// Image session
    Image(ImageData),
}

impl MediaSource {
    /// The media kind of this source.
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaSource::Video(_) => MediaKind::Video,
            MediaSource::Image(_) => MediaKind::Image,
        }
    }

    /// Video metadata, when this is a video session.
    pub fn video(&self) -> Option<&VideoMetadata> {
        match self {
            MediaSource::Video(metadata) => Some(metadata),
            MediaSource::Image(_) => None,
        }
    }

    /// Image data, when this is an image session.
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            MediaSource::Video(_) => None,
            MediaSource::Image(image) => Some(image),
        }
    }

    /// Content category used for crop and post-time suggestions.
    pub fn content_type(&self) -> &str {
        match self {
            MediaSource::Video(metadata) => metadata.content_type(),
            MediaSource::Image(_) => "Image Post",
        }
    }
}
