//! Composite responses from the generation service.

use crate::content::GeneratedContent;
use crate::media::VideoMetadata;
use crate::suggestions::EditingSuggestions;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Per-platform content plus editing suggestions for existing media.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Generated content for each platform
    content: GeneratedContent,
    /// Editing recommendations for the media item
    suggestions: EditingSuggestions,
}

impl ContentBundle {
    pub fn new(content: GeneratedContent, suggestions: EditingSuggestions) -> Self {
        Self {
            content,
            suggestions,
        }
    }

    /// Split into parts.
    pub fn into_parts(self) -> (GeneratedContent, EditingSuggestions) {
        (self.content, self.suggestions)
    }
}

/// A fleshed-out concept: metadata, content, and suggestions from one idea.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct IdeaBundle {
    /// The conceived video metadata (no file attached)
    metadata: VideoMetadata,
    /// Generated content for each platform
    content: GeneratedContent,
    /// Editing recommendations for the concept
    suggestions: EditingSuggestions,
}

impl IdeaBundle {
    pub fn new(
        metadata: VideoMetadata,
        content: GeneratedContent,
        suggestions: EditingSuggestions,
    ) -> Self {
        Self {
            metadata,
            content,
            suggestions,
        }
    }

    /// Split into parts.
    pub fn into_parts(self) -> (VideoMetadata, GeneratedContent, EditingSuggestions) {
        (self.metadata, self.content, self.suggestions)
    }
}
