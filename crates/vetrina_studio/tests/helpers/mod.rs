//! Shared test helpers: a scripted in-memory generation driver.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use vetrina_core::{
    Analytics, AspectRatio, Comment, ContentBundle, EditingSuggestions, FilterSuggestion,
    GeneratedContent, IdeaBundle, ImageData, OverlayAnimation, OverlayPosition, OverlaySuggestion,
    Platform, PlatformContent, Post, Sentiment, TrimWindow, VideoMetadata,
};
use vetrina_error::{GeminiError, GeminiErrorKind, VetrinaResult};
use vetrina_interface::GenerationDriver;

/// Deterministic driver for exercising the studio flows without a network.
#[derive(Default)]
pub struct ScriptedDriver {
    /// Make content generation and idea expansion fail
    pub fail_generation: bool,
    /// Make metadata inference fail
    pub fail_metadata: bool,
    /// Make best-time suggestion fail
    pub fail_post_times: bool,
    /// Count of comment-simulation calls
    pub comment_calls: AtomicUsize,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn service_error() -> vetrina_error::VetrinaError {
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code: 401,
            message: "invalid key".to_string(),
        })
        .into()
    }

    fn content_for(title: &str) -> GeneratedContent {
        GeneratedContent::from_entries(Platform::all().into_iter().map(|platform| {
            (
                platform,
                PlatformContent::new(
                    format!("{} on {}", title, platform),
                    format!("{} described for {}", title, platform),
                    vec!["creator".to_string(), platform.to_string().to_lowercase()],
                ),
            )
        }))
    }

    fn suggestions() -> EditingSuggestions {
        EditingSuggestions::builder()
            .general(vec![
                "Hook viewers in the first three seconds".to_string(),
                "End with a question".to_string(),
            ])
            .trimming(Some(TrimWindow::new(5.0, 25.0, "peak action")))
            .overlays(vec![
                OverlaySuggestion::new(
                    "Watch this",
                    1.0,
                    "Title",
                    OverlayPosition::BottomCenter,
                    OverlayAnimation::FadeIn,
                ),
                OverlaySuggestion::new(
                    "Subscribe",
                    50.0,
                    "Call-to-Action",
                    OverlayPosition::TopRight,
                    OverlayAnimation::SlideUp,
                ),
            ])
            .filter(Some(FilterSuggestion::new("Cinematic", "sets the mood")))
            .build()
            .expect("static suggestion bundle")
    }
}

#[async_trait]
impl GenerationDriver for ScriptedDriver {
    async fn infer_metadata(&self, file_name: &str) -> VetrinaResult<VideoMetadata> {
        if self.fail_metadata {
            return Err(Self::service_error());
        }
        Ok(VideoMetadata::new(
            Some(file_name.to_string()),
            "Inferred Title",
            "Inferred description.",
            vec!["inferred".to_string()],
            "Travel Vlog",
        ))
    }

    async fn generate_content(&self, metadata: &VideoMetadata) -> VetrinaResult<ContentBundle> {
        if self.fail_generation {
            return Err(Self::service_error());
        }
        Ok(ContentBundle::new(
            Self::content_for(metadata.title()),
            Self::suggestions(),
        ))
    }

    async fn expand_idea(&self, idea: &str) -> VetrinaResult<IdeaBundle> {
        if self.fail_generation {
            return Err(Self::service_error());
        }
        let metadata = VideoMetadata::new(
            None,
            format!("Concept: {}", idea),
            format!("A video about {}", idea),
            vec!["concept".to_string()],
            "Comedy Skit",
        );
        let content = Self::content_for(metadata.title());
        Ok(IdeaBundle::new(metadata, content, Self::suggestions()))
    }

    async fn suggest_post_times(
        &self,
        platforms: &[Platform],
        _content_type: &str,
        now: DateTime<Utc>,
    ) -> VetrinaResult<HashMap<Platform, DateTime<Utc>>> {
        if self.fail_post_times {
            return Err(Self::service_error());
        }
        Ok(platforms
            .iter()
            .enumerate()
            .map(|(offset, platform)| (*platform, now + Duration::hours(2 + offset as i64)))
            .collect())
    }

    async fn simulate_comments(
        &self,
        _title: &str,
        _description: &str,
    ) -> VetrinaResult<Vec<Comment>> {
        self.comment_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            Comment {
                author: "superfan".to_string(),
                text: "This is amazing!".to_string(),
                sentiment: Sentiment::Positive,
                auto_liked: false,
                auto_reply: Some("Thank you for watching!".to_string()),
            },
            Comment {
                author: "quietfan".to_string(),
                text: "Really well made.".to_string(),
                sentiment: Sentiment::Positive,
                auto_liked: false,
                auto_reply: None,
            },
            Comment {
                author: "neutral_nate".to_string(),
                text: "Saw it.".to_string(),
                sentiment: Sentiment::Neutral,
                auto_liked: false,
                auto_reply: None,
            },
            Comment {
                author: "grump".to_string(),
                text: "Not for me.".to_string(),
                sentiment: Sentiment::Negative,
                auto_liked: false,
                auto_reply: None,
            },
        ])
    }

    async fn simulate_analytics(&self, post: &Post) -> VetrinaResult<Analytics> {
        let seed = post.title().len() as u64;
        Ok(Analytics {
            views: seed * 1000,
            likes: seed * 100,
            shares: seed * 10,
            comments: seed,
        })
    }

    async fn edit_image(&self, _image: &ImageData, instruction: &str) -> VetrinaResult<ImageData> {
        Ok(ImageData::builder()
            .base64("ZWRpdGVk")
            .prompt(instruction)
            .build()
            .expect("static image"))
    }

    async fn generate_image(
        &self,
        prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> VetrinaResult<ImageData> {
        Ok(ImageData::builder()
            .base64("Z2VuZXJhdGVk")
            .prompt(prompt)
            .build()
            .expect("static image"))
    }

    async fn generate_video(
        &self,
        _prompt: &str,
        _aspect_ratio: AspectRatio,
        _seed_image: Option<&ImageData>,
    ) -> VetrinaResult<Vec<u8>> {
        Ok(b"video".to_vec())
    }
}
