//! [`GenerationDriver`] implementation for the Gemini client.

use crate::client::GeminiClient;
use crate::conversions;
use crate::dto::{
    AnalyticsPayload, CommentsPayload, ContentAndSuggestionsPayload, GenerateContentRequest,
    IdeaPayload, MetadataPayload, Part,
};
use crate::media::{OperationStatus, poll_operation};
use crate::{prompts, schemas};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, instrument};
use vetrina_core::{
    Analytics, AspectRatio, Comment, ContentBundle, GenerationTask, IdeaBundle, ImageData,
    Platform, Post, VideoMetadata,
};
use vetrina_error::{GeminiError, GeminiErrorKind, VetrinaResult};

impl GeminiClient {
    /// Run a schema-constrained prompt and decode the JSON text part.
    async fn structured<T>(
        &self,
        task: GenerationTask,
        prompt: String,
        schema: serde_json::Value,
    ) -> VetrinaResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let model = Self::model_for_task(task);
        let request = GenerateContentRequest::structured(prompt, schema);
        let response = self.generate(model, &request).await?;
        let text = response.first_text().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::SchemaViolation(
                "response carries no text part".to_string(),
            ))
        })?;
        serde_json::from_str(text).map_err(|e| {
            GeminiError::new(GeminiErrorKind::SchemaViolation(e.to_string())).into()
        })
    }

    /// Run an image-model request and decode the inline image part.
    async fn image_request(
        &self,
        parts: Vec<Part>,
        prompt: impl Into<String>,
    ) -> VetrinaResult<ImageData> {
        let model = Self::model_for_task(GenerationTask::ImageEdit);
        let request = GenerateContentRequest::parts(parts);
        let response = self.generate(model, &request).await?;
        let inline = response.first_inline().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::SchemaViolation(
                "response carries no image part".to_string(),
            ))
        })?;
        Ok(ImageData::builder()
            .base64(inline.data.clone())
            .mime_type(inline.mime_type.clone())
            .prompt(prompt)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::SchemaViolation(e.to_string())))?)
    }
}

#[async_trait]
impl vetrina_interface::GenerationDriver for GeminiClient {
    #[instrument(skip(self))]
    async fn infer_metadata(&self, file_name: &str) -> VetrinaResult<VideoMetadata> {
        let payload: MetadataPayload = self
            .structured(
                GenerationTask::Metadata,
                prompts::infer_metadata(file_name),
                schemas::metadata(),
            )
            .await?;
        Ok(conversions::to_metadata(
            payload,
            Some(file_name.to_string()),
        ))
    }

    #[instrument(skip(self, metadata), fields(title = %metadata.title()))]
    async fn generate_content(&self, metadata: &VideoMetadata) -> VetrinaResult<ContentBundle> {
        let platforms = Platform::all();
        let payload: ContentAndSuggestionsPayload = self
            .structured(
                GenerationTask::Content,
                prompts::content_and_suggestions(metadata, &platforms),
                schemas::content_and_suggestions(&platforms),
            )
            .await?;
        let content = conversions::to_generated_content(payload.platform_content)?;
        info!(platforms = content.len(), "Generated platform content");
        Ok(ContentBundle::new(content, payload.editing_suggestions))
    }

    #[instrument(skip(self, idea))]
    async fn expand_idea(&self, idea: &str) -> VetrinaResult<IdeaBundle> {
        let platforms = Platform::all();
        let payload: IdeaPayload = self
            .structured(
                GenerationTask::IdeaExpansion,
                prompts::expand_idea(idea, &platforms),
                schemas::idea_expansion(&platforms),
            )
            .await?;
        let metadata = conversions::to_metadata(payload.video_metadata, None);
        let content = conversions::to_generated_content(payload.platform_content)?;
        info!(title = %metadata.title(), "Expanded idea into a concept");
        Ok(IdeaBundle::new(
            metadata,
            content,
            payload.editing_suggestions,
        ))
    }

    #[instrument(skip(self))]
    async fn suggest_post_times(
        &self,
        platforms: &[Platform],
        content_type: &str,
        now: DateTime<Utc>,
    ) -> VetrinaResult<HashMap<Platform, DateTime<Utc>>> {
        let payload: HashMap<String, crate::dto::BestTimePayload> = self
            .structured(
                GenerationTask::PostTimes,
                prompts::post_times(platforms, content_type, now),
                schemas::post_times(platforms),
            )
            .await?;
        conversions::to_post_times(payload)
    }

    #[instrument(skip(self, description))]
    async fn simulate_comments(
        &self,
        title: &str,
        description: &str,
    ) -> VetrinaResult<Vec<Comment>> {
        let payload: CommentsPayload = self
            .structured(
                GenerationTask::Comments,
                prompts::comments(title, description),
                schemas::comments(),
            )
            .await?;
        Ok(payload.comments)
    }

    #[instrument(skip(self, post), fields(post = %post.id()))]
    async fn simulate_analytics(&self, post: &Post) -> VetrinaResult<Analytics> {
        let payload: AnalyticsPayload = self
            .structured(
                GenerationTask::Analytics,
                prompts::analytics(post),
                schemas::analytics(),
            )
            .await?;
        Ok(conversions::to_analytics(payload))
    }

    #[instrument(skip(self, image, instruction))]
    async fn edit_image(&self, image: &ImageData, instruction: &str) -> VetrinaResult<ImageData> {
        let parts = vec![
            Part::text(instruction),
            Part::inline(image.mime_type().clone(), image.base64().clone()),
        ];
        self.image_request(parts, instruction).await
    }

    #[instrument(skip(self, prompt))]
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> VetrinaResult<ImageData> {
        let framed = format!("{} (aspect ratio {})", prompt, aspect_ratio);
        self.image_request(vec![Part::text(framed)], prompt).await
    }

    #[instrument(skip(self, prompt, seed_image))]
    async fn generate_video(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        seed_image: Option<&ImageData>,
    ) -> VetrinaResult<Vec<u8>> {
        let mut instance = json!({"prompt": prompt});
        if let Some(image) = seed_image {
            instance["image"] = json!({
                "bytesBase64Encoded": image.base64(),
                "mimeType": image.mime_type(),
            });
        }
        let body = json!({
            "instances": [instance],
            "parameters": {"aspectRatio": aspect_ratio.to_string()},
        });

        let model = Self::model_for_task(GenerationTask::MediaGeneration);
        let operation = self.start_operation(model, &body).await?;
        info!(operation = %operation, "Started video generation");

        let status = poll_operation(
            || {
                let client = self.clone();
                let name = operation.clone();
                async move {
                    let value = client.fetch_operation(&name).await?;
                    Ok(OperationStatus::from_value(&value))
                }
            },
            self.poll_interval(),
            self.poll_max_attempts(),
        )
        .await?;

        let encoded = status.video_base64.ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::SchemaViolation(
                "completed operation carries no video bytes".to_string(),
            ))
        })?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())).into())
    }
}
