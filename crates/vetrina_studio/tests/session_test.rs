//! Tests for session reset, the activity log, profile, and the image flow.

mod helpers;

use chrono::{Duration, Utc};
use helpers::ScriptedDriver;
use vetrina_core::{
    ACTIVITY_CAP, AiModel, ContentState, GenerationTask, ImageData, MediaSource, Platform,
    VideoMetadata,
};
use vetrina_error::{StudioErrorKind, VetrinaError};
use vetrina_studio::{Phase, Studio};

#[tokio::test]
async fn activity_log_stays_bounded_and_newest_first() {
    let studio = Studio::new(ScriptedDriver::new());
    for i in 0..30 {
        studio.add_activity(format!("event {}", i)).await;
    }
    let state = studio.snapshot().await;
    assert_eq!(state.activity.len(), ACTIVITY_CAP);
    let newest = state.activity.iter().next().unwrap();
    assert_eq!(newest.text, "event 29");
}

#[tokio::test]
async fn reset_keeps_posts_activity_connections_and_config() {
    let studio = Studio::new(ScriptedDriver::new());
    studio
        .generate_from_upload(VideoMetadata::new(
            Some("a.mp4".to_string()),
            "Keeper",
            "desc",
            vec![],
            "Tutorial",
        ))
        .await
        .unwrap();
    studio
        .schedule(Platform::YouTube, Utc::now() + Duration::hours(1))
        .await
        .unwrap();
    studio.save_ai_config(AiModel::Qwen, Some("key".to_string())).await;
    let activity_before = studio.snapshot().await.activity.len();

    studio.reset_for_new_content().await;

    let state = studio.snapshot().await;
    assert_eq!(state.posts.len(), 1);
    assert_eq!(state.activity.len(), activity_before);
    assert_eq!(state.ai_config.model, AiModel::Qwen);
    assert!(state.media.is_none());
    assert!(matches!(state.content, ContentState::Idle));
    assert!(state.suggestions.is_none());
    assert_eq!(state.edits.history_len(), 0);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn connection_toggle_and_oauth_grant() {
    let studio = Studio::new(ScriptedDriver::new());

    assert!(!studio.snapshot().await.connections.is_connected(Platform::Facebook));
    assert!(studio.toggle_connection(Platform::Facebook).await);

    studio.complete_oauth(Platform::Pinterest, "pin_creator").await;
    let state = studio.snapshot().await;
    assert!(state.connections.is_connected(Platform::Pinterest));
    assert_eq!(
        state
            .connections
            .get(Platform::Pinterest)
            .unwrap()
            .username
            .as_deref(),
        Some("pin_creator")
    );

    assert!(!studio.toggle_connection(Platform::Pinterest).await);
    let state = studio.snapshot().await;
    assert!(state.connections.get(Platform::Pinterest).unwrap().username.is_none());
}

#[tokio::test]
async fn profile_and_task_model_updates() {
    let studio = Studio::new(ScriptedDriver::new());
    studio.set_username("New Name").await;
    studio
        .assign_task_model(GenerationTask::Comments, AiModel::DeepSeek)
        .await;

    let state = studio.snapshot().await;
    assert_eq!(state.user.name, "New Name");
    assert_eq!(
        state.task_models.model_for(GenerationTask::Comments),
        AiModel::DeepSeek
    );
    assert_eq!(
        state.task_models.model_for(GenerationTask::Analytics),
        AiModel::Gemini
    );
}

#[tokio::test]
async fn image_edit_requires_an_active_image() {
    let studio = Studio::new(ScriptedDriver::new());
    let result = studio.edit_image("add a retro filter").await;
    assert!(matches!(
        result,
        Err(VetrinaError::Studio(err)) if err.kind == StudioErrorKind::NoActiveImage
    ));

    let empty = studio.edit_image("   ").await;
    assert!(matches!(
        empty,
        Err(VetrinaError::Studio(err)) if err.kind == StudioErrorKind::EmptyInstruction
    ));
}

#[tokio::test]
async fn prompt_generated_image_opens_the_editor() {
    let studio = Studio::new(ScriptedDriver::new());
    studio
        .generate_image_session("a cat astronaut", vetrina_core::AspectRatio::Square)
        .await
        .unwrap();

    let state = studio.snapshot().await;
    assert_eq!(state.phase, Phase::ImageEditing);
    let image = state.media.as_ref().and_then(|m| m.image()).unwrap();
    assert_eq!(image.prompt(), "a cat astronaut");

    let empty = studio
        .generate_image_session("  ", vetrina_core::AspectRatio::Square)
        .await;
    assert!(empty.is_err());
}

#[tokio::test]
async fn adopted_image_generates_content_and_moves_to_scheduling() {
    let studio = Studio::new(ScriptedDriver::new());
    studio
        .start_image_session(
            ImageData::builder()
                .base64("b3JpZ2luYWw=")
                .prompt("a dramatic sky")
                .build()
                .unwrap(),
        )
        .await;
    assert_eq!(studio.phase().await, Phase::ImageEditing);

    studio.edit_image("make the sky dramatic").await.unwrap();
    let state = studio.snapshot().await;
    assert!(state.edited_image.is_some());

    studio.adopt_edited_image().await.unwrap();
    let state = studio.snapshot().await;
    assert_eq!(state.phase, Phase::Generation);
    assert!(state.edited_image.is_none());
    assert!(state.suggestions.is_none());
    match state.media {
        Some(MediaSource::Image(ref image)) => {
            assert_eq!(image.prompt(), "make the sky dramatic");
        }
        ref other => panic!("expected image media, got {:?}", other),
    }
    let content = state.content.ready().expect("content for the image");
    for (_, entry) in content.iter() {
        assert!(entry.title().contains("AI Art"));
    }
}
