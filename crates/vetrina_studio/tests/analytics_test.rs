//! Tests for analytics replacement and the derived insight views.

mod helpers;

use chrono::{Duration, Utc};
use helpers::ScriptedDriver;
use vetrina_core::{Analytics, Platform, VideoMetadata};
use vetrina_studio::{Studio, views};

async fn studio_with_posts(platforms: &[Platform]) -> Studio<ScriptedDriver> {
    let studio = Studio::new(ScriptedDriver::new());
    studio
        .generate_from_upload(VideoMetadata::new(
            Some("clip.mp4".to_string()),
            "Metrics",
            "desc",
            vec![],
            "Tutorial",
        ))
        .await
        .unwrap();
    let base = Utc::now() + Duration::hours(1);
    for (offset, platform) in platforms.iter().enumerate() {
        studio
            .schedule(*platform, base + Duration::hours(offset as i64))
            .await
            .unwrap();
    }
    studio
}

#[tokio::test]
async fn apply_analytics_replaces_all_four_counters() {
    let studio = studio_with_posts(&[Platform::YouTube]).await;
    let id = studio.snapshot().await.posts[0].id().clone();

    studio
        .apply_analytics(
            &id,
            Analytics {
                views: 100,
                likes: 50,
                shares: 20,
                comments: 10,
            },
        )
        .await
        .unwrap();

    let fresh = Analytics {
        views: 52345,
        likes: 3123,
        shares: 456,
        comments: 189,
    };
    studio.apply_analytics(&id, fresh).await.unwrap();

    let state = studio.snapshot().await;
    assert_eq!(state.posts[0].analytics(), &fresh);
}

#[tokio::test]
async fn refresh_analytics_pulls_from_the_driver() {
    let studio = studio_with_posts(&[Platform::TikTok]).await;
    let id = studio.snapshot().await.posts[0].id().clone();

    studio.refresh_analytics(&id).await.unwrap();

    let state = studio.snapshot().await;
    let analytics = state.posts[0].analytics();
    assert!(analytics.views > 0);
    assert_eq!(analytics.views, analytics.likes * 10);
}

#[tokio::test]
async fn totals_sum_over_all_posts() {
    let studio = studio_with_posts(&[Platform::YouTube, Platform::TikTok]).await;
    let ids: Vec<_> = studio
        .snapshot()
        .await
        .posts
        .iter()
        .map(|post| post.id().clone())
        .collect();

    studio
        .apply_analytics(
            &ids[0],
            Analytics {
                views: 100,
                likes: 10,
                shares: 5,
                comments: 1,
            },
        )
        .await
        .unwrap();
    studio
        .apply_analytics(
            &ids[1],
            Analytics {
                views: 200,
                likes: 30,
                shares: 5,
                comments: 3,
            },
        )
        .await
        .unwrap();

    let state = studio.snapshot().await;
    let totals = views::analytics_totals(&state.posts);
    assert_eq!(totals.views, 300);
    assert_eq!(totals.likes, 40);
    assert_eq!(totals.shares, 10);
    assert_eq!(totals.comments, 4);

    let rows = views::chart_rows(&state.posts);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.iter().map(|row| row.views).sum::<u64>(), 300);
}

#[tokio::test]
async fn best_platform_ranks_by_average_likes() {
    let studio = studio_with_posts(&[Platform::YouTube, Platform::TikTok]).await;
    let state = studio.snapshot().await;
    let youtube_id = state
        .posts
        .iter()
        .find(|post| post.platform() == &Platform::YouTube)
        .unwrap()
        .id()
        .clone();
    let tiktok_id = state
        .posts
        .iter()
        .find(|post| post.platform() == &Platform::TikTok)
        .unwrap()
        .id()
        .clone();

    studio
        .apply_analytics(
            &youtube_id,
            Analytics {
                views: 1000,
                likes: 10,
                shares: 0,
                comments: 0,
            },
        )
        .await
        .unwrap();
    studio
        .apply_analytics(
            &tiktok_id,
            Analytics {
                views: 500,
                likes: 90,
                shares: 0,
                comments: 0,
            },
        )
        .await
        .unwrap();

    let state = studio.snapshot().await;
    assert_eq!(views::best_platform(&state.posts), Some(Platform::TikTok));
}

#[tokio::test]
async fn best_platform_tie_breaks_in_declaration_order() {
    let studio = studio_with_posts(&[Platform::TikTok, Platform::Instagram]).await;
    let state = studio.snapshot().await;
    let same = Analytics {
        views: 100,
        likes: 42,
        shares: 1,
        comments: 1,
    };
    for post in &state.posts {
        studio.apply_analytics(post.id(), same).await.unwrap();
    }

    let state = studio.snapshot().await;
    // Instagram precedes TikTok in declaration order
    assert_eq!(views::best_platform(&state.posts), Some(Platform::Instagram));
}

#[tokio::test]
async fn best_platform_is_none_without_posts() {
    assert_eq!(views::best_platform(&[]), None);
}
