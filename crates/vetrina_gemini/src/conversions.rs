//! Conversions from wire payloads into core types.

use crate::dto::{AnalyticsPayload, BestTimePayload, MetadataPayload, PlatformContentPayload};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::str::FromStr;
use vetrina_core::{Analytics, GeneratedContent, Platform, PlatformContent, VideoMetadata};
use vetrina_error::{GeminiError, GeminiErrorKind, VetrinaResult};

/// Build video metadata from an inference payload, attaching the file name
/// the caller already knows.
pub fn to_metadata(payload: MetadataPayload, file_name: Option<String>) -> VideoMetadata {
    VideoMetadata::new(
        file_name,
        payload.title,
        payload.description,
        payload.tags,
        payload.content_type,
    )
}

/// Build the per-platform content map, rejecting unknown platform keys.
pub fn to_generated_content(
    payload: HashMap<String, PlatformContentPayload>,
) -> VetrinaResult<GeneratedContent> {
    let mut entries = Vec::with_capacity(payload.len());
    for (name, content) in payload {
        let platform = Platform::from_str(&name).map_err(|_| {
            GeminiError::new(GeminiErrorKind::SchemaViolation(format!(
                "unknown platform '{}' in response",
                name
            )))
        })?;
        entries.push((
            platform,
            PlatformContent::new(content.title, content.description, content.hashtags),
        ));
    }
    Ok(GeneratedContent::from_entries(entries))
}

/// Build the per-platform best-time map.
pub fn to_post_times(
    payload: HashMap<String, BestTimePayload>,
) -> VetrinaResult<HashMap<Platform, DateTime<Utc>>> {
    let mut times = HashMap::with_capacity(payload.len());
    for (name, entry) in payload {
        let platform = Platform::from_str(&name).map_err(|_| {
            GeminiError::new(GeminiErrorKind::SchemaViolation(format!(
                "unknown platform '{}' in response",
                name
            )))
        })?;
        let when = DateTime::parse_from_rfc3339(&entry.best_time_iso)
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::SchemaViolation(format!(
                    "invalid bestTimeISO '{}': {}",
                    entry.best_time_iso, e
                )))
            })?
            .with_timezone(&Utc);
        times.insert(platform, when);
    }
    Ok(times)
}

/// Round wire counters into analytics.
pub fn to_analytics(payload: AnalyticsPayload) -> Analytics {
    let counter = |value: f64| value.max(0.0).round() as u64;
    Analytics {
        views: counter(payload.views),
        likes: counter(payload.likes),
        shares: counter(payload.shares),
        comments: counter(payload.comments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_is_a_schema_violation() {
        let mut payload = HashMap::new();
        payload.insert(
            "MySpace".to_string(),
            PlatformContentPayload {
                title: "t".into(),
                description: "d".into(),
                hashtags: vec![],
            },
        );
        assert!(to_generated_content(payload).is_err());
    }

    #[test]
    fn post_times_parse_to_utc() {
        let mut payload = HashMap::new();
        payload.insert(
            "TikTok".to_string(),
            BestTimePayload {
                best_time_iso: "2025-06-05T18:30:00.000Z".to_string(),
            },
        );
        let times = to_post_times(payload).unwrap();
        assert_eq!(times.len(), 1);
        assert!(times.contains_key(&Platform::TikTok));
    }

    #[test]
    fn analytics_rounds_and_floors_negatives() {
        let analytics = to_analytics(AnalyticsPayload {
            views: 52345.6,
            likes: 3123.0,
            shares: -1.0,
            comments: 189.4,
        });
        assert_eq!(analytics.views, 52346);
        assert_eq!(analytics.shares, 0);
        assert_eq!(analytics.comments, 189);
    }
}
