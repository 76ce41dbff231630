//! Response schemas sent with structured generation requests.
//!
//! Shapes mirror the payload DTOs; the typed decode after the call is what
//! actually enforces them.

use serde_json::{Value as JsonValue, json};
use vetrina_core::Platform;

fn platform_content_entry() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING"},
            "description": {"type": "STRING"},
            "hashtags": {"type": "ARRAY", "items": {"type": "STRING"}}
        },
        "required": ["title", "description", "hashtags"]
    })
}

fn platform_content(platforms: &[Platform]) -> JsonValue {
    let mut properties = serde_json::Map::new();
    for platform in platforms {
        properties.insert(platform.to_string(), platform_content_entry());
    }
    json!({"type": "OBJECT", "properties": properties})
}

fn editing_suggestions() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "general": {"type": "ARRAY", "items": {"type": "STRING"}},
            "trimming": {
                "type": "OBJECT",
                "properties": {
                    "startTime": {"type": "NUMBER"},
                    "endTime": {"type": "NUMBER"},
                    "reason": {"type": "STRING"}
                },
                "required": ["startTime", "endTime", "reason"],
                "nullable": true
            },
            "overlays": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": {"type": "STRING"},
                        "timestamp": {"type": "NUMBER"},
                        "style": {"type": "STRING"},
                        "position": {"type": "STRING"},
                        "animation": {"type": "STRING"}
                    },
                    "required": ["text", "timestamp", "style", "position", "animation"]
                }
            },
            "filter": {
                "type": "OBJECT",
                "properties": {
                    "name": {"type": "STRING"},
                    "reason": {"type": "STRING"}
                },
                "required": ["name", "reason"],
                "nullable": true
            },
            "transition": {
                "type": "OBJECT",
                "properties": {
                    "type": {"type": "STRING"},
                    "timestamp": {"type": "NUMBER"},
                    "reason": {"type": "STRING"}
                },
                "required": ["type", "timestamp", "reason"],
                "nullable": true
            },
            "visualEffect": {
                "type": "OBJECT",
                "properties": {
                    "type": {"type": "STRING"},
                    "timestamp": {"type": "NUMBER"},
                    "duration": {"type": "NUMBER"},
                    "reason": {"type": "STRING"}
                },
                "required": ["type", "timestamp", "duration", "reason"],
                "nullable": true
            }
        },
        "required": ["general", "trimming", "overlays", "filter", "transition", "visualEffect"]
    })
}

fn video_metadata() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING"},
            "description": {"type": "STRING"},
            "tags": {"type": "ARRAY", "items": {"type": "STRING"}},
            "contentType": {"type": "STRING"}
        },
        "required": ["title", "description", "tags", "contentType"]
    })
}

/// Schema for metadata inference.
pub fn metadata() -> JsonValue {
    video_metadata()
}

/// Schema for content plus editing suggestions.
pub fn content_and_suggestions(platforms: &[Platform]) -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "platformContent": platform_content(platforms),
            "editingSuggestions": editing_suggestions()
        },
        "required": ["platformContent", "editingSuggestions"]
    })
}

/// Schema for idea expansion.
pub fn idea_expansion(platforms: &[Platform]) -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "videoMetadata": video_metadata(),
            "platformContent": platform_content(platforms),
            "editingSuggestions": editing_suggestions()
        },
        "required": ["videoMetadata", "platformContent", "editingSuggestions"]
    })
}

/// Schema for best-post-time suggestions.
pub fn post_times(platforms: &[Platform]) -> JsonValue {
    let mut properties = serde_json::Map::new();
    for platform in platforms {
        properties.insert(
            platform.to_string(),
            json!({
                "type": "OBJECT",
                "properties": {"bestTimeISO": {"type": "STRING"}},
                "required": ["bestTimeISO"]
            }),
        );
    }
    json!({"type": "OBJECT", "properties": properties})
}

/// Schema for comment simulation.
pub fn comments() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "comments": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "author": {"type": "STRING"},
                        "comment": {"type": "STRING"},
                        "sentiment": {"type": "STRING"},
                        "autoReply": {"type": "STRING"}
                    },
                    "required": ["author", "comment", "sentiment"]
                }
            }
        },
        "required": ["comments"]
    })
}

/// Schema for analytics simulation.
pub fn analytics() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "views": {"type": "NUMBER"},
            "likes": {"type": "NUMBER"},
            "shares": {"type": "NUMBER"},
            "comments": {"type": "NUMBER"}
        },
        "required": ["views", "likes", "shares", "comments"]
    })
}
