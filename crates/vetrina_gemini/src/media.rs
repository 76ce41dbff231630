//! Long-running media operation polling.

use serde_json::Value as JsonValue;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use vetrina_error::{GeminiError, GeminiErrorKind, VetrinaResult};

/// Decoded state of a long-running video operation.
#[derive(Debug, Clone, Default)]
pub(crate) struct OperationStatus {
    /// Whether the operation finished
    pub done: bool,
    /// Failure message reported by the service
    pub error: Option<String>,
    /// Base64 video bytes, present once done
    pub video_base64: Option<String>,
}

impl OperationStatus {
    pub(crate) fn from_value(value: &JsonValue) -> Self {
        let done = value
            .get("done")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);
        let error = value
            .pointer("/error/message")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        let video_base64 = value
            .pointer("/response/generateVideoResponse/generatedSamples/0/video/bytesBase64Encoded")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        Self {
            done,
            error,
            video_base64,
        }
    }
}

/// Poll an operation until it completes, fails, or the attempt ceiling is
/// reached.
///
/// The ceiling makes a stuck operation surface as
/// [`GeminiErrorKind::OperationTimeout`] instead of waiting forever; a
/// reported failure surfaces as [`GeminiErrorKind::OperationFailed`].
pub(crate) async fn poll_operation<F, Fut>(
    mut fetch: F,
    interval: Duration,
    max_attempts: u32,
) -> VetrinaResult<OperationStatus>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = VetrinaResult<OperationStatus>>,
{
    for attempt in 1..=max_attempts {
        let status = fetch().await?;
        if let Some(message) = status.error {
            return Err(GeminiError::new(GeminiErrorKind::OperationFailed(message)).into());
        }
        if status.done {
            debug!(attempt, "Media operation completed");
            return Ok(status);
        }
        debug!(attempt, max_attempts, "Media operation still pending");
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }
    Err(GeminiError::new(GeminiErrorKind::OperationTimeout {
        attempts: max_attempts,
    })
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use vetrina_error::VetrinaError;

    #[tokio::test]
    async fn times_out_after_exactly_the_ceiling() {
        let calls = AtomicU32::new(0);
        let result = poll_operation(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(OperationStatus::default()) }
            },
            Duration::ZERO,
            5,
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        match result {
            Err(VetrinaError::Gemini(err)) => {
                assert_eq!(err.kind, GeminiErrorKind::OperationTimeout { attempts: 5 });
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn completes_when_done() {
        let calls = AtomicU32::new(0);
        let status = poll_operation(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    Ok(OperationStatus {
                        done: n >= 2,
                        error: None,
                        video_base64: Some("aGk=".to_string()),
                    })
                }
            },
            Duration::ZERO,
            10,
        )
        .await
        .unwrap();

        assert!(status.done);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn reported_failure_is_not_a_timeout() {
        let result = poll_operation(
            || async {
                Ok(OperationStatus {
                    done: false,
                    error: Some("quota exhausted".to_string()),
                    video_base64: None,
                })
            },
            Duration::ZERO,
            10,
        )
        .await;

        match result {
            Err(VetrinaError::Gemini(err)) => {
                assert_eq!(
                    err.kind,
                    GeminiErrorKind::OperationFailed("quota exhausted".to_string())
                );
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn status_decodes_operation_shape() {
        let value = serde_json::json!({
            "name": "operations/abc",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [
                        {"video": {"bytesBase64Encoded": "dmlkZW8="}}
                    ]
                }
            }
        });
        let status = OperationStatus::from_value(&value);
        assert!(status.done);
        assert_eq!(status.video_base64.as_deref(), Some("dmlkZW8="));
        assert!(status.error.is_none());
    }
}
