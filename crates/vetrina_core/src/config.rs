//! AI backend configuration and user profile.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Selectable AI backends.
///
/// Only Gemini is wired up; the rest exist so keys can be stored per model
/// ahead of time.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum AiModel {
    #[default]
    Gemini,
    #[strum(serialize = "GPT")]
    #[serde(rename = "GPT")]
    Gpt,
    DeepSeek,
    Qwen,
    Kimi,
    HuggingFace,
}

/// Per-model API key store plus the active model selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// The model new requests default to
    pub model: AiModel,
    /// API keys keyed by model
    api_keys: HashMap<AiModel, String>,
}

impl AiConfig {
    /// Store the key for a model.
    pub fn set_key(&mut self, model: AiModel, key: impl Into<String>) {
        self.api_keys.insert(model, key.into());
    }

    /// The stored key for a model, if any.
    pub fn key_for(&self, model: AiModel) -> Option<&str> {
        self.api_keys.get(&model).map(String::as_str)
    }

    /// The key for the active model.
    pub fn active_key(&self) -> Option<&str> {
        self.key_for(self.model)
    }
}

/// The generation-service operations a model can be assigned to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GenerationTask {
    /// Metadata inference from a file name
    Metadata,
    /// Per-platform content plus editing suggestions
    Content,
    /// Idea expansion into a full concept
    IdeaExpansion,
    /// Best-post-time suggestion
    PostTimes,
    /// Comment simulation
    Comments,
    /// Analytics simulation
    Analytics,
    /// Instruction-driven image editing
    ImageEdit,
    /// Image/video generation
    MediaGeneration,
}

/// Which model handles which task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskModelSelection {
    assignments: HashMap<GenerationTask, AiModel>,
}

impl TaskModelSelection {
    /// Assign a model to a task.
    pub fn assign(&mut self, task: GenerationTask, model: AiModel) {
        self.assignments.insert(task, model);
    }

    /// The model assigned to a task, defaulting to Gemini.
    pub fn model_for(&self, task: GenerationTask) -> AiModel {
        self.assignments.get(&task).copied().unwrap_or_default()
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Avatar reference, if set
    pub avatar: Option<String>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "Content Creator".to_string(),
            avatar: None,
        }
    }
}
