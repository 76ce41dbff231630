//! Bounded activity log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained activity entries.
pub const ACTIVITY_CAP: usize = 10;

/// One observational log entry. Never read back by logic, only rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Monotonically increasing id
    pub id: u64,
    /// Human-readable description
    pub text: String,
    /// When the activity happened
    pub timestamp: DateTime<Utc>,
}

/// Ring buffer of the most recent activities, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<Activity>,
    next_id: u64,
}

impl ActivityLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new entry, truncating to [`ACTIVITY_CAP`].
    pub fn record(&mut self, text: impl Into<String>) {
        let entry = Activity {
            id: self.next_id,
            text: text.into(),
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.entries.insert(0, entry);
        self.entries.truncate(ACTIVITY_CAP);
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
