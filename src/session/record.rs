//! The data model for one captured image.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One captured image in a session: its file, annotation, position, and
/// creation time. This is exactly what gets persisted to metadata.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Path to the image file. Existence is not checked here; consumers
    /// that need the file (export, display) check lazily.
    pub filepath: String,

    /// Free-text annotation. Empty string when unset, never absent.
    #[serde(default)]
    pub description: String,

    /// Zero-based position in the session. Always equals the record's
    /// index in the owning collection after any mutation completes.
    #[serde(default)]
    pub order: usize,

    /// ISO-8601 creation time, assigned once and never mutated.
    #[serde(default)]
    pub timestamp: String,
}

impl ImageRecord {
    /// Create a record for a newly captured image at the given position.
    pub fn new(filepath: impl Into<String>, order: usize) -> Self {
        ImageRecord {
            filepath: filepath.into(),
            description: String::new(),
            order,
            timestamp: now_timestamp(),
        }
    }

    /// Fill in the timestamp if a deserialized record arrived without one.
    pub(crate) fn ensure_timestamp(&mut self) {
        if self.timestamp.is_empty() {
            self.timestamp = now_timestamp();
        }
    }
}

/// Current local time as an ISO-8601 string (microsecond precision)
fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
