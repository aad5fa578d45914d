//! Task records for taskr.
//!
//! A task is a flat record with a sequential numeric id. Priority is kept
//! as free-form text; `low`, `medium`, and `high` are the documented
//! levels but nothing rejects other values.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Documented priority levels.
pub const PRIORITIES: [&str; 3] = ["low", "medium", "high"];

/// Priority assigned when none is given.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Format of `created_at` timestamps (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single tracked task.
///
/// Serialized field names are the on-disk contract; the persisted file is
/// a JSON array of these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential id, assigned at creation and never reused.
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Fixed at creation, `YYYY-MM-DD HH:MM:SS` local time.
    pub created_at: String,
    pub completed: bool,
}

pub(crate) fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

/// Current local time in the persisted timestamp format.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_matches_persisted_format() {
        let stamp = timestamp_now();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[7..8], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
        assert_eq!(&stamp[16..17], ":");
    }

    #[test]
    fn task_serializes_with_contract_keys() {
        let task = Task {
            id: 1,
            title: "Write docs".to_string(),
            description: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
            completed: false,
        };

        let json = serde_json::to_value(&task).expect("serialize");
        let object = json.as_object().expect("object");
        for key in ["id", "title", "description", "priority", "created_at", "completed"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 6);
    }

    #[test]
    fn missing_priority_defaults_on_load() {
        let json = r#"{
            "id": 3,
            "title": "Old record",
            "description": "",
            "created_at": "2024-01-01 00:00:00",
            "completed": true
        }"#;
        let task: Task = serde_json::from_str(json).expect("parse");
        assert_eq!(task.priority, DEFAULT_PRIORITY);
    }
}
