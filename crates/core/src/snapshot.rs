//! Persisted form of a `TaskState`.
//!
//! The saved value is a flat JSON object keyed by task position:
//! `{"task-0": true, "task-1": false, ...}`. Keys are positional, so a saved
//! snapshot only lines up with a checklist whose task order has not changed.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{TaskId, TaskState};

/// Key the snapshot is stored under.
pub const STORAGE_KEY: &str = "transitionTrackerState";

const TASK_KEY_PREFIX: &str = "task-";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(String),

    #[error("snapshot is not a JSON object")]
    NotAnObject,
}

/// `task-<index>`
#[must_use]
pub fn task_key(task: TaskId) -> String {
    format!("{TASK_KEY_PREFIX}{}", task.index())
}

/// Inverse of [`task_key`]. Only the canonical spelling is accepted, so
/// `task-01` or `task-+1` are not read as task 1.
#[must_use]
pub fn parse_task_key(key: &str) -> Option<TaskId> {
    let task: TaskId = key.strip_prefix(TASK_KEY_PREFIX)?.parse().ok()?;
    (task_key(task) == key).then_some(task)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    values: BTreeMap<TaskId, bool>,
    skipped: usize,
}

impl Snapshot {
    #[must_use]
    pub fn from_state(state: &TaskState) -> Self {
        Self {
            values: state.iter().collect(),
            skipped: 0,
        }
    }

    /// Decode a stored snapshot.
    ///
    /// Entries with an unrecognised key or a non-boolean value are skipped and
    /// counted in [`Snapshot::skipped`].
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the text is not JSON or not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|err| SnapshotError::Malformed(err.to_string()))?;
        let Value::Object(entries) = value else {
            return Err(SnapshotError::NotAnObject);
        };

        let mut snapshot = Self::default();
        for (key, value) in entries {
            match (parse_task_key(&key), value.as_bool()) {
                (Some(task), Some(checked)) => {
                    snapshot.values.insert(task, checked);
                }
                _ => snapshot.skipped += 1,
            }
        }
        Ok(snapshot)
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        let entries: Map<String, Value> = self
            .values
            .iter()
            .map(|(task, checked)| (task_key(*task), Value::Bool(*checked)))
            .collect();
        Value::Object(entries).to_string()
    }

    #[must_use]
    pub fn get(&self, task: TaskId) -> Option<bool> {
        self.values.get(&task).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries dropped while decoding.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Overwrite `state` for every task this snapshot has a value for.
    ///
    /// Tasks without an entry keep their current value; entries past the end
    /// of `state` are ignored. Returns how many tasks were set.
    pub fn apply_to(&self, state: &mut TaskState) -> usize {
        self.values
            .iter()
            .filter(|(task, checked)| state.set(**task, **checked))
            .count()
    }
}
