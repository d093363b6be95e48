use crate::error::{Result, SprintError};
use crate::paths::TASK_EXTENSION;
use crate::slug::slug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The atomic unit of work: one YAML record per task file.
///
/// `primary_contact` is omitted from the record when absent; `theme` decodes
/// to the empty string when the field is missing. Story points are
/// conventionally one of 1, 3, 5, 8 but the entity does not enforce this —
/// that is a CLI concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub storypoints: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub theme: String,
}

impl Task {
    pub fn new(title: impl Into<String>, storypoints: u32) -> Self {
        Self::with_details(title, storypoints, None, None)
    }

    /// Full constructor. An absent theme normalizes to the empty string.
    pub fn with_details(
        title: impl Into<String>,
        storypoints: u32,
        primary_contact: Option<String>,
        theme: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            storypoints,
            primary_contact,
            theme: theme.unwrap_or_default(),
        }
    }

    /// Read a task record from disk. A missing, unreadable, or malformed
    /// file is a decode failure carrying the offending path.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            std::fs::read_to_string(path).map_err(|e| SprintError::decode(path, e))?;
        serde_yaml::from_str(&data).map_err(|e| SprintError::decode(path, e))
    }

    /// Derived filename: `slug(title)` plus the record extension. Two tasks
    /// with the same title collide; accepted behavior.
    pub fn filename(&self) -> String {
        format!("{}.{}", slug(&self.title), TASK_EXTENSION)
    }

    pub fn filepath(&self, directory: &Path) -> PathBuf {
        directory.join(self.filename())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
