use crate::error::Result;
use crate::paths;
use crate::task::Task;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Sort policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Storypoints,
}

/// Ordering applied by [`TaskCollection::for_contact`].
///
/// `ThemeThenPoints` is the current listing order; `ByKey` is the older
/// single-key mode kept for callers that still want it. Both sorts are
/// stable: ties preserve insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    #[default]
    ThemeThenPoints,
    ByKey {
        key: SortKey,
        reverse: bool,
    },
}

// ---------------------------------------------------------------------------
// TaskCollection
// ---------------------------------------------------------------------------

/// An ordered list of tasks with aggregate and grouping views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every task record (`.yml`/`.yaml`) directly in `directory`.
    /// Non-recursive; a single unreadable or malformed record fails the
    /// whole load rather than returning a partial collection.
    pub fn load(directory: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file() && paths::is_task_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut collection = Self::new();
        for path in &paths {
            collection.push(Task::load(path)?);
        }
        Ok(collection)
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Sum of story points over all members; 0 when empty.
    pub fn total_storypoints(&self) -> u32 {
        self.tasks.iter().map(|t| t.storypoints).sum()
    }

    /// Distinct primary contacts, sorted ascending and deduplicated.
    /// `None` represents tasks with no contact and sorts first.
    pub fn contacts(&self) -> Vec<Option<String>> {
        let mut contacts: Vec<Option<String>> = self
            .tasks
            .iter()
            .map(|t| t.primary_contact.clone())
            .collect();
        contacts.sort();
        contacts.dedup();
        contacts
    }

    /// Tasks whose primary contact equals `contact`, ordered by `policy`.
    pub fn for_contact(&self, contact: Option<&str>, policy: SortPolicy) -> Self {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.primary_contact.as_deref() == contact)
            .cloned()
            .collect();

        match policy {
            SortPolicy::ThemeThenPoints => {
                tasks.sort_by(|a, b| {
                    a.theme
                        .cmp(&b.theme)
                        .then(a.storypoints.cmp(&b.storypoints))
                });
            }
            SortPolicy::ByKey { key, reverse } => {
                tasks.sort_by(|a, b| {
                    let ord = match key {
                        SortKey::Title => a.title.cmp(&b.title),
                        SortKey::Storypoints => a.storypoints.cmp(&b.storypoints),
                    };
                    if reverse {
                        ord.reverse()
                    } else {
                        ord
                    }
                });
            }
        }

        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl FromIterator<Task> for TaskCollection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
