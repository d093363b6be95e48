use crate::config::{Team, Themes};
use crate::error::Result;
use crate::io;
use crate::paths;
use crate::task::Task;
use std::path::{Path, PathBuf};

/// Owns the on-disk project layout and the task write path.
///
/// Opening a project guarantees that `backlog/`, `current/`,
/// `current/todo/`, and `current/done/` exist. Team and theme registries
/// are loaded from their config files when present; an absent file means an
/// empty registry.
#[derive(Debug, Clone)]
pub struct Project {
    directory: PathBuf,
    pub team: Team,
    pub themes: Themes,
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.directory == other.directory
    }
}

impl Eq for Project {}

impl Project {
    /// Open (and lazily initialize) the project at `directory`, loading
    /// team and theme registries from their default locations.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        let team_path = paths::team_path(&directory);
        let themes_path = paths::themes_path(&directory);
        Self::open_with_config(directory, &team_path, &themes_path)
    }

    /// Open with explicit registry file locations.
    pub fn open_with_config(
        directory: impl Into<PathBuf>,
        team_path: &Path,
        themes_path: &Path,
    ) -> Result<Self> {
        let directory = directory.into();

        io::ensure_dir(&paths::backlog_dir(&directory))?;
        io::ensure_dir(&paths::current_sprint_dir(&directory))?;
        io::ensure_dir(&paths::current_todo_dir(&directory))?;
        io::ensure_dir(&paths::current_done_dir(&directory))?;

        let team = Team::load(team_path)?;
        let themes = Themes::load(themes_path)?;

        Ok(Self {
            directory,
            team,
            themes,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn backlog_directory(&self) -> PathBuf {
        paths::backlog_dir(&self.directory)
    }

    pub fn current_sprint_directory(&self) -> PathBuf {
        paths::current_sprint_dir(&self.directory)
    }

    pub fn current_todo_directory(&self) -> PathBuf {
        paths::current_todo_dir(&self.directory)
    }

    pub fn current_done_directory(&self) -> PathBuf {
        paths::current_done_dir(&self.directory)
    }

    /// Create a task and persist it under the backlog (or `current/todo`
    /// when `current` is set). Returns the task and the path written so the
    /// caller can stage the file under version control.
    pub fn add_task(
        &self,
        title: &str,
        storypoints: u32,
        primary_contact: Option<&str>,
        theme: Option<&str>,
        current: bool,
    ) -> Result<(Task, PathBuf)> {
        let task = Task::with_details(
            title,
            storypoints,
            primary_contact.map(str::to_string),
            theme.map(str::to_string),
        );
        let directory = if current {
            self.current_todo_directory()
        } else {
            self.backlog_directory()
        };
        let path = task.filepath(&directory);
        let data = serde_yaml::to_string(&task)?;
        io::atomic_write(&path, data.as_bytes())?;
        Ok((task, path))
    }

    /// Load the task at `path`, apply the provided fields, and rewrite the
    /// same physical file. When the title changes, the returned path is the
    /// new filename under the same parent directory; the file itself is NOT
    /// moved — the caller owns the rename so it can go through version
    /// control. When the title is unchanged, the returned path equals the
    /// input path.
    pub fn edit_task(
        &self,
        path: &Path,
        title: Option<&str>,
        storypoints: Option<u32>,
        primary_contact: Option<&str>,
        theme: Option<&str>,
    ) -> Result<(Task, PathBuf)> {
        let mut task = Task::load(path)?;
        let old_title = task.title.clone();

        if let Some(t) = title {
            task.title = t.to_string();
        }
        if let Some(s) = storypoints {
            task.storypoints = s;
        }
        if let Some(p) = primary_contact {
            task.primary_contact = Some(p.to_string());
        }
        if let Some(e) = theme {
            task.theme = e.to_string();
        }

        let data = serde_yaml::to_string(&task)?;
        io::atomic_write(path, data.as_bytes())?;

        let new_path = if task.title == old_title {
            path.to_path_buf()
        } else {
            let parent = path.parent().unwrap_or(Path::new("."));
            task.filepath(parent)
        };
        Ok((task, new_path))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
