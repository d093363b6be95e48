use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const BACKLOG_DIR: &str = "backlog";
pub const CURRENT_DIR: &str = "current";
pub const CURRENT_TODO_DIR: &str = "current/todo";
pub const CURRENT_DONE_DIR: &str = "current/done";

pub const TEAM_FILE: &str = "team.yml";
pub const THEMES_FILE: &str = "themes.yml";

/// Extension appended to slugged task titles.
pub const TASK_EXTENSION: &str = "yml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn backlog_dir(root: &Path) -> PathBuf {
    root.join(BACKLOG_DIR)
}

pub fn current_sprint_dir(root: &Path) -> PathBuf {
    root.join(CURRENT_DIR)
}

pub fn current_todo_dir(root: &Path) -> PathBuf {
    root.join(CURRENT_TODO_DIR)
}

pub fn current_done_dir(root: &Path) -> PathBuf {
    root.join(CURRENT_DONE_DIR)
}

pub fn team_path(root: &Path) -> PathBuf {
    root.join(TEAM_FILE)
}

pub fn themes_path(root: &Path) -> PathBuf {
    root.join(THEMES_FILE)
}

/// True for files carrying a task record extension (`.yml` or `.yaml`).
pub fn is_task_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(backlog_dir(root), PathBuf::from("/tmp/proj/backlog"));
        assert_eq!(current_todo_dir(root), PathBuf::from("/tmp/proj/current/todo"));
        assert_eq!(current_done_dir(root), PathBuf::from("/tmp/proj/current/done"));
        assert_eq!(team_path(root), PathBuf::from("/tmp/proj/team.yml"));
    }

    #[test]
    fn task_file_extensions() {
        assert!(is_task_file(Path::new("a/b/task.yml")));
        assert!(is_task_file(Path::new("task.yaml")));
        assert!(!is_task_file(Path::new("notes.txt")));
        assert!(!is_task_file(Path::new("README")));
    }
}
