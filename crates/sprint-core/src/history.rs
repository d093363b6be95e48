use crate::collection::TaskCollection;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Story-point total for one archived sprint directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintTotal {
    pub sprint: String,
    pub storypoints: u32,
}

/// Aggregate story points across archived sprints.
///
/// `directory` holds one subdirectory per past sprint, conventionally named
/// by date (`2016-05-02/`). Subdirectories are visited in sorted name order
/// and each is loaded as a task collection; files directly in `directory`
/// and non-directory entries are ignored.
pub fn sprint_totals(directory: &Path) -> Result<Vec<SprintTotal>> {
    let mut names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut totals = Vec::with_capacity(names.len());
    for name in names {
        let tasks = TaskCollection::load(&directory.join(&name))?;
        totals.push(SprintTotal {
            sprint: name,
            storypoints: tasks.total_storypoints(),
        });
    }
    Ok(totals)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_task(dir: &Path, name: &str, points: u32) {
        std::fs::write(
            dir.join(name),
            format!("---\ntitle: {name}\nstorypoints: {points}"),
        )
        .unwrap();
    }

    #[test]
    fn totals_in_sorted_date_order() {
        let dir = TempDir::new().unwrap();
        let later = dir.path().join("2016-05-16");
        let earlier = dir.path().join("2016-05-02");
        std::fs::create_dir(&later).unwrap();
        std::fs::create_dir(&earlier).unwrap();
        write_task(&earlier, "one.yml", 5);
        write_task(&earlier, "two.yml", 3);
        write_task(&later, "three.yml", 8);

        let totals = sprint_totals(dir.path()).unwrap();
        assert_eq!(
            totals,
            vec![
                SprintTotal {
                    sprint: "2016-05-02".to_string(),
                    storypoints: 8,
                },
                SprintTotal {
                    sprint: "2016-05-16".to_string(),
                    storypoints: 8,
                },
            ]
        );
    }

    #[test]
    fn files_and_empty_sprints_are_handled() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("2016-06-01")).unwrap();
        std::fs::write(dir.path().join("README"), "not a sprint").unwrap();

        let totals = sprint_totals(dir.path()).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].storypoints, 0);
    }

    #[test]
    fn empty_directory_yields_no_totals() {
        let dir = TempDir::new().unwrap();
        assert!(sprint_totals(dir.path()).unwrap().is_empty());
    }
}
