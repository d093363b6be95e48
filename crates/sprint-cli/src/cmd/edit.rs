use crate::cmd::add::validate_lookup;
use crate::git;
use crate::output::print_json;
use anyhow::Context;
use sprint_core::project::Project;
use std::path::Path;

pub fn run(
    root: &Path,
    fpath: &Path,
    title: Option<&str>,
    storypoints: Option<u32>,
    primary_contact: Option<&str>,
    theme: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let project = Project::open(root).context("failed to open project")?;

    if let Some(contact) = primary_contact {
        validate_lookup(contact, "team member", project.team.lookups())?;
    }
    if let Some(theme) = theme {
        validate_lookup(theme, "theme", project.themes.lookups())?;
    }

    let (task, new_path) =
        project.edit_task(fpath, title, storypoints, primary_contact, theme)?;
    tracing::debug!(path = %fpath.display(), "task record rewritten");

    // The core reports the new filename on a title change but leaves the
    // physical file in place; the rename (and index update) happens here.
    let renamed = new_path != fpath;
    if renamed {
        if git::is_git_repo(root) {
            git::mv(root, fpath, &new_path)?;
        } else {
            std::fs::rename(fpath, &new_path)
                .with_context(|| format!("failed to rename to {}", new_path.display()))?;
        }
    }
    if git::is_git_repo(root) {
        git::stage(root, &new_path);
    }

    if json {
        print_json(&serde_json::json!({
            "task": &task,
            "path": &new_path,
            "renamed": renamed,
        }))?;
    } else if renamed {
        println!("Updated '{}' → {}", task.title, new_path.display());
    } else {
        println!("Updated '{}'", task.title);
    }
    Ok(())
}
