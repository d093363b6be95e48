use crate::git;
use crate::output::print_json;
use anyhow::Context;
use sprint_core::project::Project;
use std::path::Path;

pub fn run(
    root: &Path,
    title: &str,
    storypoints: u32,
    primary_contact: Option<&str>,
    theme: Option<&str>,
    current: bool,
    json: bool,
) -> anyhow::Result<()> {
    let project = Project::open(root).context("failed to open project")?;

    if let Some(contact) = primary_contact {
        validate_lookup(contact, "team member", project.team.lookups())?;
    }
    if let Some(theme) = theme {
        validate_lookup(theme, "theme", project.themes.lookups())?;
    }

    let (task, path) = project.add_task(title, storypoints, primary_contact, theme, current)?;
    tracing::debug!(path = %path.display(), "task record written");

    if git::is_git_repo(root) {
        git::stage(root, &path);
    }

    if json {
        print_json(&serde_json::json!({
            "task": &task,
            "path": &path,
        }))?;
    } else {
        let target = if current { "current sprint" } else { "backlog" };
        println!("Added '{}' [{}] to the {target}", task.title, task.storypoints);
    }
    Ok(())
}

/// Reject aliases the registry does not know, listing the valid ones.
pub fn validate_lookup(
    alias: &str,
    kind: &str,
    known: std::collections::BTreeSet<&str>,
) -> anyhow::Result<()> {
    if known.contains(alias) {
        return Ok(());
    }
    if known.is_empty() {
        anyhow::bail!("unknown {kind} '{alias}' (no lookups registered yet)");
    }
    let lookups: Vec<&str> = known.into_iter().collect();
    anyhow::bail!(
        "unknown {kind} '{alias}' — known lookups: {}",
        lookups.join(", ")
    )
}
