use crate::cmd::add::validate_lookup;
use crate::output::{contact_header, print_json, section_header, task_line};
use anyhow::Context;
use clap::ValueEnum;
use sprint_core::collection::{SortKey, SortPolicy, TaskCollection};
use sprint_core::project::Project;
use std::path::Path;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Storypoints,
    Title,
}

pub fn run(
    root: &Path,
    directory: Option<&Path>,
    current: bool,
    primary_contact: Option<&str>,
    sort: Option<SortArg>,
    reverse: bool,
    json: bool,
) -> anyhow::Result<()> {
    let project = Project::open(root).context("failed to open project")?;

    if let Some(contact) = primary_contact {
        validate_lookup(contact, "team member", project.team.lookups())?;
    }

    let (dir, label) = match directory {
        Some(d) => (d.to_path_buf(), d.display().to_string()),
        None if current => (
            project.current_todo_directory(),
            "Current sprint".to_string(),
        ),
        None => (project.backlog_directory(), "Backlog".to_string()),
    };

    let tasks = TaskCollection::load(&dir)
        .with_context(|| format!("failed to list {}", dir.display()))?;

    if json {
        print_json(&tasks.tasks())?;
        return Ok(());
    }

    // --sort/--reverse select the legacy single-key ordering; without them
    // the grouped listing orders by theme, then story points.
    let policy = match (sort, reverse) {
        (Some(SortArg::Storypoints), reverse) => SortPolicy::ByKey {
            key: SortKey::Storypoints,
            reverse,
        },
        (Some(SortArg::Title), reverse) => SortPolicy::ByKey {
            key: SortKey::Title,
            reverse,
        },
        (None, true) => SortPolicy::ByKey {
            key: SortKey::Storypoints,
            reverse: true,
        },
        (None, false) => SortPolicy::ThemeThenPoints,
    };

    println!("{}", section_header(&label, tasks.total_storypoints()));

    for contact in tasks.contacts() {
        if let Some(filter) = primary_contact {
            if contact.as_deref() != Some(filter) {
                continue;
            }
        }

        let subset = tasks.for_contact(contact.as_deref(), policy);
        let name = match &contact {
            Some(alias) => project.team.name(alias),
            None => "Unassigned".to_string(),
        };

        println!();
        println!("{}", contact_header(&name, subset.total_storypoints()));
        println!();
        for task in &subset {
            println!("{}", task_line(task));
        }
    }

    Ok(())
}
