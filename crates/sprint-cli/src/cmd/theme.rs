use crate::output::print_json;
use clap::Subcommand;
use sprint_core::config::{ThemeMember, Themes};
use sprint_core::{paths, SprintError};
use std::path::Path;

#[derive(Subcommand)]
pub enum ThemeSubcommand {
    /// Add a theme
    Add {
        /// Short unique alias, e.g. "admin"
        lookup: String,
        description: String,
    },
    /// Remove a theme
    Remove { lookup: String },
    /// List themes
    List,
}

pub fn run(root: &Path, subcmd: ThemeSubcommand, json: bool) -> anyhow::Result<()> {
    let path = paths::themes_path(root);
    let mut themes = Themes::load(&path)?;

    match subcmd {
        ThemeSubcommand::Add {
            lookup,
            description,
        } => match themes.add_member(ThemeMember::new(lookup, description)) {
            Ok(member) => {
                let summary = format!("Added theme '{}': {}", member.lookup, member.description);
                themes.save(&path)?;
                if json {
                    print_json(&serde_json::json!({ "added": true, "count": themes.len() }))?;
                } else {
                    println!("{summary}");
                }
            }
            Err(SprintError::DuplicateLookup(lookup)) => {
                anyhow::bail!(
                    "theme '{lookup}' already in use — known lookups: {}",
                    known_lookups(&themes)
                );
            }
            Err(e) => return Err(e.into()),
        },

        ThemeSubcommand::Remove { lookup } => match themes.remove(&lookup) {
            Ok(member) => {
                themes.save(&path)?;
                if json {
                    print_json(&serde_json::json!({ "removed": true, "count": themes.len() }))?;
                } else {
                    println!("Removed theme '{}'", member.lookup);
                }
            }
            Err(SprintError::LookupNotFound(lookup)) => {
                anyhow::bail!(
                    "unknown theme '{lookup}' — known lookups: {}",
                    known_lookups(&themes)
                );
            }
            Err(e) => return Err(e.into()),
        },

        ThemeSubcommand::List => {
            if json {
                let members: Vec<&ThemeMember> = themes.iter().collect();
                print_json(&members)?;
            } else if themes.is_empty() {
                println!("No themes registered.");
            } else {
                for theme in &themes {
                    println!("{}  {}", theme.lookup, theme.description);
                }
            }
        }
    }

    Ok(())
}

fn known_lookups(themes: &Themes) -> String {
    if themes.is_empty() {
        return "(none)".to_string();
    }
    themes.lookups().into_iter().collect::<Vec<_>>().join(", ")
}
