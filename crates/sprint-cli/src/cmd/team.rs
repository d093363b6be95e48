use crate::output::print_json;
use clap::Subcommand;
use sprint_core::config::{Team, TeamMember};
use sprint_core::{paths, SprintError};
use std::path::Path;

#[derive(Subcommand)]
pub enum TeamSubcommand {
    /// Add a team member
    Add {
        /// Short unique alias, e.g. initials
        lookup: String,
        first_name: String,
        last_name: String,
    },
    /// Remove a team member
    Remove { lookup: String },
    /// List team members
    List,
}

pub fn run(root: &Path, subcmd: TeamSubcommand, json: bool) -> anyhow::Result<()> {
    let path = paths::team_path(root);
    let mut team = Team::load(&path)?;

    match subcmd {
        TeamSubcommand::Add {
            lookup,
            first_name,
            last_name,
        } => match team.add_member(TeamMember::new(lookup, first_name, last_name)) {
            Ok(member) => {
                let summary = format!("Added {} ({})", member.full_name(), member.lookup);
                team.save(&path)?;
                if json {
                    print_json(&serde_json::json!({ "added": true, "count": team.len() }))?;
                } else {
                    println!("{summary}");
                }
            }
            Err(SprintError::DuplicateLookup(lookup)) => {
                anyhow::bail!(
                    "lookup '{lookup}' already in use — known lookups: {}",
                    known_lookups(&team)
                );
            }
            Err(e) => return Err(e.into()),
        },

        TeamSubcommand::Remove { lookup } => match team.remove(&lookup) {
            Ok(member) => {
                team.save(&path)?;
                if json {
                    print_json(&serde_json::json!({ "removed": true, "count": team.len() }))?;
                } else {
                    println!("Removed {} ({})", member.full_name(), member.lookup);
                }
            }
            Err(SprintError::LookupNotFound(lookup)) => {
                anyhow::bail!(
                    "unknown team member '{lookup}' — known lookups: {}",
                    known_lookups(&team)
                );
            }
            Err(e) => return Err(e.into()),
        },

        TeamSubcommand::List => {
            if json {
                let members: Vec<&TeamMember> = team.iter().collect();
                print_json(&members)?;
            } else if team.is_empty() {
                println!("No team members registered.");
            } else {
                for member in &team {
                    println!("{}  {}", member.lookup, member.full_name());
                }
            }
        }
    }

    Ok(())
}

fn known_lookups(team: &Team) -> String {
    if team.is_empty() {
        return "(none)".to_string();
    }
    team.lookups().into_iter().collect::<Vec<_>>().join(", ")
}
