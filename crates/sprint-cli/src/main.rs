mod cmd;
mod git;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{list::SortArg, team::TeamSubcommand, theme::ThemeSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprint",
    about = "File-backed agile task tracker — backlog, current sprint, team, and themes",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from backlog/ or .git/)
    #[arg(long, global = true, env = "SPRINT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task to the backlog or the current sprint
    Add {
        /// Task description
        title: String,

        /// Story points: 1, 3, 5 or 8
        #[arg(value_parser = parse_storypoints)]
        storypoints: u32,

        /// Add to the current sprint instead of the backlog
        #[arg(long, short = 'c')]
        current: bool,

        /// Primary contact (team lookup alias)
        #[arg(long, short = 'p')]
        primary_contact: Option<String>,

        /// Theme (theme lookup alias)
        #[arg(long, short = 'e')]
        theme: Option<String>,
    },

    /// Edit an existing task file
    Edit {
        /// Path to the task file
        fpath: PathBuf,

        /// New task description
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New story points: 1, 3, 5 or 8
        #[arg(long, short = 's', value_parser = parse_storypoints)]
        storypoints: Option<u32>,

        /// New primary contact (team lookup alias)
        #[arg(long, short = 'p')]
        primary_contact: Option<String>,

        /// New theme (theme lookup alias)
        #[arg(long, short = 'e')]
        theme: Option<String>,
    },

    /// List tasks grouped by primary contact
    List {
        /// Directory to list (default: backlog, or current/todo with -c)
        directory: Option<PathBuf>,

        /// List the current sprint instead of the backlog
        #[arg(long, short = 'c')]
        current: bool,

        /// Only list tasks for this primary contact
        #[arg(long, short = 'p')]
        primary_contact: Option<String>,

        /// Sort by a single key instead of theme-then-points
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Reverse the --sort order
        #[arg(long, short = 'r')]
        reverse: bool,
    },

    /// Manage the team registry
    Team {
        #[command(subcommand)]
        subcommand: TeamSubcommand,
    },

    /// Manage the themes registry
    Theme {
        #[command(subcommand)]
        subcommand: ThemeSubcommand,
    },

    /// Export story-point totals of past sprints as CSV
    History {
        /// Directory containing one date-named subdirectory per past sprint
        past_sprints_directory: PathBuf,
    },
}

fn parse_storypoints(s: &str) -> Result<u32, String> {
    let points: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if matches!(points, 1 | 3 | 5 | 8) {
        Ok(points)
    } else {
        Err(format!("story points must be one of 1, 3, 5, 8 (got {points})"))
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Add {
            title,
            storypoints,
            current,
            primary_contact,
            theme,
        } => cmd::add::run(
            &root,
            &title,
            storypoints,
            primary_contact.as_deref(),
            theme.as_deref(),
            current,
            cli.json,
        ),
        Commands::Edit {
            fpath,
            title,
            storypoints,
            primary_contact,
            theme,
        } => cmd::edit::run(
            &root,
            &fpath,
            title.as_deref(),
            storypoints,
            primary_contact.as_deref(),
            theme.as_deref(),
            cli.json,
        ),
        Commands::List {
            directory,
            current,
            primary_contact,
            sort,
            reverse,
        } => cmd::list::run(
            &root,
            directory.as_deref(),
            current,
            primary_contact.as_deref(),
            sort,
            reverse,
            cli.json,
        ),
        Commands::Team { subcommand } => cmd::team::run(&root, subcommand, cli.json),
        Commands::Theme { subcommand } => cmd::theme::run(&root, subcommand, cli.json),
        Commands::History {
            past_sprints_directory,
        } => cmd::history::run(&past_sprints_directory, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
