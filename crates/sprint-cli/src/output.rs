use colored::Colorize;
use serde::Serialize;
use sprint_core::task::Task;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Top-level listing header, e.g. `## Backlog [12]`.
pub fn section_header(label: &str, storypoints: u32) -> String {
    format!(
        "## {} [{}]",
        label.cyan().bold(),
        storypoints.to_string().yellow()
    )
}

/// Per-contact heading, e.g. `### Tjelvar Olsson's tasks [6]`.
pub fn contact_header(name: &str, storypoints: u32) -> String {
    format!(
        "### {}'s tasks [{}]",
        name.green().bold(),
        storypoints.to_string().yellow()
    )
}

/// One task line, e.g. `- Create agile tool. [5] #admin`.
pub fn task_line(task: &Task) -> String {
    let mut line = format!(
        "- {} [{}]",
        task.title,
        task.storypoints.to_string().yellow()
    );
    if !task.theme.is_empty() {
        line.push(' ');
        line.push_str(&format!("#{}", task.theme).dimmed().to_string());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_includes_theme_only_when_set() {
        colored::control::set_override(false);
        let plain = Task::new("Basic task", 1);
        assert_eq!(task_line(&plain), "- Basic task [1]");

        let themed = Task::with_details("Basic task", 1, None, Some("admin".into()));
        assert_eq!(task_line(&themed), "- Basic task [1] #admin");
    }
}
