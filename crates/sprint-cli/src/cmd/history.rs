use crate::output::print_json;
use sprint_core::history::sprint_totals;
use std::path::Path;

pub fn run(directory: &Path, json: bool) -> anyhow::Result<()> {
    anyhow::ensure!(
        directory.is_dir(),
        "not a directory: {}",
        directory.display()
    );

    let totals = sprint_totals(directory)?;

    if json {
        print_json(&totals)?;
    } else {
        for total in &totals {
            println!("{},{}", total.sprint, total.storypoints);
        }
    }
    Ok(())
}
