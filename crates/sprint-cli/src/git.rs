use anyhow::Context;
use std::path::Path;
use std::process::Command;

pub fn is_git_repo(root: &Path) -> bool {
    root.join(".git").is_dir()
}

/// Stage a file with `git add`. Staging is a convenience side effect:
/// failures are logged as warnings, never fatal.
pub fn stage(root: &Path, path: &Path) {
    match Command::new("git")
        .arg("add")
        .arg(path)
        .current_dir(root)
        .output()
    {
        Ok(out) if out.status.success() => {
            tracing::debug!(path = %path.display(), "staged");
        }
        Ok(out) => {
            tracing::warn!(
                path = %path.display(),
                stderr = %String::from_utf8_lossy(&out.stderr),
                "git add failed"
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to run git add");
        }
    }
}

/// Move a tracked file with `git mv` so the rename stays in the index.
pub fn mv(root: &Path, from: &Path, to: &Path) -> anyhow::Result<()> {
    let out = Command::new("git")
        .arg("mv")
        .arg(from)
        .arg(to)
        .current_dir(root)
        .output()
        .context("failed to run git mv")?;
    if !out.status.success() {
        anyhow::bail!(
            "git mv failed: {}",
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(())
}
