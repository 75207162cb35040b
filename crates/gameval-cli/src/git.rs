//! Previous revision lookup through the git CLI.

use std::path::Path;
use std::process::Command;

/// Contents of `file` at `revision`, or `None` if git cannot provide it.
///
/// `file` is resolved relative to `cwd`, not to the repository root.
pub fn show_file_at_revision(revision: &str, file: &Path, cwd: &Path) -> Option<String> {
    let spec = if file.is_absolute() {
        format!("{revision}:{}", file.display())
    } else {
        format!("{revision}:./{}", file.to_string_lossy().replace('\\', "/"))
    };

    let output = Command::new("git")
        .args(["show", &spec])
        .current_dir(cwd)
        .output()
        .map_err(|e| tracing::debug!("Failed to execute git: {e}"))
        .ok()?;

    if !output.status.success() {
        tracing::debug!(
            "git show {spec} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
