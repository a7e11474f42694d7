//! Directory-based task visibility
//!
//! Each task remembers the directory it was created in (its *context*).
//! A task is visible from a working directory when the two paths are the
//! same, or one contains the other. Tasks without a context are global.
//!
//! Containment is decided on whole path components, so `/a/b` never
//! matches `/a/bc`.

use std::path::{Component, Path, PathBuf};

/// Label shown for tasks without a context
pub const GLOBAL_LABEL: &str = "global";

/// Lexically normalize a path: drop `.` and empty segments, resolve `..`
/// against preceding segments, strip trailing separators.
///
/// No filesystem access happens; symlinks are not resolved. An empty
/// input normalizes to `.`.
pub fn normalize(path: &str) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Whether a task created in `task_context` should be visible from `cwd`.
pub fn is_relevant(task_context: &str, cwd: &str) -> bool {
    if task_context.is_empty() {
        return true;
    }

    let task = normalize(task_context);
    let cwd = normalize(cwd);

    // Tasks from a parent apply to subdirectories; tasks from a
    // subdirectory stay visible from the parent.
    task == cwd || cwd.starts_with(&task) || task.starts_with(&cwd)
}

/// Display form of a task context relative to `cwd`.
///
/// `"global"` for tasks without a context, `"."` for the current
/// directory, otherwise the relative path from `cwd` (or the normalized
/// task path when no relative path exists).
pub fn display_context(task_context: &str, cwd: &str) -> String {
    if task_context.is_empty() {
        return GLOBAL_LABEL.to_string();
    }

    let task = normalize(task_context);
    let cwd = normalize(cwd);
    if task == cwd {
        return ".".to_string();
    }

    match relative_path(&cwd, &task) {
        Some(rel) => rel.display().to_string(),
        None => task.display().to_string(),
    }
}

/// Relative path that leads from `base` to `target`. Both must already be
/// normalized.
fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    if base.is_absolute() != target.is_absolute() {
        return None;
    }

    let base: Vec<Component<'_>> = base.components().collect();
    let target: Vec<Component<'_>> = target.components().collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) = (base.first(), target.first())
    {
        if a != b {
            return None;
        }
    }

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for component in &base[common..] {
        match component {
            Component::CurDir => {}
            // can't climb out of an unknown parent
            Component::ParentDir => return None,
            _ => rel.push(".."),
        }
    }
    for component in &target[common..] {
        rel.push(component.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        Some(PathBuf::from("."))
    } else {
        Some(rel)
    }
}
