//! Test utilities for shml
//!
//! This crate provides shared testing utilities used across the shml workspace.

pub mod fixtures;

pub use fixtures::{
    EVENT_TEMPLATE, EVENT_TEMPLATE_OUT, Event, EventType, HandlerConfig, sample_event,
};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test temporary files in a single gitignored location.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the directory
/// cannot be created.
///
/// # Examples
///
/// ```rust
/// use shml_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("data.json");
/// std::fs::write(&file_path, "{}").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `contents` to `name` inside `dir`, returning the full path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(
    dir: &std::path::Path,
    name: &str,
    contents: impl AsRef<[u8]>,
) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}
