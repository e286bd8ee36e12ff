//! Capability-based filesystem helpers for report output.
//!
//! Report files are created through an ambient `cap-std` directory handle
//! rather than raw `std::fs` paths; parent directories are created on
//! demand.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Create `path` for writing, creating its parent directory when missing.
pub(crate) fn create_report_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

/// Resolve the parent directory of `path` (created if absent) together with
/// the file name.
fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_string();
    create_ambient_dir_all(parent)?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Create `parent` and its ancestors relative to an ambient base directory.
fn create_ambient_dir_all(parent: &Utf8Path) -> io::Result<()> {
    if parent == Utf8Path::new(".") || parent == Utf8Path::new("/") {
        return Ok(());
    }
    if parent.is_absolute() {
        let relative = parent
            .strip_prefix("/")
            .map_err(|_| io::Error::other("failed to strip root from absolute path"))?;
        if relative.as_str().is_empty() {
            return Ok(());
        }
        let root = fs_utf8::Dir::open_ambient_dir("/", ambient_authority())?;
        root.create_dir_all(relative)
    } else {
        let here = fs_utf8::Dir::open_ambient_dir(".", ambient_authority())?;
        here.create_dir_all(parent)
    }
}
