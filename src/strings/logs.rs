use std::fmt::Display;
use std::path::Path;

/// Report line printed after a temp artifact is removed.
pub fn deleted(path: &Path) -> String {
    format!("Deleted: {}", path.display())
}

/// Report line printed when a temp artifact could not be removed.
pub fn delete_failed(path: &Path, err: &dyn Display) -> String {
    format!("Error deleting {}: {}", path.display(), err)
}

pub fn sweep_started(dir: &Path) -> String {
    format!("Sweeping {} for temp plot artifacts", dir.display())
}

pub fn sweep_finished(deleted: usize, failed: usize) -> String {
    format!("Sweep finished: {deleted} deleted, {failed} failed")
}

pub fn walk_entry_skipped(err: &dyn Display) -> String {
    format!("Skipping unreadable entry: {err}")
}

pub fn report_write_failed(err: &dyn Display) -> String {
    format!("Failed to write report line: {err}")
}

pub fn notebook_loaded(path: &Path, cells: usize) -> String {
    format!("Loaded notebook {} ({cells} cells)", path.display())
}

pub fn notebook_updated(path: &Path) -> String {
    format!("Updated metadata of {}", path.display())
}
