//! # Temp File Cleaner
//!
//! Recursively deletes temp plot artifacts under a directory.
//! Each deletion stands alone: a failure is reported and the sweep moves on.

use crate::domain::artifacts::TempArtifactPattern;
use crate::strings::logs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of a sweep, in walk order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Deletes every temp plot artifact under `directory`, writing one report
/// line per matched file to `out`.
///
/// A missing or unreadable `directory` yields an empty report.
pub fn remove_tmp_files(directory: &Path, out: &mut impl Write) -> CleanReport {
    sweep(directory, &TempArtifactPattern::default(), out, |path| {
        fs::remove_file(path)
    })
}

fn sweep<W, F>(
    directory: &Path,
    pattern: &TempArtifactPattern,
    out: &mut W,
    mut remove: F,
) -> CleanReport
where
    W: Write + ?Sized,
    F: FnMut(&Path) -> io::Result<()>,
{
    debug!("{}", logs::sweep_started(directory));
    let mut report = CleanReport::default();

    // min_depth(1): a root that is itself a file is never touched.
    for entry in WalkDir::new(directory).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("{}", logs::walk_entry_skipped(&e));
                continue;
            }
        };

        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            continue;
        }
        if !pattern.matches(entry.file_name()) {
            continue;
        }

        let path = entry.path();
        let line = match remove(path) {
            Ok(()) => {
                report.deleted.push(path.to_path_buf());
                logs::deleted(path)
            }
            Err(e) => {
                report.failed.push(path.to_path_buf());
                logs::delete_failed(path, &e)
            }
        };
        debug!("{line}");

        if let Err(e) = writeln!(out, "{line}") {
            warn!("{}", logs::report_write_failed(&e));
        }
    }

    info!(
        "{}",
        logs::sweep_finished(report.deleted.len(), report.failed.len())
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"artifact").unwrap();
    }

    fn output_lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_removes_only_matching_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for name in ["tmp1.pdf", "tmpX.svg", "tmpY.gif", "notes.pdf", "tmp.txt"] {
            touch(&root.join(name));
        }

        let mut out = Vec::new();
        let report = remove_tmp_files(root, &mut out);

        assert_eq!(report.deleted.len(), 3);
        assert!(report.failed.is_empty());
        assert!(!root.join("tmp1.pdf").exists());
        assert!(!root.join("tmpX.svg").exists());
        assert!(!root.join("tmpY.gif").exists());
        assert!(root.join("notes.pdf").exists());
        assert!(root.join("tmp.txt").exists());

        let lines = output_lines(out);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("Deleted: ")));
        assert!(lines.contains(&format!("Deleted: {}", root.join("tmp1.pdf").display())));
    }

    #[test]
    fn test_walks_nested_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("a/b/c/tmp_deep.svg"));
        touch(&root.join("a/tmp_mid.pdf"));
        touch(&root.join("a/b/keep.svg"));
        touch(&root.join("a/b/tmpnodotgif"));

        let report = remove_tmp_files(root, &mut Vec::new());

        assert_eq!(report.deleted.len(), 3);
        assert!(!root.join("a/b/c/tmp_deep.svg").exists());
        assert!(!root.join("a/tmp_mid.pdf").exists());
        assert!(!root.join("a/b/tmpnodotgif").exists());
        assert!(root.join("a/b/keep.svg").exists());
    }

    #[test]
    fn test_matching_directories_are_left_alone() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("tmpdir.pdf")).unwrap();
        touch(&root.join("tmpdir.pdf/inner.txt"));

        let report = remove_tmp_files(root, &mut Vec::new());

        assert!(report.deleted.is_empty());
        assert!(root.join("tmpdir.pdf").is_dir());
        assert!(root.join("tmpdir.pdf/inner.txt").exists());
    }

    #[test]
    fn test_failure_does_not_stop_the_sweep() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("tmp1.pdf"));
        touch(&root.join("sub/tmp2.svg"));
        touch(&root.join("sub/tmp3.gif"));
        let stuck = root.join("sub/tmp2.svg");

        let mut out = Vec::new();
        let report = sweep(root, &TempArtifactPattern::default(), &mut out, |path| {
            if path == stuck {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            } else {
                fs::remove_file(path)
            }
        });

        assert_eq!(report.failed, vec![stuck.clone()]);
        assert_eq!(report.deleted.len(), 2);
        assert!(stuck.exists());
        assert!(!root.join("tmp1.pdf").exists());
        assert!(!root.join("sub/tmp3.gif").exists());

        let lines = output_lines(out);
        assert_eq!(lines.len(), 3);
        assert!(lines.contains(&format!("Error deleting {}: denied", stuck.display())));
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let locked = root.join("locked");
        touch(&locked.join("tmp_locked.pdf"));
        touch(&root.join("tmp_free.pdf"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users ignore directory permissions.
        let privileged = fs::write(locked.join("probe"), b"").is_ok();

        let mut out = Vec::new();
        let report = remove_tmp_files(root, &mut out);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(!root.join("tmp_free.pdf").exists());
        if privileged {
            return;
        }
        assert_eq!(report.failed, vec![locked.join("tmp_locked.pdf")]);
        assert!(locked.join("tmp_locked.pdf").exists());
        assert!(
            output_lines(out)
                .iter()
                .any(|l| l.starts_with(&format!("Error deleting {}", locked.join("tmp_locked.pdf").display())))
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let report = remove_tmp_files(dir.path(), &mut out);
        assert_eq!(report, CleanReport::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_nonexistent_directory() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let report = remove_tmp_files(&dir.path().join("nope"), &mut out);
        assert_eq!(report, CleanReport::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_root_is_not_deleted() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("tmp_root.pdf");
        touch(&file);

        let report = remove_tmp_files(&file, &mut Vec::new());

        assert!(report.deleted.is_empty());
        assert!(file.exists());
    }
}
