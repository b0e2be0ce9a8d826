use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Build a collision-free file name: a fresh v4 UUID plus the given
/// extension. A leading dot on the extension is tolerated; an empty
/// extension yields a bare UUID name.
pub fn unique_file_name(extension: &str) -> String {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        format!("{}.{ext}", uuid::Uuid::new_v4())
    }
}

/// Move `source` to a uniquely named file under the process temp directory.
///
/// See [`relocate_into`].
pub fn relocate(source: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
    relocate_into(source, std::env::temp_dir(), extension)
}

/// Move `source` into `dir` under a [`unique_file_name`].
///
/// The destination is published atomically: a plain `rename` where
/// possible, otherwise (cross-device moves) a copy into a hidden staging
/// name in `dir` followed by a `rename`, so a concurrent directory listing
/// never observes a partially written destination. On any error `source`
/// is left in place.
pub fn relocate_into(
    source: impl AsRef<Path>,
    dir: impl AsRef<Path>,
    extension: &str,
) -> Result<PathBuf> {
    let source = source.as_ref();
    fs::metadata(source).map_err(|e| Error::Missing {
        path: source.to_path_buf(),
        source: e,
    })?;

    let dest = dir.as_ref().join(unique_file_name(extension));
    match fs::rename(source, &dest) {
        Ok(()) => Ok(dest),
        Err(e) if is_cross_device(&e) => copy_across(source, &dest),
        Err(e) => Err(Error::Rename { path: dest, source: e }),
    }
}

/// Cross-device fallback: stage a full copy next to `dest`, rename it into
/// place, then drop the source. Removing the source is best-effort once the
/// destination is published.
fn copy_across(source: &Path, dest: &Path) -> Result<PathBuf> {
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    let staging = parent.join(format!(".{}.part", uuid::Uuid::new_v4()));

    fs::copy(source, &staging).map_err(|e| {
        let _ = fs::remove_file(&staging);
        Error::Copy {
            path: staging.clone(),
            source: e,
        }
    })?;

    fs::rename(&staging, dest).map_err(|e| {
        let _ = fs::remove_file(&staging);
        Error::Rename {
            path: dest.to_path_buf(),
            source: e,
        }
    })?;

    if let Err(e) = fs::remove_file(source) {
        tracing::warn!(
            source = %source.display(),
            error = %e,
            "relocated file published but source removal failed"
        );
    }

    Ok(dest.to_path_buf())
}

#[cfg(unix)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(nix::libc::EXDEV)
}

#[cfg(windows)]
fn is_cross_device(err: &io::Error) -> bool {
    // ERROR_NOT_SAME_DEVICE
    err.raw_os_error() == Some(17)
}

#[cfg(not(any(unix, windows)))]
fn is_cross_device(_err: &io::Error) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_unique_file_name_carries_extension() {
        let name = unique_file_name("mp4");
        assert!(name.ends_with(".mp4"));
        assert_eq!(unique_file_name(".m4a").matches('.').count(), 1);
        assert!(!unique_file_name("").contains('.'));
    }

    #[test]
    fn test_unique_file_names_differ() {
        assert_ne!(unique_file_name("mp4"), unique_file_name("mp4"));
    }

    #[test]
    fn test_relocate_into_moves_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("incoming");
        fs::write(&source, b"audio bytes").unwrap();

        let dest = relocate_into(&source, dir.path(), "mp4").unwrap();

        assert!(!source.exists());
        assert_eq!(dest.parent().unwrap(), dir.path());
        assert_eq!(dest.extension().unwrap(), "mp4");
        assert_eq!(fs::read(&dest).unwrap(), b"audio bytes");
    }

    #[test]
    fn test_relocate_missing_source() {
        let dir = tempdir().unwrap();
        let err = relocate_into(dir.path().join("absent"), dir.path(), "mp4").unwrap_err();
        assert!(matches!(err, Error::Missing { .. }));
    }

    #[test]
    fn test_relocate_into_missing_dir_leaves_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("incoming");
        fs::write(&source, b"audio bytes").unwrap();

        let err = relocate_into(&source, dir.path().join("no-such-dir"), "mp4").unwrap_err();

        assert!(matches!(err, Error::Rename { .. }));
        assert_eq!(fs::read(&source).unwrap(), b"audio bytes");
    }

    #[test]
    fn test_copy_across_publishes_and_removes_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("incoming");
        fs::write(&source, b"payload").unwrap();
        let dest = dir.path().join("published.mp4");

        let out = copy_across(&source, &dest).unwrap();

        assert_eq!(out, dest);
        assert!(!source.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"payload");
        // no staging leftovers
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }
}
