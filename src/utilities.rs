use std::{fs, io, path::Path};

use crate::error::MoveError;

/// Creates `path` and its parents. Returns whether anything was created.
pub fn create_dir_if_not_exists(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        Ok(false)
    } else if path.exists() {
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        ))
    } else {
        fs::create_dir_all(path).map(|_| true)
    }
}

/// Moves `src` to `dst`, refusing to replace an existing file.
pub fn move_file(src: &Path, dst: &Path) -> Result<(), MoveError> {
    if dst.exists() {
        return Err(MoveError::DestinationExists(dst.to_path_buf()));
    }

    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!("rename across filesystems, copying {}", src.display());
            copy_then_remove(src, dst).map_err(MoveError::from)
        },
        Err(e) => Err(e.into()),
    }
}

/// Copies `src` to `dst` and removes `src`. On failure `dst` is removed again so only `src` remains.
fn copy_then_remove(src: &Path, dst: &Path) -> io::Result<()> {
    let result = fs::copy(src, dst).and_then(|_| fs::remove_file(src));
    if result.is_err() {
        let _ = fs::remove_file(dst);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories_once() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");

        assert!(create_dir_if_not_exists(&dir).unwrap());
        assert!(dir.is_dir());
        assert!(!create_dir_if_not_exists(&dir).unwrap());
    }

    #[test]
    fn refuses_when_a_file_is_in_the_way() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("Adele");
        fs::write(&blocker, b"").unwrap();

        assert!(create_dir_if_not_exists(&blocker).is_err());
    }

    #[test]
    fn moves_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Song_Adele.gp5");
        let dst = tmp.path().join("Song_Adele.moved");
        fs::write(&src, b"tab").unwrap();

        move_file(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"tab");
    }

    #[test]
    fn never_overwrites_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("new.gp5");
        let dst = tmp.path().join("old.gp5");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        let err = move_file(&src, &dst).unwrap_err();

        assert!(matches!(err, MoveError::DestinationExists(p) if p == dst));
        assert_eq!(fs::read(&src).unwrap(), b"new");
        assert_eq!(fs::read(&dst).unwrap(), b"old");
    }

    #[test]
    fn copy_fallback_moves_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Song_Adele.gp5");
        let dst = tmp.path().join("copied.gp5");
        fs::write(&src, b"tab").unwrap();

        copy_then_remove(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"tab");
    }

    #[test]
    fn failed_copy_leaves_no_partial_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("not-a-file");
        fs::create_dir(&src).unwrap();
        let dst = tmp.path().join("dst.gp5");

        assert!(copy_then_remove(&src, &dst).is_err());

        assert!(src.is_dir());
        assert!(!dst.exists());
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = move_file(&tmp.path().join("gone"), &tmp.path().join("dst")).unwrap_err();
        assert!(matches!(err, MoveError::Io(_)));
    }
}
