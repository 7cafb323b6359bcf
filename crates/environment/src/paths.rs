//! Path helpers for configuration directories.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve `path` against `reference` when it is relative.
pub fn make_absolute(path: &Path, reference: &Path) -> PathBuf {
    if path.is_relative() {
        reference.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Express `path` relative to `base` if it lives under `base`, otherwise keep it as-is.
pub fn relative_if_inside(path: &Path, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Name of the `index`-th file in a numbered wind sequence: `<prefix>_<index>.csv`.
pub fn wind_file_name(prefix: &Path, index: usize) -> PathBuf {
    let mut name: OsString = prefix.as_os_str().to_owned();
    name.push(format!("_{index}.csv"));
    PathBuf::from(name)
}

/// All consecutive wind files for `prefix`, starting at index 0 and stopping at the first gap.
pub fn wind_file_sequence(prefix: &Path) -> Vec<PathBuf> {
    (0..)
        .map(|i| wind_file_name(prefix, i))
        .take_while(|path| path.is_file())
        .collect()
}

/// Sub-directories of `dir`, sorted by name. A missing `dir` yields an empty list.
pub fn sorted_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Files in `dir` with extension `ext`, sorted by name. A missing `dir` yields an empty list.
pub fn sorted_files_with_extension(dir: &Path, ext: &str) -> io::Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_make_absolute() {
        let root = Path::new("/data/config1");
        assert_eq!(
            make_absolute(Path::new("models/walls.stl"), root),
            PathBuf::from("/data/config1/models/walls.stl")
        );
        assert_eq!(
            make_absolute(Path::new("/elsewhere/walls.stl"), root),
            PathBuf::from("/elsewhere/walls.stl")
        );
    }

    #[test]
    fn test_relative_if_inside() {
        let root = Path::new("/data/config1");
        assert_eq!(
            relative_if_inside(Path::new("/data/config1/wind/w"), root),
            PathBuf::from("wind/w")
        );
        assert_eq!(
            relative_if_inside(Path::new("/tmp/w"), root),
            PathBuf::from("/tmp/w")
        );
    }

    #[test]
    fn test_wind_sequence_stops_at_gap() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("wind");
        for i in [0, 1, 2, 4] {
            fs::write(wind_file_name(&prefix, i), "").unwrap();
        }

        let files = wind_file_sequence(&prefix);
        assert_eq!(files.len(), 3);
        assert_eq!(files[2], dir.path().join("wind_2.csv"));
    }

    #[test]
    fn test_wind_sequence_empty_without_first_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wind_1.csv"), "").unwrap();
        assert!(wind_file_sequence(&dir.path().join("wind")).is_empty());
    }

    #[test]
    fn test_sorted_files_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yaml", "a.yaml", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("c.yaml")).unwrap();

        let files = sorted_files_with_extension(dir.path(), "yaml").unwrap();
        assert_eq!(files, vec![dir.path().join("a.yaml"), dir.path().join("b.yaml")]);
        assert!(sorted_files_with_extension(&dir.path().join("none"), "yaml")
            .unwrap()
            .is_empty());
    }
}
