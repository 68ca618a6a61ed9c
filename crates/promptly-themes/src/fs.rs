//! File-system access for the theme store, installer and custom theme factory.
//!
//! Everything that touches the user's home directory goes through
//! [`FileSystem`], so the whole install flow can run in memory or against a
//! temporary directory in tests.

use std::io;
use std::path::Path;

#[cfg(test)]
pub(crate) use memory::MemoryFs;

pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the file content, creating the file if needed. The parent
    /// directory must exist.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Names of the non-directory entries directly inside `path`. Symlinks
    /// count as the file they point at.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// The real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // Dangling links are listed; reading them fails later
            if std::fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_dir()) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}


#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_memory_fs_requires_parent_dir() {
        let fs = MemoryFs::new();
        let path = Path::new("/home/me/.config/promptly/x.promptly.zsh");
        assert!(fs.write(path, "x").is_err());

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write(path, "x").unwrap();
        assert_eq!(fs.read_to_string(path).unwrap(), "x");
        assert!(fs.exists(Path::new("/home/me/.config")));
    }

    #[test]
    fn test_memory_fs_list_dir() {
        let fs = MemoryFs::new()
            .with_file("/cfg/a.promptly.zsh", "a")
            .with_file("/cfg/nested/b.promptly.zsh", "b");

        assert_eq!(fs.list_dir(Path::new("/cfg")).unwrap(), vec!["a.promptly.zsh"]);
        assert_eq!(fs.list_dir(Path::new("/missing")).unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_fs_unreadable() {
        let fs = MemoryFs::new()
            .with_file("/cfg/a.promptly.zsh", "a")
            .with_unreadable("/cfg/a.promptly.zsh");
        let err = fs.read_to_string(Path::new("/cfg/a.promptly.zsh")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_fs_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let dotfiles = temp_dir.path().join("dotfiles");
        let config_dir = temp_dir.path().join("promptly");
        std::fs::create_dir_all(dotfiles.join("nested")).unwrap();
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(dotfiles.join("night.promptly.zsh"), "PROMPT='night '").unwrap();
        std::os::unix::fs::symlink(dotfiles.join("night.promptly.zsh"), config_dir.join("night.promptly.zsh")).unwrap();
        std::os::unix::fs::symlink(dotfiles.join("nested"), config_dir.join("nested.promptly.zsh")).unwrap();

        let names = RealFs.list_dir(&config_dir).unwrap();
        assert_eq!(names, vec!["night.promptly.zsh"]);
        assert_eq!(
            RealFs.read_to_string(&config_dir.join("night.promptly.zsh")).unwrap(),
            "PROMPT='night '"
        );
    }

    #[test]
    fn test_real_fs_lists_only_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.promptly.fish"), "a").unwrap();
        std::fs::create_dir(temp_dir.path().join("dir.promptly.fish")).unwrap();

        let names = RealFs.list_dir(temp_dir.path()).unwrap();
        assert_eq!(names, vec!["a.promptly.fish"]);
    }
}
