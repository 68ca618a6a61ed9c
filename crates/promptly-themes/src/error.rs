use std::path::{
    Path,
    PathBuf,
};

use crate::shell::ShellBackend;

/// Errors that can occur while discovering, selecting or installing themes
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("could not determine the home directory")]
    HomeDirNotFound,

    #[error("failed to enumerate bundled themes: {0}")]
    Assets(String),

    #[error("no themes found")]
    NoThemes,

    #[error("no themes available for backend {0}")]
    NoThemesForBackend(ShellBackend),

    #[error("theme '{0}' not found")]
    ThemeNotFound(String),

    #[error("theme '{theme}' has no {backend} variant")]
    MissingVariant { theme: String, backend: ShellBackend },

    #[error("selection aborted")]
    Aborted,

    #[error("picker error: {0}")]
    Picker(String),

    #[error("{} does not exist; configure that shell before installing a starship theme", .0.display())]
    RcFileMissing(PathBuf),

    #[error("{context} ({}): {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub fn io(context: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_step_and_path() {
        let err = ThemeError::io(
            "failed to write theme file",
            Path::new("/home/me/.promptly.zsh"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let message = err.to_string();
        assert!(message.starts_with("failed to write theme file"), "{message}");
        assert!(message.contains("/home/me/.promptly.zsh"), "{message}");
        assert!(message.contains("permission denied"), "{message}");
    }

    #[test]
    fn test_missing_variant_names_theme_and_backend() {
        let err = ThemeError::MissingVariant {
            theme: "icons".to_string(),
            backend: ShellBackend::Fish,
        };
        assert_eq!(err.to_string(), "theme 'icons' has no fish variant");
    }
}
