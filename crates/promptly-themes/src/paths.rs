use std::path::{
    Path,
    PathBuf,
};

use crate::error::{
    Result,
    ThemeError,
};
use crate::shell::{
    InitShell,
    ShellBackend,
};

/// Every location promptly reads or writes, derived from one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    home: PathBuf,
}

impl Paths {
    /// Resolves the current user's home directory.
    pub fn detect() -> Result<Self> {
        dirs::home_dir().map(Self::from_home).ok_or(ThemeError::HomeDirNotFound)
    }

    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `~/.config/promptly`, where custom themes and generated files live.
    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config").join("promptly")
    }

    /// `~/.config/promptly/<name>.promptly.<ext>`
    pub fn theme_file(&self, name: &str, backend: ShellBackend) -> PathBuf {
        self.config_dir().join(backend.file_name(name))
    }

    /// The fixed file a shell sources; starship has no such file.
    pub fn activation_target(&self, backend: ShellBackend) -> PathBuf {
        match backend {
            ShellBackend::Zsh => self.home.join(".promptly.zsh"),
            ShellBackend::Fish => self.config_dir().join("promptly.fish"),
            ShellBackend::Starship => self.starship_config(),
        }
    }

    /// Shared starship config used for built-in themes.
    pub fn starship_config(&self) -> PathBuf {
        self.config_dir().join("promptly.toml")
    }

    pub fn zshrc(&self) -> PathBuf {
        self.home.join(".zshrc")
    }

    pub fn bashrc(&self) -> PathBuf {
        self.home.join(".bashrc")
    }

    pub fn fish_config(&self) -> PathBuf {
        self.home.join(".config").join("fish").join("config.fish")
    }

    pub fn init_shell_rc(&self, shell: InitShell) -> PathBuf {
        match shell {
            InitShell::Zsh => self.zshrc(),
            InitShell::Bash => self.bashrc(),
            InitShell::Fish => self.fish_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        let paths = Paths::from_home("/home/me");
        assert_eq!(paths.config_dir(), Path::new("/home/me/.config/promptly"));
        assert_eq!(
            paths.activation_target(ShellBackend::Zsh),
            Path::new("/home/me/.promptly.zsh")
        );
        assert_eq!(
            paths.activation_target(ShellBackend::Fish),
            Path::new("/home/me/.config/promptly/promptly.fish")
        );
        assert_eq!(
            paths.theme_file("night", ShellBackend::Starship),
            Path::new("/home/me/.config/promptly/night.promptly.toml")
        );
        assert_eq!(
            paths.init_shell_rc(InitShell::Fish),
            Path::new("/home/me/.config/fish/config.fish")
        );
        assert_eq!(paths.init_shell_rc(InitShell::Bash), Path::new("/home/me/.bashrc"));
    }
}
