use std::path::{
    Path,
    PathBuf,
};

use tracing::{
    debug,
    info,
};

use crate::error::{
    Result,
    ThemeError,
};
use crate::fs::FileSystem;
use crate::paths::Paths;
use crate::selector::{
    Picker,
    choose_init_shell,
};
use crate::shell::{
    InitShell,
    ShellBackend,
};
use crate::theme::Theme;

const RC_COMMENT: &str = "# promptly prompt theme";
const STARSHIP_RC_COMMENT: &str = "# promptly starship prompt";
const ZSH_SOURCE_LINE: &str = "source ~/.promptly.zsh";
const FISH_SOURCE_LINE: &str = "source ~/.config/promptly/promptly.fish";

/// What an install wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub theme: String,
    pub backend: ShellBackend,
    /// File the shell (or starship) reads the prompt from.
    pub theme_file: PathBuf,
    /// Startup file wired to load the theme.
    pub rc_file: PathBuf,
    /// False when the rc file already had every line.
    pub rc_changed: bool,
}

/// Writes theme files and wires them into shell startup files.
pub struct Installer<'a> {
    fs: &'a dyn FileSystem,
    paths: &'a Paths,
}

impl<'a> Installer<'a> {
    pub fn new(fs: &'a dyn FileSystem, paths: &'a Paths) -> Self {
        Self { fs, paths }
    }

    /// Installs `theme` for `backend`. For starship, `init_shell` names the
    /// hosting shell; when absent the picker asks for it.
    pub fn install(
        &self,
        theme: &Theme,
        backend: ShellBackend,
        init_shell: Option<InitShell>,
        picker: &mut dyn Picker,
    ) -> Result<Installation> {
        let content = theme.content(backend).ok_or_else(|| ThemeError::MissingVariant {
            theme: theme.name.clone(),
            backend,
        })?;

        match backend {
            ShellBackend::Zsh => {
                let theme_file = self.write_activation_target(theme, backend, content)?;
                let rc_file = self.paths.zshrc();
                let rc_changed = self.ensure_lines(&rc_file, RC_COMMENT, &[ZSH_SOURCE_LINE], true)?;
                Ok(self.installation(theme, backend, theme_file, rc_file, rc_changed))
            },
            ShellBackend::Fish => {
                let theme_file = self.write_activation_target(theme, backend, content)?;
                let rc_file = self.paths.fish_config();
                let rc_changed = self.ensure_lines(&rc_file, RC_COMMENT, &[FISH_SOURCE_LINE], true)?;
                Ok(self.installation(theme, backend, theme_file, rc_file, rc_changed))
            },
            ShellBackend::Starship => {
                let theme_file = if theme.is_custom {
                    self.paths.theme_file(&theme.name, backend)
                } else {
                    self.paths.starship_config()
                };
                self.ensure_config_dir()?;
                self.write(&theme_file, content, "failed to write starship config")?;

                let shell = match init_shell {
                    Some(shell) => shell,
                    None => choose_init_shell(picker)?,
                };
                let rc_file = self.paths.init_shell_rc(shell);
                let export = shell.export_line(&theme_file.to_string_lossy());
                let rc_changed =
                    self.ensure_lines(&rc_file, STARSHIP_RC_COMMENT, &[export.as_str(), shell.init_line()], false)?;
                Ok(self.installation(theme, backend, theme_file, rc_file, rc_changed))
            },
        }
    }

    fn installation(
        &self,
        theme: &Theme,
        backend: ShellBackend,
        theme_file: PathBuf,
        rc_file: PathBuf,
        rc_changed: bool,
    ) -> Installation {
        Installation {
            theme: theme.name.clone(),
            backend,
            theme_file,
            rc_file,
            rc_changed,
        }
    }

    /// Writes the fixed file a zsh or fish rc sources. Custom themes are kept
    /// in their own file and the fixed file only sources it.
    fn write_activation_target(&self, theme: &Theme, backend: ShellBackend, content: &str) -> Result<PathBuf> {
        let target = self.paths.activation_target(backend);
        if backend == ShellBackend::Fish {
            self.ensure_config_dir()?;
        }

        if theme.is_custom {
            self.ensure_config_dir()?;
            let theme_path = self.paths.theme_file(&theme.name, backend);
            self.write(&theme_path, content, "failed to write custom theme file")?;
            let wrapper = format!(
                "# promptly custom theme: {}\nsource {}\n",
                theme.name,
                backend.quote(&theme_path.to_string_lossy())
            );
            self.write(&target, &wrapper, "failed to write theme file")?;
        } else {
            self.write(&target, content, "failed to write theme file")?;
        }
        Ok(target)
    }

    fn ensure_config_dir(&self) -> Result<()> {
        let dir = self.paths.config_dir();
        self.fs
            .create_dir_all(&dir)
            .map_err(|e| ThemeError::io("failed to create config directory", &dir, e))
    }

    fn write(&self, path: &Path, contents: &str, context: &'static str) -> Result<()> {
        self.fs
            .write(path, contents)
            .map_err(|e| ThemeError::io(context, path, e))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Appends whichever of `lines` the rc file does not contain yet, after
    /// `comment` and a blank separator line. Existing content is kept as is.
    /// Returns whether the file changed.
    fn ensure_lines(&self, rc_file: &Path, comment: &str, lines: &[&str], create: bool) -> Result<bool> {
        let existing = if self.fs.exists(rc_file) {
            self.fs
                .read_to_string(rc_file)
                .map_err(|e| ThemeError::io("failed to read shell rc file", rc_file, e))?
        } else if create {
            if let Some(parent) = rc_file.parent() {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| ThemeError::io("failed to create shell config directory", parent, e))?;
            }
            String::new()
        } else {
            return Err(ThemeError::RcFileMissing(rc_file.to_path_buf()));
        };

        let missing: Vec<&str> = lines.iter().copied().filter(|line| !existing.contains(line)).collect();
        if missing.is_empty() {
            info!("{} already loads the theme", rc_file.display());
            return Ok(false);
        }

        let mut updated = existing;
        if !updated.is_empty() {
            if !updated.ends_with('\n') {
                updated.push('\n');
            }
            if !updated.ends_with("\n\n") {
                updated.push('\n');
            }
        }
        updated.push_str(comment);
        updated.push('\n');
        for line in missing {
            updated.push_str(line);
            updated.push('\n');
        }

        self.fs
            .write(rc_file, &updated)
            .map_err(|e| ThemeError::io("failed to update shell rc file", rc_file, e))?;
        info!("Updated {}", rc_file.display());
        Ok(true)
    }
}
