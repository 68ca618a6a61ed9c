use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{
    Result,
    ThemeError,
};
use crate::fs::FileSystem;
use crate::paths::Paths;
use crate::preview;
use crate::shell::ShellBackend;
use crate::theme::Theme;

/// Every custom theme created interactively lands in this one slot.
pub const CUSTOM_THEME_NAME: &str = "custom";

/// Copies an existing theme into an editable file in the config directory.
pub struct CustomThemeFactory<'a> {
    fs: &'a dyn FileSystem,
    paths: &'a Paths,
}

impl<'a> CustomThemeFactory<'a> {
    pub fn new(fs: &'a dyn FileSystem, paths: &'a Paths) -> Self {
        Self { fs, paths }
    }

    /// Writes `base`'s `backend` variant to `custom.promptly.<ext>`,
    /// overwriting a previous custom theme, and returns the new theme.
    pub fn create_custom(&self, base: &Theme, backend: ShellBackend) -> Result<Theme> {
        let content = base.content(backend).ok_or_else(|| ThemeError::MissingVariant {
            theme: base.name.clone(),
            backend,
        })?;

        let dir = self.paths.config_dir();
        self.fs
            .create_dir_all(&dir)
            .map_err(|e| ThemeError::io("failed to create config directory", &dir, e))?;

        let path = self.paths.theme_file(CUSTOM_THEME_NAME, backend);
        self.fs
            .write(&path, content)
            .map_err(|e| ThemeError::io("failed to write custom theme file", &path, e))?;
        debug!("Created custom theme from {} at {}", base.name, path.display());

        Ok(Theme {
            name: CUSTOM_THEME_NAME.to_string(),
            description: format!("Custom theme based on {}", base.name),
            contents: BTreeMap::from([(backend, content.to_string())]),
            preview: preview::PLACEHOLDER.to_string(),
            is_custom: true,
            source_path: Some(path),
        })
    }
}
