use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::shell::ShellBackend;

/// One named prompt style, possibly available for several backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub description: String,
    /// Raw theme script per backend, copied verbatim on install.
    pub contents: BTreeMap<ShellBackend, String>,
    pub preview: String,
    pub is_custom: bool,
    /// Set only for themes backed by a real file in the config directory.
    pub source_path: Option<PathBuf>,
}

impl Theme {
    pub fn content(&self, backend: ShellBackend) -> Option<&str> {
        self.contents.get(&backend).map(String::as_str)
    }

    pub fn supports(&self, backend: ShellBackend) -> bool {
        self.contents.contains_key(&backend)
    }

    pub fn backends(&self) -> impl Iterator<Item = ShellBackend> + '_ {
        self.contents.keys().copied()
    }
}

/// A row of the theme menu: a real theme, or the request to create one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Theme(Theme),
    CreateCustom,
}

impl CatalogEntry {
    pub const CREATE_CUSTOM_LABEL: &'static str = "Create Custom";
    pub const CREATE_CUSTOM_DESCRIPTION: &'static str = "Copy an existing theme into a custom theme you can edit";
    pub const CREATE_CUSTOM_PREVIEW: &'static str = "Creates ~/.config/promptly/custom.promptly.<ext> from a base theme";

    pub fn label(&self) -> &str {
        match self {
            Self::Theme(theme) => &theme.name,
            Self::CreateCustom => Self::CREATE_CUSTOM_LABEL,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Theme(theme) => &theme.description,
            Self::CreateCustom => Self::CREATE_CUSTOM_DESCRIPTION,
        }
    }

    pub fn preview(&self) -> &str {
        match self {
            Self::Theme(theme) => &theme.preview,
            Self::CreateCustom => Self::CREATE_CUSTOM_PREVIEW,
        }
    }

    pub fn as_theme(&self) -> Option<&Theme> {
        match self {
            Self::Theme(theme) => Some(theme),
            Self::CreateCustom => None,
        }
    }

    /// Whether this row may be offered when installing for `backend`.
    pub fn offered_for(&self, backend: ShellBackend) -> bool {
        match self {
            Self::Theme(theme) => theme.supports(backend),
            Self::CreateCustom => true,
        }
    }
}
