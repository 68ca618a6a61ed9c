//! Glue between the catalog and an interactive picker.

use tracing::debug;

use crate::catalog::Catalog;
use crate::custom::CustomThemeFactory;
use crate::error::{
    Result,
    ThemeError,
};
use crate::shell::{
    InitShell,
    ShellBackend,
};
use crate::theme::{
    CatalogEntry,
    Theme,
};

/// One row offered to a [`Picker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: String,
    pub preview: Option<String>,
}

impl PickItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            preview: None,
        }
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }
}

impl From<&CatalogEntry> for PickItem {
    fn from(entry: &CatalogEntry) -> Self {
        Self::new(entry.label(), entry.description()).with_preview(entry.preview())
    }
}

/// An interactive menu. Returns the zero-based index of the chosen item;
/// cancelling is [`ThemeError::Aborted`].
pub trait Picker {
    fn pick(&mut self, prompt: &str, items: &[PickItem]) -> Result<usize>;
}

fn pick_index(picker: &mut dyn Picker, prompt: &str, items: &[PickItem]) -> Result<usize> {
    let index = picker.pick(prompt, items)?;
    if index >= items.len() {
        return Err(ThemeError::Picker(format!(
            "picker returned index {index} for {} items",
            items.len()
        )));
    }
    Ok(index)
}

pub fn choose_shell_backend(picker: &mut dyn Picker) -> Result<ShellBackend> {
    let backends: Vec<_> = ShellBackend::all().collect();
    let items: Vec<_> = backends
        .iter()
        .map(|backend| {
            let description = match backend {
                ShellBackend::Zsh => "Source a prompt script from ~/.zshrc",
                ShellBackend::Fish => "Source a prompt script from config.fish",
                ShellBackend::Starship => "Point starship at a promptly config",
            };
            PickItem::new(backend.to_string(), description)
        })
        .collect();

    let index = pick_index(picker, "Select your prompt backend", &items)?;
    Ok(backends[index])
}

/// Asks which shell runs starship.
pub fn choose_init_shell(picker: &mut dyn Picker) -> Result<InitShell> {
    let shells: Vec<_> = InitShell::all().collect();
    let items: Vec<_> = shells
        .iter()
        .map(|shell| PickItem::new(shell.to_string(), format!("Initialize starship from {shell}")))
        .collect();

    let index = pick_index(picker, "Which shell do you use with starship?", &items)?;
    Ok(shells[index])
}

/// Lets the user pick a theme offering `backend`. Choosing "Create Custom"
/// asks for a base theme and returns the freshly created custom theme.
pub fn choose_theme(
    picker: &mut dyn Picker,
    catalog: &Catalog,
    backend: ShellBackend,
    factory: &CustomThemeFactory<'_>,
) -> Result<Theme> {
    let candidates = catalog.candidates(backend);
    if !candidates.iter().any(|entry| entry.as_theme().is_some()) {
        return Err(ThemeError::NoThemesForBackend(backend));
    }

    let items: Vec<PickItem> = candidates.iter().map(|entry| PickItem::from(*entry)).collect();
    let index = pick_index(picker, "Select a prompt theme", &items)?;

    match candidates[index] {
        CatalogEntry::Theme(theme) => Ok(theme.clone()),
        CatalogEntry::CreateCustom => {
            debug!("Create Custom chosen for {}", backend);
            let base = choose_base_theme(picker, catalog, backend)?;
            factory.create_custom(base, backend)
        },
    }
}

fn choose_base_theme<'c>(picker: &mut dyn Picker, catalog: &'c Catalog, backend: ShellBackend) -> Result<&'c Theme> {
    let bases: Vec<&Theme> = catalog.themes().filter(|theme| theme.supports(backend)).collect();
    let items: Vec<_> = bases
        .iter()
        .map(|theme| PickItem::new(theme.name.as_str(), theme.description.as_str()).with_preview(theme.preview.as_str()))
        .collect();

    let index = pick_index(picker, "Select a base theme to customize", &items)?;
    Ok(bases[index])
}


#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::test_picker::ScriptedPicker;
    use super::*;
    use crate::assets::MemoryAssets;
    use crate::catalog::ThemeStore;
    use crate::fs::MemoryFs;
    use crate::paths::Paths;

    fn catalog(fs: &MemoryFs, paths: &Paths) -> Catalog {
        let assets = MemoryAssets::new()
            .with("default.promptly.zsh", "default zsh")
            .with("default.promptly.toml", "default toml")
            .with("icons.promptly.zsh", "icons zsh");
        ThemeStore::new(&assets, fs, paths).load_catalog().unwrap()
    }

    #[test]
    fn test_choose_shell_backend() {
        let mut picker = ScriptedPicker::new([2]);
        assert_eq!(choose_shell_backend(&mut picker).unwrap(), ShellBackend::Starship);
        assert_eq!(picker.shown[0].1, vec!["zsh", "fish", "starship"]);
    }

    #[test]
    fn test_choose_shell_backend_aborted() {
        let mut picker = ScriptedPicker::aborting();
        assert!(matches!(choose_shell_backend(&mut picker), Err(ThemeError::Aborted)));
    }

    #[test]
    fn test_choose_init_shell() {
        let mut picker = ScriptedPicker::new([1]);
        assert_eq!(choose_init_shell(&mut picker).unwrap(), InitShell::Bash);
    }

    #[test]
    fn test_choose_theme_offers_only_matching_backend() {
        let paths = Paths::from_home("/home/me");
        let fs = MemoryFs::new();
        let catalog = catalog(&fs, &paths);
        let factory = CustomThemeFactory::new(&fs, &paths);
        let mut picker = ScriptedPicker::new([0]);

        let theme = choose_theme(&mut picker, &catalog, ShellBackend::Starship, &factory).unwrap();

        assert_eq!(theme.name, "default");
        assert_eq!(picker.shown[0].1, vec!["default", "Create Custom"]);
    }

    #[test]
    fn test_choose_theme_create_custom() {
        let paths = Paths::from_home("/home/me");
        let fs = MemoryFs::new();
        let catalog = catalog(&fs, &paths);
        let factory = CustomThemeFactory::new(&fs, &paths);
        // "Create Custom" is the third zsh row, then base "icons"
        let mut picker = ScriptedPicker::new([2, 1]);

        let theme = choose_theme(&mut picker, &catalog, ShellBackend::Zsh, &factory).unwrap();

        assert_eq!(theme.name, "custom");
        assert!(theme.is_custom);
        assert_eq!(theme.description, "Custom theme based on icons");
        assert_eq!(picker.shown[1].1, vec!["default", "icons"]);
        assert_eq!(
            fs.file(Path::new("/home/me/.config/promptly/custom.promptly.zsh")).as_deref(),
            Some("icons zsh")
        );
    }

    #[test]
    fn test_theme_literally_named_create_custom_is_installable() {
        let paths = Paths::from_home("/home/me");
        let fs = MemoryFs::new().with_file("/home/me/.config/promptly/Create Custom.promptly.fish", "mine");
        let catalog = catalog(&fs, &paths);
        let factory = CustomThemeFactory::new(&fs, &paths);
        let mut picker = ScriptedPicker::new([0]);

        let theme = choose_theme(&mut picker, &catalog, ShellBackend::Fish, &factory).unwrap();

        assert_eq!(theme.name, "Create Custom");
        assert_eq!(theme.content(ShellBackend::Fish), Some("mine"));
        assert_eq!(picker.shown[0].1, vec!["Create Custom", "Create Custom"]);
    }

    #[test]
    fn test_no_themes_for_backend() {
        let paths = Paths::from_home("/home/me");
        let fs = MemoryFs::new();
        let catalog = catalog(&fs, &paths);
        let factory = CustomThemeFactory::new(&fs, &paths);
        let mut picker = ScriptedPicker::new([0]);

        let err = choose_theme(&mut picker, &catalog, ShellBackend::Fish, &factory).unwrap_err();

        assert_eq!(err.to_string(), "no themes available for backend fish");
        assert!(picker.shown.is_empty(), "picker should not be shown");
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut picker = ScriptedPicker::new([7]);
        assert!(matches!(choose_shell_backend(&mut picker), Err(ThemeError::Picker(_))));
    }
}
