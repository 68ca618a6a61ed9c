use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{
    debug,
    warn,
};

use crate::assets::AssetSource;
use crate::error::{
    Result,
    ThemeError,
};
use crate::fs::FileSystem;
use crate::paths::Paths;
use crate::preview;
use crate::shell::ShellBackend;
use crate::theme::{
    CatalogEntry,
    Theme,
};

pub const CUSTOM_DESCRIPTION: &str = "Custom theme";

/// Every theme known to promptly, in first-seen order, followed by the
/// "Create Custom" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.entries.iter().filter_map(CatalogEntry::as_theme)
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes().find(|theme| theme.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.themes().next().is_none()
    }

    /// Entries that can be picked when installing for `backend`.
    pub fn candidates(&self, backend: ShellBackend) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|entry| entry.offered_for(backend)).collect()
    }
}

/// Insertion-ordered accumulator of themes keyed by name.
#[derive(Default)]
struct ThemeMap {
    order: Vec<String>,
    themes: HashMap<String, Theme>,
}

impl ThemeMap {
    fn entry(&mut self, name: &str) -> &mut Theme {
        if !self.themes.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.themes.entry(name.to_string()).or_insert_with(|| Theme {
            name: name.to_string(),
            description: preview::description(name).to_string(),
            contents: Default::default(),
            preview: preview::preview(name),
            is_custom: false,
            source_path: None,
        })
    }

    fn into_entries(mut self) -> Vec<CatalogEntry> {
        self.order
            .iter()
            .filter_map(|name| self.themes.remove(name))
            .map(CatalogEntry::Theme)
            .collect()
    }
}

/// Builds the catalog from bundled assets and the user's config directory.
pub struct ThemeStore<'a> {
    assets: &'a dyn AssetSource,
    fs: &'a dyn FileSystem,
    paths: &'a Paths,
}

impl<'a> ThemeStore<'a> {
    pub fn new(assets: &'a dyn AssetSource, fs: &'a dyn FileSystem, paths: &'a Paths) -> Self {
        Self { assets, fs, paths }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let mut map = ThemeMap::default();

        let bundled = self.assets.files()?;
        for backend in ShellBackend::all() {
            for (file_name, text) in &bundled {
                let Some((name, file_backend)) = ShellBackend::parse_file_name(file_name) else {
                    continue;
                };
                if file_backend != backend {
                    continue;
                }
                debug!("Loaded bundled theme {} ({})", name, backend);
                map.entry(name).contents.insert(backend, text.clone());
            }
        }

        for (name, backend, path, text) in self.custom_files() {
            debug!("Loaded custom theme {} from {}", name, path.display());
            let theme = map.entry(&name);
            theme.is_custom = true;
            theme.description = CUSTOM_DESCRIPTION.to_string();
            theme.preview = preview::PLACEHOLDER.to_string();
            theme.source_path = Some(path);
            theme.contents.insert(backend, text);
        }

        let mut entries = map.into_entries();
        entries.push(CatalogEntry::CreateCustom);
        Ok(Catalog { entries })
    }

    /// Like [`Self::load_catalog`], but an empty catalog is an error.
    pub fn load_non_empty(&self) -> Result<Catalog> {
        let catalog = self.load_catalog()?;
        if catalog.is_empty() {
            return Err(ThemeError::NoThemes);
        }
        Ok(catalog)
    }

    /// Readable theme files in the config directory, by file name. A missing
    /// directory yields nothing; unreadable files are skipped.
    fn custom_files(&self) -> Vec<(String, ShellBackend, PathBuf, String)> {
        let dir = self.paths.config_dir();
        if !self.fs.exists(&dir) {
            debug!("Custom theme directory {} does not exist", dir.display());
            return Vec::new();
        }

        let mut names = match self.fs.list_dir(&dir) {
            Ok(names) => names,
            Err(e) => {
                warn!("Failed to read custom theme directory {}: {}", dir.display(), e);
                return Vec::new();
            },
        };
        names.sort();

        let mut files = Vec::new();
        for file_name in names {
            let Some((name, backend)) = ShellBackend::parse_file_name(&file_name) else {
                continue;
            };
            let path = dir.join(&file_name);
            match self.fs.read_to_string(&path) {
                Ok(text) => files.push((name.to_string(), backend, path, text)),
                Err(e) => warn!("Skipping unreadable custom theme {}: {}", path.display(), e),
            }
        }
        files
    }
}
