//! Theme discovery and installation for promptly.
//!
//! The [`ThemeStore`] merges bundled and user themes into a [`Catalog`], the
//! [`selector`] functions turn a [`Picker`] answer into a [`Theme`], and the
//! [`Installer`] wires the chosen theme into the user's shell.

pub mod assets;
pub mod catalog;
pub mod custom;
pub mod error;
pub mod fs;
pub mod installer;
pub mod paths;
pub mod preview;
pub mod selector;
pub mod shell;
pub mod theme;


pub use assets::{
    AssetSource,
    EmbeddedAssets,
};
pub use catalog::{
    Catalog,
    ThemeStore,
};
pub use custom::CustomThemeFactory;
pub use error::{
    Result,
    ThemeError,
};
pub use fs::{
    FileSystem,
    RealFs,
};
pub use installer::{
    Installation,
    Installer,
};
pub use paths::Paths;
pub use selector::{
    PickItem,
    Picker,
};
pub use shell::{
    InitShell,
    ShellBackend,
};
pub use theme::{
    CatalogEntry,
    Theme,
};
