//! Theme files bundled into the binary.

use include_dir::{
    Dir,
    DirEntry,
    include_dir,
};

use crate::error::{
    Result,
    ThemeError,
};

static BUNDLED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Read-only store of bundled theme files, keyed by file name.
pub trait AssetSource {
    /// Every asset as `(file name, text)`, sorted by file name.
    fn files(&self) -> Result<Vec<(String, String)>>;
}

/// The `assets/` directory embedded at compile time.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn files(&self) -> Result<Vec<(String, String)>> {
        let mut files = Vec::new();
        collect_files(&BUNDLED, &mut files)?;
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

/// Walks `dir` and its subdirectories. Files are keyed by their own name,
/// whatever directory they sit in.
fn collect_files(dir: &Dir<'_>, files: &mut Vec<(String, String)>) -> Result<()> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, files)?,
            DirEntry::File(file) => {
                let name = file
                    .path()
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| ThemeError::Assets(format!("invalid asset path {}", file.path().display())))?;
                let text = file
                    .contents_utf8()
                    .ok_or_else(|| ThemeError::Assets(format!("{name} is not valid UTF-8")))?;
                files.push((name.to_string(), text.to_string()));
            },
        }
    }
    Ok(())
}

/// Fixed assets for tests.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryAssets {
    files: Vec<(String, String)>,
}

#[cfg(test)]
impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.files.push((name.to_string(), text.to_string()));
        self
    }
}

#[cfg(test)]
impl AssetSource for MemoryAssets {
    fn files(&self) -> Result<Vec<(String, String)>> {
        let mut files = self.files.clone();
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}
