use serde::Serialize;
use strum::{
    Display,
    EnumIter,
    EnumString,
    IntoEnumIterator,
};

/// The prompt backend a theme is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShellBackend {
    Zsh,
    Fish,
    Starship,
}

impl ShellBackend {
    /// All backends, in catalog walk order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// File extension used by theme files of this backend.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::Starship => "toml",
        }
    }

    /// Suffix every theme file of this backend ends with, e.g. `.promptly.zsh`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Zsh => ".promptly.zsh",
            Self::Fish => ".promptly.fish",
            Self::Starship => ".promptly.toml",
        }
    }

    /// Theme file name for `name` under this backend.
    pub fn file_name(self, name: &str) -> String {
        format!("{name}.promptly.{}", self.extension())
    }

    /// Quotes `text` as a single word for this backend's shell.
    pub fn quote(self, text: &str) -> String {
        match self {
            Self::Fish => fish_quote(text),
            Self::Zsh | Self::Starship => posix_quote(text),
        }
    }

    /// Splits a file name into theme name and backend when it carries one of
    /// the known suffixes. A bare suffix (no theme name) is not a theme.
    pub fn parse_file_name(file_name: &str) -> Option<(&str, Self)> {
        Self::all().find_map(|backend| {
            file_name
                .strip_suffix(backend.suffix())
                .filter(|name| !name.is_empty())
                .map(|name| (name, backend))
        })
    }
}

/// The interactive shell that hosts a starship prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InitShell {
    Zsh,
    Bash,
    Fish,
}

impl InitShell {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Line pointing starship at its config file.
    pub fn export_line(self, config_path: &str) -> String {
        match self {
            Self::Zsh | Self::Bash => format!("export STARSHIP_CONFIG={}", posix_quote(config_path)),
            Self::Fish => format!("set -gx STARSHIP_CONFIG {}", fish_quote(config_path)),
        }
    }

    /// Line running the starship init hook.
    pub fn init_line(self) -> &'static str {
        match self {
            Self::Zsh => "eval \"$(starship init zsh)\"",
            Self::Bash => "eval \"$(starship init bash)\"",
            Self::Fish => "starship init fish | source",
        }
    }
}

/// Single quotes with `'` spliced in as `'\''`. Nothing else is special
/// inside single quotes in sh, bash or zsh.
fn posix_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// fish treats `\\` and `\'` as escapes inside single quotes.
fn fish_quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', r"\\").replace('\'', r"\'"))
}
