use std::io::{
    Write,
    stdout,
};
use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use crossterm::queue;
use crossterm::style::{
    self,
    Color,
};
use eyre::{
    Result,
    WrapErr,
};
use promptly_themes::{
    CustomThemeFactory,
    EmbeddedAssets,
    InitShell,
    Installation,
    Installer,
    Paths,
    RealFs,
    ShellBackend,
    Theme,
    ThemeError,
    ThemeStore,
    preview,
    selector,
};
use serde::Serialize;
use tracing::debug;

use crate::picker::DialoguerPicker;

/// Pick a shell prompt theme and install it.
#[derive(Debug, Parser, PartialEq)]
#[command(name = "promptly", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Log debug output to stderr (PROMPTLY_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Choose a theme and install it (the default)
    Install(InstallArgs),
    /// List available themes
    List {
        /// Only themes available for this backend (zsh, fish or starship)
        #[arg(short, long)]
        shell: Option<ShellBackend>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the preview of a theme
    Preview {
        /// Theme name
        name: String,
    },
}

#[derive(Debug, Default, Args, PartialEq)]
pub struct InstallArgs {
    /// Prompt backend: zsh, fish or starship
    #[arg(short, long)]
    pub shell: Option<ShellBackend>,
    /// Theme to install instead of choosing one
    #[arg(short, long)]
    pub theme: Option<String>,
    /// Copy --theme into the custom theme slot and install that copy
    #[arg(long, requires = "theme")]
    pub custom: bool,
    /// Shell that runs starship: zsh, bash or fish
    #[arg(long)]
    pub init_shell: Option<InitShell>,
}

#[derive(Debug, Serialize)]
struct ListedTheme<'a> {
    name: &'a str,
    description: &'a str,
    backends: Vec<ShellBackend>,
    is_custom: bool,
    source_path: Option<&'a PathBuf>,
}

impl<'a> From<&'a Theme> for ListedTheme<'a> {
    fn from(theme: &'a Theme) -> Self {
        Self {
            name: &theme.name,
            description: &theme.description,
            backends: theme.backends().collect(),
            is_custom: theme.is_custom,
            source_path: theme.source_path.as_ref(),
        }
    }
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command.unwrap_or_else(|| Command::Install(InstallArgs::default())) {
            Command::Install(args) => install(args),
            Command::List { shell, json } => list(shell, json),
            Command::Preview { name } => {
                println!("{}", preview::preview(&name));
                Ok(())
            },
        }
    }
}

fn install(args: InstallArgs) -> Result<()> {
    let paths = Paths::detect()?;
    let fs = RealFs;
    let catalog = ThemeStore::new(&EmbeddedAssets, &fs, &paths)
        .load_non_empty()
        .wrap_err("failed to load themes")?;
    let mut picker = DialoguerPicker::new();

    let backend = match args.shell {
        Some(backend) => backend,
        None => selector::choose_shell_backend(&mut picker).wrap_err("failed to select prompt backend")?,
    };
    debug!("Installing for {}", backend);

    let factory = CustomThemeFactory::new(&fs, &paths);
    let theme = match args.theme {
        Some(name) => {
            let theme = catalog.get(&name).ok_or(ThemeError::ThemeNotFound(name))?;
            if args.custom {
                factory
                    .create_custom(theme, backend)
                    .wrap_err("failed to create custom theme")?
            } else {
                theme.clone()
            }
        },
        None => selector::choose_theme(&mut picker, &catalog, backend, &factory).wrap_err("failed to select theme")?,
    };

    let installation = Installer::new(&fs, &paths)
        .install(&theme, backend, args.init_shell, &mut picker)
        .wrap_err("failed to install theme")?;
    report(&installation)
}

fn report(installation: &Installation) -> Result<()> {
    let mut stdout = stdout();
    queue!(
        stdout,
        style::SetForegroundColor(Color::Green),
        style::Print(format!(
            "✓ Theme '{}' installed for {}!\n",
            installation.theme, installation.backend
        )),
        style::SetForegroundColor(Color::Reset),
        style::Print(format!(
            "Restart your terminal or run 'source {}' to apply the changes.\n",
            installation.rc_file.display()
        )),
    )?;
    stdout.flush()?;
    Ok(())
}

fn list(shell: Option<ShellBackend>, json: bool) -> Result<()> {
    let paths = Paths::detect()?;
    let catalog = ThemeStore::new(&EmbeddedAssets, &RealFs, &paths)
        .load_catalog()
        .wrap_err("failed to load themes")?;

    let themes: Vec<&Theme> = catalog
        .themes()
        .filter(|theme| shell.is_none_or(|backend| theme.supports(backend)))
        .collect();

    if json {
        let listed: Vec<ListedTheme<'_>> = themes.into_iter().map(ListedTheme::from).collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if themes.is_empty() {
        match shell {
            Some(backend) => eyre::bail!(ThemeError::NoThemesForBackend(backend)),
            None => eyre::bail!(ThemeError::NoThemes),
        }
    }

    let mut stdout = stdout();
    for theme in themes {
        let backends: Vec<String> = theme.backends().map(|backend| backend.to_string()).collect();
        queue!(
            stdout,
            style::SetForegroundColor(Color::Cyan),
            style::Print(format!("  {}", theme.name)),
            style::SetForegroundColor(Color::Reset),
            style::Print(format!(" - {} [{}]\n", theme.description, backends.join(", "))),
        )?;
    }
    stdout.flush()?;
    Ok(())
}
