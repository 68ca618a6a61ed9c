use std::io;

use dialoguer::Select;
use dialoguer::console::{
    Style,
    Term,
};
use dialoguer::theme::ColorfulTheme;
use promptly_themes::{
    PickItem,
    Picker,
    ThemeError,
};

pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: Style::new().cyan().bold(),
        active_item_prefix: Style::new().cyan().apply_to("▸".to_string()),
        active_item_style: Style::new().cyan(),
        ..ColorfulTheme::default()
    }
}

/// Terminal menu drawn on stderr.
pub struct DialoguerPicker {
    term: Term,
}

impl DialoguerPicker {
    pub fn new() -> Self {
        Self { term: Term::stderr() }
    }

    /// The menu has no detail pane, so previews go above it.
    fn write_previews(&self, items: &[PickItem]) -> io::Result<()> {
        let previews: Vec<_> = items
            .iter()
            .filter_map(|item| item.preview.as_deref().map(|preview| (item.label.as_str(), preview)))
            .collect();
        if previews.is_empty() {
            return Ok(());
        }

        self.term.write_line("--------- Preview ---------")?;
        for (label, preview) in previews {
            self.term.write_line(&format!("{}", Style::new().cyan().bold().apply_to(label)))?;
            for line in preview.lines() {
                self.term.write_line(&format!("  {line}"))?;
            }
        }
        self.term.write_line("")
    }
}

impl Default for DialoguerPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for DialoguerPicker {
    fn pick(&mut self, prompt: &str, items: &[PickItem]) -> Result<usize, ThemeError> {
        self.write_previews(items)
            .map_err(|e| ThemeError::Picker(format!("failed to show previews: {e}")))?;

        let labels: Vec<String> = items
            .iter()
            .map(|item| format!("{} - {}", item.label, item.description))
            .collect();

        match Select::with_theme(&dialoguer_theme())
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_on_opt(&self.term)
        {
            Ok(Some(index)) => Ok(index),
            Ok(None) => Err(ThemeError::Aborted),
            Err(dialoguer::Error::IO(ref e)) if e.kind() == io::ErrorKind::Interrupted => Err(ThemeError::Aborted),
            Err(e) => Err(ThemeError::Picker(e.to_string())),
        }
    }
}
