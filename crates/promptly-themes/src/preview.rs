//! Static prompt samples shown next to each theme in the menu.

// ANSI color codes
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";
const RESET: &str = "\x1b[0m";

pub const PLACEHOLDER: &str = "Preview not available for custom themes";

const SAMPLE_DIR: &str = "~/projects/myapp";
const SAMPLE_BRANCH: &str = "main";

fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Ahead, staged, unstaged and untracked counts of the sample repository.
fn git_counts(ahead: &str) -> String {
    [
        paint(CYAN, &format!("{ahead}1")),
        paint(GREEN, "+2"),
        paint(YELLOW, "!1"),
        paint(RED, "?3"),
    ]
    .join(" ")
}

/// Two-line sample prompt for a built-in theme, or [`PLACEHOLDER`].
pub fn preview(name: &str) -> String {
    let git_segment = match name {
        "default" => format!(
            "{}{}{} {}",
            paint(BLUE, "git("),
            paint(MAGENTA, SAMPLE_BRANCH),
            paint(BLUE, ")"),
            git_counts("↑")
        ),
        "icons" => format!(
            "{} {} {} {}",
            paint(WHITE, "on"),
            paint(BLUE, "\u{e0a0}"),
            paint(MAGENTA, SAMPLE_BRANCH),
            git_counts("⇡")
        ),
        _ => return PLACEHOLDER.to_string(),
    };

    format!("{} {}\n{} ", paint(CYAN, SAMPLE_DIR), git_segment, paint(BLUE, "❯"))
}

/// Known description of a bundled theme.
pub fn description(name: &str) -> &'static str {
    match name {
        "default" => "Clean text-based prompt with git status",
        "icons" => "Nerd Font icons with enhanced git visualization",
        _ => "Custom promptly theme",
    }
}
