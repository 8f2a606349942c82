//! Visual theme and styling.

use console::Style;

/// templist's visual theme.
#[derive(Debug, Clone)]
pub struct TemplistTheme {
    /// Style for warning messages (orange, stderr).
    pub warning: Style,
    /// Style for error messages (red bold, stderr).
    pub error: Style,
    /// Style for detail lines (dim, stderr).
    pub dim: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for TemplistTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplistTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().for_stderr().color256(208),
            error: Style::new().for_stderr().red().bold(),
            dim: Style::new().for_stderr().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
