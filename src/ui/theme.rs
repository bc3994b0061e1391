use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for each kind of message the CLI prints
#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Style,
    pub ok: Style,
    pub failure: Style,
    pub warning: Style,
    pub accent: Style,
    pub label: Style,
}

impl Theme {
    /// Colors only when stdout is a terminal
    pub fn detect() -> Self {
        if console::Term::stdout().is_term() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            ok: Style::new().green().bold(),
            failure: Style::new().red().bold(),
            warning: Style::new().yellow(),
            accent: Style::new().magenta(),
            label: Style::new().dimmed(),
        }
    }

    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            ok: Style::new(),
            failure: Style::new(),
            warning: Style::new(),
            accent: Style::new(),
            label: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
