/// Dark/light theme state

/// Storage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` and `<body>` in dark mode
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Shown in the banner slot until the real image has decoded
pub const BANNER_PLACEHOLDER: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' width='400' height='100'><rect width='400' height='100' fill='%231a1b26'/></svg>";

/// How long the toggle icon spins after a click, in milliseconds
pub const SPIN_DURATION_MS: u32 = 600;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Initial theme: dark if the document is already marked dark or dark was
    /// stored, light otherwise.
    pub fn resolve(stored: Option<&str>, document_is_dark: bool) -> Theme {
        if document_is_dark || Theme::from_storage(stored) == Some(Theme::Dark) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn from_storage(value: Option<&str>) -> Option<Theme> {
        match value? {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon on the toggle: the theme a click switches to
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            Theme::Dark => "bannerDark.webp",
            Theme::Light => "bannerLight.webp",
        }
    }
}
